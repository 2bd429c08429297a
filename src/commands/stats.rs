//! Print blog statistics

use anyhow::Result;

use super::print_json;
use crate::Folio;

pub fn run(folio: &Folio, json: bool) -> Result<()> {
    let stats = folio.index().compute_stats()?;

    if json {
        return print_json(&stats);
    }

    println!("Articles:      {}", stats.total_articles);
    println!("Words:         {}", stats.total_words);
    println!("Writing since: {}", stats.earliest_year);
    Ok(())
}
