//! Check the content tree for slug collisions
//!
//! Lookups by slug silently take the first match, so a duplicated slug hides
//! content. This command reports every duplicate and fails when there is one.

use anyhow::Result;

use super::print_json;
use crate::content::CollisionKind;
use crate::Folio;

pub fn run(folio: &Folio, json: bool) -> Result<()> {
    let collisions = folio.index().slug_collisions()?;

    if json {
        print_json(&collisions)?;
    } else if collisions.is_empty() {
        println!("No slug collisions found");
    } else {
        for collision in &collisions {
            let kind = match collision.kind {
                CollisionKind::Post => "post",
                CollisionKind::Category => "category",
            };
            println!(
                "  {} `{}` declared in: {}",
                kind,
                collision.slug,
                collision.locations.join(", ")
            );
        }
    }

    if !collisions.is_empty() {
        tracing::warn!("{} slug collisions", collisions.len());
        anyhow::bail!("Found {} slug collisions", collisions.len());
    }
    Ok(())
}
