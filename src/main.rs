//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Inspect the Markdown content of a portfolio and blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header and category taxonomy
    Structure {
        /// Include each category's posts
        #[arg(short, long)]
        posts: bool,
    },

    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, header, category, tag, snippet)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts of this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Print article count, word count and earliest year
    Stats,

    /// Show a category, post or snippet by slug
    Show {
        slug: String,

        /// Print the Markdown body instead of rendered HTML
        #[arg(long)]
        raw: bool,
    },

    /// Report slugs declared more than once
    Check,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let open = || -> Result<folio::Folio> {
        let folio = folio::Folio::new(&base_dir)?;
        tracing::debug!("Blog root: {:?}", folio.blog_dir);
        Ok(folio)
    };

    match cli.command {
        Commands::Structure { posts } => folio::commands::structure::run(&open()?, posts, cli.json)?,
        Commands::List { r#type, category } => {
            folio::commands::list::run(&open()?, &r#type, category.as_deref(), cli.json)?
        }
        Commands::Stats => folio::commands::stats::run(&open()?, cli.json)?,
        Commands::Show { slug, raw } => folio::commands::show::run(&open()?, &slug, raw, cli.json)?,
        Commands::Check => {
            let folio = open()?;
            tracing::info!("Checking slugs under {:?}", folio.blog_dir);
            folio::commands::check::run(&folio, cli.json)?
        }
        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
