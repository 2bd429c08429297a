//! folio: content index for a Markdown portfolio and blog
//!
//! Blog posts live in a two-level taxonomy on disk:
//! `<blog>/<header>/<category>/<post>.md`, where header and category
//! directories are marked by `_header.md` and `_category.md`. Snippets are
//! a separate flat collection. This crate reads both into plain records for
//! a presentation layer and ships a small CLI to inspect them.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site: configuration plus the resolved content roots
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Blog root (header directories)
    pub blog_dir: PathBuf,
    /// Snippets root
    pub snippets_dir: PathBuf,
}

impl Folio {
    /// Open a site, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let blog_dir = content_dir.join(&config.blog_dir);
        let snippets_dir = content_dir.join(&config.snippets_dir);

        Self {
            config,
            base_dir,
            blog_dir,
            snippets_dir,
        }
    }

    /// Index over the blog taxonomy
    pub fn index(&self) -> content::ContentIndex {
        content::ContentIndex::new(&self.blog_dir)
    }

    /// Index over the snippets
    pub fn snippets(&self) -> content::SnippetIndex {
        content::SnippetIndex::new(&self.snippets_dir)
    }

    /// Markdown renderer configured for this site
    pub fn renderer(&self) -> content::MarkdownRenderer {
        content::MarkdownRenderer::new(&self.config.highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_roots() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.blog_dir, dir.path().join("src/content").join("blog"));
        assert_eq!(
            folio.snippets_dir,
            dir.path().join("src/content").join("snippets")
        );
    }

    #[test]
    fn test_config_overrides_roots() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "content_dir: content\nblog_dir: posts\n",
        )
        .unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.blog_dir, dir.path().join("content").join("posts"));
        assert_eq!(folio.index().root(), folio.blog_dir.as_path());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "highlight: [1, 2\n").unwrap();
        assert!(Folio::new(dir.path()).is_err());
    }
}
