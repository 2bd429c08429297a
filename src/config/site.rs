//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directories, relative to the site base
    pub content_dir: String,
    /// Blog root, relative to `content_dir`
    pub blog_dir: String,
    /// Snippets root, relative to `content_dir`
    pub snippets_dir: String,

    // Display
    pub date_format: String,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "src/content".to_string(),
            blog_dir: "blog".to_string(),
            snippets_dir: "snippets".to_string(),
            date_format: "MMMM D, YYYY".to_string(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// syntect theme name
    pub theme: String,
    /// Background colour forced onto highlighted blocks
    pub background: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            background: "#090915".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "src/content");
        assert_eq!(config.blog_dir, "blog");
        assert_eq!(config.highlight.background, "#090915");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
content_dir: content
date_format: YYYY-MM-DD
highlight:
  theme: InspiredGitHub
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.snippets_dir, "snippets");
        assert_eq!(config.date_format, "YYYY-MM-DD");
        assert_eq!(config.highlight.theme, "InspiredGitHub");
        assert_eq!(config.highlight.background, "#090915");
    }
}
