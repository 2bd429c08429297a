//! Snippets - short standalone documents outside the blog taxonomy
//!
//! A snippet is either `<root>/<slug>.md` or a directory `<root>/<slug>/`
//! holding an `index.md`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::frontmatter::{Document, SnippetKind, SnippetMeta};
use super::index::entries;
use crate::error::Result;

/// Index document of a directory snippet
pub const SNIPPET_INDEX: &str = "index.md";

/// A snippet listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: SnippetKind,
    pub asset_path: Option<String>,
}

impl Snippet {
    fn new(slug: &str, meta: SnippetMeta) -> Self {
        Self {
            slug: slug.to_string(),
            title: meta.title,
            description: meta.description,
            icon: meta.icon,
            date: meta.date,
            kind: meta.kind,
            asset_path: meta.asset_path,
        }
    }
}

/// Read-only view over the snippets root
#[derive(Debug, Clone)]
pub struct SnippetIndex {
    root: PathBuf,
}

impl SnippetIndex {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// All snippets in file-name order. Directories without an `index.md`
    /// and `_`-prefixed entries are skipped.
    pub fn list(&self) -> Result<Vec<Snippet>> {
        let mut snippets = Vec::new();

        for entry in entries(&self.root)? {
            if entry.name.starts_with('_') {
                continue;
            }

            if entry.is_file {
                if let Some(slug) = entry.name.strip_suffix(".md") {
                    let doc = Document::<SnippetMeta>::read(&entry.path)?;
                    snippets.push(Snippet::new(slug, doc.meta));
                }
            } else if entry.is_dir {
                let index = entry.path.join(SNIPPET_INDEX);
                if !index.is_file() {
                    tracing::debug!("Skipping snippet directory {:?}: no {}", entry.path, SNIPPET_INDEX);
                    continue;
                }
                let doc = Document::<SnippetMeta>::read(&index)?;
                snippets.push(Snippet::new(&entry.name, doc.meta));
            }
        }

        tracing::debug!("Loaded {} snippets", snippets.len());
        Ok(snippets)
    }

    /// File backing the snippet, flat file first
    pub fn file_path(&self, slug: &str) -> Option<PathBuf> {
        let flat = self.root.join(format!("{}.md", slug));
        if flat.is_file() {
            return Some(flat);
        }
        let nested = self.root.join(slug).join(SNIPPET_INDEX);
        nested.is_file().then_some(nested)
    }

    /// Front-matter and body of a snippet
    pub fn get_content(&self, slug: &str) -> Result<Option<Document<SnippetMeta>>> {
        match self.file_path(slug) {
            Some(path) => Document::read(&path).map(Some),
            None => Ok(None),
        }
    }
}
