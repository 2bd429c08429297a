//! Show a single category, post or snippet by slug
//!
//! A slug is resolved the way the site routes `/articles/<slug>`: category
//! slugs win over post slugs, and snippets are tried last.

use anyhow::Result;
use std::path::PathBuf;

use super::print_json;
use crate::content::{Category, Document, Post, PostMeta, SnippetMeta};
use crate::helpers::sort_newest_first;
use crate::Folio;

/// What a slug resolved to
#[derive(Debug)]
pub enum Resolved {
    Category {
        category: Category,
        posts: Vec<Post>,
    },
    Post {
        path: PathBuf,
        doc: Document<PostMeta>,
    },
    Snippet {
        path: PathBuf,
        doc: Document<SnippetMeta>,
    },
}

/// Resolve a slug to a category, post or snippet
pub fn resolve(folio: &Folio, slug: &str) -> Result<Option<Resolved>> {
    let index = folio.index();

    if index.is_category_slug(slug)? {
        if let Some(category) = index.get_category_by_slug(slug)? {
            let mut posts = index.get_posts_by_category(slug)?;
            sort_newest_first(&mut posts);
            return Ok(Some(Resolved::Category { category, posts }));
        }
    }

    if let Some(path) = index.get_post_file_path(slug)? {
        let doc = Document::read(&path)?;
        return Ok(Some(Resolved::Post { path, doc }));
    }

    let snippets = folio.snippets();
    if let Some(path) = snippets.file_path(slug) {
        let doc = Document::read(&path)?;
        return Ok(Some(Resolved::Snippet { path, doc }));
    }

    Ok(None)
}

/// Print what a slug resolves to; documents are rendered to HTML unless `raw`
pub fn run(folio: &Folio, slug: &str, raw: bool, json: bool) -> Result<()> {
    let Some(resolved) = resolve(folio, slug)? else {
        anyhow::bail!("No category, post or snippet named `{}`", slug);
    };
    let renderer = folio.renderer();

    match resolved {
        Resolved::Category { category, posts } => {
            if json {
                return print_json(&serde_json::json!({
                    "category": category,
                    "posts": posts,
                }));
            }
            println!("{} / {} [{}]", category.header_name, category.name, category.slug);
            if !category.description.is_empty() {
                println!("{}", category.description);
            }
            for post in posts {
                println!("  {} - {} [{}]", post.date, post.title, post.slug);
            }
        }
        Resolved::Post { path, doc } => {
            let body = if raw { doc.body.clone() } else { renderer.render(&doc.body)? };
            if json {
                return print_json(&serde_json::json!({
                    "path": path,
                    "meta": doc.meta,
                    "body": body,
                }));
            }
            println!("{} ({})", doc.meta.title, doc.meta.date);
            println!("{}", path.display());
            println!();
            println!("{}", body);
        }
        Resolved::Snippet { path, doc } => {
            let body = if raw { doc.body.clone() } else { renderer.render(&doc.body)? };
            if json {
                return print_json(&serde_json::json!({
                    "path": path,
                    "meta": doc.meta,
                    "body": body,
                }));
            }
            println!("{}", doc.meta.title);
            println!("{}", path.display());
            println!();
            println!("{}", body);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site() -> (TempDir, Folio) {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("src/content");
        write(&content, "blog/cs/_header.md", "---\nname: CS\n---\n");
        write(&content, "blog/cs/graphs/_category.md", "---\nname: Graphs\n---\n");
        write(
            &content,
            "blog/cs/graphs/bfs.md",
            "---\ntitle: BFS\ndate: 2024-02-02\n---\nQueue based.\n",
        );
        write(&content, "snippets/bash-tips.md", "---\ntitle: Bash tips\n---\nUse `set -e`.\n");
        let folio = Folio::with_config(dir.path().to_path_buf(), SiteConfig::default());
        (dir, folio)
    }

    #[test]
    fn test_category_slug_wins() {
        let (_dir, folio) = site();
        match resolve(&folio, "graphs").unwrap() {
            Some(Resolved::Category { category, posts }) => {
                assert_eq!(category.name, "Graphs");
                assert_eq!(posts.len(), 1);
            }
            other => panic!("expected category, got {:?}", other),
        }
    }

    #[test]
    fn test_post_then_snippet() {
        let (_dir, folio) = site();
        match resolve(&folio, "bfs").unwrap() {
            Some(Resolved::Post { path, doc }) => {
                assert!(path.ends_with("cs/graphs/bfs.md"));
                assert_eq!(doc.meta.title, "BFS");
            }
            other => panic!("expected post, got {:?}", other),
        }
        assert!(matches!(
            resolve(&folio, "bash-tips").unwrap(),
            Some(Resolved::Snippet { .. })
        ));
        assert!(resolve(&folio, "nothing").unwrap().is_none());
        assert!(run(&folio, "nothing", false, false).is_err());
    }
}
