//! Post and taxonomy models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::frontmatter::{CategoryMeta, HeaderMeta, PostMeta};
use crate::error::{ContentError, Result};
use crate::helpers::parse_timestamp;

/// Top-level grouping of the blog (a subject area)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Directory name
    pub slug: String,
    pub name: String,
    pub description: String,
    pub order: i64,
    pub icon: Option<String>,
    /// Body of `_header.md`, `None` when blank
    pub content: Option<String>,
    /// Sorted by `order`, then slug
    pub categories: Vec<Category>,
}

impl Header {
    pub(crate) fn new(slug: &str, meta: HeaderMeta, body: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: meta
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| slug.to_string()),
            description: meta.description,
            order: meta.order,
            icon: meta.icon.filter(|i| !i.is_empty()),
            content: non_blank(body),
            categories: Vec::new(),
        }
    }
}

/// Second-level grouping, owned by exactly one header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub slug: String,
    pub header_slug: String,
    pub header_name: String,
    pub name: String,
    pub description: String,
    pub order: i64,
    pub icon: Option<String>,
    pub show_icon_in_header: bool,
    pub content: Option<String>,
    /// Only filled by [`ContentIndex::load_tree`](super::ContentIndex::load_tree)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub posts: Vec<Post>,
}

impl Category {
    pub(crate) fn new(slug: &str, header: &Header, meta: CategoryMeta, body: &str) -> Self {
        Self {
            slug: slug.to_string(),
            header_slug: header.slug.clone(),
            header_name: header.name.clone(),
            name: meta
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| slug.to_string()),
            description: meta.description,
            order: meta.order,
            icon: meta.icon.filter(|i| !i.is_empty()),
            show_icon_in_header: meta.show_icon_in_header,
            content: non_blank(body),
            posts: Vec::new(),
        }
    }
}

/// A blog post, with back-references to its category and header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// File name without extension
    pub slug: String,
    pub title: String,
    /// Date exactly as written in the front-matter
    pub date: String,
    /// `date` parsed; a bare date is midnight
    pub published: NaiveDateTime,
    pub description: String,
    pub tags: Vec<String>,
    /// Tie-breaker between posts published on the same date
    pub order: Option<i64>,
    pub last_modified: Option<String>,
    pub image: Option<String>,
    /// Slug of the owning category
    pub category: String,
    pub category_name: String,
    pub header_slug: String,
    pub header_name: String,
}

impl Post {
    /// Build a post from its front-matter; `path` is used for error reporting
    pub(crate) fn new(slug: &str, meta: PostMeta, category: &Category, path: &Path) -> Result<Self> {
        let published = parse_timestamp(&meta.date).ok_or_else(|| ContentError::InvalidDate {
            path: path.to_path_buf(),
            value: meta.date.clone(),
        })?;

        Ok(Self {
            slug: slug.to_string(),
            title: meta.title,
            date: meta.date,
            published,
            description: meta.description,
            tags: meta.tags,
            order: meta.order,
            last_modified: meta.last_modified,
            image: meta.image,
            category: category.slug.clone(),
            category_name: category.name.clone(),
            header_slug: category.header_slug.clone(),
            header_name: category.header_name.clone(),
        })
    }

    /// Location of the post relative to the blog root
    pub fn relative_path(&self) -> std::path::PathBuf {
        Path::new(&self.header_slug)
            .join(&self.category)
            .join(format!("{}.md", self.slug))
    }
}

/// Aggregate numbers over every post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    pub total_articles: usize,
    /// Current year when there are no posts
    pub earliest_year: i32,
    pub total_words: usize,
}

fn non_blank(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Header {
        Header::new(
            "systems",
            HeaderMeta {
                name: Some("Systems".into()),
                ..Default::default()
            },
            "\n",
        )
    }

    #[test]
    fn test_header_name_defaults_to_slug() {
        let h = Header::new("notes", HeaderMeta::default(), "  About notes.  ");
        assert_eq!(h.name, "notes");
        assert_eq!(h.order, 0);
        assert_eq!(h.icon, None);
        assert_eq!(h.content.as_deref(), Some("About notes."));
        assert_eq!(header().content, None);
    }

    #[test]
    fn test_category_back_references() {
        let c = Category::new("eecs281", &header(), CategoryMeta::default(), "");
        assert_eq!(c.header_slug, "systems");
        assert_eq!(c.header_name, "Systems");
        assert_eq!(c.name, "eecs281");
        assert!(c.show_icon_in_header);
    }

    #[test]
    fn test_post_rejects_bad_date() {
        let c = Category::new("eecs281", &header(), CategoryMeta::default(), "");
        let meta = PostMeta {
            title: "Heaps".into(),
            date: "sometime".into(),
            description: String::new(),
            tags: Vec::new(),
            order: None,
            last_modified: None,
            image: None,
        };
        let err = Post::new("heaps", meta, &c, Path::new("heaps.md")).unwrap_err();
        assert!(matches!(err, ContentError::InvalidDate { .. }));
    }

    #[test]
    fn test_post_serializes_with_camel_case_keys() {
        let c = Category::new("eecs281", &header(), CategoryMeta::default(), "");
        let meta = PostMeta {
            title: "Heaps".into(),
            date: "2024-01-15".into(),
            description: "Binary heaps".into(),
            tags: vec!["ds".into()],
            order: Some(1),
            last_modified: None,
            image: None,
        };
        let post = Post::new("heaps", meta, &c, Path::new("heaps.md")).unwrap();
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["published"], "2024-01-15T00:00:00");
        assert_eq!(json["headerSlug"], "systems");
        assert_eq!(json["categoryName"], "eecs281");
        assert_eq!(
            post.relative_path(),
            Path::new("systems").join("eecs281").join("heaps.md")
        );
    }

    #[test]
    fn test_post_keeps_date_text_and_time() {
        let c = Category::new("eecs281", &header(), CategoryMeta::default(), "");
        let meta = PostMeta {
            title: "Evening".into(),
            date: "2024-01-15T20:00:00Z".into(),
            description: String::new(),
            tags: Vec::new(),
            order: None,
            last_modified: None,
            image: None,
        };
        let post = Post::new("evening", meta, &c, Path::new("evening.md")).unwrap();
        assert_eq!(post.date, "2024-01-15T20:00:00Z");
        assert_eq!(post.published.format("%H:%M").to_string(), "20:00");
    }
}
