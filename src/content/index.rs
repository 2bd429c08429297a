//! Content index - builds the header → category → post taxonomy
//!
//! Every query reads the blog root again; nothing is cached between calls.
//! A directory takes part in the taxonomy only when it carries its marker
//! file (`_header.md` or `_category.md`), everything else is skipped.

use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter::{CategoryMeta, Document, HeaderMeta, PostMeta};
use super::{BlogStats, Category, Header, Post};
use crate::error::{ContentError, Result};
use crate::helpers::current_year;

/// Marker file identifying a header directory
pub const HEADER_MARKER: &str = "_header.md";
/// Marker file identifying a category directory
pub const CATEGORY_MARKER: &str = "_category.md";

/// Which kind of slug collides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionKind {
    Post,
    Category,
}

/// A slug declared in more than one place
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugCollision {
    pub kind: CollisionKind,
    pub slug: String,
    /// `header/category` for posts, `header` for categories, in index order
    pub locations: Vec<String>,
}

/// Read-only view over a blog content root
#[derive(Debug, Clone)]
pub struct ContentIndex {
    root: PathBuf,
}

impl ContentIndex {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Headers with their categories, both sorted by `order` then slug.
    /// Posts are not loaded.
    pub fn build_structure(&self) -> Result<Vec<Header>> {
        let mut headers = Vec::new();

        for entry in subdirectories(&self.root)? {
            let header_dir = &entry.path;
            let marker = header_dir.join(HEADER_MARKER);
            if !marker.is_file() {
                tracing::debug!("Skipping {:?}: no {}", header_dir, HEADER_MARKER);
                continue;
            }

            let doc = Document::<HeaderMeta>::read(&marker)?;
            let mut header = Header::new(&entry.name, doc.meta, &doc.body);

            for cat_entry in subdirectories(header_dir)? {
                let cat_marker = cat_entry.path.join(CATEGORY_MARKER);
                if !cat_marker.is_file() {
                    tracing::debug!("Skipping {:?}: no {}", cat_entry.path, CATEGORY_MARKER);
                    continue;
                }

                let doc = Document::<CategoryMeta>::read(&cat_marker)?;
                let category = Category::new(&cat_entry.name, &header, doc.meta, &doc.body);
                header.categories.push(category);
            }

            header
                .categories
                .sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.slug.cmp(&b.slug)));
            headers.push(header);
        }

        headers.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.slug.cmp(&b.slug)));

        tracing::debug!("Built structure with {} headers", headers.len());
        Ok(headers)
    }

    /// Like [`build_structure`](Self::build_structure), with every category's posts loaded
    pub fn load_tree(&self) -> Result<Vec<Header>> {
        let mut headers = self.build_structure()?;
        for header in &mut headers {
            for category in &mut header.categories {
                category.posts = self.load_category_posts(category)?;
            }
        }
        Ok(headers)
    }

    /// Every post of every category, in structure order then file-name order.
    /// Not sorted by date.
    pub fn list_all_posts(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();
        for header in self.build_structure()? {
            for category in &header.categories {
                posts.extend(self.load_category_posts(category)?);
            }
        }

        tracing::debug!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    fn load_category_posts(&self, category: &Category) -> Result<Vec<Post>> {
        let dir = self.root.join(&category.header_slug).join(&category.slug);
        let mut posts = Vec::new();

        for entry in entries(&dir)? {
            if !entry.is_file || entry.name.starts_with('_') {
                continue;
            }
            let Some(slug) = entry.name.strip_suffix(".md") else {
                continue;
            };

            let doc = Document::<PostMeta>::read(&entry.path)?;
            posts.push(Post::new(slug, doc.meta, category, &entry.path)?);
        }

        Ok(posts)
    }

    /// Slugs of all categories in structure order
    pub fn category_slugs(&self) -> Result<Vec<String>> {
        Ok(self
            .build_structure()?
            .into_iter()
            .flat_map(|h| h.categories.into_iter().map(|c| c.slug))
            .collect())
    }

    /// First category with this slug; later headers lose on a collision
    pub fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        Ok(self
            .build_structure()?
            .into_iter()
            .flat_map(|h| h.categories)
            .find(|c| c.slug == slug))
    }

    /// Whether a route segment names a category rather than a post
    pub fn is_category_slug(&self, slug: &str) -> Result<bool> {
        Ok(self.category_slugs()?.iter().any(|s| s == slug))
    }

    /// Posts whose category slug matches; empty for an unknown slug
    pub fn get_posts_by_category(&self, category_slug: &str) -> Result<Vec<Post>> {
        Ok(self
            .list_all_posts()?
            .into_iter()
            .filter(|p| p.category == category_slug)
            .collect())
    }

    /// First post with this slug in index order
    pub fn find_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        Ok(self.list_all_posts()?.into_iter().find(|p| p.slug == slug))
    }

    /// On-disk path of the post with this slug
    pub fn get_post_file_path(&self, slug: &str) -> Result<Option<PathBuf>> {
        Ok(self
            .find_post_by_slug(slug)?
            .map(|post| self.root.join(post.relative_path())))
    }

    /// Front-matter and Markdown body of the post with this slug
    pub fn get_post_content(&self, slug: &str) -> Result<Option<Document<PostMeta>>> {
        match self.get_post_file_path(slug)? {
            Some(path) => Document::read(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Article count, total body words and the year of the oldest post
    pub fn compute_stats(&self) -> Result<BlogStats> {
        let posts = self.list_all_posts()?;
        let mut total_words = 0;
        let mut earliest_year = current_year();

        for post in &posts {
            let doc = Document::<PostMeta>::read(&self.root.join(post.relative_path()))?;
            total_words += doc.body.split_whitespace().count();
            earliest_year = earliest_year.min(post.published.year());
        }

        Ok(BlogStats {
            total_articles: posts.len(),
            earliest_year,
            total_words,
        })
    }

    /// Post slugs shared by several categories and category slugs shared by
    /// several headers. Lookups by slug only ever see the first of these.
    pub fn slug_collisions(&self) -> Result<Vec<SlugCollision>> {
        let structure = self.build_structure()?;

        let categories = structure.iter().flat_map(|h| {
            h.categories
                .iter()
                .map(move |c| (c.slug.clone(), h.slug.clone()))
        });
        let mut collisions = duplicates(CollisionKind::Category, categories);

        let posts = self
            .list_all_posts()?
            .into_iter()
            .map(|p| (p.slug, format!("{}/{}", p.header_slug, p.category)));
        collisions.extend(duplicates(CollisionKind::Post, posts));

        Ok(collisions)
    }
}

/// Group `(slug, location)` pairs and keep the slugs seen more than once
fn duplicates(
    kind: CollisionKind,
    pairs: impl Iterator<Item = (String, String)>,
) -> Vec<SlugCollision> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<SlugCollision> = Vec::new();

    for (slug, location) in pairs {
        match seen.get(&slug) {
            Some(&i) => groups[i].locations.push(location),
            None => {
                seen.insert(slug.clone(), groups.len());
                groups.push(SlugCollision {
                    kind,
                    slug,
                    locations: vec![location],
                });
            }
        }
    }

    groups.retain(|g| g.locations.len() > 1);
    groups
}

/// A child of a content directory, with symlinks resolved
pub(crate) struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_file: bool,
}

/// Immediate children of `dir`, sorted by file name.
///
/// Links are not followed by the walk itself; a symlink takes the type of its
/// target, and one whose target is missing is skipped. Names that are not
/// valid UTF-8 cannot become slugs and are skipped too.
pub(crate) fn entries(dir: &Path) -> Result<Vec<Entry>> {
    let metadata = fs::metadata(dir).map_err(|e| ContentError::fs(dir, e))?;
    if !metadata.is_dir() {
        return Err(ContentError::fs(
            dir,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let mut children = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ContentError::FileSystem {
                path,
                source: e.into(),
            }
        })?;

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!("Skipping {:?}: name is not valid UTF-8", entry.path());
            continue;
        };

        let file_type = if entry.path_is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(target) => target.file_type(),
                Err(e) => {
                    tracing::debug!("Skipping broken link {:?}: {}", entry.path(), e);
                    continue;
                }
            }
        } else {
            entry.file_type()
        };

        children.push(Entry {
            name,
            path: entry.into_path(),
            is_dir: file_type.is_dir(),
            is_file: file_type.is_file(),
        });
    }

    Ok(children)
}

fn subdirectories(dir: &Path) -> Result<Vec<Entry>> {
    Ok(entries(dir)?.into_iter().filter(|e| e.is_dir).collect())
}
