//! Content module - the blog taxonomy, snippets and Markdown rendering

pub mod frontmatter;
mod index;
mod markdown;
mod post;
mod snippets;

pub use frontmatter::{Document, PostMeta, SnippetKind, SnippetMeta};
pub use index::{CollisionKind, ContentIndex, SlugCollision, CATEGORY_MARKER, HEADER_MARKER};
pub use markdown::{language_label, MarkdownRenderer};
pub use post::{BlogStats, Category, Header, Post};
pub use snippets::{Snippet, SnippetIndex, SNIPPET_INDEX};
