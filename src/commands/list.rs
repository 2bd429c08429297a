//! List site content

use anyhow::Result;

use super::print_json;
use crate::helpers::{format_date, sort_newest_first, tag_counts};
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, category: Option<&str>, json: bool) -> Result<()> {
    let index = folio.index();

    match content_type {
        "post" | "posts" => {
            let mut posts = match category {
                Some(slug) => index.get_posts_by_category(slug)?,
                None => index.list_all_posts()?,
            };
            sort_newest_first(&mut posts);

            if json {
                return print_json(&posts);
            }
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}/{}]",
                    format_date(&post.published.date(), &folio.config.date_format),
                    post.title,
                    post.category,
                    post.slug
                );
            }
        }
        "header" | "headers" => {
            let headers = index.build_structure()?;
            if json {
                return print_json(&headers);
            }
            println!("Headers ({}):", headers.len());
            for header in headers {
                println!(
                    "  {} [{}] ({} categories)",
                    header.name,
                    header.slug,
                    header.categories.len()
                );
            }
        }
        "category" | "categories" => {
            let posts = index.list_all_posts()?;
            let categories: Vec<_> = index
                .build_structure()?
                .into_iter()
                .flat_map(|h| h.categories)
                .collect();
            if json {
                return print_json(&categories);
            }
            println!("Categories ({}):", categories.len());
            for category in categories {
                let count = posts.iter().filter(|p| p.category == category.slug).count();
                println!(
                    "  {} / {} [{}] ({})",
                    category.header_name, category.name, category.slug, count
                );
            }
        }
        "tag" | "tags" => {
            let tags = tag_counts(&index.list_all_posts()?);
            if json {
                return print_json(&tags);
            }
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "snippet" | "snippets" => {
            let snippets = folio.snippets().list()?;
            if json {
                return print_json(&snippets);
            }
            println!("Snippets ({}):", snippets.len());
            for snippet in snippets {
                println!("  {} [{}] {:?}", snippet.title, snippet.slug, snippet.kind);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, header, category, tag, snippet",
                content_type
            );
        }
    }

    Ok(())
}
