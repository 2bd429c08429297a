//! Print the header → category taxonomy

use anyhow::Result;

use super::print_json;
use crate::content::Header;
use crate::Folio;

/// Print the taxonomy, optionally with each category's posts
pub fn run(folio: &Folio, with_posts: bool, json: bool) -> Result<()> {
    let index = folio.index();
    let headers = if with_posts {
        index.load_tree()?
    } else {
        index.build_structure()?
    };

    if json {
        return print_json(&headers);
    }

    print!("{}", render(&headers));
    Ok(())
}

fn render(headers: &[Header]) -> String {
    let mut out = format!("Headers ({}):\n", headers.len());
    for header in headers {
        out.push_str(&format!(
            "  {} [{}] order={}\n",
            header.name, header.slug, header.order
        ));
        for category in &header.categories {
            out.push_str(&format!(
                "    {} [{}] order={}\n",
                category.name, category.slug, category.order
            ));
            for post in &category.posts {
                out.push_str(&format!("      {} {} [{}]\n", post.date, post.title, post.slug));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_tree() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("cs/algo")).unwrap();
        fs::write(root.join("cs/_header.md"), "---\nname: CS\n---\n").unwrap();
        fs::write(root.join("cs/algo/_category.md"), "---\nname: Algorithms\norder: 3\n---\n").unwrap();
        fs::write(
            root.join("cs/algo/dijkstra.md"),
            "---\ntitle: Dijkstra\ndate: 2022-05-01\n---\n",
        )
        .unwrap();

        let tree = crate::content::ContentIndex::new(root).load_tree().unwrap();
        let out = render(&tree);
        assert_eq!(
            out,
            "Headers (1):\n  CS [cs] order=0\n    Algorithms [algo] order=3\n      2022-05-01 Dijkstra [dijkstra]\n"
        );
    }
}
