//! List helpers used by consumers of the content index: display order and
//! tag tallies.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::content::Post;

/// Display order for post lists: newest timestamp first, then higher
/// `order` first (a missing order counts as 0), then slug for a stable result.
pub fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.published
        .cmp(&a.published)
        .then_with(|| b.order.unwrap_or(0).cmp(&a.order.unwrap_or(0)))
        .then_with(|| a.slug.cmp(&b.slug))
}

/// Sort posts in display order
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(newest_first);
}

/// Count posts per tag, most used first (ties by tag name)
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut tags: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<_> = tags
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::parse_timestamp;

    fn post(slug: &str, date: &str, order: Option<i64>, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: date.to_string(),
            published: parse_timestamp(date).unwrap(),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            order,
            last_modified: None,
            image: None,
            category: "cat".to_string(),
            category_name: "Cat".to_string(),
            header_slug: "head".to_string(),
            header_name: "Head".to_string(),
        }
    }

    #[test]
    fn test_same_date_higher_order_first() {
        let mut posts = vec![
            post("low", "2024-03-01", Some(2), &[]),
            post("high", "2024-03-01", Some(5), &[]),
            post("older", "2023-12-31", Some(9), &[]),
            post("newest", "2024-04-01", None, &[]),
        ];
        sort_newest_first(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "high", "low", "older"]);
    }

    #[test]
    fn test_same_day_later_time_first() {
        let mut posts = vec![
            post("aaa-morning", "2024-01-15T08:00:00Z", Some(9), &[]),
            post("zzz-evening", "2024-01-15T20:00:00Z", None, &[]),
        ];
        sort_newest_first(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["zzz-evening", "aaa-morning"]);
        assert_eq!(posts[0].date, "2024-01-15T20:00:00Z");
    }

    #[test]
    fn test_tag_counts() {
        let posts = vec![
            post("a", "2024-01-01", None, &["rust", "cpp"]),
            post("b", "2024-01-02", None, &["rust"]),
            post("c", "2024-01-03", None, &["algorithms"]),
        ];
        let counts = tag_counts(&posts);
        assert_eq!(counts[0], ("rust".to_string(), 2));
        assert_eq!(counts[1], ("algorithms".to_string(), 1));
        assert_eq!(counts[2], ("cpp".to_string(), 1));
    }
}
