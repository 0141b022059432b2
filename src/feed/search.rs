//! Case-insensitive substring filtering over the post collection.

use crate::feed::store::Post;

/// Filter posts whose body contains `term` case-insensitively, preserving
/// the original order. An empty or whitespace-only term is the identity.
/// Unicode case folding covers Cyrillic and German umlauts; the match is not
/// accent-insensitive and does no tokenization or ranking.
pub fn search_posts<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    let term = term.trim();
    if term.is_empty() {
        return posts.iter().collect();
    }

    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|post| post.text.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, text: &str) -> Post {
        Post {
            id: id.to_string(),
            timestamp: 0,
            date: String::new(),
            text: text.to_string(),
            image_url: None,
        }
    }

    #[test]
    fn empty_term_returns_all_posts() {
        let posts = vec![post("1", "alpha"), post("2", "beta")];
        let found = search_posts(&posts, "");
        assert_eq!(found.len(), 2);
        let found = search_posts(&posts, "   ");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn matches_are_case_insensitive() {
        let posts = vec![post("1", "Community Meeting"), post("2", "sports day")];
        let found = search_posts(&posts, "community");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
    }

    #[test]
    fn cyrillic_case_folding() {
        let posts = vec![
            post("1", "Грантові можливості для громади"),
            post("2", "Спортивний турнір"),
        ];
        let found = search_posts(&posts, "грант");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
    }

    #[test]
    fn german_umlaut_case_folding() {
        let posts = vec![post("1", "FÖRDERUNG für Vereine")];
        assert_eq!(search_posts(&posts, "förderung").len(), 1);
    }

    #[test]
    fn preserves_relative_order() {
        let posts = vec![
            post("a", "x match x"),
            post("b", "no"),
            post("c", "MATCH again"),
        ];
        let found = search_posts(&posts, "match");
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        assert!(search_posts(&[], "anything").is_empty());
    }
}
