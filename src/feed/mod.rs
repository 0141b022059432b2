//! News feed: post store, search filter, paginator, and the controller that
//! reconciles URL query state into one consistent page of results.

pub mod paginate;
pub mod search;
pub mod store;
pub mod text;

pub use paginate::{page_markers, paginate, Page, PageMarker};
pub use store::{Post, PostStore};

/// Reconciles the two independently-changing feed inputs (page number and
/// search term) and resolves them against the store.
///
/// The non-obvious invariant lives here: a changed search term forces the
/// page back to 1, so a page number left over from a larger result set never
/// lands past the end of a narrower one.
#[derive(Debug, Clone)]
pub struct FeedController {
    page_size: usize,
    page: i64,
    search_term: String,
}

impl FeedController {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            page: 1,
            search_term: String::new(),
        }
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page;
    }

    pub fn set_search_term(&mut self, term: &str) {
        if self.search_term != term {
            self.page = 1;
        }
        self.search_term = term.to_string();
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    /// Run the pipeline. With an active term the full set is filtered and
    /// then paginated; otherwise the store's paged fetch is used directly so
    /// the whole collection is never materialized into a new vector.
    pub fn resolve(&self, store: &PostStore) -> Page<Post> {
        if self.is_searching() {
            let filtered: Vec<Post> = search::search_posts(store.all(), &self.search_term)
                .into_iter()
                .cloned()
                .collect();
            paginate(&filtered, self.page_size, self.page)
        } else {
            store.page(self.page, self.page_size)
        }
    }
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

    fn store() -> PostStore {
        let posts = (0..10)
            .map(|i| {
                let text = if i == 3 {
                    "Грантові можливості".to_string()
                } else {
                    format!("update number {i}")
                };
                post(&format!("p{i}"), &text)
            })
            .collect();
        PostStore::from_posts(posts)
    }

    #[test]
    fn changed_search_term_resets_page() {
        let mut feed = FeedController::new(8);
        feed.set_page(4);
        feed.set_search_term("грант");
        assert_eq!(feed.page(), 1);
    }

    #[test]
    fn unchanged_search_term_keeps_page() {
        let mut feed = FeedController::new(8);
        feed.set_search_term("update");
        feed.set_page(2);
        feed.set_search_term("update");
        assert_eq!(feed.page(), 2);
    }

    #[test]
    fn clearing_the_term_also_resets_page() {
        let mut feed = FeedController::new(8);
        feed.set_search_term("update");
        feed.set_page(2);
        feed.set_search_term("");
        assert_eq!(feed.page(), 1);
    }

    #[test]
    fn without_term_uses_store_paging() {
        let mut feed = FeedController::new(8);
        feed.set_page(2);
        let page = feed.resolve(&store());
        assert_eq!(page.total_items, 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "p8");
    }

    #[test]
    fn search_filters_then_paginates() {
        let mut feed = FeedController::new(8);
        feed.set_search_term("грант");
        let page = feed.resolve(&store());
        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items[0].id, "p3");
    }

    #[test]
    fn stale_page_is_clamped_for_narrow_results() {
        let mut feed = FeedController::new(8);
        feed.set_search_term("update");
        // A page beyond the filtered result set collapses to the last page.
        feed.set_page(5);
        let page = feed.resolve(&store());
        assert_eq!(page.total_items, 9);
        assert_eq!(page.current_page, page.total_pages);
        assert!(!page.items.is_empty());
    }
}
