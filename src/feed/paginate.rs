//! Deterministic slicing of an ordered collection into fixed-size pages.

/// One page of a listing, plus the derived counts the UI needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub total_items: usize,
    pub current_page: usize,
}

/// Marker in the compressed page-number row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Slice `items` into the requested page. `total_pages` is 0 for an empty
/// collection ("nothing to show", not "page 1 with zero items"), while
/// `current_page` still collapses to 1 so templates always have a valid
/// number to render. Out-of-range requests (0, negative, past the end) are
/// clamped rather than rejected.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, requested_page: i64) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let current_page = requested_page.clamp(1, total_pages.max(1) as i64) as usize;

    let start = ((current_page - 1) * page_size).min(total_items);
    let end = (start + page_size).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        total_pages,
        total_items,
        current_page,
    }
}

/// Compressed page-number row: all pages when there are at most 7, otherwise
/// the first and last page with a window around the current one.
pub fn page_markers(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Page};

    const MAX_VISIBLE: usize = 7;

    if total_pages <= MAX_VISIBLE {
        return (1..=total_pages).map(Page).collect();
    }

    let mut markers = vec![Page(1)];
    if current_page <= 3 {
        markers.extend([Page(2), Page(3), Page(4), Ellipsis, Page(total_pages)]);
    } else if current_page >= total_pages - 2 {
        markers.extend([
            Ellipsis,
            Page(total_pages - 3),
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ]);
    } else {
        markers.extend([
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(total_pages),
        ]);
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Page as P};
    use super::*;

    fn nums(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn pages_partition_items_without_overlap_or_gaps() {
        let items = nums(27);
        let page_size = 8;
        let total_pages = paginate(&items, page_size, 1).total_pages;
        assert_eq!(total_pages, 4);

        let mut seen = Vec::new();
        for p in 1..=total_pages {
            let page = paginate(&items, page_size, p as i64);
            assert_eq!(page.current_page, p);
            seen.extend(page.items);
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn ten_items_page_size_eight() {
        let items = nums(10);
        let first = paginate(&items, 8, 1);
        assert_eq!(first.items, nums(8));
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_items, 10);

        let second = paginate(&items, 8, 2);
        assert_eq!(second.items, vec![8, 9]);
        assert_eq!(second.current_page, 2);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let page = paginate::<usize>(&[], 8, 5);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
        // Collapses to 1 by convention even though there is no real page 1.
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn requested_page_is_clamped() {
        let items = nums(20);
        assert_eq!(paginate(&items, 8, 0).current_page, 1);
        assert_eq!(paginate(&items, 8, -3).current_page, 1);
        assert_eq!(paginate(&items, 8, 99).current_page, 3);
    }

    #[test]
    fn same_inputs_same_output() {
        let items = nums(13);
        assert_eq!(paginate(&items, 4, 2), paginate(&items, 4, 2));
    }

    #[test]
    fn markers_list_all_pages_when_few() {
        assert_eq!(page_markers(1, 1), vec![P(1)]);
        assert_eq!(
            page_markers(4, 7),
            vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7)]
        );
    }

    #[test]
    fn markers_near_start() {
        assert_eq!(
            page_markers(2, 10),
            vec![P(1), P(2), P(3), P(4), Ellipsis, P(10)]
        );
        assert_eq!(
            page_markers(3, 10),
            vec![P(1), P(2), P(3), P(4), Ellipsis, P(10)]
        );
    }

    #[test]
    fn markers_near_end() {
        assert_eq!(
            page_markers(9, 10),
            vec![P(1), Ellipsis, P(7), P(8), P(9), P(10)]
        );
    }

    #[test]
    fn markers_in_the_middle() {
        assert_eq!(
            page_markers(5, 10),
            vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]
        );
    }
}
