/// One page of a client-side paginated listing. Pages are 1-based.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slices `items` into pages of `per_page`; `page` is clamped into range and
/// an empty listing still has one (empty) page.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    Page {
        items: &items[start.min(end)..end],
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_pages() {
        let items: Vec<u32> = (1..=20).collect();
        let p = paginate(&items, 1, 9);
        assert_eq!(p.items.len(), 9);
        assert_eq!(p.total_pages, 3);
        assert!(!p.has_previous());
        assert!(p.has_next());
        let last = paginate(&items, 3, 9);
        assert_eq!(last.items, &[19, 20]);
        assert!(!last.has_next());
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, 0, 2).page, 1);
        assert_eq!(paginate(&items, 9, 2).page, 2);
        assert_eq!(paginate(&items, 9, 2).items, &[3]);
    }

    #[test]
    fn empty_listing_has_one_page() {
        let items: [u8; 0] = [];
        let p = paginate(&items, 4, 9);
        assert_eq!((p.page, p.total_pages), (1, 1));
        assert!(p.items.is_empty());
    }
}
