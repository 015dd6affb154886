//! Fixed-size page slicing shared by list views.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a filtered list plus the numbers the pager needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Entry rendered by the pager.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageLink {
    Number(usize),
    Ellipsis,
}

/// Number of pages needed for `count` items; never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    count.div_ceil(size).max(1)
}

/// Clamps a requested 1-based page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Returns the slice `[(page-1)*size, page*size)` of `items` with the page clamped.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = clamp_page(page, total_pages);
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_items: items.len(),
    }
}

impl<T> Page<T> {
    /// True for the explicit "no results" state.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// The pager is only shown when there is something to page through.
    pub fn shows_pager(&self) -> bool {
        !self.is_empty() && self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page number the "previous" button leads to.
    pub fn previous(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    /// Page number the "next" button leads to.
    pub fn next(&self) -> usize {
        (self.page + 1).min(self.total_pages)
    }

    /// Page links for the pager. Compact mode keeps the first and last page
    /// and the neighbours of the current page, with ellipses for the gaps.
    pub fn visible_pages(&self, compact: bool) -> Vec<PageLink> {
        let mut links = Vec::new();
        let mut last_shown: Option<usize> = None;
        for number in 1..=self.total_pages {
            let visible = !compact
                || number == 1
                || number == self.total_pages
                || number.abs_diff(self.page) <= 1;
            if !visible {
                continue;
            }
            if let Some(previous) = last_shown {
                if previous + 1 != number {
                    links.push(PageLink::Ellipsis);
                }
            }
            links.push(PageLink::Number(number));
            last_shown = Some(number);
        }
        links
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_still_has_one_page() {
        let page = paginate::<u32>(&[], 3, DEFAULT_PAGE_SIZE);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
        assert!(!page.shows_pager());
    }

    #[test]
    fn page_is_clamped_into_range() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 0, 10).page, 1);
        let last = paginate(&items, 99, 10);
        assert_eq!(last.page, 3);
        assert_eq!(last.items, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn pages_cover_every_item_once() {
        let items: Vec<u32> = (0..23).collect();
        let pages = total_pages(items.len(), 10);
        let joined: Vec<u32> = (1..=pages)
            .flat_map(|number| paginate(&items, number, 10).items)
            .collect();
        assert_eq!(joined, items);
        assert_eq!(paginate(&items, pages, 10).items.len(), 23 % 10);
    }

    #[test]
    fn full_last_page_when_divisible() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(paginate(&items, 2, 10).items.len(), 10);
        assert_eq!(total_pages(20, 10), 2);
    }

    #[test]
    fn compact_links_insert_ellipses() {
        let items: Vec<u32> = (0..70).collect();
        let page = paginate(&items, 4, 10);
        assert_eq!(
            page.visible_pages(true),
            vec![
                PageLink::Number(1),
                PageLink::Ellipsis,
                PageLink::Number(3),
                PageLink::Number(4),
                PageLink::Number(5),
                PageLink::Ellipsis,
                PageLink::Number(7),
            ]
        );
        assert_eq!(page.visible_pages(false).len(), 7);
    }

    #[test]
    fn previous_and_next_stay_in_range() {
        let items: Vec<u32> = (0..15).collect();
        let first = paginate(&items, 1, 10);
        assert_eq!(first.previous(), 1);
        assert_eq!(first.next(), 2);
        let second = paginate(&items, 2, 10);
        assert_eq!(second.next(), 2);
        assert!(!second.has_next());
    }
}
