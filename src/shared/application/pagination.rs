/// Pagination support for paged result sets
///
/// Standard `{limit, offset, total}` window used by every paged view.
use serde::{Deserialize, Serialize};

/// Above this many pages an exhaustive page selector stops being usable
/// and the UI switches to a free-text jump input.
pub const EXHAUSTIVE_SELECTOR_MAX_PAGES: u32 = 20;

/// The `{limit, offset, total}` triple describing the current paginated slice.
///
/// `limit` is fixed for the lifetime of the window; `offset` is always a
/// multiple of `limit`; `total` is whatever the server last reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    limit: u32,
    offset: u32,
    total: u32,
}

impl PageWindow {
    pub fn new(limit: u32) -> Self {
        assert!(limit > 0, "page limit must be positive");
        Self {
            limit,
            offset: 0,
            total: 0,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn set_total(&mut self, total: u32) {
        self.total = total;
    }

    /// Reset to the first page, keeping `total` until the next response.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn current_page(&self) -> u32 {
        self.offset / self.limit + 1
    }

    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.limit)
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    pub fn has_next(&self) -> bool {
        self.offset + self.limit < self.total
    }

    /// Jump to page `n` (1-based). No-op outside `[1, total_pages]`.
    /// Returns whether the offset actually changed.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        if n < 1 || n > self.total_pages() {
            return false;
        }
        let new_offset = (n - 1) * self.limit;
        if new_offset == self.offset {
            return false;
        }
        self.offset = new_offset;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page() + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        let page = self.current_page();
        if page <= 1 {
            return false;
        }
        self.go_to_page(page - 1)
    }

    /// Hydrate the offset from a 1-based page number taken from the URL.
    /// Anything non-positive falls back to the first page.
    pub fn set_page_unchecked(&mut self, n: u32) {
        self.offset = n.saturating_sub(1) * self.limit;
    }

    /// 1-based display range for "Showing X - Y of Z".
    pub fn display_range(&self) -> (u32, u32) {
        let start = self.offset + 1;
        let end = (self.offset + self.limit).min(self.total);
        (start, end)
    }

    /// Which page selector the UI should render for this window.
    pub fn selector(&self) -> PageSelector {
        if self.total_pages() <= EXHAUSTIVE_SELECTOR_MAX_PAGES {
            PageSelector::Exhaustive((1..=self.total_pages()).collect())
        } else {
            PageSelector::JumpInput
        }
    }

    /// Validate a free-text page jump committed via Enter or blur.
    /// Returns the page to navigate to, or `None` to revert to the
    /// current page.
    pub fn commit_jump(&self, raw: &str) -> Option<u32> {
        let n: u32 = raw.trim().parse().ok()?;
        if n >= 1 && n <= self.total_pages() {
            Some(n)
        } else {
            None
        }
    }
}

/// Presentation policy for the pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelector {
    /// Every page individually addressable.
    Exhaustive(Vec<u32>),
    /// Free-text numeric jump input, validated on commit.
    JumpInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let mut window = PageWindow::new(24);
        window.set_total(100);
        assert_eq!(window.total_pages(), 5);
        window.set_total(96);
        assert_eq!(window.total_pages(), 4);
        window.set_total(0);
        assert_eq!(window.total_pages(), 0);
        assert_eq!(window.current_page(), 1);
    }

    #[test]
    fn go_to_page_clamps() {
        let mut window = PageWindow::new(24);
        window.set_total(100);

        assert!(!window.go_to_page(0));
        assert!(!window.go_to_page(6));
        assert_eq!(window.offset(), 0);

        assert!(window.go_to_page(5));
        assert_eq!(window.offset(), 96);
        assert!(!window.has_next());
    }

    #[test]
    fn next_from_first_page_walks_to_last() {
        let mut window = PageWindow::new(24);
        window.set_total(100);

        for _ in 0..4 {
            assert!(window.next_page());
        }
        assert_eq!(window.current_page(), 5);
        assert_eq!(window.offset(), 96);
        assert!(!window.next_page());
        assert!(!window.has_next());
    }

    #[test]
    fn prev_never_goes_below_zero() {
        let mut window = PageWindow::new(24);
        window.set_total(50);
        assert!(!window.prev_page());
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn selector_switches_past_twenty_pages() {
        let mut window = PageWindow::new(24);
        window.set_total(24 * 20);
        assert!(matches!(window.selector(), PageSelector::Exhaustive(ref pages) if pages.len() == 20));

        window.set_total(24 * 21);
        assert_eq!(window.selector(), PageSelector::JumpInput);
    }

    #[test]
    fn jump_commit_validates_range() {
        let mut window = PageWindow::new(24);
        window.set_total(24 * 30);

        assert_eq!(window.commit_jump("7"), Some(7));
        assert_eq!(window.commit_jump(" 30 "), Some(30));
        assert_eq!(window.commit_jump("0"), None);
        assert_eq!(window.commit_jump("31"), None);
        assert_eq!(window.commit_jump("abc"), None);
    }

    #[test]
    fn display_range_caps_at_total() {
        let mut window = PageWindow::new(24);
        window.set_total(30);
        window.go_to_page(2);
        assert_eq!(window.display_range(), (25, 30));
    }
}
