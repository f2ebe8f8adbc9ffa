//! Page arithmetic for schedule listings.

/// Splits a 1-based sequence of items into fixed-size pages.
///
/// Item and page numbers are both 1-based, matching how listings are
/// numbered for display.
///
/// # Examples
///
/// ```
/// use u_enroll::planner::Pagination;
///
/// let p = Pagination::new(10);
/// assert_eq!(p.page_id(1), 1);
/// assert_eq!(p.page_id(10), 1);
/// assert_eq!(p.page_id(11), 2);
/// assert!(p.is_page_start(11));
/// assert!(p.is_page_end(23, 23));
/// assert_eq!(p.page_count(23), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    /// Items per page, at least 1.
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl Pagination {
    /// Pagination with `page_size` items per page (clamped to at least 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Page holding the `n`-th item. Item 0 is treated as item 1.
    pub fn page_id(&self, n: usize) -> usize {
        n.saturating_sub(1) / self.size() + 1
    }

    /// Whether the `n`-th item opens a page.
    pub fn is_page_start(&self, n: usize) -> bool {
        n >= 1 && (n - 1) % self.size() == 0
    }

    /// Whether the `n`-th of `total` items closes a page.
    pub fn is_page_end(&self, n: usize, total: usize) -> bool {
        n >= 1 && (n % self.size() == 0 || n == total)
    }

    /// Number of pages needed for `total` items.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size())
    }

    /// Zero-based item range of page `page_number`, clipped to `total`.
    pub fn range(&self, page_number: usize, total: usize) -> std::ops::Range<usize> {
        if page_number == 0 {
            return 0..0;
        }
        let start = (page_number - 1).saturating_mul(self.size()).min(total);
        let end = start.saturating_add(self.size()).min(total);
        start..end
    }

    /// Items on page `page_number`; empty past the last page.
    pub fn page<'a, T>(&self, items: &'a [T], page_number: usize) -> &'a [T] {
        &items[self.range(page_number, items.len())]
    }

    fn size(&self) -> usize {
        self.page_size.max(1)
    }
}
