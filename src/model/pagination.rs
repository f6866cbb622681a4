//! Pagination state for the offers table
//!
//! Pure page arithmetic: total page count, the visible slice bounds, and the
//! navigation operations (prev/next, rows-per-page changes, jump-to-page).
//! The table component owns an instance of this and feeds it key events;
//! everything here is synchronous and side-effect free so it can be tested
//! without a terminal.

/// Selectable page sizes, cycled in order by the rows-per-page control.
pub const PAGE_SIZES: [usize; 3] = [10, 20, 30];

/// Pagination state for a table over `row_count` rows.
///
/// `current_page` is 1-based. Invariant: whenever `row_count > 0`,
/// `current_page <= total_pages()`. With an empty data set `total_pages()`
/// is 0 and `current_page` stays pinned at 1 (the "page 1 of 0" degenerate
/// display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    rows_per_page: usize,
    row_count: usize,
    /// Free-text jump-to-page field. Resynchronized to `current_page`
    /// whenever the page changes through any path.
    pub jump_input: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            rows_per_page: PAGE_SIZES[0],
            row_count: 0,
            jump_input: String::new(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Total number of pages: `ceil(row_count / rows_per_page)`.
    /// 0 when there is no data.
    pub fn total_pages(&self) -> usize {
        self.row_count.div_ceil(self.rows_per_page)
    }

    /// Half-open index range of the rows visible on the current page.
    ///
    /// Both bounds are clamped to `row_count`, so the range is always valid
    /// for slicing even in the empty-data case.
    pub fn page_range(&self) -> std::ops::Range<usize> {
        let start = ((self.current_page - 1) * self.rows_per_page).min(self.row_count);
        let end = (self.current_page * self.rows_per_page).min(self.row_count);
        start..end
    }

    /// Whether the prev control is a no-op (first page).
    pub fn at_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Whether the next control is a no-op (last page, or no data).
    pub fn at_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// Replace the row count after the parent swaps the data set.
    ///
    /// The page number is clamped (not reset) so the position survives a
    /// re-filter when it can.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.set_page(self.current_page);
    }

    /// Saturating move to the previous page.
    pub fn prev_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    /// Saturating move to the next page.
    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    /// Set the page size and reset to page 1 unconditionally, so a size
    /// change can never land past the end of the data.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        if !PAGE_SIZES.contains(&rows_per_page) {
            return;
        }
        self.rows_per_page = rows_per_page;
        self.current_page = 1;
        self.sync_jump_input();
    }

    /// Advance to the next page size in [`PAGE_SIZES`], wrapping around.
    pub fn cycle_rows_per_page(&mut self) {
        let idx = PAGE_SIZES
            .iter()
            .position(|&s| s == self.rows_per_page)
            .unwrap_or(0);
        self.set_rows_per_page(PAGE_SIZES[(idx + 1) % PAGE_SIZES.len()]);
    }

    /// Submit the jump field: parse as an integer and clamp into range.
    ///
    /// Non-numeric input is silently ignored and the page is unchanged.
    /// Returns whether the input parsed.
    pub fn submit_jump(&mut self) -> bool {
        match self.jump_input.trim().parse::<usize>() {
            Ok(page) => {
                self.set_page(page);
                // A successful jump always leaves the field showing the
                // page actually landed on, even if the request was clamped.
                self.sync_jump_input();
                true
            }
            Err(_) => false,
        }
    }

    fn set_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.total_pages().max(1));
        if clamped != self.current_page {
            self.current_page = clamped;
            self.sync_jump_input();
        }
    }

    fn sync_jump_input(&mut self) {
        self.jump_input = self.current_page.to_string();
    }
}
