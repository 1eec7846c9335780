//! Reusable two-row buffer for the dynamic-programming kernels.
//!
//! Every grid algorithm here only ever reads the previous row, so two rows
//! are enough. Keeping them in one struct lets a database scan reuse the
//! allocation across candidates instead of building a fresh grid per record.

/// DP working rows, reusable across calls
#[derive(Debug, Default)]
pub struct RowPair<T> {
    pub prev: Vec<T>,
    pub curr: Vec<T>,
}

impl<T: Copy + Default> RowPair<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prev: Vec::new(),
            curr: Vec::new(),
        }
    }

    /// Size both rows to `width` and fill the previous row from `border`,
    /// which maps a column index to its row-zero value.
    pub fn reset<F: Fn(usize) -> T>(&mut self, width: usize, border: F) {
        self.prev.clear();
        self.prev.extend((0..width).map(border));
        self.curr.clear();
        self.curr.resize(width, T::default());
    }

    /// Make the row just written the previous row
    pub fn advance(&mut self) {
        std::mem::swap(&mut self.prev, &mut self.curr);
    }
}

/// Grid index or length as a score cell.
///
/// Row and column counts are bounded by the input caps, far below `i64::MAX`.
#[inline]
#[must_use]
pub fn to_cell(n: usize) -> i64 {
    #[allow(clippy::cast_possible_wrap)]
    {
        n as i64
    }
}
