//! Page windowing over a result set.

use std::num::NonZeroUsize;

use crate::query::PageCursor;

/// One page of a result set.
#[derive(Debug, PartialEq, Eq)]
pub struct DisplayPage<'a, T> {
    /// Contiguous slice of the result set, at most `size` long.
    pub items: &'a [T],
    /// Highest valid page index for the full result set.
    pub page_limit: usize,
}

/// `max(0, ceil(len / size) - 1)`.
pub fn page_limit(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get()).saturating_sub(1)
}

/// Slice out the page `cursor` points at.
///
/// Pages past the end are empty. A negative index is treated as page 0;
/// callers are expected to have corrected it already.
pub fn window<T>(results: &[T], cursor: PageCursor) -> DisplayPage<'_, T> {
    let size = NonZeroUsize::new(cursor.size()).unwrap_or(NonZeroUsize::MIN);
    let len = results.len();

    let index = if cursor.index < 0 {
        0
    } else {
        usize::try_from(cursor.index).unwrap_or(usize::MAX)
    };
    let start = index.saturating_mul(size.get()).min(len);
    let end = start.saturating_add(size.get()).min(len);

    DisplayPage {
        items: &results[start..end],
        page_limit: page_limit(len, size),
    }
}

#[cfg(test)]
#[path = "tests/window_tests.rs"]
mod tests;
