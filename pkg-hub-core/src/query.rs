use std::num::NonZeroUsize;

use pkg_hub_catalog::Language;

/// Page size used by the search view when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Active filter criteria. Owned by the caller; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Free text, already URL-decoded.
    pub text: String,
    pub language: Option<Language>,
}

impl QueryState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }
}

/// Current page index and page size.
///
/// `index` is a page number, not an item offset: page `k` covers items
/// `[k * size, k * size + size)`. It is signed because out-of-range values
/// arrive from outside and are snapped back by the boundary corrector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageCursor {
    pub index: i64,
    size: NonZeroUsize,
}

impl PageCursor {
    /// A `size` of 0 is raised to 1.
    pub fn new(index: i64, size: usize) -> Self {
        Self {
            index,
            size: NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN),
        }
    }

    pub fn size(&self) -> usize {
        self.size.get()
    }

    pub fn with_index(mut self, index: i64) -> Self {
        self.index = index;
        self
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}
