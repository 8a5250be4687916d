//! Out-of-range page index correction.
//!
//! After each derive, the corrector looks at the view and the page index the
//! caller asked for. If there are results and the index falls outside
//! `[0, page_limit]`, it asks for the nearest valid page. It decides at most
//! once per `(results, page_limit, index)` triple, so a correction that
//! re-triggers a derive before results settle cannot oscillate.

use crate::engine::CatalogView;

/// Request to move the cursor to `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCorrection {
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observed {
    results_generation: u64,
    page_limit: usize,
    index: i64,
}

#[derive(Debug, Default)]
pub struct BoundaryCorrector {
    last: Option<Observed>,
}

impl BoundaryCorrector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `index` against `view` and return a correction if one is due.
    ///
    /// Nothing is decided while the view is loading, so the same triple is
    /// evaluated again once loading finishes.
    pub fn observe(&mut self, view: &CatalogView, index: i64) -> Option<PageCorrection> {
        if view.loading {
            return None;
        }

        let observed = Observed {
            results_generation: view.results_generation,
            page_limit: view.page_limit,
            index,
        };
        if self.last == Some(observed) {
            return None;
        }
        self.last = Some(observed);

        if view.results.is_empty() {
            return None;
        }

        let page_limit = i64::try_from(view.page_limit).unwrap_or(i64::MAX);
        let correction = if index < 0 {
            Some(PageCorrection { index: 0 })
        } else if index > page_limit {
            Some(PageCorrection {
                index: view.page_limit,
            })
        } else {
            None
        };

        if let Some(c) = correction {
            log::debug!(
                "Page index {} out of range [0, {}], correcting to {}",
                index,
                view.page_limit,
                c.index
            );
        }
        correction
    }
}

#[cfg(test)]
#[path = "tests/boundary_tests.rs"]
mod tests;
