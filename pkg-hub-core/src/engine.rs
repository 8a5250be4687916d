//! Derived "what to show right now" state.
//!
//! [`CatalogQueryEngine::derive`] reads the full input tuple (source state,
//! query, cursor) at once and produces a [`CatalogView`]. Two memo levels
//! keep repeated calls cheap:
//!
//! - the result set is reused while the catalog snapshot (by `Arc`
//!   identity), query text and language are unchanged;
//! - the whole view is reused while every input, including `loading`,
//!   `error` and the cursor, is unchanged.
//!
//! Snapshot identity is pointer identity. A new snapshot always invalidates
//! both memos, even when its contents equal the old one.

use std::sync::Arc;

use pkg_hub_catalog::{Catalog, CatalogEntry, Language};

use crate::filter::filter;
use crate::query::{PageCursor, QueryState};
use crate::source::{DataSourceState, SourceError};
use crate::window::window;

/// Everything presentation needs for the current inputs.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub loading: bool,
    pub error: Option<SourceError>,
    /// Every match, independent of pagination.
    pub results: Arc<[Arc<CatalogEntry>]>,
    /// The current page of `results`.
    pub displayable: Vec<Arc<CatalogEntry>>,
    pub page_limit: usize,
    /// Identity of `results`: changes exactly when the result set is
    /// recomputed.
    pub results_generation: u64,
}

struct ResultsMemo {
    catalog: Arc<Catalog>,
    text: String,
    language: Option<Language>,
    results: Arc<[Arc<CatalogEntry>]>,
    generation: u64,
}

struct ViewMemo {
    loading: bool,
    error: Option<SourceError>,
    catalog: Option<Arc<Catalog>>,
    query: QueryState,
    cursor: PageCursor,
    view: Arc<CatalogView>,
}

impl ViewMemo {
    fn matches(&self, state: &DataSourceState, query: &QueryState, cursor: PageCursor) -> bool {
        self.loading == state.loading
            && self.error == state.error
            && same_snapshot(self.catalog.as_ref(), state.data.as_ref())
            && self.query == *query
            && self.cursor == cursor
    }
}

fn same_snapshot(a: Option<&Arc<Catalog>>, b: Option<&Arc<Catalog>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

#[derive(Default)]
pub struct CatalogQueryEngine {
    results_memo: Option<ResultsMemo>,
    view_memo: Option<ViewMemo>,
    next_generation: u64,
    filter_runs: u64,
    view_builds: u64,
}

impl std::fmt::Debug for CatalogQueryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogQueryEngine")
            .field("filter_runs", &self.filter_runs)
            .field("view_builds", &self.view_builds)
            .finish_non_exhaustive()
    }
}

impl CatalogQueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the view for the given inputs. Never fails.
    ///
    /// Without a usable catalog (loading, errored, or no data) the result set
    /// and page are empty and `page_limit` is 0; `loading` and `error` are
    /// passed through unchanged.
    pub fn derive(
        &mut self,
        state: &DataSourceState,
        query: &QueryState,
        cursor: PageCursor,
    ) -> Arc<CatalogView> {
        if let Some(memo) = &self.view_memo
            && memo.matches(state, query, cursor)
        {
            log::trace!("Engine: inputs unchanged, reusing view");
            return memo.view.clone();
        }

        let view = match state.usable_catalog() {
            Some(catalog) => {
                let (results, generation) = self.results_for(catalog, query);
                let page = window(&results[..], cursor);
                CatalogView {
                    loading: state.loading,
                    error: state.error.clone(),
                    displayable: page.items.to_vec(),
                    page_limit: page.page_limit,
                    results,
                    results_generation: generation,
                }
            }
            None => {
                log::debug!("Engine: no usable catalog ({:?})", state.phase());
                CatalogView {
                    loading: state.loading,
                    error: state.error.clone(),
                    results: Arc::from(Vec::<Arc<CatalogEntry>>::new()),
                    displayable: Vec::new(),
                    page_limit: 0,
                    results_generation: self.bump_generation(),
                }
            }
        };

        self.view_builds += 1;
        let view = Arc::new(view);
        self.view_memo = Some(ViewMemo {
            loading: state.loading,
            error: state.error.clone(),
            catalog: state.data.clone(),
            query: query.clone(),
            cursor,
            view: view.clone(),
        });
        view
    }

    /// Number of times the filter has actually run.
    pub fn filter_runs(&self) -> u64 {
        self.filter_runs
    }

    /// Number of views built (memo misses).
    pub fn view_builds(&self) -> u64 {
        self.view_builds
    }

    fn results_for(
        &mut self,
        catalog: &Arc<Catalog>,
        query: &QueryState,
    ) -> (Arc<[Arc<CatalogEntry>]>, u64) {
        if let Some(memo) = &self.results_memo
            && Arc::ptr_eq(&memo.catalog, catalog)
            && memo.text == query.text
            && memo.language == query.language
        {
            return (memo.results.clone(), memo.generation);
        }

        let results: Arc<[Arc<CatalogEntry>]> =
            filter(&catalog.packages, &query.text, query.language).into();
        self.filter_runs += 1;
        let generation = self.bump_generation();
        log::debug!(
            "Engine: filtered {} of {} packages (query {:?}, language {:?})",
            results.len(),
            catalog.len(),
            query.text,
            query.language.map(|l| l.as_str()),
        );

        self.results_memo = Some(ResultsMemo {
            catalog: catalog.clone(),
            text: query.text.clone(),
            language: query.language,
            results: results.clone(),
            generation,
        });
        (results, generation)
    }

    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
