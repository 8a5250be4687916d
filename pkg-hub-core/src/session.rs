//! Engine and corrector driven from a catalog feed.

use std::sync::Arc;

use crate::boundary::{BoundaryCorrector, PageCorrection};
use crate::engine::{CatalogQueryEngine, CatalogView};
use crate::query::{PageCursor, QueryState};
use crate::source::FeedReader;

/// Output of one [`SearchSession::refresh`].
#[derive(Debug, Clone)]
pub struct SessionFrame {
    pub view: Arc<CatalogView>,
    /// Page index the caller should navigate to, if any. The session does
    /// not apply it.
    pub correction: Option<PageCorrection>,
}

/// A search screen's worth of state: where snapshots come from, the memoized
/// engine, and the boundary corrector.
#[derive(Debug)]
pub struct SearchSession {
    reader: FeedReader,
    engine: CatalogQueryEngine,
    corrector: BoundaryCorrector,
}

impl SearchSession {
    pub fn new(reader: FeedReader) -> Self {
        Self {
            reader,
            engine: CatalogQueryEngine::new(),
            corrector: BoundaryCorrector::new(),
        }
    }

    /// Derive the current frame from the latest feed state.
    pub fn refresh(&mut self, query: &QueryState, cursor: PageCursor) -> SessionFrame {
        let state = self.reader.current();
        let view = self.engine.derive(&state, query, cursor);
        let correction = self.corrector.observe(&view, cursor.index);
        SessionFrame { view, correction }
    }

    pub fn engine(&self) -> &CatalogQueryEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_catalog;
    use crate::source::{CatalogFeed, DataSourceState, SourceError};

    #[test]
    fn refresh_follows_feed_and_reports_corrections() {
        let feed = CatalogFeed::default();
        let mut session = SearchSession::new(feed.subscribe());
        let query = QueryState::default();
        let cursor = PageCursor::new(9, 25);

        let frame = session.refresh(&query, cursor);
        assert!(frame.view.loading);
        assert!(frame.view.results.is_empty());
        assert_eq!(frame.correction, None);

        feed.publish(DataSourceState::ready(Arc::new(sample_catalog(60))));

        let frame = session.refresh(&query, cursor);
        assert_eq!(frame.view.results.len(), 60);
        assert_eq!(frame.view.page_limit, 2);
        assert_eq!(frame.correction, Some(PageCorrection { index: 2 }));

        // Same inputs again: no second correction.
        let frame = session.refresh(&query, cursor);
        assert_eq!(frame.correction, None);

        let frame = session.refresh(&query, cursor.with_index(2));
        assert_eq!(frame.correction, None);
        assert_eq!(frame.view.displayable.len(), 10);
    }

    #[test]
    fn error_state_is_surfaced_with_empty_results() {
        let feed = CatalogFeed::new(DataSourceState::errored(SourceError::new("offline")));
        let mut session = SearchSession::new(feed.subscribe());

        let frame = session.refresh(&QueryState::new("cdk"), PageCursor::new(-3, 25));
        assert_eq!(
            frame.view.error.as_ref().map(|e| e.message()),
            Some("offline")
        );
        assert!(frame.view.displayable.is_empty());
        assert_eq!(frame.correction, None);
        assert_eq!(session.engine().filter_runs(), 0);
    }
}
