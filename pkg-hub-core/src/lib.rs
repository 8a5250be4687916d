//! Catalog query engine.
//!
//! Turns an immutable catalog snapshot, a text/language query and a page
//! cursor into the single page of results to show, plus the bookkeeping a
//! caller needs to keep its page index in range. Everything here is
//! synchronous and never fails: upstream errors are carried through as
//! values and out-of-range pages are corrected, not reported.

pub mod boundary;
pub mod engine;
pub mod filter;
pub mod query;
pub mod session;
pub mod source;
pub mod window;

pub use boundary::{BoundaryCorrector, PageCorrection};
pub use engine::{CatalogQueryEngine, CatalogView};
pub use filter::{filter, matches};
pub use query::{DEFAULT_PAGE_SIZE, PageCursor, QueryState};
pub use session::{SearchSession, SessionFrame};
pub use source::{CatalogFeed, DataSourceState, FeedReader, SourceError, SourcePhase};
pub use window::{DisplayPage, page_limit, window};

// Re-export the data model so callers need a single dependency.
pub use pkg_hub_catalog::{Catalog, CatalogEntry, Language};

#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod fixtures;
