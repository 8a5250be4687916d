//! Catalog data source state and the snapshot feed that delivers it.

use std::fmt::Display;
use std::sync::Arc;

use pkg_hub_catalog::{Catalog, LoadError};
use thiserror::Error;
use tokio::sync::watch;

/// An upstream error carried through the engine for presentation.
///
/// This is a value, not a failure of the engine: it is cloned into every
/// derived view until the data source reports something else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Capture the rendered message of any upstream error type.
    pub fn from_display(error: impl Display) -> Self {
        Self::new(error.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<LoadError> for SourceError {
    fn from(e: LoadError) -> Self {
        Self::from_display(e)
    }
}

/// Which of the mutually exclusive source states holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePhase {
    Loading,
    Errored,
    Ready,
    /// Not loading, no error, but no catalog either.
    Empty,
}

/// What the catalog provider currently reports.
///
/// The default value is "ready with no data".
#[derive(Debug, Clone, Default)]
pub struct DataSourceState {
    pub loading: bool,
    pub error: Option<SourceError>,
    pub data: Option<Arc<Catalog>>,
}

impl DataSourceState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn errored(error: impl Into<SourceError>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn ready(catalog: Arc<Catalog>) -> Self {
        Self {
            data: Some(catalog),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Loading wins over an error, which wins over data.
    pub fn phase(&self) -> SourcePhase {
        if self.loading {
            SourcePhase::Loading
        } else if self.error.is_some() {
            SourcePhase::Errored
        } else if self.data.is_some() {
            SourcePhase::Ready
        } else {
            SourcePhase::Empty
        }
    }

    /// The catalog, only when the state is "ready with data".
    pub fn usable_catalog(&self) -> Option<&Arc<Catalog>> {
        match self.phase() {
            SourcePhase::Ready => self.data.as_ref(),
            _ => None,
        }
    }
}

/// Push source of catalog snapshots.
///
/// Each publish atomically replaces the previous state; readers only ever
/// observe the latest one. Works without an async runtime.
#[derive(Debug)]
pub struct CatalogFeed {
    tx: watch::Sender<DataSourceState>,
}

impl CatalogFeed {
    pub fn new(initial: DataSourceState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the current state. Succeeds even with no readers attached.
    pub fn publish(&self, state: DataSourceState) {
        log::debug!("Catalog feed: publishing {:?} state", state.phase());
        self.tx.send_replace(state);
    }

    /// Publish the outcome of a catalog load.
    pub fn publish_result<E: Into<SourceError>>(&self, result: Result<Catalog, E>) {
        match result {
            Ok(catalog) => self.publish(DataSourceState::ready(Arc::new(catalog))),
            Err(e) => self.publish(DataSourceState::errored(e)),
        }
    }

    pub fn subscribe(&self) -> FeedReader {
        FeedReader {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for CatalogFeed {
    fn default() -> Self {
        Self::new(DataSourceState::loading())
    }
}

/// Read side of a [`CatalogFeed`].
#[derive(Debug, Clone)]
pub struct FeedReader {
    rx: watch::Receiver<DataSourceState>,
}

impl FeedReader {
    /// Snapshot the latest state and mark it seen.
    pub fn current(&mut self) -> DataSourceState {
        self.rx.borrow_and_update().clone()
    }
}
