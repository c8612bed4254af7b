//! Load lifecycle for the initial collection.

use gallery_model::Item;
use gallery_store::CollectionStore;
use tracing::{info, info_span, warn};

use crate::{ItemSource, Result};

/// Where the one-shot initial load stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded {
        count: usize,
    },
    /// Terminal for this attempt. No automatic retry.
    Failed {
        message: String,
    },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Tracks the load lifecycle and feeds the store.
#[derive(Debug, Default)]
pub struct Loader {
    state: LoadState,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Mark a fetch as in flight. Pair with [`Loader::finish`] when the
    /// fetch is driven from outside, e.g. on another thread.
    pub fn begin(&mut self) -> &LoadState {
        self.state = LoadState::Loading;
        &self.state
    }

    /// Settle the pending fetch. Items go to the store as a single `Set`;
    /// on failure the store keeps whatever it held before.
    pub fn finish(
        &mut self,
        result: Result<Vec<Item>>,
        store: &mut CollectionStore,
    ) -> &LoadState {
        self.state = match result {
            Ok(items) => {
                let count = items.len();
                store.set_items(items);
                info!(count, "items loaded");
                LoadState::Loaded { count }
            }
            Err(error) => {
                warn!(%error, retryable = error.is_retryable(), "load failed");
                LoadState::Failed {
                    message: error.to_string(),
                }
            }
        };
        &self.state
    }

    /// Fetch from `source` and settle in one call.
    pub fn load(&mut self, source: &dyn ItemSource, store: &mut CollectionStore) -> &LoadState {
        let location = source.describe();
        let span = info_span!("load", source = %location);
        let _guard = span.enter();

        self.begin();
        let result = source.fetch();
        self.finish(result, store)
    }
}

/// One-shot load with a fresh [`Loader`].
pub fn load_into(source: &dyn ItemSource, store: &mut CollectionStore) -> LoadState {
    Loader::new().load(source, store).clone()
}
