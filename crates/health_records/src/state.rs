//! Application state shared by all request handlers.

use std::sync::Arc;

use health_records_core::dispatch::Dispatcher;
use health_records_core::storage::RecordStore;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. The dispatcher holds the only handle to
/// the record store; nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates application state around an already constructed store.
    pub fn new(store: Arc<dyn RecordStore>, config: Config) -> Self {
        Self {
            dispatcher: Dispatcher::new(store),
            config: Arc::new(config),
        }
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(crate::storage::InMemoryRepository::new()),
            Config::from_env(),
        )
    }
}
