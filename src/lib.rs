pub mod config;
pub mod error;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::TaskdConfig;
use store::TaskStore;

/// Shared application state passed to every request handler.
///
/// The store handle is constructed once at startup and injected here —
/// handlers never reach for a global pool.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<TaskdConfig>,
    pub store: TaskStore,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: Arc<TaskdConfig>, store: TaskStore) -> Self {
        Self {
            config,
            store,
            started_at: std::time::Instant::now(),
        }
    }
}
