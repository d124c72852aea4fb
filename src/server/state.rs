/**
 * Application State
 *
 * `AppState` is the central state container cloned into every handler.
 * Both the store and the completion client sit behind trait objects,
 * injected once at assembly time. Tests build the same state around
 * `MemoryStore` and a stub client.
 */
use std::sync::Arc;

use crate::generation::client::CompletionClient;
use crate::server::config::Config;
use crate::store::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Storage backend for users, profiles, and emails
    pub store: Arc<dyn Store>,
    /// Outbound completion API client
    pub generator: Arc<dyn CompletionClient>,
    /// Runtime configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        generator: Arc<dyn CompletionClient>,
        config: Config,
    ) -> Self {
        Self {
            store,
            generator,
            config: Arc::new(config),
        }
    }
}
