//! Shared bootstrap state.
//!
//! This module provides the state the application's bootstrap routine
//! creates once and hands to request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::domain::ClientConfig;

use super::browser::BrowserClientFactory;
use super::server::ServerClientFactory;

/// Both client factories, created once at bootstrap and shared by reference.
///
/// Owning the factories here keeps initialization order explicit: there is
/// no module-level mutable singleton, so tests can create as many isolated
/// `BootstrapState` values as they need.
///
/// # Example
///
/// ```ignore
/// let config = ClientConfig::from_env()?;
/// let state = Arc::new(BootstrapState::new(config));
///
/// let router = Router::new()
///     .route("/session", get(session_handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct BootstrapState {
    /// Memoized browser-style client factory.
    pub browser: Arc<BrowserClientFactory>,

    /// Per-request server client factory.
    pub server: Arc<ServerClientFactory>,
}

impl BootstrapState {
    /// Creates both factories from one configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            browser: Arc::new(BrowserClientFactory::new(config.clone())),
            server: Arc::new(ServerClientFactory::new(config)),
        }
    }
}
