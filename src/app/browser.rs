//! The memoized browser-style client factory.

use std::sync::{Arc, OnceLock};

use tracing::{debug, error};

use crate::domain::{AuthOptions, ClientConfig, ClientError};
use crate::infra::ClientHandle;

/// Lazily constructs and memoizes one client handle per factory instance.
///
/// The factory is the explicit owner of the singleton: the application's
/// bootstrap routine creates one `BrowserClientFactory`, and consumers reach
/// the shared handle through it. Two factories (e.g. in two tests) hold two
/// independent handles, so there is no hidden process-global to reset.
///
/// The handle is configured for interactive use: persistent session under
/// the configured storage key, automatic token refresh, detection of session
/// tokens embedded in the current URL, and the PKCE flow.
///
/// # Example
///
/// ```ignore
/// let config = ClientConfig::from_env()?;
/// let factory = BrowserClientFactory::new(config);
///
/// let a = factory.get_or_create()?;
/// let b = factory.get_or_create()?;
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct BrowserClientFactory {
    config: ClientConfig,
    handle: OnceLock<Arc<ClientHandle>>,
}

impl BrowserClientFactory {
    /// Creates a factory; no handle is constructed until first demand.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            handle: OnceLock::new(),
        }
    }

    /// Returns the memoized handle, constructing it on first call.
    ///
    /// Repeated calls return the identical `Arc` without re-running
    /// construction. A failed construction is not cached; the next call
    /// tries again.
    ///
    /// # Errors
    /// Propagates whatever error construction raises, unchanged. The
    /// failure is logged first: with detail in development, generically in
    /// production.
    pub fn get_or_create(&self) -> Result<Arc<ClientHandle>, ClientError> {
        if let Some(handle) = self.handle.get() {
            return Ok(Arc::clone(handle));
        }

        if !self.config.environment.is_production() {
            debug!(base_url = %self.config.base_url, "Creating new browser client");
        }

        let built = match self.build() {
            Ok(handle) => Arc::new(handle),
            Err(e) => {
                if self.config.environment.is_production() {
                    error!("Failed to create authentication client");
                } else {
                    error!(error = %e, "Failed to create account service client");
                }
                return Err(e);
            }
        };

        // If another caller raced us here, the first stored handle wins and
        // ours is dropped; either way every caller sees the same Arc.
        Ok(Arc::clone(self.handle.get_or_init(|| built)))
    }

    fn build(&self) -> Result<ClientHandle, ClientError> {
        ClientHandle::builder(self.config.base_url.clone(), self.config.api_key.clone())
            .auth_options(AuthOptions::browser_defaults(self.config.environment))
            .build()
    }
}
