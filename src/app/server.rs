//! The per-request server-side client factory.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;

use crate::domain::{
    AuthOptions, ClientConfig, ClientError, CookieAccessor, CookieError, CookieOptions,
    SessionCookies,
};
use crate::infra::ClientHandle;

/// Adapts a read-only [`CookieAccessor`] to the full [`SessionCookies`]
/// surface a client handle consumes.
///
/// `get` delegates to the wrapped accessor; `set` and `remove` succeed
/// without effect. Server-side handles in this configuration only read
/// inbound session cookies; outbound cookie mutation belongs to whatever
/// layer owns the response.
pub struct ReadOnlyCookies {
    inner: Arc<dyn CookieAccessor>,
}

impl ReadOnlyCookies {
    #[must_use]
    pub fn new(inner: Arc<dyn CookieAccessor>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SessionCookies for ReadOnlyCookies {
    async fn get(&self, name: &str) -> Result<Option<String>, CookieError> {
        self.inner.get(name).await
    }

    async fn set(
        &self,
        name: &str,
        _value: &str,
        _options: &CookieOptions,
    ) -> Result<(), CookieError> {
        trace!(cookie = name, "Discarding cookie write on read-only accessor");
        Ok(())
    }

    async fn remove(&self, name: &str, _options: &CookieOptions) -> Result<(), CookieError> {
        trace!(cookie = name, "Discarding cookie removal on read-only accessor");
        Ok(())
    }
}

/// Constructs a fresh client handle per invocation, wired to a
/// request-scoped cookie accessor.
///
/// Handles are never memoized: each request gets an independent instance so
/// no session state leaks between requests. The cookie capability is an
/// explicit argument rather than a late-bound lookup, so contexts without a
/// live request simply cannot call this.
pub struct ServerClientFactory {
    config: ClientConfig,
}

impl ServerClientFactory {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Builds an independent handle wired to the given cookie accessor.
    ///
    /// # Errors
    /// Propagates construction failures unchanged; there is no retry,
    /// fallback, or partial result.
    pub fn create(&self, cookies: Arc<dyn CookieAccessor>) -> Result<ClientHandle, ClientError> {
        ClientHandle::builder(self.config.base_url.clone(), self.config.api_key.clone())
            .auth_options(AuthOptions::server_defaults(self.config.environment))
            .cookies(Arc::new(ReadOnlyCookies::new(cookies)))
            .build()
    }
}
