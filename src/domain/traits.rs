//! Domain traits defining the cookie capabilities clients are wired with.

use async_trait::async_trait;

use super::error::CookieError;
use super::types::CookieOptions;

/// Read-only, request-scoped cookie lookup.
///
/// This is the capability a request handler injects into the server client
/// factory. Reads are async so implementations backed by I/O (platform
/// stores, session services) fit the same contract as in-memory maps.
#[async_trait]
pub trait CookieAccessor: Send + Sync {
    /// Returns the value of the named cookie, or `None` if it is not
    /// present in the current request scope.
    async fn get(&self, name: &str) -> Result<Option<String>, CookieError>;
}

/// Full cookie surface consumed by a constructed client handle.
///
/// Whether writes take effect is an implementation property:
/// [`ReadOnlyCookies`](crate::app::ReadOnlyCookies) satisfies this trait
/// with inert `set`/`remove`, making the read-only configuration explicit
/// in the type rather than a silent omission.
#[async_trait]
pub trait SessionCookies: Send + Sync {
    /// Returns the value of the named cookie, or `None` when unset.
    async fn get(&self, name: &str) -> Result<Option<String>, CookieError>;

    /// Stores a cookie. Implementations may accept and discard the write.
    async fn set(
        &self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), CookieError>;

    /// Removes a cookie. Idempotent; removing an absent cookie is not an
    /// error. Implementations may accept and discard the removal.
    async fn remove(&self, name: &str, options: &CookieOptions) -> Result<(), CookieError>;
}
