//! Mock implementations for testing.
//!
//! These mocks provide in-memory implementations of domain traits that can
//! be configured to simulate success, failure, and edge cases.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{CookieAccessor, CookieError};

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// If true, operations will fail.
    pub should_fail: bool,
    /// Custom error message for failures.
    pub error_message: Option<String>,
}

impl MockConfig {
    /// Creates a config that always succeeds.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that always fails.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
        }
    }
}

/// Mock cookie accessor simulating a request's cookie scope.
///
/// Backed by an in-memory map; supports configurable failure modes and
/// counts lookups so tests can assert delegation.
///
/// # Example
///
/// ```
/// use account_client::test_utils::MockCookieAccessor;
///
/// let mock = MockCookieAccessor::new();
/// mock.insert("session", "token-123");
///
/// let failing = MockCookieAccessor::failing("store offline");
/// ```
pub struct MockCookieAccessor {
    cookies: Mutex<HashMap<String, String>>,
    config: MockConfig,
    call_count: AtomicU64,
}

impl MockCookieAccessor {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            cookies: Mutex::new(HashMap::new()),
            config,
            call_count: AtomicU64::new(0),
        }
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Puts a cookie into the simulated request scope.
    pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.lock().unwrap().insert(name.into(), value.into());
    }

    /// Removes all cookies from the simulated request scope.
    pub fn clear(&self) {
        self.cookies.lock().unwrap().clear();
    }

    /// Snapshot of the simulated request scope.
    pub fn all(&self) -> HashMap<String, String> {
        self.cookies.lock().unwrap().clone()
    }

    /// Gets the number of lookups performed through the accessor.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    fn check_should_fail(&self) -> Result<(), CookieError> {
        if self.config.should_fail {
            let msg = self
                .config
                .error_message
                .clone()
                .unwrap_or_else(|| "Mock cookie error".to_string());
            return Err(CookieError::Read(msg));
        }
        Ok(())
    }
}

impl Default for MockCookieAccessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CookieAccessor for MockCookieAccessor {
    async fn get(&self, name: &str) -> Result<Option<String>, CookieError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.check_should_fail()?;

        let cookies = self.cookies.lock().unwrap();
        Ok(cookies.get(name).cloned())
    }
}
