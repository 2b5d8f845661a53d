//! Core configuration types for client construction.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Environment variable holding the account service base URL.
pub const ENV_SERVICE_URL: &str = "ACCOUNT_SERVICE_URL";

/// Environment variable holding the public (anon) API key.
///
/// The anon key is not a secret; access control is enforced server-side.
/// It is still wrapped in [`SecretString`] so it never shows up in `Debug`
/// output or log lines by accident.
pub const ENV_ANON_KEY: &str = "ACCOUNT_SERVICE_ANON_KEY";

/// Environment variable selecting the runtime environment.
pub const ENV_APP_ENV: &str = "APP_ENV";

/// Storage key under which the browser-style client persists its session.
pub const DEFAULT_STORAGE_KEY: &str = "personal-account-auth-key";

/// Runtime environment discriminator.
///
/// Controls diagnostic verbosity only; it has no effect on which endpoints
/// are contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Parses the `APP_ENV` convention: `production` (case-insensitive)
    /// selects production, anything else is development.
    #[must_use]
    pub fn from_app_env(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    #[must_use]
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Authentication flow variant requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthFlow {
    /// Authorization-code exchange with proof of possession.
    #[default]
    Pkce,
    /// Legacy token-in-fragment flow.
    Implicit,
}

/// Session-handling options fixed at client construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOptions {
    /// Persist the session under `storage_key` across reloads.
    pub persist_session: bool,
    /// Name under which the session is stored client-side.
    pub storage_key: String,
    /// Refresh tokens automatically before expiry.
    pub auto_refresh_token: bool,
    /// Detect session tokens embedded in the current URL after a redirect.
    pub detect_session_in_url: bool,
    /// Selected authentication flow.
    pub flow_type: AuthFlow,
    /// Verbose internal logging inside the auth layer.
    pub debug: bool,
}

impl AuthOptions {
    /// The browser-style defaults: persistent, auto-refreshing session with
    /// PKCE, debug logging only outside production.
    #[must_use]
    pub fn browser_defaults(environment: Environment) -> Self {
        Self {
            persist_session: true,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            auto_refresh_token: true,
            detect_session_in_url: true,
            flow_type: AuthFlow::Pkce,
            debug: !environment.is_production(),
        }
    }

    /// Server-side defaults: nothing is persisted locally, the session
    /// travels in request cookies instead.
    #[must_use]
    pub fn server_defaults(environment: Environment) -> Self {
        Self {
            persist_session: false,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            auto_refresh_token: false,
            detect_session_in_url: false,
            flow_type: AuthFlow::Pkce,
            debug: !environment.is_production(),
        }
    }
}

/// Attributes accompanying a cookie write.
///
/// Writes are inert in this crate's read-only configuration; the type exists
/// so the [`SessionCookies`](super::traits::SessionCookies) surface matches
/// what a writable deployment would need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieOptions {
    pub path: Option<String>,
    pub domain: Option<String>,
    pub max_age_secs: Option<u64>,
    pub secure: bool,
    pub http_only: bool,
}

/// The two required configuration values plus the environment discriminator.
///
/// Values are read, not validated: a malformed base URL surfaces as an error
/// from client construction, not from here.
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: SecretString,
    pub environment: Environment,
}

impl ClientConfig {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: SecretString::from(api_key.into()),
            environment,
        }
    }

    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingEnvVar`] if either required variable
    /// is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary lookup function.
    ///
    /// Lets tests supply configuration without mutating process-wide
    /// environment state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_SERVICE_URL)
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_SERVICE_URL.to_string()))?;
        let api_key = lookup(ENV_ANON_KEY)
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_ANON_KEY.to_string()))?;
        let environment = Environment::from_app_env(lookup(ENV_APP_ENV).as_deref());

        Ok(Self {
            base_url,
            api_key: SecretString::from(api_key),
            environment,
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("environment", &self.environment)
            .finish()
    }
}
