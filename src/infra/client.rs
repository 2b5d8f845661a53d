//! The configured service client handle.
//!
//! A [`ClientHandle`] is an opaque connection object bound to the account
//! service base URL and the public API key. It owns a pre-configured
//! `reqwest::Client` that already carries the `apikey` and `Authorization`
//! headers; the actual authentication and query protocols live on the
//! service side, not here.

use std::sync::Arc;

use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::domain::{AuthOptions, ClientError, SessionCookies};

/// Header carrying the public API key alongside the bearer token.
const APIKEY_HEADER: &str = "apikey";

/// Default user agent for outbound requests.
const USER_AGENT: &str = concat!("account-client/", env!("CARGO_PKG_VERSION"));

/// Configured connection object for the account service.
///
/// Construction is the only fallible step; once built, a handle is immutable
/// and cheap to share behind an `Arc`.
pub struct ClientHandle {
    base_url: Url,
    api_key: SecretString,
    http: reqwest::Client,
    auth: AuthOptions,
    cookies: Option<Arc<dyn SessionCookies>>,
}

impl ClientHandle {
    /// Starts building a handle from the two required configuration values.
    #[must_use]
    pub fn builder(base_url: impl Into<String>, api_key: SecretString) -> ClientHandleBuilder {
        ClientHandleBuilder {
            base_url: base_url.into(),
            api_key,
            auth: None,
            cookies: None,
        }
    }

    /// The parsed service base URL (always ends with a trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Session-handling options fixed at construction.
    #[must_use]
    pub fn auth_options(&self) -> &AuthOptions {
        &self.auth
    }

    /// The underlying HTTP client, already carrying auth headers.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The public API key this handle was configured with.
    ///
    /// Callers needing the raw value (e.g. to place it in a request body)
    /// must go through [`ExposeSecret`].
    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// The cookie capability this handle was wired with, if any.
    #[must_use]
    pub fn cookies(&self) -> Option<&Arc<dyn SessionCookies>> {
        self.cookies.as_ref()
    }

    /// Resolves a service endpoint relative to the base URL.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidEndpoint`] if the path cannot be joined.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidEndpoint {
                path: path.to_string(),
                message: e.to_string(),
            })
    }

    /// Builds a request to a service endpoint with auth headers attached.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidEndpoint`] if the path cannot be joined.
    pub fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let url = self.endpoint(path)?;
        Ok(self.http.request(method, url))
    }

    /// Reads the session cookie this handle's session is stored under.
    ///
    /// Returns `None` when no cookie capability is wired (browser-style
    /// handles persist their session locally instead) or when the cookie is
    /// absent from the current request scope.
    ///
    /// # Errors
    /// Propagates a failure from the underlying cookie accessor.
    pub async fn session_cookie(&self) -> Result<Option<String>, ClientError> {
        match &self.cookies {
            Some(cookies) => Ok(cookies.get(&self.auth.storage_key).await?),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientHandle")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("auth", &self.auth)
            .field("has_cookies", &self.cookies.is_some())
            .finish()
    }
}

/// Builder for [`ClientHandle`].
pub struct ClientHandleBuilder {
    base_url: String,
    api_key: SecretString,
    auth: Option<AuthOptions>,
    cookies: Option<Arc<dyn SessionCookies>>,
}

impl ClientHandleBuilder {
    /// Overrides the session-handling options (defaults to
    /// [`AuthOptions::server_defaults`] for a production environment).
    #[must_use]
    pub fn auth_options(mut self, auth: AuthOptions) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Wires a cookie capability into the handle.
    #[must_use]
    pub fn cookies(mut self, cookies: Arc<dyn SessionCookies>) -> Self {
        self.cookies = Some(cookies);
        self
    }

    /// Constructs the handle.
    ///
    /// Not defensive: the base URL and API key are trusted to be present and
    /// well-formed, and whatever error the underlying construction raises is
    /// propagated unchanged.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidBaseUrl`] for an unparseable base URL
    /// and [`ClientError::HttpClient`] if the HTTP client cannot be built.
    pub fn build(self) -> Result<ClientHandle, ClientError> {
        let mut base_url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.clone(),
                message: e.to_string(),
            })?;

        // Url::join drops the last path segment without this.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(self.api_key.expose_secret())
            .map_err(|e| ClientError::HttpClient(format!("invalid API key header: {e}")))?;
        headers.insert(APIKEY_HEADER, key_value);

        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))
                .map_err(|e| ClientError::HttpClient(format!("invalid API key header: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        let auth = self
            .auth
            .unwrap_or_else(|| AuthOptions::server_defaults(crate::domain::Environment::Production));

        Ok(ClientHandle {
            base_url,
            api_key: self.api_key,
            http,
            auth,
            cookies: self.cookies,
        })
    }
}
