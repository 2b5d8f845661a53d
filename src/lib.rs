//! Account service client bootstrap.
//!
//! Factories for the account service client: a memoized browser-style
//! client configured for persistent, auto-refreshing sessions, and fresh
//! per-request server clients wired to a request-scoped cookie accessor.
//! The authentication and query protocols themselves are the remote
//! service's business; this crate only produces correctly configured
//! handles.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  API Layer                   │
//! │     Request-scoped cookie extraction         │
//! ├─────────────────────────────────────────────┤
//! │              Application Layer               │
//! │   Client factories, shared bootstrap state   │
//! ├─────────────────────────────────────────────┤
//! │                Domain Layer                  │
//! │  Config types, cookie traits, errors         │
//! ├─────────────────────────────────────────────┤
//! │            Infrastructure Layer              │
//! │    Configured HTTP client handle (reqwest)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Explicit singleton ownership**: the memoized client lives inside a
//!   factory the bootstrap routine owns, not in a process-global
//! - **Dependency injection**: the server factory receives the request's
//!   cookie capability as an argument
//! - **Read-only cookies by type**: inert `set`/`remove` are a property of
//!   [`app::ReadOnlyCookies`], visible at the seam instead of silently
//!   swallowed
//! - **Testability**: mock cookie accessors with failure modes and call
//!   counters
//! - **Security**: the API key is held behind the `secrecy` crate
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use account_client::app::BootstrapState;
//! use account_client::domain::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let state = Arc::new(BootstrapState::new(config));
//!
//!     // Shared browser-style client, constructed once.
//!     let client = state.browser.get_or_create()?;
//!
//!     // Fresh server client per request.
//!     let cookies = Arc::new(request_cookies);
//!     let request_client = state.server.create(cookies)?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infra;

// Mock implementations, also usable by downstream integration tests.
pub mod test_utils;
