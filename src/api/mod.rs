//! The API layer, containing request-scoped extraction for web handlers.

pub mod extract;

pub use extract::RequestCookies;
