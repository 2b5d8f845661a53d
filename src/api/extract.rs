//! Request-scoped cookie extraction for the API layer.

use std::collections::HashMap;
use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use crate::domain::{CookieAccessor, CookieError};

/// Cookies of the current request, parsed from its `Cookie` header(s).
///
/// This is where request-scoped acquisition lives: handlers take a
/// `RequestCookies` argument (axum extractor) and pass it to
/// [`ServerClientFactory::create`](crate::app::ServerClientFactory::create).
/// Extraction is infallible; a missing or malformed header yields an empty
/// map, and absent cookies surface as `None` on lookup.
#[derive(Debug, Clone, Default)]
pub struct RequestCookies {
    cookies: HashMap<String, String>,
}

impl RequestCookies {
    /// Parses all `Cookie` headers in the map.
    ///
    /// Pairs without `=` or with an empty name are skipped. Per RFC 6265
    /// user agents send one value per name; if duplicates arrive anyway,
    /// the first occurrence wins.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = HashMap::new();

        for header in headers.get_all(COOKIE) {
            let Ok(raw) = header.to_str() else {
                continue;
            };
            for pair in raw.split(';') {
                let Some((name, value)) = pair.split_once('=') else {
                    continue;
                };
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                cookies
                    .entry(name.to_string())
                    .or_insert_with(|| value.trim().to_string());
            }
        }

        Self { cookies }
    }

    /// Number of distinct cookies in the request scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Synchronous lookup for callers already holding the parsed map.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}

#[async_trait]
impl CookieAccessor for RequestCookies {
    async fn get(&self, name: &str) -> Result<Option<String>, CookieError> {
        Ok(self.cookies.get(name).cloned())
    }
}

impl<S> FromRequestParts<S> for RequestCookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
