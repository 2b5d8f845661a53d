//! Integration tests for the client factories.

use std::collections::HashMap;
use std::sync::Arc;

use account_client::app::{
    BootstrapState, BrowserClientFactory, ReadOnlyCookies, ServerClientFactory,
};
use account_client::domain::{
    ClientConfig, ClientError, ConfigError, CookieError, CookieOptions, ENV_ANON_KEY, ENV_APP_ENV,
    ENV_SERVICE_URL, Environment, SessionCookies,
};
use account_client::test_utils::MockCookieAccessor;

fn dev_config() -> ClientConfig {
    ClientConfig::new(
        "https://accounts.example.com",
        "public-anon-key",
        Environment::Development,
    )
}

#[test]
fn test_browser_factory_is_a_singleton_per_context() {
    let factory = BrowserClientFactory::new(dev_config());

    let first = factory.get_or_create().unwrap();
    let second = factory.get_or_create().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_distinct_contexts_get_distinct_handles() {
    // Two bootstrap states model two independent execution contexts.
    let a = BootstrapState::new(dev_config());
    let b = BootstrapState::new(dev_config());

    let handle_a = a.browser.get_or_create().unwrap();
    let handle_b = b.browser.get_or_create().unwrap();

    assert!(!Arc::ptr_eq(&handle_a, &handle_b));
}

#[test]
fn test_missing_configuration_fails_before_any_handle_exists() {
    let env: HashMap<String, String> =
        [(ENV_APP_ENV.to_string(), "production".to_string())].into();

    let err = ClientConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnvVar(name) if name == ENV_SERVICE_URL));

    let env: HashMap<String, String> = [(
        ENV_SERVICE_URL.to_string(),
        "https://accounts.example.com".to_string(),
    )]
    .into();

    let err = ClientConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnvVar(name) if name == ENV_ANON_KEY));
}

#[tokio::test]
async fn test_server_client_reads_cookies_from_request_scope() {
    let factory = ServerClientFactory::new(dev_config());

    let accessor = Arc::new(MockCookieAccessor::new());
    accessor.insert("personal-account-auth-key", "session-token");
    accessor.insert("theme", "dark");

    let client = factory.create(accessor.clone()).unwrap();

    assert_eq!(
        client.session_cookie().await.unwrap(),
        Some("session-token".to_string())
    );

    let cookies = client.cookies().unwrap();
    assert_eq!(
        cookies.get("theme").await.unwrap(),
        Some("dark".to_string())
    );
    assert_eq!(cookies.get("unset").await.unwrap(), None);

    // Every lookup went through the injected accessor.
    assert!(accessor.call_count() >= 3);
}

#[tokio::test]
async fn test_server_client_writes_are_noops() {
    let accessor = Arc::new(MockCookieAccessor::new());
    accessor.insert("personal-account-auth-key", "session-token");

    let client = ServerClientFactory::new(dev_config())
        .create(accessor.clone())
        .unwrap();

    let cookies = client.cookies().unwrap();
    let opts = CookieOptions::default();

    cookies
        .set("personal-account-auth-key", "tampered", &opts)
        .await
        .unwrap();
    cookies
        .remove("personal-account-auth-key", &opts)
        .await
        .unwrap();

    // The simulated request scope is unchanged.
    assert_eq!(
        accessor.all().get("personal-account-auth-key"),
        Some(&"session-token".to_string())
    );
    assert_eq!(
        client.session_cookie().await.unwrap(),
        Some("session-token".to_string())
    );
}

#[tokio::test]
async fn test_read_only_wrapper_over_any_accessor() {
    let accessor = Arc::new(MockCookieAccessor::new());
    let wrapped = ReadOnlyCookies::new(accessor.clone());

    wrapped
        .set("name", "value", &CookieOptions::default())
        .await
        .unwrap();

    assert!(accessor.all().is_empty());
    assert_eq!(wrapped.get("name").await.unwrap(), None);
}

#[test]
fn test_construction_failure_reraises_in_both_environments() {
    for environment in [Environment::Development, Environment::Production] {
        let factory = BrowserClientFactory::new(ClientConfig::new(
            "://missing-scheme",
            "public-anon-key",
            environment,
        ));

        let err = factory.get_or_create().unwrap_err();
        assert!(
            matches!(err, ClientError::InvalidBaseUrl { .. }),
            "expected InvalidBaseUrl in {environment:?}"
        );
    }
}

#[tokio::test]
async fn test_cookie_accessor_failure_propagates_unchanged() {
    let client = ServerClientFactory::new(dev_config())
        .create(Arc::new(MockCookieAccessor::failing("store offline")))
        .unwrap();

    let err = client.session_cookie().await.unwrap_err();
    assert!(
        matches!(err, ClientError::Cookie(CookieError::Read(msg)) if msg == "store offline")
    );
}
