use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use dotenvy::dotenv;
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use account_client::api::RequestCookies;
use account_client::app::BootstrapState;
use account_client::domain::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env()?;
    let state = Arc::new(BootstrapState::new(config));

    // Construct the shared client eagerly so a bad configuration fails the
    // bootstrap instead of the first request.
    let client = state.browser.get_or_create()?;
    info!(
        base_url = %client.base_url(),
        flow = ?client.auth_options().flow_type,
        "Browser client ready"
    );

    let router = Router::new()
        .route("/session", get(session_status))
        .with_state(state);

    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server starting on http://{addr}");

    axum::serve(listener, router).await?;

    Ok(())
}

/// Reports whether the current request carries a session cookie.
///
/// Demonstrates the per-request flow: extract the request's cookies, create
/// an independent server client wired to them, and read the session through
/// the handle.
async fn session_status(
    State(state): State<Arc<BootstrapState>>,
    cookies: RequestCookies,
) -> Response {
    let client = match state.server.create(Arc::new(cookies)) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create server client");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "client construction failed" })),
            )
                .into_response();
        }
    };

    match client.session_cookie().await {
        Ok(token) => Json(json!({ "authenticated": token.is_some() })).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to read session cookie");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "cookie read failed" })),
            )
                .into_response()
        }
    }
}
