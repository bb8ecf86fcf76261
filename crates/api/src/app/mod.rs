//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: ledger + store + auth gate behind one shared handle
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use faturas_auth::CredentialTable;

use crate::config::Config;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: &Config) -> Router {
    let credentials = match CredentialTable::from_spec(&config.users_spec) {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!(error = %e, "bad FATURAS_USERS spec; running without a credential gate");
            CredentialTable::new()
        }
    };

    let services = Arc::new(services::AppServices::new(
        config.build_store(),
        config.duplicate_policy,
        credentials,
    ));

    let auth_state = middleware::AuthState {
        sessions: services.sessions(),
        open_gate: services.auth_disabled(),
    };

    // Session gate covers /api only; login and health stay reachable.
    let api = routes::api_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::require_session,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/login", post(routes::session::login))
        .nest("/api", api)
        .layer(Extension(services))
}
