use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app::{dto, errors};
use crate::app::routes::today;
use crate::app::services::AppServices;

/// Dashboard aggregates: totals, counts and per-bucket shares for the
/// (optionally filtered) record set.
pub async fn dashboard(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::FilterParams>,
) -> axum::response::Response {
    let filter = match params.into_filter() {
        Ok(f) => f,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    match services.summary(&filter, today()) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
