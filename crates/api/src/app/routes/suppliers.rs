use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use faturas_suppliers::Supplier;

use crate::app::{dto, errors};
use crate::app::routes::today;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(register_supplier).get(list_suppliers))
        .route("/latest", get(latest_per_supplier))
}

pub async fn register_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterSupplierRequest>,
) -> axum::response::Response {
    let supplier = Supplier {
        name: body.name,
        tax_id: body.tax_id,
        duplicate_exempt: body.duplicate_exempt,
    };
    match services.register_supplier(supplier) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_suppliers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_suppliers() {
        Ok(items) => {
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

/// At-a-glance view: one row per supplier, latest competency only.
pub async fn latest_per_supplier(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.latest_per_supplier() {
        Ok(records) => {
            let items = dto::views(&records, today());
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
