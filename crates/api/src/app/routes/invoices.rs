use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use faturas_core::InvoiceId;
use faturas_ledger::UpsertOutcome;

use crate::app::{dto, errors};
use crate::app::routes::today;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(submit_invoice).get(list_invoices))
        .route("/:id", axum::routing::put(edit_invoice).delete(delete_invoice))
}

fn outcome_label(outcome: &UpsertOutcome) -> &'static str {
    match outcome {
        UpsertOutcome::Inserted(_) => "inserted",
        UpsertOutcome::Replaced(_) => "replaced",
        UpsertOutcome::Overwrote(_) => "overwrote",
    }
}

/// Submit-form command: save a new record under the period identity policy.
pub async fn submit_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::InvoiceRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    let outcome = match services.submit_invoice(draft) {
        Ok(o) => o,
        Err(e) => return errors::service_error_to_response(e),
    };

    updated_state_response(StatusCode::CREATED, &services, outcome).await
}

/// Click-edit command: replace the addressed record in place.
pub async fn edit_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::InvoiceRequest>,
) -> axum::response::Response {
    let id: InvoiceId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(&e),
    };
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    let outcome = match services.edit_invoice(id, draft) {
        Ok(o) => o,
        Err(e) => return errors::service_error_to_response(e),
    };

    updated_state_response(StatusCode::OK, &services, outcome).await
}

/// Click-delete command: remove by key; unknown keys are a no-op.
pub async fn delete_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: InvoiceId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    match services.delete_invoice(id) {
        Ok(deleted) => (
            StatusCode::OK,
            Json(serde_json::json!({ "deleted": deleted })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::FilterParams>,
) -> axum::response::Response {
    let filter = match params.into_filter() {
        Ok(f) => f,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    match services.list_invoices(&filter, today()) {
        Ok(records) => {
            let items = dto::views(&records, today());
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Command responses carry the updated record set, so the caller re-renders
/// without a second round trip.
async fn updated_state_response(
    status: StatusCode,
    services: &AppServices,
    outcome: UpsertOutcome,
) -> axum::response::Response {
    let items = match services.list_invoices(&Default::default(), today()) {
        Ok(records) => dto::views(&records, today()),
        Err(e) => return errors::service_error_to_response(e),
    };

    (
        status,
        Json(serde_json::json!({
            "id": outcome.id().to_string(),
            "action": outcome_label(&outcome),
            "items": items,
        })),
    )
        .into_response()
}
