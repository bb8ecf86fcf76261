use axum::routing::get;
use axum::Router;

pub mod invoices;
pub mod session;
pub mod summary;
pub mod suppliers;
pub mod system;

/// Routes behind the session gate.
pub fn api_router() -> Router {
    Router::new()
        .nest("/invoices", invoices::router())
        .nest("/suppliers", suppliers::router())
        .route("/summary", get(summary::dashboard))
}

/// Reference date for classification: the desk's local calendar day.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
