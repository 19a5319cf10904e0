use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

pub mod filters;
pub mod risk;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cascade-filter", post(filters::cascade_filter))
        .route("/api/get-risk-by-type", post(risk::get_risk_by_type))
}

/// Request failure taxonomy. Validation failures are the caller's fault;
/// data-access failures mean the fact store query did not complete. An
/// empty result set is neither - it comes back as a normal success payload.
#[derive(Debug)]
pub enum ServiceError {
    Validation(String),
    DataAccess(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ServiceError::Validation(e) => (StatusCode::BAD_REQUEST, e),
            ServiceError::DataAccess(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        (status, Json(json!({ "status": "error", "message": msg }))).into_response()
    }
}

impl From<shared::TimeTokenError> for ServiceError {
    fn from(err: shared::TimeTokenError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
