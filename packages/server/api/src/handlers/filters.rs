use crate::handlers::ServiceError;
use crate::services;
use crate::state::AppState;
use axum::{extract::State, Json};
use database::repositories::FactRepository;
use shared::{ApiResponse, CascadeData, FilterSelection};

/// `POST /api/cascade-filter` - narrows every dropdown's option list to the
/// values still reachable under the caller's partial selection.
pub async fn cascade_filter(
    State(state): State<AppState>,
    Json(selection): Json<FilterSelection>,
) -> Result<Json<ApiResponse<CascadeData>>, ServiceError> {
    let predicates = selection.predicates()?;

    let rows = FactRepository::new(state.db.pool.clone())
        .distinct_filter_rows(&predicates)
        .await
        .map_err(|e| {
            tracing::error!("Cascade filter query failed: {e}");
            ServiceError::DataAccess("failed to query filter options".to_string())
        })?;

    Ok(Json(ApiResponse::success(services::cascade::resolve(&rows))))
}
