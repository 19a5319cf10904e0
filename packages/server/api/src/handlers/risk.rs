use crate::handlers::ServiceError;
use crate::services;
use crate::state::AppState;
use axum::{extract::State, Json};
use database::repositories::FactRepository;
use shared::{ApiResponse, RiskQuery, RiskSummary, RiskType};

/// `POST /api/get-risk-by-type` - weighted average risk score plus the
/// incidence share per label, for one risk type under the given filters.
pub async fn get_risk_by_type(
    State(state): State<AppState>,
    Json(query): Json<RiskQuery>,
) -> Result<Json<ApiResponse<RiskSummary>>, ServiceError> {
    let risk_type = validate_risk_type(query.risk_type.as_deref())?;
    let predicates = query.filters.predicates()?;

    let rollups = FactRepository::new(state.db.pool.clone())
        .risk_label_rollups(risk_type, &predicates)
        .await
        .map_err(|e| {
            tracing::error!("Risk rollup query failed: {e}");
            ServiceError::DataAccess("failed to query the fact store".to_string())
        })?;

    Ok(Json(ApiResponse::success(services::summary::summarize(
        &rollups,
    ))))
}

fn validate_risk_type(risk_type: Option<&str>) -> Result<RiskType, ServiceError> {
    let risk_type =
        risk_type.ok_or_else(|| ServiceError::Validation("riskType is required".to_string()))?;
    risk_type.parse().map_err(|_| {
        ServiceError::Validation(format!(
            "unknown riskType '{risk_type}': expected Supplier, Compliance or Performance"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_risk_type_is_a_validation_error() {
        match validate_risk_type(None) {
            Err(ServiceError::Validation(msg)) => assert_eq!(msg, "riskType is required"),
            _ => panic!("expected a validation error"),
        }
    }

    #[test]
    fn unknown_risk_type_is_a_validation_error() {
        match validate_risk_type(Some("Quality")) {
            Err(ServiceError::Validation(msg)) => assert!(msg.contains("Quality")),
            _ => panic!("expected a validation error"),
        }
    }

    #[test]
    fn known_risk_types_pass_through() {
        assert_eq!(validate_risk_type(Some("Supplier")).unwrap(), RiskType::Supplier);
        assert_eq!(
            validate_risk_type(Some("Performance")).unwrap(),
            RiskType::Performance
        );
    }
}
