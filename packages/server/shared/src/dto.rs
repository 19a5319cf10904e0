use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::time::{TimeTokenError, YearMonth};

/// Filter dimensions as sent by the dashboard. Every dimension is optional
/// and multi-valued; `time` entries are "YYYY-MM" tokens.
///
/// An absent dimension and an explicitly empty list mean the same thing:
/// no constraint on that dimension. A client cannot express "match nothing".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub bg: Option<Vec<String>>,
    #[serde(default)]
    pub bu: Option<Vec<String>>,
    #[serde(default)]
    pub country: Option<Vec<String>>,
    #[serde(default)]
    pub plant: Option<Vec<String>>,
    #[serde(default)]
    pub time: Option<Vec<String>>,
}

impl FilterSelection {
    /// Validates the selection and lowers it into the bind-ready form used
    /// by the fact repository. Time tokens are parsed here so a malformed
    /// token surfaces as a validation failure before any query runs.
    pub fn predicates(&self) -> Result<FilterPredicates, TimeTokenError> {
        let time = match normalize(&self.time) {
            Some(tokens) => Some(
                tokens
                    .iter()
                    .map(|t| t.parse::<YearMonth>().map(|ym| ym.sql_key()))
                    .collect::<Result<Vec<i32>, _>>()?,
            ),
            None => None,
        };

        Ok(FilterPredicates {
            bg: normalize(&self.bg),
            bu: normalize(&self.bu),
            country: normalize(&self.country),
            plant: normalize(&self.plant),
            time,
        })
    }
}

fn normalize(dim: &Option<Vec<String>>) -> Option<Vec<String>> {
    match dim {
        Some(values) if !values.is_empty() => Some(values.clone()),
        _ => None,
    }
}

/// A validated selection, ready to bind. `None` means "no predicate for
/// this dimension"; time values are encoded as `year * 100 + month`.
#[derive(Debug, Clone, Default)]
pub struct FilterPredicates {
    pub bg: Option<Vec<String>>,
    pub bu: Option<Vec<String>>,
    pub country: Option<Vec<String>>,
    pub plant: Option<Vec<String>>,
    pub time: Option<Vec<i32>>,
}

/// Body of `POST /api/get-risk-by-type`: the filter dimensions plus the
/// required risk type. `riskType` stays optional at the serde level so a
/// missing field becomes a descriptive validation error, not a 422.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskQuery {
    #[serde(flatten)]
    pub filters: FilterSelection,
    #[serde(rename = "riskType", default)]
    pub risk_type: Option<String>,
}

/// Top-level category partitioning fact rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskType {
    Supplier,
    Compliance,
    Performance,
}

impl RiskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskType::Supplier => "Supplier",
            RiskType::Compliance => "Compliance",
            RiskType::Performance => "Performance",
        }
    }
}

impl FromStr for RiskType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Supplier" => Ok(RiskType::Supplier),
            "Compliance" => Ok(RiskType::Compliance),
            "Performance" => Ok(RiskType::Performance),
            _ => Err(()),
        }
    }
}

/// Distinct values still available per dimension given the current
/// selection. Each list is ascending and duplicate-free; an empty list is a
/// valid answer meaning nothing matches under the current constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeData {
    pub bg: Vec<String>,
    pub bu: Vec<String>,
    pub country: Vec<String>,
    pub plant: Vec<String>,
    pub time: Vec<String>,
}

/// Aggregated result for one risk type. `distribution` always carries the
/// "high" / "medium" / "low" keys; labels outside the canonical three are
/// surfaced under their own lower-cased key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub average_risk_score: f64,
    pub distribution: BTreeMap<String, f64>,
}

/// Success envelope shared by both endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_and_absent_dimension_are_equivalent() {
        let absent = FilterSelection::default().predicates().unwrap();
        let empty = FilterSelection {
            bg: Some(vec![]),
            time: Some(vec![]),
            ..Default::default()
        }
        .predicates()
        .unwrap();

        assert!(absent.bg.is_none() && empty.bg.is_none());
        assert!(absent.time.is_none() && empty.time.is_none());
    }

    #[test]
    fn populated_dimensions_survive_normalization() {
        let preds = FilterSelection {
            bg: Some(vec!["BG1".into()]),
            time: Some(vec!["2024-01".into(), "2024-02".into()]),
            ..Default::default()
        }
        .predicates()
        .unwrap();

        assert_eq!(preds.bg.as_deref(), Some(&["BG1".to_string()][..]));
        assert_eq!(preds.time.as_deref(), Some(&[202401, 202402][..]));
        assert!(preds.bu.is_none());
    }

    #[test]
    fn malformed_time_token_fails_validation() {
        let err = FilterSelection {
            time: Some(vec!["2024-1".into()]),
            ..Default::default()
        }
        .predicates()
        .unwrap_err();
        assert_eq!(err.token, "2024-1");
    }

    #[test]
    fn risk_type_parses_known_values_only() {
        assert_eq!("Supplier".parse::<RiskType>(), Ok(RiskType::Supplier));
        assert_eq!("Compliance".parse::<RiskType>(), Ok(RiskType::Compliance));
        assert_eq!("Performance".parse::<RiskType>(), Ok(RiskType::Performance));
        assert!("supplier".parse::<RiskType>().is_err());
        assert!("Quality".parse::<RiskType>().is_err());
    }

    #[test]
    fn risk_query_deserializes_flattened_filters() {
        let body = serde_json::json!({
            "riskType": "Supplier",
            "bg": ["BG1"],
            "time": ["2024-01"]
        });
        let query: RiskQuery = serde_json::from_value(body).unwrap();
        assert_eq!(query.risk_type.as_deref(), Some("Supplier"));
        assert_eq!(query.filters.bg.as_deref(), Some(&["BG1".to_string()][..]));
    }
}
