/// One distinct `(hierarchy, period)` tuple from the fact store, produced by
/// the cascade query. Hierarchy cells can be NULL in the source view, so
/// every field is optional; the resolver drops empties during projection.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FilterRow {
    pub business_group: Option<String>,
    pub business_unit: Option<String>,
    pub country: Option<String>,
    pub plant: Option<String>,
    pub year: Option<i32>,
    pub month: Option<i32>,
}

/// Per-raw-label aggregate for one risk type: `Σ(risk_score * incidence)`
/// and `Σ(incidence)` over the rows matching the filter conjunction.
/// Labels arrive with their stored casing; the aggregator folds them
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LabelRollup {
    pub risk_label: String,
    pub weighted_score: f64,
    pub total_incidence: f64,
}

impl FilterRow {
    pub fn new(
        business_group: Option<&str>,
        business_unit: Option<&str>,
        country: Option<&str>,
        plant: Option<&str>,
        year: i32,
        month: i32,
    ) -> Self {
        Self {
            business_group: business_group.map(String::from),
            business_unit: business_unit.map(String::from),
            country: country.map(String::from),
            plant: plant.map(String::from),
            year: Some(year),
            month: Some(month),
        }
    }
}

impl LabelRollup {
    pub fn new(risk_label: &str, weighted_score: f64, total_incidence: f64) -> Self {
        Self {
            risk_label: risk_label.to_string(),
            weighted_score,
            total_incidence,
        }
    }
}
