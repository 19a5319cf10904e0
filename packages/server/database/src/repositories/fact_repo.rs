use crate::models::{FilterRow, LabelRollup};
use shared::{FilterPredicates, RiskType};
use sqlx::{PgPool, Result};

/// Read-only queries against the `risk_facts` table. Both queries apply the
/// same filter conjunction: a NULL array bind disables that dimension's
/// predicate entirely, so "unset" never narrows the row set.
pub struct FactRepository {
    pool: PgPool,
}

impl FactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Distinct hierarchy/period tuples satisfying every populated
    /// dimension at once. The resolver projects all five dimensions from
    /// this single filtered set, which is what makes the cascade mutual.
    pub async fn distinct_filter_rows(
        &self,
        predicates: &FilterPredicates,
    ) -> Result<Vec<FilterRow>> {
        sqlx::query_as::<_, FilterRow>(
            r#"
            SELECT DISTINCT
                business_group, business_unit, country, plant, year, month
            FROM risk_facts
            WHERE ($1::text[] IS NULL OR business_group = ANY($1))
              AND ($2::text[] IS NULL OR business_unit = ANY($2))
              AND ($3::text[] IS NULL OR country = ANY($3))
              AND ($4::text[] IS NULL OR plant = ANY($4))
              AND ($5::int4[] IS NULL OR year * 100 + month = ANY($5))
            "#,
        )
        .bind(&predicates.bg)
        .bind(&predicates.bu)
        .bind(&predicates.country)
        .bind(&predicates.plant)
        .bind(&predicates.time)
        .fetch_all(&self.pool)
        .await
    }

    /// Per-label score and incidence sums for one risk type under the
    /// filter conjunction. Grouping happens on the raw label; the
    /// aggregator merges casings and normalizes percentages.
    pub async fn risk_label_rollups(
        &self,
        risk_type: RiskType,
        predicates: &FilterPredicates,
    ) -> Result<Vec<LabelRollup>> {
        sqlx::query_as::<_, LabelRollup>(
            r#"
            SELECT
                risk_label,
                COALESCE(SUM(risk_score * total_incidence), 0) AS weighted_score,
                COALESCE(SUM(total_incidence), 0) AS total_incidence
            FROM risk_facts
            WHERE risk_type = $1
              AND ($2::text[] IS NULL OR business_group = ANY($2))
              AND ($3::text[] IS NULL OR business_unit = ANY($3))
              AND ($4::text[] IS NULL OR country = ANY($4))
              AND ($5::text[] IS NULL OR plant = ANY($5))
              AND ($6::int4[] IS NULL OR year * 100 + month = ANY($6))
            GROUP BY risk_label
            "#,
        )
        .bind(risk_type.as_str())
        .bind(&predicates.bg)
        .bind(&predicates.bu)
        .bind(&predicates.country)
        .bind(&predicates.plant)
        .bind(&predicates.time)
        .fetch_all(&self.pool)
        .await
    }
}
