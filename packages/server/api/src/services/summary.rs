use std::collections::BTreeMap;

use database::models::LabelRollup;
use shared::RiskSummary;

const CANONICAL_LABELS: [&str; 3] = ["high", "medium", "low"];

/// Folds per-label rollups into the dashboard's risk summary.
///
/// Two deliberately different weightings live here. The average weights
/// SCORES by incidence across all matched rows; the distribution is each
/// label's share of INCIDENCE. Both divide by the same denominator, the
/// total incidence over every matched row regardless of label, so a
/// non-canonical label can never inflate the canonical percentages.
///
/// Labels fold case-insensitively ("High" and "high" share one bucket), and
/// the three canonical keys are always present in the output. Whatever else
/// appears in the data is surfaced under its own lower-cased key.
pub fn summarize(rollups: &[LabelRollup]) -> RiskSummary {
    let mut total_weighted_score = 0.0;
    let mut total_incidence = 0.0;
    let mut label_counts: BTreeMap<String, f64> = BTreeMap::new();

    for rollup in rollups {
        total_weighted_score += rollup.weighted_score;
        total_incidence += rollup.total_incidence;
        *label_counts
            .entry(rollup.risk_label.to_lowercase())
            .or_insert(0.0) += rollup.total_incidence;
    }

    let average_risk_score = if total_incidence > 0.0 {
        round2(total_weighted_score / total_incidence)
    } else {
        0.0
    };

    let mut distribution: BTreeMap<String, f64> = label_counts
        .into_iter()
        .map(|(label, incidence)| {
            let pct = if total_incidence > 0.0 {
                round2(incidence / total_incidence * 100.0)
            } else {
                0.0
            };
            (label, pct)
        })
        .collect();

    for label in CANONICAL_LABELS {
        distribution.entry(label.to_string()).or_insert(0.0);
    }

    RiskSummary {
        average_risk_score,
        distribution,
    }
}

// Two decimals, ties away from zero (f64::round semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
