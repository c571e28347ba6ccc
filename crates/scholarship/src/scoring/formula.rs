//! Sub-score formulas and the weighted blend.
//!
//! Every sub-score is rounded to 2 decimals before weighting and the total is
//! rounded again after, matching the client mirror digit for digit.

const GPA_WEIGHT: f64 = 0.4;
const FINANCIAL_WEIGHT: f64 = 0.3;
const ACTIVITY_WEIGHT: f64 = 0.3;

const INCOME_FULL_SUPPORT: f64 = 15_000.0;
const INCOME_FLOOR_CUTOFF: f64 = 50_000.0;

/// Rounds to 2 decimals, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Piecewise-linear GPA sub-score.
///
/// GPA at or below 2.0 plateaus at a flat 50 rather than falling further.
/// This matches the production formula as shipped; do not add a lower branch
/// without product sign-off.
pub(crate) fn gpa_score(gpa: f64) -> f64 {
    if gpa >= 4.0 {
        100.0
    } else if gpa > 2.0 {
        round2(50.0 + ((gpa - 2.0) / 2.0) * 50.0)
    } else {
        50.0
    }
}

/// Need-based sub-score, inverse to family income.
pub(crate) fn financial_score(family_income: f64) -> f64 {
    if family_income <= INCOME_FULL_SUPPORT {
        100.0
    } else if family_income < INCOME_FLOOR_CUTOFF {
        let span = INCOME_FLOOR_CUTOFF - INCOME_FULL_SUPPORT;
        round2(100.0 - ((family_income - INCOME_FULL_SUPPORT) / span) * 80.0)
    } else {
        20.0
    }
}

/// 20 points per activity, capped at 100.
pub(crate) fn activity_score(activity_count: u32) -> f64 {
    (u64::from(activity_count) * 20).min(100) as f64
}

pub(crate) fn weighted_total(gpa_score: f64, financial_score: f64, activity_score: f64) -> f64 {
    round2(
        gpa_score * GPA_WEIGHT
            + financial_score * FINANCIAL_WEIGHT
            + activity_score * ACTIVITY_WEIGHT,
    )
}
