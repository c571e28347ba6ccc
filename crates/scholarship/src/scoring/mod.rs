//! Priority scoring for scholarship applicants.
//!
//! The portal's client bundle runs a mirror of this formula for instant
//! feedback while the review pipeline treats this implementation as the
//! authority. The two must stay numerically identical, so any change to the
//! weights, breakpoints, or rounding here has to ship together with the
//! client mirror.

mod formula;
mod recommend;

pub use recommend::{
    APPLY_WITH_CONFIDENCE, CONSIDER_MERIT_SCHOLARSHIPS, IMPROVE_OVERALL_PROFILE,
    JOIN_MORE_ACTIVITIES, RAISE_GPA,
};

use serde::{Deserialize, Serialize};

/// Academic, financial, and activity profile for one applicant.
///
/// Built fresh for every calculation; out-of-range values are absorbed by the
/// formula's plateau and cap branches rather than rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    /// Grade point average on the 0.00-4.00 scale.
    pub gpa: f64,
    /// Annual family income in baht.
    pub family_income: f64,
    /// Number of extracurricular activities on record.
    pub activity_count: u32,
}

/// Categorical bucket derived from the total score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLevel {
    #[serde(rename = "ต่ำ")]
    Low,
    #[serde(rename = "ปานกลาง")]
    Medium,
    #[serde(rename = "สูง")]
    High,
    #[serde(rename = "สูงมาก")]
    VeryHigh,
}

impl ScoreLevel {
    /// Buckets a total score, checking thresholds from high to low.
    pub fn from_total(total_score: f64) -> Self {
        if total_score >= 80.0 {
            Self::VeryHigh
        } else if total_score >= 60.0 {
            Self::High
        } else if total_score >= 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Display label, matching the portal's Thai review screens.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "ต่ำ",
            Self::Medium => "ปานกลาง",
            Self::High => "สูง",
            Self::VeryHigh => "สูงมาก",
        }
    }
}

/// Composite score with its weighted sub-components and advice lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: f64,
    pub gpa_score: f64,
    pub financial_score: f64,
    pub activity_score: f64,
    pub score_level: ScoreLevel,
    pub recommendations: Vec<String>,
}

/// Computes the full priority score breakdown for one applicant profile.
///
/// Pure and total: no I/O, no failure path, identical inputs always produce a
/// field-for-field identical result.
pub fn calculate(input: &ScoreInput) -> ScoreResult {
    let gpa_score = formula::gpa_score(input.gpa);
    let financial_score = formula::financial_score(input.family_income);
    let activity_score = formula::activity_score(input.activity_count);
    let total_score = formula::weighted_total(gpa_score, financial_score, activity_score);

    ScoreResult {
        total_score,
        gpa_score,
        financial_score,
        activity_score,
        score_level: ScoreLevel::from_total(total_score),
        recommendations: recommend::recommendations(
            input.gpa,
            input.activity_count,
            input.family_income,
            total_score,
        ),
    }
}
