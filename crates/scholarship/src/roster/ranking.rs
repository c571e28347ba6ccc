use super::ApplicantRecord;
use crate::scoring::{calculate, ScoreResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of the ranked applicant listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedApplicant {
    pub rank: usize,
    pub student_id: String,
    pub full_name: String,
    pub submitted_on: Option<NaiveDate>,
    pub score: ScoreResult,
}

/// Scores and orders the applicant pool.
///
/// Ordering: total score descending, then earlier submission date (missing
/// dates last), then student id. Ranks are 1-based.
pub(crate) fn rank_records(
    records: &[ApplicantRecord],
    limit: Option<usize>,
) -> Vec<RankedApplicant> {
    let mut scored: Vec<(&ApplicantRecord, ScoreResult)> = records
        .iter()
        .map(|record| (record, calculate(&record.input)))
        .collect();

    scored.sort_by(|(left, left_score), (right, right_score)| {
        right_score
            .total_score
            .total_cmp(&left_score.total_score)
            .then_with(|| compare_submission(left.submitted_on, right.submitted_on))
            .then_with(|| left.student_id.cmp(&right.student_id))
    });

    let cutoff = limit.unwrap_or(scored.len());
    scored
        .into_iter()
        .take(cutoff)
        .enumerate()
        .map(|(index, (record, score))| RankedApplicant {
            rank: index + 1,
            student_id: record.student_id.clone(),
            full_name: record.full_name.clone(),
            submitted_on: record.submitted_on,
            score,
        })
        .collect()
}

fn compare_submission(left: Option<NaiveDate>, right: Option<NaiveDate>) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
