use scholarship::scoring::{
    calculate, ScoreInput, ScoreLevel, APPLY_WITH_CONFIDENCE, CONSIDER_MERIT_SCHOLARSHIPS,
    IMPROVE_OVERALL_PROFILE, JOIN_MORE_ACTIVITIES, RAISE_GPA,
};

fn score(gpa: f64, family_income: f64, activity_count: u32) -> scholarship::scoring::ScoreResult {
    calculate(&ScoreInput {
        gpa,
        family_income,
        activity_count,
    })
}

#[test]
fn perfect_profile_hits_every_cap() {
    let result = score(4.0, 10_000.0, 5);

    assert_eq!(result.gpa_score, 100.0);
    assert_eq!(result.financial_score, 100.0);
    assert_eq!(result.activity_score, 100.0);
    assert_eq!(result.total_score, 100.0);
    assert_eq!(result.score_level, ScoreLevel::VeryHigh);
    assert_eq!(result.recommendations, vec![APPLY_WITH_CONFIDENCE.to_string()]);
}

#[test]
fn mid_band_profile_lands_in_the_high_level() {
    let result = score(3.0, 30_000.0, 2);

    assert_eq!(result.gpa_score, 75.0);
    assert_eq!(result.financial_score, 65.71);
    assert_eq!(result.activity_score, 40.0);
    assert_eq!(result.total_score, 61.71);
    assert_eq!(result.score_level, ScoreLevel::High);
    // gpa, income, and total are all exactly on or inside their thresholds
    assert_eq!(
        result.recommendations,
        vec![JOIN_MORE_ACTIVITIES.to_string()]
    );
}

#[test]
fn weak_profile_triggers_every_advisory_in_order() {
    let result = score(2.0, 60_000.0, 0);

    assert_eq!(result.gpa_score, 50.0);
    assert_eq!(result.financial_score, 20.0);
    assert_eq!(result.activity_score, 0.0);
    assert_eq!(result.total_score, 26.0);
    assert_eq!(result.score_level, ScoreLevel::Low);
    assert_eq!(
        result.recommendations,
        vec![
            RAISE_GPA.to_string(),
            JOIN_MORE_ACTIVITIES.to_string(),
            CONSIDER_MERIT_SCHOLARSHIPS.to_string(),
            IMPROVE_OVERALL_PROFILE.to_string(),
        ]
    );
}

#[test]
fn gpa_plateau_still_allows_a_very_high_total() {
    // GPA below 2.0 scores the flat 50, so need and activities can carry the
    // profile into the top band
    let result = score(1.5, 5_000.0, 10);

    assert_eq!(result.gpa_score, 50.0);
    assert_eq!(result.financial_score, 100.0);
    assert_eq!(result.activity_score, 100.0);
    assert_eq!(result.total_score, 80.0);
    assert_eq!(result.score_level, ScoreLevel::VeryHigh);
    assert_eq!(result.recommendations, vec![RAISE_GPA.to_string()]);
}

#[test]
fn identical_inputs_produce_identical_results() {
    let input = ScoreInput {
        gpa: 2.87,
        family_income: 33_210.0,
        activity_count: 2,
    };

    let first = calculate(&input);
    let second = calculate(&input);

    assert_eq!(first, second);
}

#[test]
fn out_of_range_inputs_are_absorbed_not_rejected() {
    let result = score(-1.0, -500.0, 1_000);

    assert_eq!(result.gpa_score, 50.0);
    assert_eq!(result.financial_score, 100.0);
    assert_eq!(result.activity_score, 100.0);
}

#[test]
fn score_result_serializes_with_thai_level_label() {
    let result = score(2.0, 60_000.0, 0);
    let value = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(value["total_score"], 26.0);
    assert_eq!(value["score_level"], "ต่ำ");
    assert_eq!(
        value["recommendations"]
            .as_array()
            .expect("recommendations array")
            .len(),
        4
    );
}
