//! Advice lines attached to a score breakdown.
//!
//! Shown verbatim on the student dashboard, so the strings are the Thai copy
//! the portal displays.

/// Emitted when GPA is below the 3.00 review threshold.
pub const RAISE_GPA: &str = "ควรปรับปรุงผลการเรียนให้ได้เกรดเฉลี่ยมากกว่า 3.00";
/// Emitted when fewer than 3 activities are on record.
pub const JOIN_MORE_ACTIVITIES: &str = "ควรเข้าร่วมกิจกรรมเสริมหลักสูตรให้ได้อย่างน้อย 3 กิจกรรม";
/// Emitted when family income is above the need-based band.
pub const CONSIDER_MERIT_SCHOLARSHIPS: &str =
    "รายได้ครอบครัวค่อนข้างสูง ควรพิจารณาทุนประเภทเรียนดีแทนทุนขาดแคลน";
/// Emitted when the total score falls short of the high band.
pub const IMPROVE_OVERALL_PROFILE: &str =
    "คะแนนรวมยังไม่ถึงเกณฑ์ ควรพัฒนาทั้งผลการเรียนและการเข้าร่วมกิจกรรม";
/// Fallback when no advisory rule fires.
pub const APPLY_WITH_CONFIDENCE: &str =
    "คะแนนอยู่ในเกณฑ์ดี สามารถยื่นสมัครทุนการศึกษาได้อย่างมั่นใจ";

/// Applies the advisory rules in their fixed display order.
///
/// Rules 1-4 fire independently; the positive fallback appears only when none
/// of them did, so the list is always non-empty and free of duplicates.
pub(crate) fn recommendations(
    gpa: f64,
    activity_count: u32,
    family_income: f64,
    total_score: f64,
) -> Vec<String> {
    let mut messages = Vec::new();

    if gpa < 3.0 {
        messages.push(RAISE_GPA.to_string());
    }
    if activity_count < 3 {
        messages.push(JOIN_MORE_ACTIVITIES.to_string());
    }
    if family_income > 30_000.0 {
        messages.push(CONSIDER_MERIT_SCHOLARSHIPS.to_string());
    }
    if total_score < 60.0 {
        messages.push(IMPROVE_OVERALL_PROFILE.to_string());
    }

    if messages.is_empty() {
        messages.push(APPLY_WITH_CONFIDENCE.to_string());
    }

    messages
}
