use super::ApplicantRecord;
use crate::scoring::ScoreInput;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ApplicantRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        let submitted_on = row.submitted_on();

        records.push(ApplicantRecord {
            student_id: row.student_id,
            full_name: row.full_name,
            input: ScoreInput {
                gpa: row.gpa,
                family_income: row.family_income,
                activity_count: row.activity_count,
            },
            submitted_on,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Student ID")]
    student_id: String,
    #[serde(rename = "Full Name")]
    full_name: String,
    #[serde(rename = "GPA")]
    gpa: f64,
    #[serde(rename = "Family Income")]
    family_income: f64,
    #[serde(rename = "Activity Count")]
    activity_count: u32,
    #[serde(
        rename = "Submitted At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    submitted_at: Option<String>,
}

impl RosterRow {
    fn submitted_on(&self) -> Option<NaiveDate> {
        self.submitted_at.as_deref().and_then(parse_submission_date)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts either an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
fn parse_submission_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
