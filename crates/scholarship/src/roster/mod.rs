//! Applicant roster import and ranking.
//!
//! Officer review screens list applicants by priority score. The registrar
//! exports the applicant pool as CSV; this module parses that export, scores
//! every row with the priority formula, and produces a ranked listing.

mod parser;
mod ranking;

pub use ranking::RankedApplicant;

use crate::scoring::ScoreInput;
use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One applicant row from the registrar export.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantRecord {
    pub student_id: String,
    pub full_name: String,
    pub input: ScoreInput,
    pub submitted_on: Option<NaiveDate>,
}

/// Parsed applicant pool, ready to be ranked.
#[derive(Debug, Clone, Default)]
pub struct ApplicantRoster {
    records: Vec<ApplicantRecord>,
}

impl ApplicantRoster {
    pub fn new(records: Vec<ApplicantRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ApplicantRecord] {
        &self.records
    }

    /// Scores every applicant and returns the ranked listing, best first.
    pub fn rank(&self, limit: Option<usize>) -> Vec<RankedApplicant> {
        ranking::rank_records(&self.records, limit)
    }
}

/// Builds an [`ApplicantRoster`] from a registrar CSV export.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ApplicantRoster, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ApplicantRoster, RosterImportError> {
        let records = parser::parse_records(reader)?;
        Ok(ApplicantRoster::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "\
Student ID,Full Name,GPA,Family Income,Activity Count,Submitted At
st-1001,Kanokwan P.,3.8,12000,4,2026-01-05
st-1002,Somchai R.,2.4,42000,1,2026-01-03T09:30:00Z
st-1003,Maliwan T.,3.1,28000,3,
";

    #[test]
    fn import_reads_every_row() {
        let roster =
            RosterImporter::from_reader(Cursor::new(EXPORT)).expect("export parses");

        assert_eq!(roster.len(), 3);
        let first = &roster.records()[0];
        assert_eq!(first.student_id, "st-1001");
        assert_eq!(first.input.gpa, 3.8);
        assert_eq!(first.input.activity_count, 4);
        assert_eq!(
            first.submitted_on,
            NaiveDate::from_ymd_opt(2026, 1, 5)
        );
        // timestamp form collapses to its date
        assert_eq!(
            roster.records()[1].submitted_on,
            NaiveDate::from_ymd_opt(2026, 1, 3)
        );
        // blank submission date is tolerated
        assert_eq!(roster.records()[2].submitted_on, None);
    }

    #[test]
    fn import_rejects_malformed_numeric_fields() {
        let broken = "\
Student ID,Full Name,GPA,Family Income,Activity Count,Submitted At
st-1001,Kanokwan P.,not-a-gpa,12000,4,2026-01-05
";
        let err = RosterImporter::from_reader(Cursor::new(broken))
            .expect_err("gpa column must be numeric");
        assert!(matches!(err, RosterImportError::Csv(_)));
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = RosterImporter::from_path("does/not/exist.csv")
            .expect_err("missing file fails");
        assert!(matches!(err, RosterImportError::Io(_)));
    }
}
