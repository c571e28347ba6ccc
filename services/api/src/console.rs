use clap::Args;
use scholarship::error::AppError;
use scholarship::roster::RosterImporter;
use scholarship::scoring::{calculate, ScoreInput};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Grade point average on the 0.00-4.00 scale
    #[arg(long)]
    gpa: f64,
    /// Annual family income in baht
    #[arg(long)]
    family_income: f64,
    /// Number of extracurricular activities on record
    #[arg(long)]
    activity_count: u32,
}

#[derive(Args, Debug)]
pub(crate) struct RosterRankArgs {
    /// Registrar CSV export with one applicant profile per row
    #[arg(long)]
    csv: PathBuf,
    /// Limit output to the top N applicants
    #[arg(long)]
    limit: Option<usize>,
    /// Include each applicant's recommendations in the listing
    #[arg(long)]
    list_recommendations: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let result = calculate(&ScoreInput {
        gpa: args.gpa,
        family_income: args.family_income,
        activity_count: args.activity_count,
    });

    println!("Priority score breakdown");
    println!("- GPA score: {:.2} (weight 0.4)", result.gpa_score);
    println!("- Financial score: {:.2} (weight 0.3)", result.financial_score);
    println!("- Activity score: {:.2} (weight 0.3)", result.activity_score);
    println!(
        "- Total: {:.2} ({})",
        result.total_score,
        result.score_level.label()
    );

    println!("\nRecommendations");
    for message in &result.recommendations {
        println!("- {message}");
    }

    Ok(())
}

pub(crate) fn run_roster_rank(args: RosterRankArgs) -> Result<(), AppError> {
    let roster = RosterImporter::from_path(&args.csv)?;
    let ranked = roster.rank(args.limit);

    println!(
        "Applicant ranking ({} of {} applicants)",
        ranked.len(),
        roster.len()
    );

    for entry in &ranked {
        let submitted = match entry.submitted_on {
            Some(date) => format!(", submitted {date}"),
            None => String::new(),
        };
        println!(
            "{:>3}. {} | {} | total {:.2} ({}){}",
            entry.rank,
            entry.student_id,
            entry.full_name,
            entry.score.total_score,
            entry.score.score_level.label(),
            submitted
        );

        if args.list_recommendations {
            for message in &entry.score.recommendations {
                println!("     - {message}");
            }
        }
    }

    Ok(())
}
