use crate::console::{run_roster_rank, run_score, RosterRankArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scholarship::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Scholarship Scoring Service",
    about = "Run the scholarship priority scoring service and its offline scoring tools",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Calculate the priority score for a single applicant profile
    Score(ScoreArgs),
    /// Applicant roster utilities for officer review
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Score and rank a registrar CSV export
    Rank(RosterRankArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Roster {
            command: RosterCommand::Rank(args),
        } => run_roster_rank(args),
    }
}
