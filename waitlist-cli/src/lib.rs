//! Command-line interface for scoring a facility's waitlist.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod score;

pub use error::CliError;
use score::{ScoreArgs, run_score};

pub(crate) const ARG_PATIENTS: &str = "patients";
pub(crate) const ARG_FACILITY_LATITUDE: &str = "facility-latitude";
pub(crate) const ARG_FACILITY_LONGITUDE: &str = "facility-longitude";
pub(crate) const ARG_SCORING_CONFIG: &str = "scoring-config";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_PATIENTS: &str = "WAITLIST_CMDS_SCORE_PATIENTS";
pub(crate) const ENV_FACILITY_LATITUDE: &str = "WAITLIST_CMDS_SCORE_FACILITY_LATITUDE";
pub(crate) const ENV_FACILITY_LONGITUDE: &str = "WAITLIST_CMDS_SCORE_FACILITY_LONGITUDE";

/// Run the waitlist CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, inputs cannot be loaded,
/// scoring fails, or the results cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waitlist",
    about = "Score how likely waitlisted patients are to accept an offer",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a JSON batch of patients against a facility.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
