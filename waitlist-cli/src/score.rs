//! Score command implementation for the waitlist CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waitlist_core::{FacilityLocation, ResultSet, coord, validate_coordinate};
use waitlist_data::{JsonPatientFile, load_scoring_config};
use waitlist_scorer::{ScoreError, ScoringEngine};

use crate::{
    ARG_FACILITY_LATITUDE, ARG_FACILITY_LONGITUDE, ARG_OUTPUT, ARG_PATIENTS, ARG_SCORING_CONFIG,
    CliError, ENV_FACILITY_LATITUDE, ENV_FACILITY_LONGITUDE, ENV_PATIENTS,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every patient in a JSON batch on how likely they are \
                 to accept an offered slot at the facility. Patients with \
                 fewer than 20 accepted plus cancelled offers are listed \
                 separately as needing more data.",
    about = "Score a facility's waitlist"
)]
#[ortho_config(prefix = "WAITLIST")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON array of patient records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) patients: Option<Utf8PathBuf>,
    /// Facility latitude in degrees.
    #[arg(
        long = ARG_FACILITY_LATITUDE,
        value_name = "degrees",
        allow_negative_numbers = true
    )]
    #[serde(default)]
    pub(crate) facility_latitude: Option<f64>,
    /// Facility longitude in degrees.
    #[arg(
        long = ARG_FACILITY_LONGITUDE,
        value_name = "degrees",
        allow_negative_numbers = true
    )]
    #[serde(default)]
    pub(crate) facility_longitude: Option<f64>,
    /// JSON file overriding weights, bucket tables, or feature polarity.
    #[arg(long = ARG_SCORING_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    /// Write results to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    /// Path to the patient batch.
    pub(crate) patients: Utf8PathBuf,
    /// Validated facility location.
    pub(crate) facility: FacilityLocation,
    /// Optional scoring configuration file.
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    /// Optional output file; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.patients, ARG_PATIENTS)?;
        if let Some(path) = &self.scoring_config {
            Self::require_existing(path, ARG_SCORING_CONFIG)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match waitlist_fs::is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let patients = args.patients.ok_or(CliError::MissingArgument {
            field: ARG_PATIENTS,
            env: ENV_PATIENTS,
        })?;
        let latitude = args.facility_latitude.ok_or(CliError::MissingArgument {
            field: ARG_FACILITY_LATITUDE,
            env: ENV_FACILITY_LATITUDE,
        })?;
        let longitude = args.facility_longitude.ok_or(CliError::MissingArgument {
            field: ARG_FACILITY_LONGITUDE,
            env: ENV_FACILITY_LONGITUDE,
        })?;
        let facility = coord(latitude, longitude);
        validate_coordinate(facility).map_err(CliError::InvalidFacility)?;

        Ok(Self {
            patients,
            facility,
            scoring_config: args.scoring_config,
            output: args.output,
        })
    }
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

/// Score the batch described by `args`, writing to `stdout` unless an
/// output file is configured.
pub(super) fn run_score_with(args: ScoreArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let results = execute_score(&config)?;
    match &config.output {
        Some(path) => {
            let mut file =
                waitlist_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
            write_results(&mut file, &results)?;
            info!("wrote {} results to {path}", results.len());
            Ok(())
        }
        None => write_results(stdout, &results),
    }
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_score(config: &ScoreConfig) -> Result<ResultSet, CliError> {
    let engine = build_engine(config.scoring_config.as_deref())?;
    let source = JsonPatientFile::new(config.patients.clone());
    let results = engine.score_source(config.facility, &source)?;
    info!(
        "scored {} patients from {}; {} need more data",
        results.sufficient_data().len(),
        config.patients,
        results.insufficient_data().len()
    );
    Ok(results)
}

/// Build the engine from an optional scoring configuration file.
pub(super) fn build_engine(path: Option<&Utf8Path>) -> Result<ScoringEngine, CliError> {
    let Some(path) = path else {
        return Ok(ScoringEngine::default());
    };
    let config = load_scoring_config(path)?;
    let buckets = config.baseline_buckets().map_err(ScoreError::from)?;
    let weights = config.weight_table().map_err(ScoreError::from)?;
    Ok(ScoringEngine::new(buckets, weights).with_polarity(config.polarity()))
}

fn write_results(writer: &mut dyn Write, results: &ResultSet) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(results).map_err(CliError::SerializeResults)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
