//! Command-line interface for the meetup recommendation engine.
//!
//! The `recommend` subcommand stands in for the HTTP layer: it loads
//! candidate places from a JSON file, derives the group origin from the
//! participants' coordinates, scores the candidates, and prints the ranked
//! list (or the ordered itinerary) as JSON.
#![forbid(unsafe_code)]

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use geo::Coord;
use meetup_core::{DEFAULT_MAX_DISTANCE_KM, GeoError, TimeOfDay, centroid};
use meetup_scorer::EngineError;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod recommend;

const ARG_PLACES: &str = "places";
const ARG_PARTICIPANT: &str = "participant";
const ENV_PLACES: &str = "MEETUP_CMDS_RECOMMEND_PLACES";
const ENV_PARTICIPANT: &str = "MEETUP_CMDS_RECOMMEND_PARTICIPANT";

/// Run the meetup CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => {
            let output = recommend::run_recommend(args)?;
            println!("{output}");
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "meetup",
    about = "Group meetup recommendations from candidate place listings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate places for a group of participants.
    Recommend(RecommendArgs),
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score candidate places for a group. Inputs can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Rank candidate places for a group of participants"
)]
#[ortho_config(prefix = "MEETUP")]
struct RecommendArgs {
    /// Path to the JSON file of candidate places.
    #[arg(long = ARG_PLACES, value_name = "path")]
    #[serde(default)]
    places: Option<PathBuf>,
    /// Participant coordinate as `lat,lon`; repeat once per participant.
    #[arg(long = ARG_PARTICIPANT, value_name = "lat,lon")]
    #[serde(default)]
    participant: Vec<String>,
    /// Reference instant for time scoring (RFC 3339); defaults to now.
    #[arg(long, value_name = "timestamp")]
    #[serde(default)]
    at: Option<String>,
    /// Number of participants; defaults to the participant count.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    group_size: Option<u32>,
    /// Coarse time-of-day label (morning, afternoon, evening, night).
    #[arg(long, value_name = "label")]
    #[serde(default)]
    time_of_day: Option<String>,
    /// Maximum candidate distance in kilometres.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    max_distance: Option<f64>,
    /// Emit the ordered itinerary instead of the scored list.
    #[arg(long)]
    #[serde(default)]
    itinerary: bool,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RecommendConfig {
    places: PathBuf,
    origin: Coord<f64>,
    reference_time: DateTime<Utc>,
    group_size: u32,
    time_of_day: TimeOfDay,
    max_distance_km: f64,
    itinerary: bool,
}

impl RecommendConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.places, ARG_PLACES)
    }

    fn require_existing(path: &Path, field: &'static str) -> Result<(), CliError> {
        if path.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_PLACES,
        })?;
        if args.participant.is_empty() {
            return Err(CliError::MissingArgument {
                field: ARG_PARTICIPANT,
                env: ENV_PARTICIPANT,
            });
        }
        let coords = args
            .participant
            .iter()
            .map(|raw| parse_participant(raw))
            .collect::<Result<Vec<_>, _>>()?;
        let origin = centroid(&coords)?;
        let reference_time = match args.at {
            Some(raw) => raw
                .parse::<DateTime<Utc>>()
                .map_err(|source| CliError::InvalidTimestamp { raw, source })?,
            None => Utc::now(),
        };
        let group_size = args
            .group_size
            .unwrap_or_else(|| u32::try_from(coords.len()).unwrap_or(u32::MAX));
        let time_of_day = match args.time_of_day {
            Some(raw) => raw
                .parse::<TimeOfDay>()
                .map_err(|_| CliError::UnknownTimeOfDay { raw })?,
            None => TimeOfDay::Evening,
        };
        Ok(Self {
            places,
            origin,
            reference_time,
            group_size,
            time_of_day,
            max_distance_km: args.max_distance.unwrap_or(DEFAULT_MAX_DISTANCE_KM),
            itinerary: args.itinerary,
        })
    }
}

fn parse_participant(raw: &str) -> Result<Coord<f64>, CliError> {
    let invalid = || CliError::InvalidParticipant {
        raw: raw.to_owned(),
    };
    let (lat_raw, lon_raw) = raw.split_once(',').ok_or_else(invalid)?;
    let lat = lat_raw.trim().parse::<f64>().map_err(|_| invalid())?;
    let lon = lon_raw.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok(Coord { x: lon, y: lat })
}

/// Errors emitted by the meetup CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the offending option.
        field: &'static str,
        /// Path that was not found.
        path: PathBuf,
    },
    /// A participant coordinate could not be parsed.
    #[error("invalid participant coordinate '{raw}' (expected lat,lon)")]
    InvalidParticipant {
        /// Raw value supplied by the caller.
        raw: String,
    },
    /// The reference timestamp could not be parsed.
    #[error("invalid reference timestamp '{raw}'")]
    InvalidTimestamp {
        /// Raw value supplied by the caller.
        raw: String,
        /// Source error from `chrono`.
        #[source]
        source: chrono::ParseError,
    },
    /// The time-of-day label was not recognised.
    #[error("unknown time of day '{raw}'")]
    UnknownTimeOfDay {
        /// Raw value supplied by the caller.
        raw: String,
    },
    /// Reading the places file failed.
    #[error("failed to read places from {path:?}")]
    ReadPlaces {
        /// Path of the places file.
        path: PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding the places file failed.
    #[error("failed to parse places from {path:?}")]
    ParsePlaces {
        /// Path of the places file.
        path: PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Deriving the group origin failed.
    #[error("failed to derive a group origin")]
    Centroid(#[from] GeoError),
    /// Scoring rejected the assembled request.
    #[error("scoring failed")]
    Engine(#[from] EngineError),
    /// Encoding the output failed.
    #[error("failed to serialise output")]
    SerialiseOutput(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests;
