//! Execution of the `recommend` subcommand.

use std::fs;

use meetup_core::{MemoryStore, Place, PlaceStore, Preferences, RecommendationRequest};
use meetup_scorer::RecommendationEngine;

use crate::{CliError, RecommendArgs, RecommendConfig};

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<String, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute(&config)
}

pub(crate) fn execute(config: &RecommendConfig) -> Result<String, CliError> {
    let payload = fs::read_to_string(&config.places).map_err(|source| CliError::ReadPlaces {
        path: config.places.clone(),
        source,
    })?;
    let places: Vec<Place> =
        serde_json::from_str(&payload).map_err(|source| CliError::ParsePlaces {
            path: config.places.clone(),
            source,
        })?;

    let store = MemoryStore::with_places(places);
    let candidates: Vec<Place> = store
        .places_within(config.origin, config.max_distance_km)
        .collect();

    let request = RecommendationRequest {
        reference_time: config.reference_time,
        origin: config.origin,
        group_size: config.group_size,
        time_of_day: config.time_of_day,
        preferences: Preferences {
            max_distance_km: config.max_distance_km,
            ..Preferences::default()
        },
    };
    let engine = RecommendationEngine::new();

    if config.itinerary {
        let itinerary = engine.itinerary(candidates, &request)?;
        serde_json::to_string_pretty(&itinerary).map_err(CliError::SerialiseOutput)
    } else {
        let ranked = engine.recommendations(candidates, &request)?;
        serde_json::to_string_pretty(&ranked).map_err(CliError::SerialiseOutput)
    }
}
