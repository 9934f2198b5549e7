//! Unit coverage for argument parsing, configuration, and the recommend
//! pipeline.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use clap::Parser;
use geo::Coord;
use meetup_core::{EventWindow, Place, TimeOfDay};
use rstest::rstest;
use tempfile::TempDir;

use crate::recommend::execute;
use crate::{Cli, CliError, Command, RecommendArgs, RecommendConfig, parse_participant};

fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0)
        .single()
        .expect("valid reference time")
}

fn base_args() -> RecommendArgs {
    RecommendArgs {
        places: Some(PathBuf::from("places.json")),
        participant: vec!["51.5,-0.1".to_owned()],
        at: Some("2026-08-01T12:00:00Z".to_owned()),
        group_size: None,
        time_of_day: None,
        max_distance: None,
        itinerary: false,
    }
}

fn listed_spot(id: u64) -> Place {
    Place::spot(id, "Gallery", "2 Art Lane", Coord { x: 0.0, y: 0.0 })
        .expect("valid spot")
        .with_description("a".repeat(150))
        .with_summary("Artist-led gallery")
        .with_email("info@gallery.example")
        .with_social_handle("instagram", "@gallery")
        .with_featured_image("https://img.example/gallery.jpg")
}

fn bare_spot(id: u64, location: Coord<f64>) -> Place {
    Place::spot(id, "Bench", "Somewhere", location).expect("valid spot")
}

fn sample_config(places: PathBuf, itinerary: bool) -> RecommendConfig {
    RecommendConfig {
        places,
        origin: Coord { x: 0.0, y: 0.0 },
        reference_time: reference_time(),
        group_size: 2,
        time_of_day: TimeOfDay::Evening,
        max_distance_km: 50.0,
        itinerary,
    }
}

fn write_places(dir: &TempDir, places: &[Place]) -> PathBuf {
    let path = dir.path().join("places.json");
    let payload = serde_json::to_string_pretty(places).expect("serialise fixture");
    fs::write(&path, payload).expect("write fixture");
    path
}

#[rstest]
fn participant_parses_lat_lon_order() {
    let coord = parse_participant("51.5,-0.1").expect("valid coordinate");
    assert_eq!(coord, Coord { x: -0.1, y: 51.5 });
}

#[rstest]
fn participant_tolerates_whitespace() {
    let coord = parse_participant(" 48.85 , 2.35 ").expect("valid coordinate");
    assert_eq!(coord, Coord { x: 2.35, y: 48.85 });
}

#[rstest]
#[case("fifty,one")]
#[case("51.5")]
#[case("")]
fn participant_rejects_malformed_input(#[case] raw: &str) {
    let err = parse_participant(raw).expect_err("malformed coordinate");
    assert!(matches!(err, CliError::InvalidParticipant { .. }));
}

#[rstest]
fn config_fills_documented_defaults() {
    let config = RecommendConfig::try_from(base_args()).expect("valid args");
    assert_eq!(config.group_size, 1);
    assert_eq!(config.time_of_day, TimeOfDay::Evening);
    assert_eq!(config.max_distance_km, 50.0);
    assert!(!config.itinerary);
}

#[rstest]
fn config_derives_origin_from_participants() {
    let mut args = base_args();
    args.participant = vec!["10.0,20.0".to_owned(), "30.0,20.0".to_owned()];
    let config = RecommendConfig::try_from(args).expect("valid args");
    assert!((config.origin.x - 20.0).abs() < 1e-6, "longitude {}", config.origin.x);
    assert!((config.origin.y - 20.0).abs() < 0.5, "latitude {}", config.origin.y);
}

#[rstest]
fn config_requires_places() {
    let mut args = base_args();
    args.places = None;
    let err = RecommendConfig::try_from(args).expect_err("missing places");
    assert!(matches!(
        err,
        CliError::MissingArgument { field: "places", .. }
    ));
}

#[rstest]
fn config_requires_participants() {
    let mut args = base_args();
    args.participant = Vec::new();
    let err = RecommendConfig::try_from(args).expect_err("missing participants");
    assert!(matches!(
        err,
        CliError::MissingArgument {
            field: "participant",
            ..
        }
    ));
}

#[rstest]
fn config_rejects_unknown_time_of_day() {
    let mut args = base_args();
    args.time_of_day = Some("brunch".to_owned());
    let err = RecommendConfig::try_from(args).expect_err("unknown label");
    assert!(matches!(err, CliError::UnknownTimeOfDay { .. }));
}

#[rstest]
fn config_rejects_malformed_timestamp() {
    let mut args = base_args();
    args.at = Some("yesterday".to_owned());
    let err = RecommendConfig::try_from(args).expect_err("malformed timestamp");
    assert!(matches!(err, CliError::InvalidTimestamp { .. }));
}

#[rstest]
fn missing_places_file_is_reported() {
    let config = sample_config(PathBuf::from("/definitely/not/here.json"), false);
    let err = config.validate_sources().expect_err("missing file");
    assert!(matches!(err, CliError::MissingSourceFile { .. }));
}

#[rstest]
fn clap_parses_the_recommend_subcommand() {
    let cli = Cli::try_parse_from([
        "meetup",
        "recommend",
        "--places",
        "places.json",
        "--participant",
        "51.5,-0.1",
        "--participant",
        "48.85,2.35",
        "--max-distance",
        "25",
        "--itinerary",
    ])
    .expect("valid invocation");
    let Command::Recommend(args) = cli.command;
    assert_eq!(args.places, Some(PathBuf::from("places.json")));
    assert_eq!(args.participant.len(), 2);
    assert_eq!(args.max_distance, Some(25.0));
    assert!(args.itinerary);
}

#[rstest]
fn execute_ranks_candidates_within_reach() {
    let dir = TempDir::new().expect("tempdir");
    let places = vec![
        // Roughly one degree of latitude is 111 km, beyond the 50 km radius.
        bare_spot(3, Coord { x: 0.0, y: 1.0 }),
        bare_spot(2, Coord { x: 0.0, y: 0.0 }),
        listed_spot(1),
    ];
    let path = write_places(&dir, &places);

    let output = execute(&sample_config(path, false)).expect("pipeline succeeds");
    let ranked: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    let entries = ranked.as_array().expect("array output");
    assert_eq!(entries.len(), 2, "distant place filtered by the store");
    assert_eq!(entries[0]["place"]["id"], 1, "richer listing ranks first");
    assert_eq!(entries[1]["place"]["id"], 2);
    assert!(entries[0]["total"].as_f64().expect("total") >= entries[1]["total"].as_f64().expect("total"));
    assert_eq!(entries[0]["breakdown"]["popularity"], 0.0);
}

#[rstest]
fn execute_emits_a_chronological_itinerary() {
    let dir = TempDir::new().expect("tempdir");
    let sooner_start = reference_time() + Duration::hours(10);
    let later_start = reference_time() + Duration::hours(30);
    let sooner = Place::event(
        10,
        "Open-air concert",
        "Park Stage",
        Coord { x: 0.0, y: 0.0 },
        EventWindow::new(sooner_start, sooner_start + Duration::hours(2)).expect("valid window"),
    )
    .expect("valid event")
    .with_summary("Evening concert")
    .with_featured_image("https://img.example/concert.jpg");
    let later = Place::event(
        30,
        "Food market",
        "Market Square",
        Coord { x: 0.0, y: 0.0 },
        EventWindow::new(later_start, later_start + Duration::hours(4)).expect("valid window"),
    )
    .expect("valid event")
    .with_summary("Weekly market")
    .with_featured_image("https://img.example/market.jpg");
    let path = write_places(&dir, &[later, sooner]);

    let output = execute(&sample_config(path, true)).expect("pipeline succeeds");
    let itinerary: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    let entries = itinerary.as_array().expect("array output");
    let ids: Vec<u64> = entries
        .iter()
        .map(|entry| entry["id"].as_u64().expect("id"))
        .collect();
    assert_eq!(ids, vec![10, 30], "events order by start time");
}

#[rstest]
fn execute_reports_unreadable_places() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("places.json");
    fs::write(&path, "not json").expect("write fixture");
    let err = execute(&sample_config(path, false)).expect_err("malformed file");
    assert!(matches!(err, CliError::ParsePlaces { .. }));
}
