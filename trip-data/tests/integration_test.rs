//! Integration tests for rate profile loading using the SQLite backend.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use sqlx::sqlite::SqlitePoolOptions;
use trip_core::{EstimateRepository, standard_profiles};
use trip_data::ProfileLoader;
use trip_db_sqlite::SqliteRepository;

const STANDARD_PROFILES_CSV: &str = include_str!("../data/standard_profiles.csv");

async fn setup_test_db() -> SqliteRepository {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    let repo = SqliteRepository::new_with_pool(pool).await;
    repo.run_migrations()
        .await
        .expect("Failed to run migrations");

    repo
}

#[tokio::test]
async fn test_load_all_standard_profiles() {
    let repo = setup_test_db().await;

    let records =
        ProfileLoader::parse(STANDARD_PROFILES_CSV.as_bytes()).expect("Failed to parse CSV");
    let written = ProfileLoader::load(&repo, &records)
        .await
        .expect("Failed to load profiles");

    assert_eq!(written, 5);

    let profiles = repo.list_profiles().await.expect("Failed to list profiles");
    assert_eq!(profiles.len(), 5);
    assert!(profiles.iter().all(|p| p.is_standard));
}

#[tokio::test]
async fn test_loaded_profiles_match_the_builtin_set() {
    let repo = setup_test_db().await;

    let records =
        ProfileLoader::parse(STANDARD_PROFILES_CSV.as_bytes()).expect("Failed to parse CSV");
    ProfileLoader::load(&repo, &records)
        .await
        .expect("Failed to load profiles");

    for expected in standard_profiles() {
        let loaded = repo
            .get_profile(&expected.id)
            .await
            .expect("Profile should exist");
        assert_eq!(loaded, expected);
    }
}

#[tokio::test]
async fn test_load_is_idempotent() {
    let repo = setup_test_db().await;

    let records =
        ProfileLoader::parse(STANDARD_PROFILES_CSV.as_bytes()).expect("Failed to parse CSV");

    ProfileLoader::load(&repo, &records)
        .await
        .expect("First load failed");
    ProfileLoader::load(&repo, &records)
        .await
        .expect("Second load failed");

    let profiles = repo.list_profiles().await.expect("Failed to list profiles");
    assert_eq!(profiles.len(), 5);
}

#[tokio::test]
async fn test_load_overwrites_changed_rates() {
    let repo = setup_test_db().await;

    let records =
        ProfileLoader::parse(STANDARD_PROFILES_CSV.as_bytes()).expect("Failed to parse CSV");
    ProfileLoader::load(&repo, &records)
        .await
        .expect("Failed to load profiles");

    // Simulate an edited CSV with a new medium-jet pilot rate.
    let mut edited = records.clone();
    let medium = edited
        .iter_mut()
        .find(|r| r.id == "jet-medium")
        .expect("Medium jet should be present");
    medium.pilot_rate = dec!(1750.00);

    ProfileLoader::load(&repo, &edited)
        .await
        .expect("Failed to reload profiles");

    let profile = repo
        .get_profile("jet-medium")
        .await
        .expect("Profile should exist");
    assert_eq!(profile.pilot_rate, dec!(1750.00));
}

#[tokio::test]
async fn test_load_keeps_custom_profiles_intact() {
    let repo = setup_test_db().await;

    let custom = trip_core::RateProfile {
        id: "my-citation".to_string(),
        name: "Citation M2".to_string(),
        fuel_price: dec!(6.25),
        fuel_density: dec!(6.7),
        pilots_required: 1,
        pilot_rate: dec!(1200),
        attendants_required: 0,
        attendant_rate: dec!(0),
        hotel_rate: dec!(200),
        meals_rate: dec!(75),
        maintenance_rate: dec!(650),
        apu_burn: dec!(0),
        is_standard: false,
    };
    repo.upsert_profile(&custom)
        .await
        .expect("Failed to insert custom profile");

    let records =
        ProfileLoader::parse(STANDARD_PROFILES_CSV.as_bytes()).expect("Failed to parse CSV");
    ProfileLoader::load(&repo, &records)
        .await
        .expect("Failed to load profiles");

    let profiles = repo.list_profiles().await.expect("Failed to list profiles");
    assert_eq!(profiles.len(), 6);

    let kept = repo
        .get_profile("my-citation")
        .await
        .expect("Custom profile should survive");
    assert_eq!(kept, custom);
}
