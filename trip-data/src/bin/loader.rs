use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trip_data::ProfileLoader;
use trip_db_sqlite::SqliteRepository;

/// Load rate profile data from a CSV file into the database.
///
/// The CSV file should have the following columns:
/// - id: stable profile identifier (e.g. jet-medium)
/// - name: display name
/// - fuel_price, fuel_density: fuel defaults
/// - pilots_required, pilot_rate: default pilot roster
/// - attendants_required, attendant_rate: default attendant roster
/// - hotel_rate, meals_rate, maintenance_rate, apu_burn: trip defaults
/// - standard: true for built-in profiles
#[derive(Parser, Debug)]
#[command(name = "trip-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing rate profile data
    #[arg(short, long, default_value = "trip-data/data/standard_profiles.csv")]
    file: PathBuf,

    /// SQLite database URL (e.g. sqlite:trips.db?mode=rwc to create if missing)
    #[arg(short, long, default_value = "sqlite:trips.db?mode=rwc")]
    database: String,

    /// Run database migrations before loading data
    #[arg(short, long, default_value_t = false)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let repo = SqliteRepository::new(&args.database)
        .await
        .with_context(|| format!("Failed to connect to database: {}", args.database))?;

    if args.migrate {
        println!("Running migrations...");
        repo.run_migrations()
            .await
            .context("Failed to run migrations")?;
        println!("Migrations complete.");
    }

    println!("Loading rate profiles from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = ProfileLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} records from CSV", records.len());

    let written = ProfileLoader::load(&repo, &records)
        .await
        .context("Failed to load rate profiles into database")?;

    println!("Successfully loaded {} rate profiles into the database.", written);

    Ok(())
}
