use std::collections::HashSet;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use trip_core::{EstimateRepository, RateProfile, RepositoryError};

/// Errors that can occur when loading rate profile data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Duplicate profile id '{0}' in input")]
    DuplicateId(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<csv::Error> for ProfileLoaderError {
    fn from(err: csv::Error) -> Self {
        ProfileLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the rate profiles CSV file.
///
/// Columns:
/// - `id`: stable profile identifier (e.g. `jet-medium`)
/// - `name`: display name
/// - `fuel_price` / `fuel_density`: fuel defaults
/// - `pilots_required` / `pilot_rate`: default pilot roster
/// - `attendants_required` / `attendant_rate`: default attendant roster
/// - `hotel_rate` / `meals_rate` / `maintenance_rate` / `apu_burn`: trip defaults
/// - `standard`: whether this is a built-in, non-deletable profile
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RateProfileRecord {
    pub id: String,
    pub name: String,
    pub fuel_price: Decimal,
    pub fuel_density: Decimal,
    pub pilots_required: u32,
    pub pilot_rate: Decimal,
    pub attendants_required: u32,
    pub attendant_rate: Decimal,
    pub hotel_rate: Decimal,
    pub meals_rate: Decimal,
    pub maintenance_rate: Decimal,
    pub apu_burn: Decimal,
    pub standard: bool,
}

impl From<RateProfileRecord> for RateProfile {
    fn from(record: RateProfileRecord) -> Self {
        RateProfile {
            id: record.id,
            name: record.name,
            fuel_price: record.fuel_price,
            fuel_density: record.fuel_density,
            pilots_required: record.pilots_required,
            pilot_rate: record.pilot_rate,
            attendants_required: record.attendants_required,
            attendant_rate: record.attendant_rate,
            hotel_rate: record.hotel_rate,
            meals_rate: record.meals_rate,
            maintenance_rate: record.maintenance_rate,
            apu_burn: record.apu_burn,
            is_standard: record.standard,
        }
    }
}

/// Loader for rate profile data from CSV files.
///
/// Reads CSV records and writes them through the `EstimateRepository`
/// trait, so it works against any registered backend. Loading upserts by
/// profile id, which makes it idempotent: re-running the same file leaves
/// the store unchanged.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Parse rate profile records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RateProfileRecord>, ProfileLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        let mut seen = HashSet::new();

        for result in csv_reader.deserialize() {
            let record: RateProfileRecord = result?;
            if !seen.insert(record.id.clone()) {
                return Err(ProfileLoaderError::DuplicateId(record.id));
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Load rate profile records into the store, returning how many were
    /// written.
    pub async fn load<R: EstimateRepository + ?Sized>(
        repo: &R,
        records: &[RateProfileRecord],
    ) -> Result<usize, ProfileLoaderError> {
        let mut written = 0;

        for record in records {
            let profile = RateProfile::from(record.clone());
            repo.upsert_profile(&profile).await?;
            written += 1;
        }

        tracing::debug!(count = written, "rate profiles loaded");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const HEADER: &str = "id,name,fuel_price,fuel_density,pilots_required,pilot_rate,attendants_required,attendant_rate,hotel_rate,meals_rate,maintenance_rate,apu_burn,standard";

    #[test]
    fn test_parse_csv_single_profile() {
        let csv = format!(
            "{}\njet-medium,Jet - Medium,6.00,6.7,2,1600.00,0,800.00,250.00,100.00,1100.00,120,true",
            HEADER
        );

        let records = ProfileLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            RateProfileRecord {
                id: "jet-medium".to_string(),
                name: "Jet - Medium".to_string(),
                fuel_price: dec!(6.00),
                fuel_density: dec!(6.7),
                pilots_required: 2,
                pilot_rate: dec!(1600.00),
                attendants_required: 0,
                attendant_rate: dec!(800.00),
                hotel_rate: dec!(250.00),
                meals_rate: dec!(100.00),
                maintenance_rate: dec!(1100.00),
                apu_burn: dec!(120),
                standard: true,
            }
        );
    }

    #[test]
    fn test_parse_empty_csv() {
        let csv = format!("{}\n", HEADER);

        let records = ProfileLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let csv = format!(
            "{}\njet-small,Jet - Small,6.00,6.7,1,1300.00,0,500.00,250.00,100.00,800.00,0,true\njet-small,Jet - Small Again,6.00,6.7,1,1300.00,0,500.00,250.00,100.00,800.00,0,false",
            HEADER
        );

        let result = ProfileLoader::parse(csv.as_bytes());

        assert_eq!(
            result,
            Err(ProfileLoaderError::DuplicateId("jet-small".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_csv_missing_column() {
        let csv = "id,name,fuel_price\njet-small,Jet - Small,6.00";

        let result = ProfileLoader::parse(csv.as_bytes());

        let err = result.expect_err("Should fail for missing column");
        let ProfileLoaderError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(
            msg.contains("missing field"),
            "Expected 'missing field' in error, got: {}",
            msg
        );
    }

    #[test]
    fn test_parse_invalid_csv_bad_decimal() {
        let csv = format!(
            "{}\njet-small,Jet - Small,abc,6.7,1,1300.00,0,500.00,250.00,100.00,800.00,0,true",
            HEADER
        );

        let result = ProfileLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(ProfileLoaderError::CsvParse(_))));
    }

    #[test]
    fn test_record_converts_to_profile() {
        let record = RateProfileRecord {
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
            standard: false,
        };

        let profile = RateProfile::from(record.clone());

        assert_eq!(profile.id, record.id);
        assert_eq!(profile.pilot_rate, dec!(1200));
        assert!(!profile.is_standard);
    }
}
