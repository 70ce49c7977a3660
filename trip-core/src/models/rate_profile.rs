use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profile applied when none has been chosen yet.
pub const DEFAULT_PROFILE_ID: &str = "jet-medium";

/// A named bundle of default rates for an aircraft class.
///
/// Applying a profile seeds the calculator's fuel, hotel, meals, maintenance
/// and APU fields and rebuilds the crew roster from the required pilot and
/// attendant counts. The engine never sees profiles — by the time it runs,
/// every rate has been resolved into [`super::EstimateInputs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateProfile {
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
    /// Built-in profiles ship with the app and cannot be deleted by users.
    pub is_standard: bool,
}

/// The built-in aircraft-class profiles.
pub fn standard_profiles() -> Vec<RateProfile> {
    vec![
        RateProfile {
            id: "jet-large".to_string(),
            name: "Jet - Large".to_string(),
            fuel_price: Decimal::new(600, 2),
            fuel_density: Decimal::new(67, 1),
            pilots_required: 2,
            pilot_rate: Decimal::new(2500_00, 2),
            attendants_required: 1,
            attendant_rate: Decimal::new(1000_00, 2),
            hotel_rate: Decimal::new(300_00, 2),
            meals_rate: Decimal::new(150_00, 2),
            maintenance_rate: Decimal::new(1800_00, 2),
            apu_burn: Decimal::from(225),
            is_standard: true,
        },
        RateProfile {
            id: "jet-medium".to_string(),
            name: "Jet - Medium".to_string(),
            fuel_price: Decimal::new(600, 2),
            fuel_density: Decimal::new(67, 1),
            pilots_required: 2,
            pilot_rate: Decimal::new(1600_00, 2),
            attendants_required: 0,
            attendant_rate: Decimal::new(800_00, 2),
            hotel_rate: Decimal::new(250_00, 2),
            meals_rate: Decimal::new(100_00, 2),
            maintenance_rate: Decimal::new(1100_00, 2),
            apu_burn: Decimal::from(120),
            is_standard: true,
        },
        RateProfile {
            id: "jet-small".to_string(),
            name: "Jet - Small".to_string(),
            fuel_price: Decimal::new(600, 2),
            fuel_density: Decimal::new(67, 1),
            pilots_required: 1,
            pilot_rate: Decimal::new(1300_00, 2),
            attendants_required: 0,
            attendant_rate: Decimal::new(500_00, 2),
            hotel_rate: Decimal::new(250_00, 2),
            meals_rate: Decimal::new(100_00, 2),
            maintenance_rate: Decimal::new(800_00, 2),
            apu_burn: Decimal::ZERO,
            is_standard: true,
        },
        RateProfile {
            id: "turboprop-twin".to_string(),
            name: "Turboprop - Twin".to_string(),
            fuel_price: Decimal::new(600, 2),
            fuel_density: Decimal::new(67, 1),
            pilots_required: 1,
            pilot_rate: Decimal::new(1000_00, 2),
            attendants_required: 0,
            attendant_rate: Decimal::new(500_00, 2),
            hotel_rate: Decimal::new(250_00, 2),
            meals_rate: Decimal::new(100_00, 2),
            maintenance_rate: Decimal::new(800_00, 2),
            apu_burn: Decimal::ZERO,
            is_standard: true,
        },
        RateProfile {
            id: "turboprop-single".to_string(),
            name: "Turboprop - Single".to_string(),
            fuel_price: Decimal::new(600, 2),
            fuel_density: Decimal::new(67, 1),
            pilots_required: 1,
            pilot_rate: Decimal::new(1000_00, 2),
            attendants_required: 0,
            attendant_rate: Decimal::new(500_00, 2),
            hotel_rate: Decimal::new(250_00, 2),
            meals_rate: Decimal::new(100_00, 2),
            maintenance_rate: Decimal::new(500_00, 2),
            apu_burn: Decimal::ZERO,
            is_standard: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn standard_profiles_include_default() {
        let profiles = standard_profiles();

        assert_eq!(profiles.len(), 5);
        assert!(profiles.iter().all(|p| p.is_standard));
        assert!(profiles.iter().any(|p| p.id == DEFAULT_PROFILE_ID));
    }

    #[test]
    fn large_jet_carries_attendant_and_apu() {
        let profiles = standard_profiles();
        let large = profiles.iter().find(|p| p.id == "jet-large").unwrap();

        assert_eq!(large.pilots_required, 2);
        assert_eq!(large.attendants_required, 1);
        assert_eq!(large.pilot_rate, dec!(2500.00));
        assert_eq!(large.apu_burn, dec!(225));
    }
}
