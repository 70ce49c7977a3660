use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CrewMember, FlightLeg};

/// The full, typed parameter set consumed by one calculation.
///
/// The form layer assembles a fresh `EstimateInputs` value on every change
/// (see [`crate::form::EstimateForm`]); no mutable state crosses into the
/// engine. `Default` yields the documented fallback for every field, which
/// is also what string coercion substitutes for absent or malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInputs {
    pub legs: Vec<FlightLeg>,
    pub crew: Vec<CrewMember>,

    /// Pounds of fuel per gallon.
    pub fuel_density: Decimal,
    /// Dollars per gallon.
    pub fuel_price: Decimal,
    /// Add APU burn to every active leg.
    pub include_apu: bool,
    /// Pounds of APU fuel added per active leg.
    pub apu_burn: Decimal,

    /// Days the crew is on the trip; drives day rates and per-diems.
    pub trip_days: u32,
    /// Hotel nights per crew member.
    pub hotel_stays: u32,
    /// Dollars per crew member per hotel night.
    pub hotel_rate: Decimal,
    /// Dollars per crew member per trip day.
    pub meals_rate: Decimal,
    /// Miscellaneous per-diem, dollars per crew member per trip day.
    pub other_rate: Decimal,
    pub rental_car: Decimal,
    pub airfare: Decimal,
    pub mileage: Decimal,

    /// Dollars per flight hour.
    pub maintenance_rate: Decimal,
    pub consumables_rate: Decimal,
    pub additional_rate: Decimal,

    pub landing_fees: Decimal,
    pub catering: Decimal,
    pub handling: Decimal,
    pub passenger_transport: Decimal,
    pub facility_fees: Decimal,
    pub special_event_fees: Decimal,
    pub ramp_parking: Decimal,
    pub customs: Decimal,
    pub hangar: Decimal,
    pub other_airport: Decimal,

    pub trip_coordination_fee: Decimal,
    pub other_misc: Decimal,

    pub trip_notes: String,
}

impl Default for EstimateInputs {
    fn default() -> Self {
        Self {
            legs: Vec::new(),
            crew: Vec::new(),
            fuel_density: Decimal::new(67, 1),
            fuel_price: Decimal::new(593, 2),
            include_apu: false,
            apu_burn: Decimal::ONE_HUNDRED,
            trip_days: 0,
            hotel_stays: 0,
            hotel_rate: Decimal::ZERO,
            meals_rate: Decimal::ZERO,
            other_rate: Decimal::ZERO,
            rental_car: Decimal::ZERO,
            airfare: Decimal::ZERO,
            mileage: Decimal::ZERO,
            maintenance_rate: Decimal::ZERO,
            consumables_rate: Decimal::ZERO,
            additional_rate: Decimal::ZERO,
            landing_fees: Decimal::ZERO,
            catering: Decimal::ZERO,
            handling: Decimal::ZERO,
            passenger_transport: Decimal::ZERO,
            facility_fees: Decimal::ZERO,
            special_event_fees: Decimal::ZERO,
            ramp_parking: Decimal::ZERO,
            customs: Decimal::ZERO,
            hangar: Decimal::ZERO,
            other_airport: Decimal::ZERO,
            trip_coordination_fee: Decimal::ZERO,
            other_misc: Decimal::ZERO,
            trip_notes: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults_match_documented_fallbacks() {
        let inputs = EstimateInputs::default();

        assert_eq!(inputs.fuel_density, dec!(6.7));
        assert_eq!(inputs.fuel_price, dec!(5.93));
        assert_eq!(inputs.apu_burn, dec!(100));
        assert!(!inputs.include_apu);
        assert_eq!(inputs.trip_days, 0);
        assert_eq!(inputs.hotel_rate, Decimal::ZERO);
        assert!(inputs.legs.is_empty());
        assert!(inputs.crew.is_empty());
        assert_eq!(inputs.trip_notes, "");
    }
}
