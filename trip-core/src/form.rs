//! String-typed form fields and their parse-or-default coercion.
//!
//! Every scalar rate/fee arrives from an HTML input as a string. All
//! coercion into typed numbers happens here, in one place, before the
//! engine runs: trim, drop comma thousands separators, parse; on empty or
//! malformed input substitute the field's documented default. The engine
//! itself only ever sees correctly-typed numbers and never fails.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::{CrewMember, EstimateInputs, FlightLeg};

/// The scalar inputs of one estimate, as captured from a form.
///
/// Empty strings mean "not entered" and coerce to the documented defaults;
/// so does anything that fails to parse. `include_apu` and `trip_notes` are
/// not numeric and pass through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateForm {
    pub fuel_density: String,
    pub fuel_price: String,
    pub include_apu: bool,
    pub apu_burn: String,
    pub trip_days: String,
    pub hotel_stays: String,
    pub hotel_rate: String,
    pub meals_rate: String,
    pub other_rate: String,
    pub rental_car: String,
    pub airfare: String,
    pub mileage: String,
    pub maintenance_rate: String,
    pub consumables_rate: String,
    pub additional_rate: String,
    pub landing_fees: String,
    pub catering: String,
    pub handling: String,
    pub passenger_transport: String,
    pub facility_fees: String,
    pub special_event_fees: String,
    pub ramp_parking: String,
    pub customs: String,
    pub hangar: String,
    pub other_airport: String,
    pub trip_coordination_fee: String,
    pub other_misc: String,
    pub trip_notes: String,
}

impl EstimateForm {
    /// Coerces the form into fully-typed inputs for the engine.
    ///
    /// Total: every field resolves to either its parsed value or its
    /// documented default, never to an error.
    pub fn to_inputs(
        &self,
        legs: Vec<FlightLeg>,
        crew: Vec<CrewMember>,
    ) -> EstimateInputs {
        let defaults = EstimateInputs::default();
        EstimateInputs {
            legs,
            crew,
            fuel_density: decimal_or(&self.fuel_density, defaults.fuel_density),
            fuel_price: decimal_or(&self.fuel_price, defaults.fuel_price),
            include_apu: self.include_apu,
            apu_burn: decimal_or(&self.apu_burn, defaults.apu_burn),
            trip_days: count_or(&self.trip_days, defaults.trip_days),
            hotel_stays: count_or(&self.hotel_stays, defaults.hotel_stays),
            hotel_rate: decimal_or(&self.hotel_rate, defaults.hotel_rate),
            meals_rate: decimal_or(&self.meals_rate, defaults.meals_rate),
            other_rate: decimal_or(&self.other_rate, defaults.other_rate),
            rental_car: decimal_or(&self.rental_car, defaults.rental_car),
            airfare: decimal_or(&self.airfare, defaults.airfare),
            mileage: decimal_or(&self.mileage, defaults.mileage),
            maintenance_rate: decimal_or(&self.maintenance_rate, defaults.maintenance_rate),
            consumables_rate: decimal_or(&self.consumables_rate, defaults.consumables_rate),
            additional_rate: decimal_or(&self.additional_rate, defaults.additional_rate),
            landing_fees: decimal_or(&self.landing_fees, defaults.landing_fees),
            catering: decimal_or(&self.catering, defaults.catering),
            handling: decimal_or(&self.handling, defaults.handling),
            passenger_transport: decimal_or(
                &self.passenger_transport,
                defaults.passenger_transport,
            ),
            facility_fees: decimal_or(&self.facility_fees, defaults.facility_fees),
            special_event_fees: decimal_or(&self.special_event_fees, defaults.special_event_fees),
            ramp_parking: decimal_or(&self.ramp_parking, defaults.ramp_parking),
            customs: decimal_or(&self.customs, defaults.customs),
            hangar: decimal_or(&self.hangar, defaults.hangar),
            other_airport: decimal_or(&self.other_airport, defaults.other_airport),
            trip_coordination_fee: decimal_or(
                &self.trip_coordination_fee,
                defaults.trip_coordination_fee,
            ),
            other_misc: decimal_or(&self.other_misc, defaults.other_misc),
            trip_notes: self.trip_notes.clone(),
        }
    }

    /// Captures typed inputs back into string form, for persistence.
    pub fn from_inputs(inputs: &EstimateInputs) -> Self {
        Self {
            fuel_density: inputs.fuel_density.to_string(),
            fuel_price: inputs.fuel_price.to_string(),
            include_apu: inputs.include_apu,
            apu_burn: inputs.apu_burn.to_string(),
            trip_days: inputs.trip_days.to_string(),
            hotel_stays: inputs.hotel_stays.to_string(),
            hotel_rate: inputs.hotel_rate.to_string(),
            meals_rate: inputs.meals_rate.to_string(),
            other_rate: inputs.other_rate.to_string(),
            rental_car: inputs.rental_car.to_string(),
            airfare: inputs.airfare.to_string(),
            mileage: inputs.mileage.to_string(),
            maintenance_rate: inputs.maintenance_rate.to_string(),
            consumables_rate: inputs.consumables_rate.to_string(),
            additional_rate: inputs.additional_rate.to_string(),
            landing_fees: inputs.landing_fees.to_string(),
            catering: inputs.catering.to_string(),
            handling: inputs.handling.to_string(),
            passenger_transport: inputs.passenger_transport.to_string(),
            facility_fees: inputs.facility_fees.to_string(),
            special_event_fees: inputs.special_event_fees.to_string(),
            ramp_parking: inputs.ramp_parking.to_string(),
            customs: inputs.customs.to_string(),
            hangar: inputs.hangar.to_string(),
            other_airport: inputs.other_airport.to_string(),
            trip_coordination_fee: inputs.trip_coordination_fee.to_string(),
            other_misc: inputs.other_misc.to_string(),
            trip_notes: inputs.trip_notes.clone(),
        }
    }
}

/// Normalizes input for numeric parsing: trims whitespace and removes
/// commas (thousands separator).
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`], falling back to `default`.
///
/// Empty input falls back silently; non-empty unparseable input falls back
/// with a warning.
fn decimal_or(
    s: &str,
    default: Decimal,
) -> Decimal {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return default;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "invalid decimal, using default: {}", e);
        default
    })
}

/// Parses a string into a whole count, falling back to `default`.
///
/// Accepts decimal notation for whole values (e.g. `"3.0"`).
fn count_or(
    s: &str,
    default: u32,
) -> u32 {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return default;
    }
    if let Ok(n) = normalized.parse::<u32>() {
        return n;
    }
    match normalized.parse::<Decimal>() {
        Ok(d) if d.is_integer() && d >= Decimal::ZERO => d.to_u32().unwrap_or(default),
        _ => {
            tracing::warn!(input = %s, "invalid count, using default");
            default
        }
    }
}
