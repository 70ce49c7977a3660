//! Trip-cost estimate calculation.
//!
//! Turns flight legs, a crew roster, and the scalar rate/fee inputs into a
//! fully itemized [`Estimate`]. The function is pure and total: it performs
//! no I/O, touches no shared state, and has no error path — string coercion
//! has already happened at the form boundary, so every input is a valid
//! number by the time it arrives here.
//!
//! # Calculation order
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Per-leg pass: minutes, active-leg check, APU burn, gallons |
//! | 2    | Flight totals: whole hours + leftover minutes, fractional hours, total gallons |
//! | 3    | Crew day rates: per-member `rate × trip_days` |
//! | 4    | Crew expenses: hotel/meals/per-diem by headcount, plus flat add-ons |
//! | 5    | Hourly programs: maintenance/consumables/additional × flight hours |
//! | 6    | Fuel cost: total gallons × price per gallon |
//! | 7    | Airport & ground: flat sum of the ten fee fields |
//! | 8    | Miscellaneous: coordination fee + other |
//! | 9    | Grand total: sum of the five subtotals, nothing else |
//!
//! A leg is *active* when it has both flight time and fuel burn; only
//! active legs receive APU burn, and only when the APU option is on.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use trip_core::calculations::calculate;
//! use trip_core::models::{CrewMember, EstimateInputs, FlightLeg};
//!
//! let inputs = EstimateInputs {
//!     legs: vec![FlightLeg {
//!         from: "KTEB".to_string(),
//!         to: "KPBI".to_string(),
//!         hours: 3,
//!         minutes: 0,
//!         fuel_burn: dec!(4000),
//!     }],
//!     crew: vec![
//!         CrewMember::new("Pilot", dec!(1500)),
//!         CrewMember::new("Pilot", dec!(1500)),
//!     ],
//!     trip_days: 2,
//!     ..EstimateInputs::default()
//! };
//!
//! let estimate = calculate(&inputs);
//!
//! assert_eq!(estimate.total_hours, 3);
//! assert_eq!(estimate.crew_subtotal, dec!(6000));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::safe_div;
use crate::models::{CrewCost, Estimate, EstimateInputs, LegSummary};

/// Shown in place of an origin or destination the user left blank.
const EMPTY_LABEL: &str = "(empty)";

fn label_or_placeholder(label: &str) -> String {
    if label.is_empty() {
        EMPTY_LABEL.to_string()
    } else {
        label.to_string()
    }
}

/// Calculates a complete trip-cost estimate.
///
/// Runs in O(legs + crew); cheap enough to re-run on every input change.
/// Concurrent calls are independent — each works from its own input
/// snapshot and returns a fresh value.
pub fn calculate(inputs: &EstimateInputs) -> Estimate {
    // Step 1: per-leg pass.
    let mut total_minutes: i64 = 0;
    let mut total_fuel_lbs = Decimal::ZERO;
    let mut total_apu_fuel = Decimal::ZERO;
    let mut active_legs_count: u32 = 0;
    let mut legs_summary = Vec::with_capacity(inputs.legs.len());

    for (index, leg) in inputs.legs.iter().enumerate() {
        total_minutes += i64::from(leg.hours) * 60 + i64::from(leg.minutes);

        // A leg with flight time but no burn, or burn but no flight time,
        // is not active and never receives APU fuel.
        let is_active = (leg.hours > 0 || leg.minutes > 0) && leg.fuel_burn > Decimal::ZERO;
        let apu_included = inputs.include_apu && is_active;

        let mut leg_fuel = leg.fuel_burn;
        if apu_included {
            leg_fuel += inputs.apu_burn;
            total_apu_fuel += inputs.apu_burn;
            active_legs_count += 1;
        }
        total_fuel_lbs += leg_fuel;

        legs_summary.push(LegSummary {
            index: index as u32 + 1,
            from: label_or_placeholder(&leg.from),
            to: label_or_placeholder(&leg.to),
            hours: leg.hours,
            minutes: leg.minutes,
            gallons: safe_div(leg_fuel, inputs.fuel_density),
            apu_included,
        });
    }

    // Step 2: flight totals. `total_flight_hours` stays fractional for
    // hourly-program billing; the hours/minutes pair is for display.
    let total_hours = total_minutes / 60;
    let remaining_minutes = total_minutes % 60;
    let total_fuel_gallons = safe_div(total_fuel_lbs, inputs.fuel_density);
    let total_flight_hours = Decimal::from(total_minutes) / Decimal::from(60);

    // Step 3: crew day rates.
    let trip_days = Decimal::from(inputs.trip_days);
    let mut crew_day_total = Decimal::ZERO;
    let mut crew_details = Vec::with_capacity(inputs.crew.len());

    for member in &inputs.crew {
        let total = member.rate * trip_days;
        crew_day_total += total;
        crew_details.push(CrewCost {
            role: member.role.clone(),
            days: inputs.trip_days,
            rate: member.rate,
            total,
        });
    }

    // Step 4: crew expenses.
    let crew_count = inputs.crew.len() as u32;
    let headcount = Decimal::from(crew_count);
    let hotel_total = headcount * Decimal::from(inputs.hotel_stays) * inputs.hotel_rate;
    let meals_total = headcount * trip_days * inputs.meals_rate;
    let other_total = headcount * trip_days * inputs.other_rate;

    let crew_expenses_total = hotel_total
        + meals_total
        + other_total
        + inputs.rental_car
        + inputs.airfare
        + inputs.mileage;
    let crew_subtotal = crew_day_total + crew_expenses_total;

    // Step 5: hourly programs.
    let maintenance_total = total_flight_hours * inputs.maintenance_rate;
    let consumables_total = total_flight_hours * inputs.consumables_rate;
    let additional_total = total_flight_hours * inputs.additional_rate;
    let hourly_subtotal = maintenance_total + consumables_total + additional_total;

    // Step 6: fuel.
    let fuel_subtotal = total_fuel_gallons * inputs.fuel_price;

    // Step 7: airport & ground.
    let airport_subtotal = inputs.landing_fees
        + inputs.catering
        + inputs.handling
        + inputs.passenger_transport
        + inputs.facility_fees
        + inputs.special_event_fees
        + inputs.ramp_parking
        + inputs.customs
        + inputs.hangar
        + inputs.other_airport;

    // Step 8: miscellaneous.
    let misc_subtotal = inputs.trip_coordination_fee + inputs.other_misc;

    // Step 9: grand total.
    let estimated_total =
        crew_subtotal + hourly_subtotal + fuel_subtotal + airport_subtotal + misc_subtotal;

    Estimate {
        legs_summary,
        total_hours,
        remaining_minutes,
        total_fuel_gallons,
        total_flight_hours,
        crew_details,
        crew_day_total,
        trip_days: inputs.trip_days,
        hotel_total,
        meals_total,
        other_total,
        rental_car: inputs.rental_car,
        airfare: inputs.airfare,
        mileage: inputs.mileage,
        crew_count,
        hotel_stays: inputs.hotel_stays,
        hotel_rate: inputs.hotel_rate,
        meals_rate: inputs.meals_rate,
        crew_expenses_total,
        crew_subtotal,
        maintenance_total,
        maintenance_rate: inputs.maintenance_rate,
        consumables_total,
        consumables_rate: inputs.consumables_rate,
        additional_total,
        additional_rate: inputs.additional_rate,
        hourly_subtotal,
        fuel_subtotal,
        fuel_price: inputs.fuel_price,
        fuel_density: inputs.fuel_density,
        landing_fees: inputs.landing_fees,
        catering: inputs.catering,
        handling: inputs.handling,
        passenger_transport: inputs.passenger_transport,
        facility_fees: inputs.facility_fees,
        special_event_fees: inputs.special_event_fees,
        ramp_parking: inputs.ramp_parking,
        customs: inputs.customs,
        hangar: inputs.hangar,
        other_airport: inputs.other_airport,
        airport_subtotal,
        trip_coordination_fee: inputs.trip_coordination_fee,
        other_misc: inputs.other_misc,
        misc_subtotal,
        estimated_total,
        trip_notes: inputs.trip_notes.trim().to_string(),
        include_apu: inputs.include_apu,
        apu_burn: inputs.apu_burn,
        total_apu_fuel,
        active_legs_count,
    }
}
