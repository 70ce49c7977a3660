use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-leg line of the legs summary.
///
/// `from`/`to` have the empty-label placeholder already substituted;
/// `gallons` includes APU burn when `apu_included` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegSummary {
    /// 1-based display index.
    pub index: u32,
    pub from: String,
    pub to: String,
    pub hours: u32,
    pub minutes: u32,
    pub gallons: Decimal,
    pub apu_included: bool,
}

/// Day-rate detail for one crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewCost {
    pub role: String,
    pub days: u32,
    pub rate: Decimal,
    pub total: Decimal,
}

/// Immutable result of one calculation.
///
/// This is a value: produced fresh on every call, discarded after
/// rendering. It echoes every input rate the renderers need so that the
/// text formatter, the PDF layout, and the share view can all walk the same
/// fields without reaching back into form state. `legs_summary` always
/// carries exactly one entry per input leg, so renderers key their
/// empty state off `legs_summary.is_empty()`.
///
/// Invariant: `estimated_total` is exactly the sum of `crew_subtotal`,
/// `hourly_subtotal`, `fuel_subtotal`, `airport_subtotal` and
/// `misc_subtotal` — there are no hidden terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub legs_summary: Vec<LegSummary>,
    /// Whole hours of the aggregate flight time.
    pub total_hours: i64,
    /// Leftover minutes past `total_hours`.
    pub remaining_minutes: i64,
    pub total_fuel_gallons: Decimal,
    /// Fractional flight hours, used for hourly-program billing.
    pub total_flight_hours: Decimal,

    pub crew_details: Vec<CrewCost>,
    pub crew_day_total: Decimal,
    pub trip_days: u32,
    pub hotel_total: Decimal,
    pub meals_total: Decimal,
    pub other_total: Decimal,
    pub rental_car: Decimal,
    pub airfare: Decimal,
    pub mileage: Decimal,
    pub crew_count: u32,
    pub hotel_stays: u32,
    pub hotel_rate: Decimal,
    pub meals_rate: Decimal,
    pub crew_expenses_total: Decimal,
    pub crew_subtotal: Decimal,

    pub maintenance_total: Decimal,
    pub maintenance_rate: Decimal,
    pub consumables_total: Decimal,
    pub consumables_rate: Decimal,
    pub additional_total: Decimal,
    pub additional_rate: Decimal,
    pub hourly_subtotal: Decimal,

    pub fuel_subtotal: Decimal,
    pub fuel_price: Decimal,
    pub fuel_density: Decimal,

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
    pub airport_subtotal: Decimal,

    pub trip_coordination_fee: Decimal,
    pub other_misc: Decimal,
    pub misc_subtotal: Decimal,

    pub estimated_total: Decimal,

    pub trip_notes: String,
    pub include_apu: bool,
    pub apu_burn: Decimal,
    pub total_apu_fuel: Decimal,
    pub active_legs_count: u32,
}
