use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point-to-point segment of a trip.
///
/// Legs are owned and mutated by the caller (a form layer or a loaded
/// estimate); the calculation engine only reads them. `from`/`to` are
/// free-text labels and may be empty. `fuel_burn` is pounds of fuel for the
/// leg, excluding any APU burn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub from: String,
    pub to: String,
    /// Whole hours of flight time.
    pub hours: u32,
    /// Additional minutes of flight time. The form layer clamps this to 59;
    /// the engine accepts whatever it is handed.
    pub minutes: u32,
    pub fuel_burn: Decimal,
}
