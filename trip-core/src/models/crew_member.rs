use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Role label used when rate profiles build a default pilot roster.
pub const ROLE_PILOT: &str = "Pilot";
/// Role label used when rate profiles build a default attendant roster.
pub const ROLE_FLIGHT_ATTENDANT: &str = "Flight Attendant";

/// One crew roster entry.
///
/// `role` is opaque display data to the calculation engine — costs never
/// branch on it. The well-known labels above only matter to profile
/// defaulting, which pre-resolves `rate` before the engine runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub role: String,
    /// Cost per crew-day.
    pub rate: Decimal,
}

impl CrewMember {
    pub fn new(
        role: impl Into<String>,
        rate: Decimal,
    ) -> Self {
        Self {
            role: role.into(),
            rate,
        }
    }
}
