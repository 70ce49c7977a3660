use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::EstimateForm;

use super::{CrewMember, FlightLeg};

/// A named estimate as stored by a persistence backend.
///
/// Legs and crew are kept typed; the scalar rate/fee fields stay in string
/// form (`EstimateForm`) exactly as the form layer captured them, and are
/// re-coerced on load. `share_token` is set once the owner publishes a
/// read-only share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEstimate {
    pub id: i64,
    pub name: String,
    pub legs: Vec<FlightLeg>,
    pub crew: Vec<CrewMember>,
    pub form: EstimateForm,
    pub share_token: Option<String>,
    /// Identity of the owning account; `None` for local-only records.
    pub owner_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new estimates (no id or timestamps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSavedEstimate {
    pub name: String,
    pub legs: Vec<FlightLeg>,
    pub crew: Vec<CrewMember>,
    pub form: EstimateForm,
    pub owner_email: Option<String>,
}
