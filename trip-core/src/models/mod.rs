mod crew_member;
mod estimate;
mod flight_leg;
mod inputs;
mod rate_profile;
mod saved_estimate;

pub use crew_member::{CrewMember, ROLE_FLIGHT_ATTENDANT, ROLE_PILOT};
pub use estimate::{CrewCost, Estimate, LegSummary};
pub use flight_leg::FlightLeg;
pub use inputs::EstimateInputs;
pub use rate_profile::{DEFAULT_PROFILE_ID, RateProfile, standard_profiles};
pub use saved_estimate::{NewSavedEstimate, SavedEstimate};
