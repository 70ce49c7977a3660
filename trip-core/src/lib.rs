pub mod calculations;
pub mod db;
pub mod form;
pub mod format;
pub mod models;
pub mod state;

pub use calculations::calculate;
pub use db::repository::{EstimateRepository, RepositoryError};
pub use form::EstimateForm;
pub use models::*;
pub use state::CalculatorState;
