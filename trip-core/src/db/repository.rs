use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewSavedEstimate, RateProfile, SavedEstimate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Storage operations for named estimates, share links, and rate profiles.
///
/// Implemented per backend (local SQLite, remote service). Estimates are
/// keyed by opaque ids; shares by opaque tokens. The engine never touches
/// this trait — persistence is a caller concern.
#[async_trait]
pub trait EstimateRepository: Send + Sync {
    // Saved estimates
    async fn create_estimate(
        &self,
        estimate: NewSavedEstimate,
    ) -> Result<SavedEstimate, RepositoryError>;

    async fn get_estimate(&self, id: i64) -> Result<SavedEstimate, RepositoryError>;

    async fn update_estimate(&self, estimate: &SavedEstimate) -> Result<(), RepositoryError>;

    async fn delete_estimate(&self, id: i64) -> Result<(), RepositoryError>;

    /// All estimates, most recently updated first.
    async fn list_estimates(&self) -> Result<Vec<SavedEstimate>, RepositoryError>;

    // Share links
    /// Assigns a share token to the estimate, or returns the one already
    /// assigned. Tokens are stable until the share is deleted.
    async fn create_share(&self, estimate_id: i64) -> Result<String, RepositoryError>;

    async fn get_shared_estimate(
        &self,
        share_token: &str,
    ) -> Result<SavedEstimate, RepositoryError>;

    async fn delete_share(&self, estimate_id: i64) -> Result<(), RepositoryError>;

    // Rate profiles
    async fn upsert_profile(&self, profile: &RateProfile) -> Result<(), RepositoryError>;

    async fn get_profile(&self, id: &str) -> Result<RateProfile, RepositoryError>;

    /// All profiles, standard ones first, then by name.
    async fn list_profiles(&self) -> Result<Vec<RateProfile>, RepositoryError>;

    async fn delete_profile(&self, id: &str) -> Result<(), RepositoryError>;
}
