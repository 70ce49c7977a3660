//! SQLite persistence for trip estimates and rate profiles.
//!
//! Local-first storage: anonymous use of the calculator persists into a
//! SQLite file (or `:memory:`); a remote backend can be registered beside
//! it through `trip_core::db::RepositoryRegistry`.

mod factory;
mod repository;

pub use factory::SqliteFactory;
pub use repository::SqliteRepository;
