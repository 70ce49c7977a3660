use async_trait::async_trait;

use trip_core::db::{DbConfig, RepositoryFactory};
use trip_core::{EstimateRepository, RepositoryError};

use crate::SqliteRepository;

/// Registers SQLite under the backend name `"sqlite"`.
///
/// The connection string is passed to the pool as-is, so anything sqlx
/// accepts works: `sqlite:trips.db?mode=rwc`, `sqlite::memory:`, etc.
/// Migrations run as part of `create`, so the returned repository is ready
/// to use.
pub struct SqliteFactory;

#[async_trait]
impl RepositoryFactory for SqliteFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn EstimateRepository>, RepositoryError> {
        let repo = SqliteRepository::new(&config.connection_string)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        repo.run_migrations()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(Box::new(repo))
    }
}

#[cfg(test)]
mod tests {
    use trip_core::db::RepositoryRegistry;

    use super::*;

    #[tokio::test]
    async fn factory_creates_a_ready_repository() {
        let mut registry = RepositoryRegistry::new();
        registry.register(Box::new(SqliteFactory));

        let config = DbConfig {
            backend: "sqlite".to_string(),
            connection_string: "sqlite::memory:".to_string(),
        };

        let repo = registry
            .create(&config)
            .await
            .expect("Should create sqlite repository");

        // Migrations already ran, so queries hit real tables.
        let estimates = repo.list_estimates().await.expect("Should list estimates");
        assert!(estimates.is_empty());
    }

    #[tokio::test]
    async fn factory_rejects_an_unreachable_database() {
        let config = DbConfig {
            backend: "sqlite".to_string(),
            connection_string: "sqlite:/no/such/dir/trips.db".to_string(),
        };

        let result = SqliteFactory.create(&config).await;

        assert!(matches!(result, Err(RepositoryError::Connection(_))));
    }
}
