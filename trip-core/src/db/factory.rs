use std::collections::HashMap;

use async_trait::async_trait;

use super::repository::{EstimateRepository, RepositoryError};

/// Backend-agnostic connection configuration.
///
/// `backend` selects a registered factory by name; `connection_string` is
/// forwarded to that factory unchanged and its meaning is backend-specific
/// (a file path or `:memory:` for SQLite, a service URL for a remote
/// store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub backend: String,
    pub connection_string: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            connection_string: ":memory:".to_string(),
        }
    }
}

/// One implementation per storage backend, registered at startup.
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open (or create) the underlying store and return a ready repository.
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn EstimateRepository>, RepositoryError>;
}

/// Registry of [`RepositoryFactory`] instances, keyed by backend name.
pub struct RepositoryRegistry {
    factories: HashMap<&'static str, Box<dyn RepositoryFactory>>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a backend factory, replacing any existing factory with the
    /// same name.
    pub fn register(&mut self, factory: Box<dyn RepositoryFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatches to the factory matching `config.backend`.
    ///
    /// # Errors
    /// [`RepositoryError::Configuration`] when no factory is registered for
    /// the requested name; otherwise whatever the factory returns.
    pub async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn EstimateRepository>, RepositoryError> {
        let factory = self.factories.get(config.backend.as_str()).ok_or_else(|| {
            RepositoryError::Configuration(format!(
                "unknown backend '{}'; available: {:?}",
                config.backend,
                self.available_backends()
            ))
        })?;

        factory.create(config).await
    }
}

impl Default for RepositoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use crate::models::{NewSavedEstimate, RateProfile, SavedEstimate};

    use super::*;

    // Methods are never reached — these tests only verify registry routing.
    struct StubRepository;

    #[async_trait]
    impl EstimateRepository for StubRepository {
        async fn create_estimate(
            &self,
            _estimate: NewSavedEstimate,
        ) -> Result<SavedEstimate, RepositoryError> {
            unimplemented!()
        }
        async fn get_estimate(&self, _id: i64) -> Result<SavedEstimate, RepositoryError> {
            unimplemented!()
        }
        async fn update_estimate(
            &self,
            _estimate: &SavedEstimate,
        ) -> Result<(), RepositoryError> {
            unimplemented!()
        }
        async fn delete_estimate(&self, _id: i64) -> Result<(), RepositoryError> {
            unimplemented!()
        }
        async fn list_estimates(&self) -> Result<Vec<SavedEstimate>, RepositoryError> {
            unimplemented!()
        }
        async fn create_share(&self, _estimate_id: i64) -> Result<String, RepositoryError> {
            unimplemented!()
        }
        async fn get_shared_estimate(
            &self,
            _share_token: &str,
        ) -> Result<SavedEstimate, RepositoryError> {
            unimplemented!()
        }
        async fn delete_share(&self, _estimate_id: i64) -> Result<(), RepositoryError> {
            unimplemented!()
        }
        async fn upsert_profile(&self, _profile: &RateProfile) -> Result<(), RepositoryError> {
            unimplemented!()
        }
        async fn get_profile(&self, _id: &str) -> Result<RateProfile, RepositoryError> {
            unimplemented!()
        }
        async fn list_profiles(&self) -> Result<Vec<RateProfile>, RepositoryError> {
            unimplemented!()
        }
        async fn delete_profile(&self, _id: &str) -> Result<(), RepositoryError> {
            unimplemented!()
        }
    }

    struct StubFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl RepositoryFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }
        async fn create(
            &self,
            _config: &DbConfig,
        ) -> Result<Box<dyn EstimateRepository>, RepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(StubRepository))
        }
    }

    fn stub_factory(name: &'static str) -> (Box<dyn RepositoryFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(StubFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    #[test]
    fn default_config_is_in_memory_sqlite() {
        let cfg = DbConfig::default();
        assert_eq!(cfg.backend, "sqlite");
        assert_eq!(cfg.connection_string, ":memory:");
    }

    #[test]
    fn new_registry_has_no_backends() {
        assert!(RepositoryRegistry::new().available_backends().is_empty());
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut reg = RepositoryRegistry::new();
        let (f1, _) = stub_factory("sqlite");
        let (f2, _) = stub_factory("remote");
        reg.register(f1);
        reg.register(f2);
        assert_eq!(reg.available_backends(), vec!["remote", "sqlite"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut reg = RepositoryRegistry::new();
        let (old, _) = stub_factory("sqlite");
        let (new, _) = stub_factory("sqlite");
        reg.register(old);
        reg.register(new);
        assert_eq!(reg.available_backends(), vec!["sqlite"]);
    }

    #[tokio::test]
    async fn create_calls_the_matching_factory() {
        let mut reg = RepositoryRegistry::new();
        let (sqlite_factory, sqlite_called) = stub_factory("sqlite");
        let (remote_factory, remote_called) = stub_factory("remote");
        reg.register(sqlite_factory);
        reg.register(remote_factory);

        let result = reg.create(&DbConfig::default()).await;

        assert!(result.is_ok(), "expected Ok, got {:#?}", result.err());
        assert!(sqlite_called.load(Ordering::SeqCst));
        assert!(!remote_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn unknown_backend_is_a_configuration_error() {
        let mut reg = RepositoryRegistry::new();
        let (f, _) = stub_factory("sqlite");
        reg.register(f);

        let config = DbConfig {
            backend: "remote".to_string(),
            connection_string: "x".to_string(),
        };

        let err = reg
            .create(&config)
            .await
            .err()
            .expect("expected Configuration error");
        match err {
            RepositoryError::Configuration(msg) => {
                assert!(msg.contains("remote"), "should name the requested backend");
                assert!(msg.contains("sqlite"), "should list available backends");
            }
            other => panic!("expected Configuration error, got {other:#?}"),
        }
    }
}
