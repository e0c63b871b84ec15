//! Service implementation for the in-memory user directory plugin.

use chrono::Utc;
use dashmap::DashMap;
use identity_resolver_sdk::{UserDirectoryError, UserRecord};
use uuid::Uuid;

use crate::config::MemoryDirectoryPluginConfig;

/// In-memory user directory service.
///
/// Lookups go through `DashMap::entry`, so concurrent first-time
/// provisioning of the same key creates exactly one record and every caller
/// observes the same `internal_user_id`.
pub struct Service {
    auto_provision: bool,
    available: bool,
    records: DashMap<String, UserRecord>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &MemoryDirectoryPluginConfig) -> Self {
        let records = DashMap::new();
        for seed in &cfg.users {
            records.insert(
                seed.identity_key.clone(),
                UserRecord {
                    internal_user_id: seed.internal_user_id,
                    identity_key: seed.identity_key.clone(),
                    created_at: Utc::now(),
                },
            );
        }

        Self {
            auto_provision: cfg.auto_provision,
            available: cfg.available,
            records,
        }
    }

    /// Resolve a key to its record, provisioning one when allowed.
    ///
    /// # Errors
    ///
    /// - [`UserDirectoryError::Unavailable`] when the directory is configured
    ///   unavailable
    /// - [`UserDirectoryError::UserNotFound`] for unknown keys with
    ///   auto-provisioning disabled
    pub fn resolve(&self, key: &str) -> Result<UserRecord, UserDirectoryError> {
        if !self.available {
            return Err(UserDirectoryError::Unavailable(
                "directory marked unavailable by configuration".to_owned(),
            ));
        }

        if self.auto_provision {
            let record = self
                .records
                .entry(key.to_owned())
                .or_insert_with(|| UserRecord {
                    internal_user_id: Uuid::new_v4(),
                    identity_key: key.to_owned(),
                    created_at: Utc::now(),
                });
            return Ok(record.value().clone());
        }

        self.records
            .get(key)
            .map(|r| r.value().clone())
            .ok_or_else(|| UserDirectoryError::UserNotFound { key: key.to_owned() })
    }

    /// Number of provisioned records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::UserSeed;

    const SEEDED_ID: &str = "550e8400-e29b-41d4-a716-446655440001";

    fn seeded_config() -> MemoryDirectoryPluginConfig {
        MemoryDirectoryPluginConfig {
            users: vec![UserSeed {
                identity_key: "seeded@x.com".to_owned(),
                internal_user_id: Uuid::parse_str(SEEDED_ID).unwrap(),
            }],
            ..MemoryDirectoryPluginConfig::default()
        }
    }

    #[test]
    fn seeded_record_resolves_to_seeded_id() {
        let service = Service::from_config(&seeded_config());

        let record = service.resolve("seeded@x.com").unwrap();
        assert_eq!(record.internal_user_id, Uuid::parse_str(SEEDED_ID).unwrap());
        assert_eq!(record.identity_key, "seeded@x.com");
    }

    #[test]
    fn resolution_is_idempotent() {
        let service = Service::from_config(&MemoryDirectoryPluginConfig::default());

        let first = service.resolve("a@x.com").unwrap();
        let second = service.resolve("a@x.com").unwrap();

        assert_eq!(first.internal_user_id, second.internal_user_id);
        assert_eq!(service.record_count(), 1);
    }

    #[test]
    fn distinct_keys_get_distinct_ids() {
        let service = Service::from_config(&MemoryDirectoryPluginConfig::default());

        let a = service.resolve("a@x.com").unwrap();
        let b = service.resolve("b@x.com").unwrap();

        assert_ne!(a.internal_user_id, b.internal_user_id);
        assert_eq!(service.record_count(), 2);
    }

    #[test]
    fn unknown_key_without_provisioning_is_not_found() {
        let cfg = MemoryDirectoryPluginConfig {
            auto_provision: false,
            ..seeded_config()
        };
        let service = Service::from_config(&cfg);

        // Seeded key still resolves
        assert!(service.resolve("seeded@x.com").is_ok());

        let result = service.resolve("unknown@x.com");
        match result.unwrap_err() {
            UserDirectoryError::UserNotFound { key } => assert_eq!(key, "unknown@x.com"),
            other => panic!("Expected UserNotFound, got: {other:?}"),
        }
    }

    #[test]
    fn unavailable_directory_fails_every_lookup() {
        let cfg = MemoryDirectoryPluginConfig {
            available: false,
            ..seeded_config()
        };
        let service = Service::from_config(&cfg);

        let result = service.resolve("seeded@x.com");
        assert!(matches!(result, Err(UserDirectoryError::Unavailable(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_sight_provisions_once() {
        let service = std::sync::Arc::new(Service::from_config(
            &MemoryDirectoryPluginConfig::default(),
        ));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.resolve("a@x.com").unwrap().internal_user_id })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap());
        }

        assert_eq!(service.record_count(), 1);
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
    }
}
