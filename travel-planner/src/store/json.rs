//! JSON-file route store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{RouteRecord, RouteStore, StoreError, seed_routes};

/// On-disk layout of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredRoutes {
    routes: Vec<RouteRecord>,
}

/// Configuration for the JSON route store.
#[derive(Debug, Clone)]
pub struct JsonStoreConfig {
    /// Path to the store file.
    pub path: PathBuf,
    /// Write the seed routes when the file has to be created.
    pub seed_if_absent: bool,
}

impl JsonStoreConfig {
    /// Create a config for `path` that seeds a newly created file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed_if_absent: true,
        }
    }

    /// Choose whether a newly created file gets the seed routes.
    pub fn with_seed(mut self, seed_if_absent: bool) -> Self {
        self.seed_if_absent = seed_if_absent;
        self
    }
}

impl Default for JsonStoreConfig {
    fn default() -> Self {
        Self::new("routes.json")
    }
}

/// Route store persisted as a pretty-printed JSON file.
///
/// The whole file is held in memory and rewritten on every insert.
#[derive(Debug)]
pub struct JsonRouteStore {
    config: JsonStoreConfig,
    routes: Vec<RouteRecord>,
}

impl JsonRouteStore {
    /// Open the store, creating the file if it does not exist.
    ///
    /// A new file gets the seed routes when `seed_if_absent` is set.
    pub fn open(config: JsonStoreConfig) -> Result<Self, StoreError> {
        if config.path.exists() {
            let contents =
                std::fs::read_to_string(&config.path).map_err(|e| StoreError::Io {
                    message: format!("failed to read {}: {}", config.path.display(), e),
                })?;
            let stored: StoredRoutes =
                serde_json::from_str(&contents).map_err(|e| StoreError::Json {
                    message: format!("failed to parse {}: {}", config.path.display(), e),
                })?;
            debug!(
                path = %config.path.display(),
                routes = stored.routes.len(),
                "Opened route store"
            );
            return Ok(Self {
                config,
                routes: stored.routes,
            });
        }

        let routes = if config.seed_if_absent {
            seed_routes()
        } else {
            Vec::new()
        };
        let store = Self { config, routes };
        store.write(&store.routes)?;
        info!(
            path = %store.config.path.display(),
            routes = store.routes.len(),
            "Created route store"
        );
        Ok(store)
    }

    fn write(&self, routes: &[RouteRecord]) -> Result<(), StoreError> {
        let path = &self.config.path;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                message: format!("failed to create store directory: {}", e),
            })?;
        }

        let stored = StoredRoutes {
            routes: routes.to_vec(),
        };
        let json = serde_json::to_string_pretty(&stored).map_err(|e| StoreError::Json {
            message: format!("failed to serialize routes: {}", e),
        })?;

        std::fs::write(path, json).map_err(|e| StoreError::Io {
            message: format!("failed to write {}: {}", path.display(), e),
        })
    }

    /// Get the store file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Number of stored routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are stored.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteStore for JsonRouteStore {
    fn load_all_routes(&self) -> Result<Vec<RouteRecord>, StoreError> {
        Ok(self.routes.clone())
    }

    fn insert_route(&mut self, record: &RouteRecord) -> Result<(), StoreError> {
        if self.routes.iter().any(|r| r.same_key(record)) {
            return Err(record.duplicate_error());
        }

        let mut routes = self.routes.clone();
        routes.push(record.clone());
        self.write(&routes)?;
        self.routes = routes;
        Ok(())
    }
}
