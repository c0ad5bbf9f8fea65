//! Storage layout for uploaded branding images
//!
//! Uploads live in one subdirectory per slot under the rebrand storage root,
//! e.g. `{rebrand_path}/logo/brand.png`. This module only locates those
//! directories; it never creates, validates, or modifies them.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::models::BrandSlot;

use super::traits::RebrandPathProvider;

/// Locates the per-slot upload directories under the rebrand storage root
#[derive(Clone)]
pub struct BrandImageStorage {
    paths: Arc<dyn RebrandPathProvider>,
}

impl BrandImageStorage {
    pub fn new(paths: Arc<dyn RebrandPathProvider>) -> Self {
        Self { paths }
    }

    /// Directory scanned for `slot` uploads
    ///
    /// Asks the path provider fresh on every call; existence checking is the
    /// resolver's responsibility.
    pub fn slot_dir(&self, slot: BrandSlot) -> PathBuf {
        self.paths.rebrand_path().join(slot.as_ref())
    }
}

/// Path provider backed by the crate's storage configuration
#[derive(Debug, Clone)]
pub struct ConfigRebrandPaths {
    rebrand_path: PathBuf,
}

impl ConfigRebrandPaths {
    pub fn new(rebrand_path: PathBuf) -> Self {
        Self { rebrand_path }
    }

    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(storage.rebrand_path.clone())
    }
}

impl RebrandPathProvider for ConfigRebrandPaths {
    fn rebrand_path(&self) -> PathBuf {
        self.rebrand_path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_dir_joins_root_and_slot_name() {
        let paths = Arc::new(ConfigRebrandPaths::new(PathBuf::from("/data/rebrand")));
        let storage = BrandImageStorage::new(paths);

        assert_eq!(
            storage.slot_dir(BrandSlot::Logo),
            PathBuf::from("/data/rebrand/logo")
        );
        assert_eq!(
            storage.slot_dir(BrandSlot::Icon),
            PathBuf::from("/data/rebrand/icon")
        );
    }

    #[test]
    fn test_from_config_uses_configured_root() {
        let storage_config = StorageConfig {
            rebrand_path: PathBuf::from("./data/rebrand"),
        };
        let paths = ConfigRebrandPaths::from_config(&storage_config);
        assert_eq!(paths.rebrand_path(), PathBuf::from("./data/rebrand"));
    }
}
