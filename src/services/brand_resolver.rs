//! Branding image resolution with per-instance memoization
//!
//! Each slot's upload directory holds at most one file of interest. The
//! resolver scans that directory once, memoizes the outcome (hit or miss),
//! and lazily builds the public-facing [`BrandImage`] value at most once per
//! slot. Repeated queries within one resolver instance cost a map lookup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::errors::{RebrandError, RebrandResult};
use crate::models::{BrandImage, BrandSlot, ResolvedImagePath};

use super::brand_storage::BrandImageStorage;
use super::traits::ResourceUrlBuilder;

/// Resolves the uploaded branding image for each slot
///
/// Both caches are scoped to this instance: create one resolver per logical
/// request/session. Entries are written once and never invalidated, so a
/// long-lived instance deliberately does not observe files uploaded after
/// its first scan of a slot.
pub struct BrandImageResolver {
    storage: BrandImageStorage,
    url_builder: Arc<dyn ResourceUrlBuilder>,
    path_cache: RwLock<HashMap<BrandSlot, ResolvedImagePath>>,
    image_cache: RwLock<HashMap<BrandSlot, Option<BrandImage>>>,
}

impl BrandImageResolver {
    pub fn new(storage: BrandImageStorage, url_builder: Arc<dyn ResourceUrlBuilder>) -> Self {
        Self {
            storage,
            url_builder,
            path_cache: RwLock::new(HashMap::new()),
            image_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns whether a custom logo has been uploaded
    pub async fn is_logo_uploaded(&self) -> RebrandResult<bool> {
        self.is_uploaded(BrandSlot::Logo).await
    }

    /// Returns whether a custom site icon has been uploaded
    pub async fn is_icon_uploaded(&self) -> RebrandResult<bool> {
        self.is_uploaded(BrandSlot::Icon).await
    }

    /// Returns whether an image has been uploaded for `slot`
    pub async fn is_uploaded(&self, slot: BrandSlot) -> RebrandResult<bool> {
        Ok(self.resolve_path(slot).await?.is_found())
    }

    /// String-keyed variant of [`Self::is_uploaded`]
    ///
    /// Unknown slot names are reported as not uploaded; callers cannot
    /// distinguish them from a valid slot with nothing uploaded.
    pub async fn is_uploaded_named(&self, slot: &str) -> RebrandResult<bool> {
        match BrandSlot::from_str(slot) {
            Ok(slot) => self.is_uploaded(slot).await,
            Err(_) => Ok(false),
        }
    }

    /// The uploaded logo, or `None` if no logo has been uploaded
    pub async fn logo(&self) -> RebrandResult<Option<BrandImage>> {
        self.image(BrandSlot::Logo).await
    }

    /// The uploaded site icon, or `None` if no icon has been uploaded
    pub async fn icon(&self) -> RebrandResult<Option<BrandImage>> {
        self.image(BrandSlot::Icon).await
    }

    /// The uploaded image for `slot`, if any
    ///
    /// The image value (path plus generated resource URL) is built at most
    /// once per slot and cached for the lifetime of this resolver.
    pub async fn image(&self, slot: BrandSlot) -> RebrandResult<Option<BrandImage>> {
        {
            let cache = self.image_cache.read().await;
            if let Some(image) = cache.get(&slot) {
                debug!("Image cache hit for {} slot", slot);
                return Ok(image.clone());
            }
        }

        let image = match self.resolve_path(slot).await? {
            ResolvedImagePath::Found(path) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let url = self
                    .url_builder
                    .resource_url(&format!("rebrand/{slot}/{file_name}"));
                Some(BrandImage::new(slot, path, url))
            }
            ResolvedImagePath::NotFound => None,
        };

        let mut cache = self.image_cache.write().await;
        Ok(cache.entry(slot).or_insert(image).clone())
    }

    /// String-keyed variant of [`Self::image`]; unknown slot names yield `None`
    pub async fn image_named(&self, slot: &str) -> RebrandResult<Option<BrandImage>> {
        match BrandSlot::from_str(slot) {
            Ok(slot) => self.image(slot).await,
            Err(_) => Ok(None),
        }
    }

    /// Locate the uploaded file for `slot`, memoizing the outcome
    ///
    /// The first call scans the slot directory; every later call returns the
    /// memoized outcome without touching the filesystem. A missing directory
    /// is a memoized miss. An unreadable directory is surfaced as
    /// [`RebrandError::DirectoryUnreadable`] and leaves the cache unset so a
    /// later call re-attempts the scan.
    pub async fn resolve_path(&self, slot: BrandSlot) -> RebrandResult<ResolvedImagePath> {
        {
            let cache = self.path_cache.read().await;
            if let Some(resolved) = cache.get(&slot) {
                debug!("Path cache hit for {} slot", slot);
                return Ok(resolved.clone());
            }
        }

        let dir = self.storage.slot_dir(slot);
        let resolved = Self::scan_slot_dir(slot, &dir).await?;

        // First writer wins; a racing scan of the same slot returns the
        // entry that was cached ahead of it.
        let mut cache = self.path_cache.write().await;
        Ok(cache.entry(slot).or_insert(resolved).clone())
    }

    /// One-shot scan of a slot directory for its uploaded file
    ///
    /// When more than one file is present, the lexicographically smallest
    /// file name wins. This is a deliberate deviation from relying on the
    /// filesystem's enumeration order, which is platform-defined.
    async fn scan_slot_dir(slot: BrandSlot, dir: &Path) -> RebrandResult<ResolvedImagePath> {
        match fs::metadata(dir).await {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => {
                debug!("Rebrand path for {} slot is not a directory: {}", slot, dir.display());
                return Ok(ResolvedImagePath::NotFound);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No upload directory for {} slot: {}", slot, dir.display());
                return Ok(ResolvedImagePath::NotFound);
            }
            Err(source) => {
                return Err(RebrandError::DirectoryUnreadable {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        }

        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|source| RebrandError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut resolved: Option<(String, PathBuf)> = None;
        loop {
            let entry = entries
                .next_entry()
                .await
                .map_err(|source| RebrandError::DirectoryUnreadable {
                    path: dir.to_path_buf(),
                    source,
                })?;
            let Some(entry) = entry else {
                break;
            };

            let path = entry.path();
            // Follow symlinks so a link to a subdirectory is skipped like one
            let metadata = match fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Skipping unreadable entry {}: {}", path.display(), e);
                    continue;
                }
            };
            if metadata.is_dir() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            match &resolved {
                Some((current, _)) if *current <= file_name => {}
                _ => resolved = Some((file_name, path)),
            }
        }

        match resolved {
            Some((file_name, path)) => {
                debug!("Resolved {} slot to {}", slot, file_name);
                Ok(ResolvedImagePath::Found(path))
            }
            None => {
                debug!("No uploaded file for {} slot in {}", slot, dir.display());
                Ok(ResolvedImagePath::NotFound)
            }
        }
    }
}
