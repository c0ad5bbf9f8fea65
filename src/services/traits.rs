//! Service layer trait definitions
//!
//! These traits are the seams between the resolver and its collaborators.
//! Implementations backed by the crate's own configuration exist
//! ([`super::brand_storage::ConfigRebrandPaths`],
//! [`crate::utils::url::ResourceUrlGenerator`]), but embedding applications
//! can supply their own.

use std::path::PathBuf;

/// Supplies the base directory where rebrand uploads are stored
///
/// The resolver asks the provider fresh on every cache miss and never keeps
/// its own copy of the path. Implementations must be cheap and perform no
/// I/O.
pub trait RebrandPathProvider: Send + Sync {
    fn rebrand_path(&self) -> PathBuf;
}

/// Builds the fully qualified public URL for a relative resource path
///
/// The resolver hands over paths shaped `rebrand/{slot}/{filename}` and
/// treats the result as an opaque string; serving that URL is the embedding
/// application's concern.
pub trait ResourceUrlBuilder: Send + Sync {
    fn resource_url(&self, resource_path: &str) -> String;
}
