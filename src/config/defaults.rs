/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Web defaults
// Note: base_url is the ONLY truly mandatory field with no default
pub const DEFAULT_RESOURCE_TRIGGER: &str = "resources";

// Storage defaults
pub const DEFAULT_REBRAND_PATH: &str = "./data/rebrand";
