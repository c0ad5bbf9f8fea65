//! URL utilities for consistent URL handling
//!
//! This module provides utilities for URL normalization and validation, plus
//! the configuration-backed resource URL builder used for resolved branding
//! images.

use url::Url;

use crate::config::WebConfig;
use crate::errors::{RebrandError, RebrandResult};
use crate::services::traits::ResourceUrlBuilder;

/// URL utilities for consistent URL handling
pub struct UrlUtils;

impl UrlUtils {
    /// Normalize URL scheme by ensuring it has a proper HTTP/HTTPS prefix
    ///
    /// If no scheme is provided, it defaults to HTTP. This is useful for
    /// handling configured base URLs where the protocol was omitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebrand_assets::utils::url::UrlUtils;
    ///
    /// assert_eq!(UrlUtils::normalize_scheme("example.com"), "http://example.com");
    /// assert_eq!(UrlUtils::normalize_scheme("https://example.com"), "https://example.com");
    /// ```
    pub fn normalize_scheme(url: &str) -> String {
        let trimmed = url.trim();

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        }
    }

    /// Parse and validate a URL
    pub fn parse_and_validate(url: &str) -> Result<Url, url::ParseError> {
        Url::parse(url)
    }

    /// Check if a URL is valid
    pub fn is_valid(url: &str) -> bool {
        Self::parse_and_validate(url).is_ok()
    }

    /// Sanitize URL by removing trailing slashes and normalizing
    pub fn sanitize(url: &str) -> String {
        let mut sanitized = Self::normalize_scheme(url);

        // Remove trailing slashes (but keep the one after the scheme)
        while sanitized.len() > 8 && sanitized.ends_with('/') {
            sanitized.pop();
        }

        sanitized
    }
}

/// Builds public resource URLs from the web configuration
///
/// Resolved branding files are expected to be served by the surrounding
/// application under `{base_url}/{resource_trigger}/{resource_path}`; this
/// type only builds that URL string.
#[derive(Debug, Clone)]
pub struct ResourceUrlGenerator {
    base_url: String,
    resource_trigger: String,
}

impl ResourceUrlGenerator {
    pub fn new(
        base_url: impl Into<String>,
        resource_trigger: impl Into<String>,
    ) -> RebrandResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(RebrandError::Configuration {
                message: "base_url must not be empty".to_string(),
            });
        }

        let base_url = UrlUtils::sanitize(&base_url);
        if !UrlUtils::is_valid(&base_url) {
            return Err(RebrandError::Configuration {
                message: format!("base_url is not a valid URL: {base_url}"),
            });
        }

        Ok(Self {
            base_url,
            resource_trigger: resource_trigger.into().trim_matches('/').to_string(),
        })
    }

    pub fn from_config(web: &WebConfig) -> RebrandResult<Self> {
        Self::new(&web.base_url, &web.resource_trigger)
    }
}

impl ResourceUrlBuilder for ResourceUrlGenerator {
    fn resource_url(&self, resource_path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.resource_trigger,
            resource_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scheme() {
        assert_eq!(
            UrlUtils::normalize_scheme("example.com"),
            "http://example.com"
        );
        assert_eq!(
            UrlUtils::normalize_scheme("https://example.com"),
            "https://example.com"
        );
        assert_eq!(
            UrlUtils::normalize_scheme("  example.com  "),
            "http://example.com"
        );
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(
            UrlUtils::sanitize("https://example.com/"),
            "https://example.com"
        );
        assert_eq!(
            UrlUtils::sanitize("https://example.com///"),
            "https://example.com"
        );
        assert_eq!(UrlUtils::sanitize("example.com/"), "http://example.com");
    }

    #[test]
    fn test_is_valid() {
        assert!(UrlUtils::is_valid("https://example.com"));
        assert!(UrlUtils::is_valid("http://example.com/path?query=value"));
        assert!(!UrlUtils::is_valid("not-a-url"));
        assert!(!UrlUtils::is_valid(""));
    }

    #[test]
    fn test_resource_url_generation() {
        let generator = ResourceUrlGenerator::new("https://cms.example.com/", "resources").unwrap();
        assert_eq!(
            generator.resource_url("rebrand/logo/brand.png"),
            "https://cms.example.com/resources/rebrand/logo/brand.png"
        );
        assert_eq!(
            generator.resource_url("/rebrand/icon/favicon.ico"),
            "https://cms.example.com/resources/rebrand/icon/favicon.ico"
        );
    }

    #[test]
    fn test_trigger_slashes_are_trimmed() {
        let generator = ResourceUrlGenerator::new("https://cms.example.com", "/cpresources/").unwrap();
        assert_eq!(
            generator.resource_url("rebrand/logo/brand.png"),
            "https://cms.example.com/cpresources/rebrand/logo/brand.png"
        );
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let err = ResourceUrlGenerator::new("  ", "resources").unwrap_err();
        assert!(matches!(err, RebrandError::Configuration { .. }));
    }

    #[test]
    fn test_from_config() {
        let web = WebConfig {
            base_url: "http://localhost:8080/".to_string(),
            resource_trigger: "resources".to_string(),
        };
        let generator = ResourceUrlGenerator::from_config(&web).unwrap();
        assert_eq!(
            generator.resource_url("rebrand/logo/brand.png"),
            "http://localhost:8080/resources/rebrand/logo/brand.png"
        );
    }
}
