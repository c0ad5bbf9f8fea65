use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The two fixed branding image categories a site can customize
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BrandSlot {
    Logo,
    Icon,
}

/// Outcome of locating the uploaded file for a slot
///
/// A cache without an entry for a slot means "not yet computed"; `NotFound`
/// is a real, memoized negative outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImagePath {
    Found(PathBuf),
    NotFound,
}

impl ResolvedImagePath {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}

/// An uploaded branding image: where it lives on disk and where it is served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandImage {
    pub slot: BrandSlot,
    /// Absolute filesystem location of the resolved file
    pub path: PathBuf,
    /// Public URL under which the surrounding application serves the file
    pub url: String,
    pub file_name: String,
    pub mime_type: String,
}

impl BrandImage {
    pub(crate) fn new(slot: BrandSlot, path: PathBuf, url: String) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = content_type_for(&file_name);
        Self {
            slot,
            path,
            url,
            file_name,
            mime_type,
        }
    }
}

/// MIME content type for a branding file, derived from its extension
pub(crate) fn content_type_for(file_name: &str) -> String {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    match extension.to_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_slot_names_round_trip() {
        assert_eq!(BrandSlot::Logo.to_string(), "logo");
        assert_eq!(BrandSlot::Icon.to_string(), "icon");
        assert_eq!(BrandSlot::from_str("logo").unwrap(), BrandSlot::Logo);
        assert_eq!(BrandSlot::from_str("icon").unwrap(), BrandSlot::Icon);
    }

    #[test]
    fn test_unknown_slot_names_do_not_parse() {
        assert!(BrandSlot::from_str("favicon").is_err());
        assert!(BrandSlot::from_str("Logo").is_err());
        assert!(BrandSlot::from_str("").is_err());
    }

    #[test]
    fn test_slot_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BrandSlot::Logo).unwrap(), "\"logo\"");
        assert_eq!(
            serde_json::from_str::<BrandSlot>("\"icon\"").unwrap(),
            BrandSlot::Icon
        );
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("brand.png"), "image/png");
        assert_eq!(content_type_for("brand.JPG"), "image/jpeg");
        assert_eq!(content_type_for("favicon.ico"), "image/x-icon");
        assert_eq!(content_type_for("brand"), "application/octet-stream");
    }

    #[test]
    fn test_image_derives_file_name_and_mime_type() {
        let image = BrandImage::new(
            BrandSlot::Logo,
            PathBuf::from("/data/rebrand/logo/brand.svg"),
            "http://localhost:8080/resources/rebrand/logo/brand.svg".to_string(),
        );
        assert_eq!(image.file_name, "brand.svg");
        assert_eq!(image.mime_type, "image/svg+xml");
    }
}
