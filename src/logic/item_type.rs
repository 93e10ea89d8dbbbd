//! Item type derivation
//!
//! Search results come back without a reliable `type`, so the display type is
//! derived from the file extension of the path.

use super::path::file_name;

/// Extensions rendered as images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Lowercased extension of the last path segment, without the leading dot
pub fn extension(path: &str) -> Option<String> {
    let name = file_name(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        // ".hidden" or "trailing." have no usable extension
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Display type for a path: `"image"`, the bare extension, or `"unknown"`
///
/// # Example
/// ```
/// use visionvault::logic::item_type::derive_item_type;
///
/// assert_eq!(derive_item_type("photos/x.PNG"), "image");
/// assert_eq!(derive_item_type("docs/report.pdf"), "pdf");
/// assert_eq!(derive_item_type("README"), "unknown");
/// ```
pub fn derive_item_type(path: &str) -> String {
    match extension(path) {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => "image".to_string(),
        Some(ext) => ext,
        None => "unknown".to_string(),
    }
}

/// Label shown in a non-image card's icon slot
pub fn type_label(item_type: &str) -> String {
    if item_type.is_empty() {
        "UNKNOWN".to_string()
    } else {
        item_type.to_uppercase()
    }
}
