//! Edit form normalization
//!
//! Pure functions that translate between stored metadata and form fields.

use crate::api::FileUpdate;

/// Tag value the backend stores for files without tags
pub const UNTAGGED: &str = "untagged";

/// Description the backend stores for files without one
pub const NO_DESCRIPTION: &str = "No description available";

/// Value shown in the tags field for a stored tag string
pub fn tags_for_form(tags: Option<&str>) -> String {
    match tags {
        Some(UNTAGGED) | None => String::new(),
        Some(tags) => tags.to_string(),
    }
}

/// Build the update body from raw form input: trims every field and fills in
/// the defaults for blank tags and description
///
/// # Example
/// ```
/// use visionvault::logic::edit::build_update;
///
/// let update = build_update(" cat.jpg ", "   ", "");
/// assert_eq!(update.name, "cat.jpg");
/// assert_eq!(update.tags, "untagged");
/// assert_eq!(update.description, "No description available");
/// ```
pub fn build_update(name: &str, tags: &str, description: &str) -> FileUpdate {
    let tags = tags.trim();
    let description = description.trim();

    FileUpdate {
        name: name.trim().to_string(),
        tags: if tags.is_empty() { UNTAGGED } else { tags }.to_string(),
        description: if description.is_empty() {
            NO_DESCRIPTION
        } else {
            description
        }
        .to_string(),
    }
}
