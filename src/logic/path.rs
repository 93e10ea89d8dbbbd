//! Path Utilities
//!
//! Backend paths always use forward slashes. Everything that becomes a fetch
//! key, a display value or stored state goes through `normalize_path` first.

/// Replace every backslash with a forward slash
///
/// # Example
/// ```
/// use visionvault::logic::path::normalize_path;
///
/// assert_eq!(normalize_path("a\\b"), "a/b");
/// assert_eq!(normalize_path("root/sub"), "root/sub");
/// ```
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Percent-encode a whole path as a single URL component (slashes included)
pub fn encode_path(path: &str) -> String {
    urlencoding::encode(path).into_owned()
}

/// Parent folder of a path: everything before the last `/`, or empty for a
/// top-level entry
pub fn parent_path(path: &str) -> String {
    let normalized = normalize_path(path);
    match normalized.rfind('/') {
        Some(idx) => normalized[..idx].to_string(),
        None => String::new(),
    }
}

/// Server-relative URL that serves an image's content
pub fn image_src(path: &str) -> String {
    let encoded = normalize_path(path)
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("/files/{}", encoded)
}

/// Final path segment, used as a display name when the backend sends none
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
