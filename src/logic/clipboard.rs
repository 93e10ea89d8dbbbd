//! Clipboard media detection
//!
//! Pasted content arrives as raw items (bytes plus an optional source name).
//! Only items whose media kind is an image are forwarded for upload.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::api::ImageBlob;

/// One raw clipboard entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    /// File name the bytes came from, if any
    pub source_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Image media type for a clipboard item
///
/// Sniffs the magic bytes first and falls back to the file extension of the
/// source name. Returns `None` for anything that is not an image.
///
/// # Arguments
/// * `bytes` - Raw clipboard content
/// * `source_name` - Optional name used when the bytes are not recognized
///
/// # Returns
/// A media type such as `image/png`, or `None`
pub fn image_media_type(bytes: &[u8], source_name: Option<&str>) -> Option<&'static str> {
    let format = image::guess_format(bytes).ok().or_else(|| {
        source_name
            .and_then(|name| Path::new(name).extension())
            .and_then(ImageFormat::from_extension)
    })?;

    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::Bmp => Some("image/bmp"),
        _ => None,
    }
}

fn extension_for(media_type: &str) -> &'static str {
    match media_type {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/bmp" => "bmp",
        _ => "png",
    }
}

/// Keep only image items, turning each into an upload blob
pub fn image_blobs(items: Vec<ClipboardItem>) -> Vec<ImageBlob> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            let mime = image_media_type(&item.bytes, item.source_name.as_deref())?;
            let file_name = item
                .source_name
                .as_deref()
                .map(|name| crate::logic::path::file_name(name).to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("pasted-{}.{}", idx + 1, extension_for(mime)));

            Some(ImageBlob {
                file_name,
                mime: mime.to_string(),
                bytes: item.bytes,
            })
        })
        .collect()
}

/// Candidate file paths in bracketed-paste text (one per non-empty line)
///
/// File managers quote paths or prefix them with `file://`; both are stripped.
pub fn pasted_paths(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .map(|line| line.trim_matches(|c| c == '\'' || c == '"'))
        .map(|line| line.strip_prefix("file://").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Default command that prints the clipboard image to stdout
pub fn default_clipboard_command() -> Option<Vec<String>> {
    let parts: &[&str] = if cfg!(target_os = "macos") {
        &["pngpaste", "-"]
    } else if cfg!(target_os = "linux") {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            &["wl-paste", "--no-newline", "--type", "image/png"]
        } else {
            &["xclip", "-selection", "clipboard", "-t", "image/png", "-o"]
        }
    } else {
        return None;
    };

    Some(parts.iter().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0];

    #[test]
    fn test_sniff_png_and_jpeg() {
        assert_eq!(image_media_type(PNG_MAGIC, None), Some("image/png"));
        assert_eq!(image_media_type(JPEG_MAGIC, None), Some("image/jpeg"));
    }

    #[test]
    fn test_text_is_not_image() {
        assert_eq!(image_media_type(b"hello world", None), None);
        assert_eq!(image_media_type(b"hello world", Some("notes.txt")), None);
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(image_media_type(b"", Some("launch.webp")), Some("image/webp"));
    }

    #[test]
    fn test_image_blobs_filters_non_images() {
        let items = vec![
            ClipboardItem {
                source_name: None,
                bytes: b"plain text".to_vec(),
            },
            ClipboardItem {
                source_name: None,
                bytes: PNG_MAGIC.to_vec(),
            },
            ClipboardItem {
                source_name: Some("/home/u/falcon.jpg".to_string()),
                bytes: JPEG_MAGIC.to_vec(),
            },
        ];

        let blobs = image_blobs(items);
        assert_eq!(blobs.len(), 2);
        assert_eq!(blobs[0].file_name, "pasted-2.png");
        assert_eq!(blobs[0].mime, "image/png");
        assert_eq!(blobs[1].file_name, "falcon.jpg");
        assert_eq!(blobs[1].mime, "image/jpeg");
    }

    #[test]
    fn test_pasted_paths() {
        let paths = pasted_paths("'/tmp/a b.png'\nfile:///tmp/c.jpg\n\n  ");
        assert_eq!(
            paths,
            vec![PathBuf::from("/tmp/a b.png"), PathBuf::from("/tmp/c.jpg")]
        );
    }
}
