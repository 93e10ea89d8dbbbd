/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("vvault-debug.log");
    path
}

/// Truncate `text` to at most `max_width` display columns, marking the cut
/// with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("cat.jpg", 10), "cat.jpg");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("falcon-heavy-launch.jpg", 8), "falcon-…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
