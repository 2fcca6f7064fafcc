use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates to at most `max_width` terminal columns, ending in "..." when cut.
/// Native scripts are measured by display width, not bytes.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height.saturating_sub(visible_height).min(u16::MAX as usize) as u16
}

pub fn format_seconds(secs: f64) -> String {
    format!("{:.1}s", secs)
}
