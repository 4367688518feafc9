use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::system::snapshot::DiskStatus;

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn format_mhz(mhz: f64) -> String {
    format!("{mhz:.2} MHz")
}

pub fn format_percent(percent: f64) -> String {
    format!("{percent:.2}%")
}

pub fn format_gb(gb: f64) -> String {
    format!("{gb:.2} GB")
}

/// Status text for one storage row; `None` until the first poll lands.
pub fn disk_status_text(status: Option<&DiskStatus>) -> String {
    match status {
        Some(DiskStatus::Usage { used_gb, free_gb }) => format!(
            "Used: {}, Available: {}",
            format_gb(*used_gb),
            format_gb(*free_gb)
        ),
        Some(DiskStatus::PermissionDenied) => "Permission Denied".to_string(),
        None => "Calculating...".to_string(),
    }
}
