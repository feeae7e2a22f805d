//! Human-readable byte formatting.

const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];

/// Render a byte count with base-1024 units and at most two decimals,
/// trailing zeros stripped. Deterministic, so the same count always
/// renders the same way in every message.
pub fn human_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes}B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{rendered}{}", UNITS[unit])
}
