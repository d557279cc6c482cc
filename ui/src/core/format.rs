//! Formatting helpers for dashboard readouts.

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

/// Confidence in `0.0..=1.0` as a whole percentage.
pub fn format_confidence(confidence: f32) -> String {
    format_percent((confidence.clamp(0.0, 1.0) * 100.0).round() as u32)
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
