//! Greedy word wrapping against injected font metrics.

use crate::metrics::FontMetrics;
use billow_style::FontSpec;

/// Wrap `text` into lines no wider than `max_width`.
///
/// Whitespace-delimited tokens accumulate onto the current line while the
/// measured candidate still fits; on overflow the line is flushed and the
/// offending token starts the next one. A single token wider than
/// `max_width` is placed alone on its own line rather than split or
/// dropped. Explicit newlines in the input always start a new line, and
/// blank input lines are preserved.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font: &FontSpec,
    metrics: &dyn FontMetrics,
) -> Vec<String> {
    if max_width <= 0.0 {
        return text.lines().map(|s| s.to_string()).collect();
    }
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if metrics.measure(&candidate, font) > max_width && !current.is_empty() {
                lines.push(current);
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Truncate `line` so it fits `max_width`, ending in a visible marker.
///
/// Used as the overflow fallback for tokens that cannot be wrapped; the
/// element is clipped rather than aborting the export.
pub fn clip_to_width(
    line: &str,
    max_width: f32,
    font: &FontSpec,
    metrics: &dyn FontMetrics,
) -> String {
    const MARKER: &str = "...";
    if metrics.measure(line, font) <= max_width {
        return line.to_string();
    }
    let mut clipped = String::new();
    for ch in line.chars() {
        let mut candidate = clipped.clone();
        candidate.push(ch);
        candidate.push_str(MARKER);
        if metrics.measure(&candidate, font) > max_width {
            break;
        }
        clipped.push(ch);
    }
    clipped.push_str(MARKER);
    clipped
}
