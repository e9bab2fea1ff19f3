//! Text helpers for fitting strings into fixed-width cells.

/// Truncate `text` to at most `max_width` characters, appending an
/// ellipsis when something was cut. Width is counted in chars, which is
/// good enough for the single-width data the gallery renders.
pub fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let char_count = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Pad or truncate `text` to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let mut fitted = truncate(text, width);
    let char_count = fitted.chars().count();
    if char_count < width {
        fitted.extend(std::iter::repeat(' ').take(width - char_count));
    }
    fitted
}
