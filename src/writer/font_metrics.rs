//! Text measurement for canvases that have no real font at hand.

/// Trait for font metrics needed for layout.
pub trait FontMetrics {
    /// Calculate the width of text in the canvas unit.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Simple font metrics using average character width.
#[derive(Debug, Clone, Copy)]
pub struct SimpleFontMetrics {
    /// Average character width as proportion of font size
    pub char_width_ratio: f32,
}

impl Default for SimpleFontMetrics {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.5, // Typical for proportional fonts
        }
    }
}

impl SimpleFontMetrics {
    /// Create metrics for monospace fonts.
    pub fn monospace() -> Self {
        Self {
            char_width_ratio: 0.6,
        }
    }
}

impl FontMetrics for SimpleFontMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.char_width_ratio
    }
}

/// Wrap text to fit within a given width.
///
/// Explicit `\n` always starts a new line; words longer than the width are
/// kept whole on a line of their own.
pub(crate) fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn FontMetrics,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();

        for word in paragraph.split_whitespace() {
            let test_line = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };

            if current_line.is_empty() || metrics.text_width(&test_line, font_size) <= max_width {
                current_line = test_line;
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }

        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_metrics_width() {
        let metrics = SimpleFontMetrics::default();
        assert_eq!(metrics.text_width("abcd", 10.0), 20.0);
        assert_eq!(SimpleFontMetrics::monospace().text_width("ab", 10.0), 12.0);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let metrics = SimpleFontMetrics::default();
        let lines = wrap_text("Hello World", 100.0, 12.0, &metrics);
        assert_eq!(lines, vec!["Hello World"]);
    }

    #[test]
    fn test_wrap_breaks_on_width() {
        let metrics = SimpleFontMetrics::default();
        // each char is 5 wide at size 10
        let lines = wrap_text("aaaa bbbb cccc", 40.0, 10.0, &metrics);
        assert_eq!(lines, vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn test_wrap_honours_newlines() {
        let metrics = SimpleFontMetrics::default();
        let lines = wrap_text("Bob\nSmith", 100.0, 10.0, &metrics);
        assert_eq!(lines, vec!["Bob", "Smith"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        let metrics = SimpleFontMetrics::default();
        assert_eq!(wrap_text("", 100.0, 10.0, &metrics), vec![String::new()]);
    }
}
