//! Text block measurement for scroll-mode pacing.
//!
//! The engine treats the scrollable distance as an opaque scalar supplied
//! by the presentation side once the text is laid out. For a terminal that
//! layout is a greedy word wrap at a fixed column width.

pub const DEFAULT_WRAP_COLUMNS: usize = 64;

/// Height of one wrapped line, in the same units the scroll offset uses.
pub const LINE_HEIGHT_PX: f32 = 22.0;

/// Lines `text` occupies when greedily word-wrapped at `columns`. A word
/// wider than the column width still takes a single line.
pub fn wrapped_line_count(text: &str, columns: usize) -> usize {
    let columns = columns.max(1);
    let mut lines = 0usize;
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let width = word.chars().count().min(columns);
        if lines == 0 || used + 1 + width > columns {
            lines += 1;
            used = width;
        } else {
            used += 1 + width;
        }
    }

    lines
}

/// Rendered height of the full text block.
pub fn measure_text_height(text: &str, columns: usize) -> f32 {
    let lines = wrapped_line_count(text, columns);
    log::debug!("measured text block: {} lines at {} columns", lines, columns);
    lines as f32 * LINE_HEIGHT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_height() {
        assert_eq!(wrapped_line_count("", 40), 0);
        assert_eq!(measure_text_height("  \n ", 40), 0.0);
    }

    #[test]
    fn wraps_at_the_column_limit() {
        // "aaaa bbbb cccc" at 9 columns: "aaaa bbbb" then "cccc".
        assert_eq!(wrapped_line_count("aaaa bbbb cccc", 9), 2);
        assert_eq!(wrapped_line_count("aaaa bbbb cccc", 14), 1);
    }

    #[test]
    fn oversized_words_fill_their_line() {
        // The 21-char word saturates line one; "is long" shares line two.
        assert_eq!(wrapped_line_count("incomprehensibilities is long", 10), 2);
        assert_eq!(wrapped_line_count("incomprehensibilities", 10), 1);
    }

    #[test]
    fn height_scales_with_line_count() {
        let height = measure_text_height("aaaa bbbb cccc", 9);
        assert_eq!(height, 2.0 * LINE_HEIGHT_PX);
    }
}
