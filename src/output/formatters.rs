//! Formatting utilities for terminal output

use crate::core::PUZZLE_SIZE;

/// Format a board as spaced uppercase letters with the center bracketed
///
/// # Examples
/// ```
/// use spelling_bee::output::formatters::board_text;
///
/// assert_eq!(board_text(b"acegiop"), "[A] C E G I O P");
/// ```
#[must_use]
pub fn board_text(board: &[u8; PUZZLE_SIZE]) -> String {
    let mut result = format!("[{}]", board[0].to_ascii_uppercase() as char);
    for &letter in &board[1..] {
        result.push(' ');
        result.push(letter.to_ascii_uppercase() as char);
    }
    result
}

/// Running totals in the `N words; M points` form
#[must_use]
pub fn totals_line(words: usize, points: u32) -> String {
    format!("{words} words; {points} points")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score progress as a bar of the given width
#[must_use]
pub fn score_bar(current: u32, total: u32, width: usize) -> String {
    create_progress_bar(f64::from(current), f64::from(total), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_text_brackets_center() {
        assert_eq!(board_text(b"gabcdef"), "[G] A B C D E F");
    }

    #[test]
    fn totals_line_format() {
        assert_eq!(totals_line(3, 12), "3 words; 12 points");
        assert_eq!(totals_line(0, 0), "0 words; 0 points");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_clamps() {
        assert_eq!(score_bar(30, 20, 4), "████");
    }
}
