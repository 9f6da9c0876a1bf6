//! Formatting utilities for terminal output

/// Placeholder for a hidden word: one underscore per letter
#[must_use]
pub fn mask_word(word: &str) -> String {
    "_".repeat(word.chars().count())
}

/// Lay out `cells` left-aligned in rows of `columns`, padded to the widest cell
#[must_use]
pub fn format_columns<S: AsRef<str>>(cells: &[S], columns: usize) -> Vec<String> {
    let width = cells
        .iter()
        .map(|c| c.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    cells
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|c| format!("{:<width$}", c.as_ref()))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_counts_letters() {
        assert_eq!(mask_word("cat"), "___");
        assert_eq!(mask_word(""), "");
    }

    #[test]
    fn columns_wrap_and_pad() {
        let cells = ["a", "bbb", "cc", "d"];
        let rows = format_columns(&cells, 3);
        assert_eq!(rows, ["a    bbb  cc", "d"]);
    }

    #[test]
    fn columns_of_nothing() {
        let cells: [&str; 0] = [];
        assert!(format_columns(&cells, 4).is_empty());
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
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
