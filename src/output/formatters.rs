//! Formatting utilities for terminal output

use crate::commands::TemplateSummary;
use crate::core::{BLOCK_MARKER, PuzzleDocument};

/// Grid rows with one space between cells, e.g. `R A D I O`
#[must_use]
pub fn grid_rows(document: &PuzzleDocument) -> Vec<String> {
    document
        .grid
        .chunks(document.size.max(1))
        .map(|row| {
            row.iter()
                .map(|cell| if cell.is_empty() { "?" } else { cell.as_str() })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Pattern rows with each numbered cell showing its number
///
/// Cells are three characters wide: `  1`, `  .` or `  #`.
#[must_use]
pub fn numbered_rows(summary: &TemplateSummary) -> Vec<String> {
    let size = summary.rows.len().max(1);
    summary
        .rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.chars()
                .enumerate()
                .map(|(c, ch)| match summary.numbers.get(r * size + c).copied().flatten() {
                    Some(n) => format!("{n:>3}"),
                    None => format!("{ch:>3}"),
                })
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Whether a grid cell is a block marker
#[must_use]
pub fn is_block(cell: &str) -> bool {
    cell == BLOCK_MARKER
}
