//! Template inspection
//!
//! Summarizes a template's pattern, numbering and slots for display.

use crate::core::{BLOCK_MARKER, GridTemplate, Orientation, TemplateError};

/// One slot as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSummary {
    pub number: u32,
    pub orientation: Orientation,
    pub length: usize,
    /// Row and column of the first cell
    pub start: (usize, usize),
}

/// Everything the `numbering` command prints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSummary {
    pub name: String,
    /// Pattern rows, `.` open and `#` blocked
    pub rows: Vec<String>,
    /// Derived number per cell, row-major
    pub numbers: Vec<Option<u32>>,
    pub slots: Vec<SlotSummary>,
    pub open_count: usize,
    pub authored: bool,
}

impl TemplateSummary {
    #[must_use]
    pub fn count(&self, orientation: Orientation) -> usize {
        self.slots
            .iter()
            .filter(|s| s.orientation == orientation)
            .count()
    }
}

/// Summarize `template`
///
/// # Errors
/// Returns `TemplateError` if the template's slots cannot be resolved.
pub fn inspect_template(template: &GridTemplate) -> Result<TemplateSummary, TemplateError> {
    let size = template.size();
    let layout = template.layout()?;
    let numbering = template.numbering();

    let rows: Vec<String> = template
        .pattern()
        .chunks(size)
        .map(|row| {
            row.iter()
                .map(|cell| if cell.is_open() { "." } else { BLOCK_MARKER })
                .collect()
        })
        .collect();

    let slots = layout
        .across
        .iter()
        .chain(&layout.down)
        .filter_map(|slot| {
            let first = *slot.cells.first()?;
            Some(SlotSummary {
                number: slot.number,
                orientation: slot.orientation,
                length: slot.len(),
                start: (first / size, first % size),
            })
        })
        .collect();

    Ok(TemplateSummary {
        name: template.name().to_string(),
        rows,
        numbers: (0..size * size).map(|i| numbering.number_at(i)).collect(),
        slots,
        open_count: template.open_count(),
        authored: template.has_authored_slots(),
    })
}
