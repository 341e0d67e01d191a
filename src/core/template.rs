//! Grid templates
//!
//! A template is a fixed 5x5 blocked/open pattern, optionally with an authored
//! slot list. Templates without authored slots get their slots and numbers from
//! [`Numbering`].

use super::{Cell, Numbering, Orientation, Slot, SlotLayout};
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Side length of every supported grid
pub const GRID_SIZE: usize = 5;

/// Error type for malformed templates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template must have {expected} cells, got {actual}")]
    WrongCellCount { expected: usize, actual: usize },

    #[error("invalid pattern character {0:?}")]
    InvalidCharacter(char),

    #[error("slot {number}-{orientation} has length {length}; slots need at least 2 cells")]
    SlotTooShort {
        number: u32,
        orientation: Orientation,
        length: usize,
    },

    #[error("slot {number}-{orientation} runs off the grid")]
    SlotOutOfBounds { number: u32, orientation: Orientation },

    #[error("slot {number}-{orientation} covers blocked cell {index}")]
    SlotCrossesBlock {
        number: u32,
        orientation: Orientation,
        index: usize,
    },

    #[error("slot number {number} used twice for {orientation}")]
    DuplicateNumber { number: u32, orientation: Orientation },
}

/// An authored slot: crossword number, direction, start coordinate and length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub number: u32,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
    pub length: usize,
}

impl SlotSpec {
    #[must_use]
    pub const fn across(number: u32, row: usize, col: usize, length: usize) -> Self {
        Self {
            number,
            orientation: Orientation::Across,
            row,
            col,
            length,
        }
    }

    #[must_use]
    pub const fn down(number: u32, row: usize, col: usize, length: usize) -> Self {
        Self {
            number,
            orientation: Orientation::Down,
            row,
            col,
            length,
        }
    }
}

/// A 5x5 puzzle structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTemplate {
    name: String,
    pattern: Vec<Cell>,
    slots: Option<Vec<SlotSpec>>,
}

impl GridTemplate {
    /// Build a template from five row strings of `.` (open) and `#` (blocked)
    ///
    /// # Errors
    /// Returns `TemplateError` if the rows do not describe exactly 25 valid cells.
    ///
    /// # Examples
    /// ```
    /// use mini_crossword::core::GridTemplate;
    ///
    /// let template = GridTemplate::from_rows("plain", &[".....", ".....", ".....", ".....", "....."]).unwrap();
    /// assert_eq!(template.open_count(), 25);
    ///
    /// assert!(GridTemplate::from_rows("short", &["....."]).is_err());
    /// ```
    pub fn from_rows(name: impl Into<String>, rows: &[&str]) -> Result<Self, TemplateError> {
        let pattern = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|ch| Cell::from_char(ch).ok_or(TemplateError::InvalidCharacter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(name, pattern)
    }

    /// Build a template from a flat row-major cell pattern
    ///
    /// # Errors
    /// Returns `TemplateError::WrongCellCount` unless the pattern has 25 cells.
    pub fn new(name: impl Into<String>, pattern: Vec<Cell>) -> Result<Self, TemplateError> {
        let expected = GRID_SIZE * GRID_SIZE;
        if pattern.len() != expected {
            return Err(TemplateError::WrongCellCount {
                expected,
                actual: pattern.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            pattern,
            slots: None,
        })
    }

    /// Attach an authored slot list; its numbering is used verbatim
    ///
    /// # Errors
    /// Returns `TemplateError` if any slot is shorter than 2, leaves the grid,
    /// covers a blocked cell, or reuses a number within its orientation.
    pub fn with_slots(mut self, slots: Vec<SlotSpec>) -> Result<Self, TemplateError> {
        let mut seen = Vec::with_capacity(slots.len());
        for spec in &slots {
            if seen.contains(&(spec.number, spec.orientation)) {
                return Err(TemplateError::DuplicateNumber {
                    number: spec.number,
                    orientation: spec.orientation,
                });
            }
            seen.push((spec.number, spec.orientation));
            self.resolve_spec(spec)?;
        }

        self.slots = Some(slots);
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        GRID_SIZE
    }

    #[must_use]
    pub fn pattern(&self) -> &[Cell] {
        &self.pattern
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.pattern.get(index).is_some_and(|cell| cell.is_open())
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.pattern.iter().filter(|cell| cell.is_open()).count()
    }

    /// Whether this template carries an authored slot list
    #[must_use]
    pub const fn has_authored_slots(&self) -> bool {
        self.slots.is_some()
    }

    /// Numbering derived purely from the pattern
    #[must_use]
    pub fn numbering(&self) -> Numbering {
        Numbering::compute(&self.pattern, GRID_SIZE)
    }

    /// Resolve the slots used for filling and clue numbering
    ///
    /// # Errors
    /// Returns `TemplateError` if an authored slot no longer fits the pattern.
    pub fn layout(&self) -> Result<SlotLayout, TemplateError> {
        match &self.slots {
            Some(specs) => {
                let slots = specs
                    .iter()
                    .map(|spec| self.resolve_spec(spec))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SlotLayout::authored(slots))
            }
            None => {
                let numbering = self.numbering();
                Ok(SlotLayout::partitioned(
                    numbering.slots(Orientation::Across),
                    numbering.slots(Orientation::Down),
                ))
            }
        }
    }

    fn resolve_spec(&self, spec: &SlotSpec) -> Result<Slot, TemplateError> {
        let SlotSpec {
            number,
            orientation,
            row,
            col,
            length,
        } = *spec;

        if length < 2 {
            return Err(TemplateError::SlotTooShort {
                number,
                orientation,
                length,
            });
        }

        let end = match orientation {
            Orientation::Across => col.checked_add(length - 1).map(|end_col| (row, end_col)),
            Orientation::Down => row.checked_add(length - 1).map(|end_row| (end_row, col)),
        };
        if !end.is_some_and(|(end_row, end_col)| end_row < GRID_SIZE && end_col < GRID_SIZE) {
            return Err(TemplateError::SlotOutOfBounds {
                number,
                orientation,
            });
        }

        let start = row * GRID_SIZE + col;
        let stride = orientation.stride(GRID_SIZE);
        let cells: Vec<usize> = (0..length).map(|k| start + k * stride).collect();

        if let Some(&index) = cells.iter().find(|&&i| !self.is_open(i)) {
            return Err(TemplateError::SlotCrossesBlock {
                number,
                orientation,
                index,
            });
        }

        Ok(Slot::new(number, orientation, cells))
    }

    /// The original ten-slot mini: two blocks, fully interlocking
    #[must_use]
    pub fn classic() -> Self {
        Self::from_static("classic", &[".....", ".#...", ".....", "...#.", "....."])
    }

    /// Two disjoint five-letter across answers on rows 0 and 2
    #[must_use]
    pub fn twin_rows() -> Self {
        let template =
            Self::from_static("twin-rows", &[".....", "#####", ".....", "#####", "#####"]);
        Self {
            slots: Some(vec![SlotSpec::across(1, 0, 0, 5), SlotSpec::across(2, 2, 0, 5)]),
            ..template
        }
    }

    /// Open rows and columns 0, 2 and 4 forming a lattice
    #[must_use]
    pub fn open_frame() -> Self {
        Self::from_static("open-frame", &[".....", ".#.#.", ".....", ".#.#.", "....."])
    }

    fn from_static(name: &str, rows: &[&str]) -> Self {
        let pattern = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|ch| if ch == '#' { Cell::Blocked } else { Cell::Open })
            .collect();
        Self {
            name: name.to_string(),
            pattern,
            slots: None,
        }
    }
}

/// All built-in templates
#[must_use]
pub fn builtin_templates() -> Vec<GridTemplate> {
    vec![
        GridTemplate::classic(),
        GridTemplate::twin_rows(),
        GridTemplate::open_frame(),
    ]
}

/// Look up a built-in template by name
#[must_use]
pub fn builtin_template(name: &str) -> Option<GridTemplate> {
    builtin_templates().into_iter().find(|t| t.name() == name)
}

/// Choose a template using a caller-supplied random source
///
/// Returns `None` only if `templates` is empty.
pub fn choose_template<'a, R: Rng + ?Sized>(
    templates: &'a [GridTemplate],
    rng: &mut R,
) -> Option<&'a GridTemplate> {
    templates.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_rows_rejects_wrong_size() {
        assert!(matches!(
            GridTemplate::from_rows("bad", &["....", "....", "....", "....", "...."]),
            Err(TemplateError::WrongCellCount {
                expected: 25,
                actual: 20
            })
        ));
    }

    #[test]
    fn from_rows_rejects_bad_character() {
        assert_eq!(
            GridTemplate::from_rows("bad", &[".....", "..x..", ".....", ".....", "....."]),
            Err(TemplateError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn classic_layout_has_ten_slots() {
        let layout = GridTemplate::classic().layout().unwrap();
        assert_eq!(layout.across.len(), 5);
        assert_eq!(layout.down.len(), 5);
        assert_eq!(layout.slot_count(), 10);
        assert!(layout.has_intersections());
        assert_eq!(layout.fill_order[0].orientation, Orientation::Across);
        assert_eq!(layout.fill_order[5].orientation, Orientation::Down);
    }

    #[test]
    fn twin_rows_uses_authored_numbers() {
        let template = GridTemplate::twin_rows();
        assert!(template.has_authored_slots());

        let layout = template.layout().unwrap();
        assert_eq!(layout.across.len(), 2);
        assert!(layout.down.is_empty());
        assert_eq!(layout.across[0].number, 1);
        assert_eq!(layout.across[0].cells, vec![0, 1, 2, 3, 4]);
        assert_eq!(layout.across[1].number, 2);
        assert_eq!(layout.across[1].cells, vec![10, 11, 12, 13, 14]);
        assert!(!layout.has_intersections());
    }

    #[test]
    fn with_slots_validates_specs() {
        let base =
            GridTemplate::from_rows("t", &[".....", "#####", ".....", "#####", "#####"]).unwrap();

        assert!(matches!(
            base.clone().with_slots(vec![SlotSpec::across(1, 0, 0, 1)]),
            Err(TemplateError::SlotTooShort { length: 1, .. })
        ));
        assert!(matches!(
            base.clone().with_slots(vec![SlotSpec::across(1, 0, 2, 4)]),
            Err(TemplateError::SlotOutOfBounds { .. })
        ));
        assert!(matches!(
            base.clone().with_slots(vec![SlotSpec::across(1, 0, 1, usize::MAX)]),
            Err(TemplateError::SlotOutOfBounds { .. })
        ));
        assert!(matches!(
            base.clone().with_slots(vec![SlotSpec::down(1, 2, 0, usize::MAX)]),
            Err(TemplateError::SlotOutOfBounds { .. })
        ));
        assert!(matches!(
            base.clone().with_slots(vec![SlotSpec::down(1, 0, 0, 3)]),
            Err(TemplateError::SlotCrossesBlock { index: 5, .. })
        ));
        assert!(matches!(
            base.with_slots(vec![SlotSpec::across(1, 0, 0, 5), SlotSpec::across(1, 2, 0, 5)]),
            Err(TemplateError::DuplicateNumber { number: 1, .. })
        ));
    }

    #[test]
    fn builtin_lookup_by_name() {
        assert!(builtin_template("classic").is_some());
        assert!(builtin_template("open-frame").is_some());
        assert!(builtin_template("missing").is_none());
        assert!(builtin_templates().iter().all(|t| t.open_count() > 0));
    }

    #[test]
    fn choose_template_is_reproducible_with_seed() {
        let templates = builtin_templates();
        let first = choose_template(&templates, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = choose_template(&templates, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first.name(), second.name());

        let none: Vec<GridTemplate> = Vec::new();
        assert!(choose_template(&none, &mut StdRng::seed_from_u64(1)).is_none());
    }
}
