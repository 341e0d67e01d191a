//! Fillable word slots

use super::Orientation;

/// One fillable run of open cells
///
/// `cells` holds row-major grid indices in reading order. Slots used for
/// filling always have at least two cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    pub number: u32,
    pub orientation: Orientation,
    pub cells: Vec<usize>,
}

impl Slot {
    #[must_use]
    pub const fn new(number: u32, orientation: Orientation, cells: Vec<usize>) -> Self {
        Self {
            number,
            orientation,
            cells,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether this slot shares at least one cell with `other`
    #[must_use]
    pub fn crosses(&self, other: &Self) -> bool {
        self.cells.iter().any(|cell| other.cells.contains(cell))
    }

    /// Short label such as `3-Down`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.number, self.orientation)
    }
}

/// Slots of a template, grouped for clue numbering and ordered for filling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    pub across: Vec<Slot>,
    pub down: Vec<Slot>,
    /// Order in which the solver and fallback filler visit slots
    pub fill_order: Vec<Slot>,
}

impl SlotLayout {
    /// Build a layout where across slots are filled before down slots
    #[must_use]
    pub fn partitioned(across: Vec<Slot>, down: Vec<Slot>) -> Self {
        let fill_order = across.iter().chain(down.iter()).cloned().collect();
        Self {
            across,
            down,
            fill_order,
        }
    }

    /// Build a layout that fills slots in the given authored order
    #[must_use]
    pub fn authored(slots: Vec<Slot>) -> Self {
        let mut across: Vec<Slot> = slots
            .iter()
            .filter(|s| s.orientation == Orientation::Across)
            .cloned()
            .collect();
        let mut down: Vec<Slot> = slots
            .iter()
            .filter(|s| s.orientation == Orientation::Down)
            .cloned()
            .collect();
        across.sort_by_key(|s| s.number);
        down.sort_by_key(|s| s.number);

        Self {
            across,
            down,
            fill_order: slots,
        }
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.fill_order.len()
    }

    /// Whether any two slots share a cell
    #[must_use]
    pub fn has_intersections(&self) -> bool {
        self.fill_order.iter().enumerate().any(|(i, slot)| {
            self.fill_order[i + 1..]
                .iter()
                .any(|other| slot.crosses(other))
        })
    }

    /// Slot lengths in fill order
    #[must_use]
    pub fn length_profile(&self) -> Vec<usize> {
        self.fill_order.iter().map(Slot::len).collect()
    }
}
