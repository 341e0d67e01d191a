//! Crossword numbering derived from a blocked/open pattern
//!
//! Cells are scanned in row-major order. A cell receives the next number when
//! it is open and begins an across run (left edge or blocked neighbour to the
//! left) or a down run (top edge or blocked neighbour above). Single-cell runs
//! still consume a number but never become fillable slots.

use super::{Cell, Orientation, Slot};
use std::collections::BTreeMap;

/// Numbering of a grid pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numbering {
    size: usize,
    numbers: Vec<Option<u32>>,
    across: BTreeMap<u32, Vec<usize>>,
    down: BTreeMap<u32, Vec<usize>>,
}

impl Numbering {
    /// Compute numbering for a square `pattern` of side `size`
    ///
    /// Cells missing from a short pattern count as blocked; extra cells are
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use mini_crossword::core::{Cell, Numbering};
    ///
    /// let pattern = vec![Cell::Open; 25];
    /// let numbering = Numbering::compute(&pattern, 5);
    ///
    /// // Top row numbers every column; down runs start there too
    /// assert_eq!(numbering.number_at(0), Some(1));
    /// assert_eq!(numbering.number_at(4), Some(5));
    /// assert_eq!(numbering.number_at(5), Some(6));
    /// assert_eq!(numbering.across().len(), 5);
    /// ```
    #[must_use]
    pub fn compute(pattern: &[Cell], size: usize) -> Self {
        let is_open =
            |r: usize, c: usize| pattern.get(r * size + c).is_some_and(|cell| cell.is_open());

        let mut numbers = vec![None; size * size];
        let mut across = BTreeMap::new();
        let mut down = BTreeMap::new();
        let mut next = 0u32;

        for r in 0..size {
            for c in 0..size {
                if !is_open(r, c) {
                    continue;
                }

                let starts_across = c == 0 || !is_open(r, c - 1);
                let starts_down = r == 0 || !is_open(r - 1, c);
                if !starts_across && !starts_down {
                    continue;
                }

                next += 1;
                numbers[r * size + c] = Some(next);

                if starts_across {
                    let cells: Vec<usize> = (c..size)
                        .take_while(|&cc| is_open(r, cc))
                        .map(|cc| r * size + cc)
                        .collect();
                    if cells.len() > 1 {
                        across.insert(next, cells);
                    }
                }

                if starts_down {
                    let cells: Vec<usize> = (r..size)
                        .take_while(|&rr| is_open(rr, c))
                        .map(|rr| rr * size + c)
                        .collect();
                    if cells.len() > 1 {
                        down.insert(next, cells);
                    }
                }
            }
        }

        Self {
            size,
            numbers,
            across,
            down,
        }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number printed in the cell at `index`, if any
    #[must_use]
    pub fn number_at(&self, index: usize) -> Option<u32> {
        self.numbers.get(index).copied().flatten()
    }

    /// Across runs of length two or more, keyed by number
    #[must_use]
    pub const fn across(&self) -> &BTreeMap<u32, Vec<usize>> {
        &self.across
    }

    /// Down runs of length two or more, keyed by number
    #[must_use]
    pub const fn down(&self) -> &BTreeMap<u32, Vec<usize>> {
        &self.down
    }

    /// Fillable slots for one orientation, in number order
    #[must_use]
    pub fn slots(&self, orientation: Orientation) -> Vec<Slot> {
        let runs = match orientation {
            Orientation::Across => &self.across,
            Orientation::Down => &self.down,
        };
        runs.iter()
            .map(|(&number, cells)| Slot::new(number, orientation, cells.clone()))
            .collect()
    }

    /// Highest number assigned
    #[must_use]
    pub fn max_number(&self) -> u32 {
        self.numbers.iter().flatten().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(rows: &[&str]) -> Vec<Cell> {
        rows.iter()
            .flat_map(|row| row.chars())
            .map(|ch| Cell::from_char(ch).unwrap())
            .collect()
    }

    #[test]
    fn classic_pattern_numbering() {
        let cells = pattern(&[".....", ".#...", ".....", "...#.", "....."]);
        let numbering = Numbering::compute(&cells, 5);

        // Row 0 numbers every column
        for c in 0..5 {
            assert_eq!(numbering.number_at(c), Some(c as u32 + 1));
        }
        // (1,0) starts a single-cell across run: numbered, not a slot
        assert_eq!(numbering.number_at(5), Some(6));
        assert!(!numbering.across().contains_key(&6));
        // (1,2) starts a 3-cell across run
        assert_eq!(numbering.number_at(7), Some(7));
        assert_eq!(numbering.across()[&7], vec![7, 8, 9]);
        // (2,0) across, (2,1) starts a down run below the block
        assert_eq!(numbering.number_at(10), Some(8));
        assert_eq!(numbering.number_at(11), Some(9));
        assert_eq!(numbering.down()[&9], vec![11, 16, 21]);

        assert_eq!(numbering.across().len(), 5);
        assert_eq!(numbering.down().len(), 5);
    }

    #[test]
    fn numbering_strictly_increasing_in_scan_order() {
        let cells = pattern(&[".....", ".#.#.", ".....", ".#.#.", "....."]);
        let numbering = Numbering::compute(&cells, 5);

        let assigned: Vec<u32> = (0..25).filter_map(|i| numbering.number_at(i)).collect();
        assert!(assigned.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(assigned.first(), Some(&1));
        assert_eq!(numbering.max_number() as usize, assigned.len());
    }

    #[test]
    fn numbering_is_deterministic() {
        let cells = pattern(&[".....", ".#...", ".....", "...#.", "....."]);
        let first = Numbering::compute(&cells, 5);
        for _ in 0..10 {
            assert_eq!(Numbering::compute(&cells, 5), first);
        }
    }

    #[test]
    fn blocked_cells_never_numbered() {
        let cells = pattern(&[".....", "#####", ".....", "#####", "#####"]);
        let numbering = Numbering::compute(&cells, 5);

        for i in 5..10 {
            assert_eq!(numbering.number_at(i), None);
        }
        // Row 0 columns each start length-1 down runs, so row 2 starts at 6
        assert_eq!(numbering.number_at(10), Some(6));
        assert_eq!(numbering.across().keys().copied().collect::<Vec<_>>(), vec![1, 6]);
        assert!(numbering.down().is_empty());
    }

    #[test]
    fn short_pattern_treats_missing_cells_as_blocked() {
        let numbering = Numbering::compute(&[Cell::Open; 3], 5);

        assert_eq!(numbering.number_at(0), Some(1));
        assert_eq!(numbering.across().get(&1), Some(&vec![0, 1, 2]));
        assert!(numbering.down().is_empty());
        assert_eq!(numbering.number_at(24), None);
    }

    #[test]
    fn slots_follow_number_order() {
        let cells = pattern(&[".....", ".#...", ".....", "...#.", "....."]);
        let numbering = Numbering::compute(&cells, 5);
        let down = numbering.slots(Orientation::Down);

        let numbers: Vec<u32> = down.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 3, 4, 5, 9]);
        assert!(down.iter().all(|s| s.len() >= 2));
    }
}
