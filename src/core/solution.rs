//! In-progress letter assignment for a grid
//!
//! Each cell tracks its letter and how many placed words currently cover it,
//! so removing a word only clears cells no other slot still holds.

use super::{BLOCK_MARKER, GridTemplate};

/// Mutable letter grid used while filling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    letters: Vec<Option<u8>>,
    owners: Vec<u8>,
}

impl Solution {
    #[must_use]
    pub fn new(cell_count: usize) -> Self {
        Self {
            letters: vec![None; cell_count],
            owners: vec![0; cell_count],
        }
    }

    #[inline]
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<u8> {
        self.letters.get(index).copied().flatten()
    }

    /// Whether `word` matches every letter already present in `cells`
    #[must_use]
    pub fn fits(&self, word: &str, cells: &[usize]) -> bool {
        word.len() == cells.len()
            && word
                .bytes()
                .zip(cells)
                .all(|(ch, &i)| self.letter(i).is_none_or(|existing| existing == ch))
    }

    /// Write `word` into `cells` and take a reference on each cell
    pub fn place(&mut self, word: &str, cells: &[usize]) {
        for (ch, &i) in word.bytes().zip(cells) {
            self.letters[i] = Some(ch);
            self.owners[i] = self.owners[i].saturating_add(1);
        }
    }

    /// Undo a [`place`](Self::place), clearing cells no other word still covers
    pub fn remove(&mut self, cells: &[usize]) {
        for &i in cells {
            self.owners[i] = self.owners[i].saturating_sub(1);
            if self.owners[i] == 0 {
                self.letters[i] = None;
            }
        }
    }

    /// Number of cells in `cells` whose letter disagrees with `word`
    #[must_use]
    pub fn conflicts(&self, word: &str, cells: &[usize]) -> usize {
        word.bytes()
            .zip(cells)
            .filter(|&(ch, &i)| self.letter(i).is_some_and(|existing| existing != ch))
            .count()
    }

    /// Read the letters of `cells`, or `None` if any is still empty
    #[must_use]
    pub fn read(&self, cells: &[usize]) -> Option<String> {
        cells
            .iter()
            .map(|&i| self.letter(i).map(char::from))
            .collect()
    }

    /// Give every empty open cell of `template` the filler letter
    ///
    /// Returns how many cells were filled.
    pub fn fill_empty(&mut self, template: &GridTemplate, filler: u8) -> usize {
        let mut filled = 0;
        for i in 0..self.letters.len() {
            if template.is_open(i) && self.letters[i].is_none() {
                self.letters[i] = Some(filler);
                filled += 1;
            }
        }
        filled
    }

    /// First open cell of `template` that has no letter
    #[must_use]
    pub fn first_empty_open(&self, template: &GridTemplate) -> Option<usize> {
        (0..self.letters.len()).find(|&i| template.is_open(i) && self.letters[i].is_none())
    }

    /// Flat row-major grid with block markers for blocked cells
    ///
    /// Open cells that are still empty render as an empty string.
    #[must_use]
    pub fn to_grid(&self, template: &GridTemplate) -> Vec<String> {
        (0..self.letters.len())
            .map(|i| {
                if template.is_open(i) {
                    self.letter(i).map(|ch| char::from(ch).to_string()).unwrap_or_default()
                } else {
                    BLOCK_MARKER.to_string()
                }
            })
            .collect()
    }
}
