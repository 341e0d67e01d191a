//! Grid cells and slot orientation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker written into the puzzle grid for blocked cells
pub const BLOCK_MARKER: &str = "#";

/// A single template cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Blocked,
}

impl Cell {
    /// Parse a pattern character: `.` is open, `#` is blocked
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Blocked),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Direction a slot runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    /// Index step between consecutive cells of a slot
    #[inline]
    #[must_use]
    pub const fn stride(self, size: usize) -> usize {
        match self {
            Self::Across => 1,
            Self::Down => size,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "Across"),
            Self::Down => write!(f, "Down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_from_char() {
        assert_eq!(Cell::from_char('.'), Some(Cell::Open));
        assert_eq!(Cell::from_char('#'), Some(Cell::Blocked));
        assert_eq!(Cell::from_char('x'), None);
    }

    #[test]
    fn orientation_stride() {
        assert_eq!(Orientation::Across.stride(5), 1);
        assert_eq!(Orientation::Down.stride(5), 5);
    }

    #[test]
    fn orientation_display() {
        assert_eq!(Orientation::Across.to_string(), "Across");
        assert_eq!(Orientation::Down.to_string(), "Down");
    }
}
