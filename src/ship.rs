//! Ship definitions and placements.

use crate::common::FleetError;
use crate::config::BOARD_SIZE;
use crate::mask::Mask;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Axis a ship lies along. `Horizontal` spans columns within one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Roster entry: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A contiguous span of `length` cells starting at (`row`, `col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub length: usize,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    /// Checked constructor; the span must lie entirely on the board.
    pub fn new(
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, FleetError> {
        let placement = Self {
            length,
            orientation,
            row,
            col,
        };
        if length == 0 || !placement.fits() {
            return Err(FleetError::ShipOutOfBounds);
        }
        Ok(placement)
    }

    fn fits(&self) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.row < GRID_SIZE && self.col + self.length <= GRID_SIZE,
            Orientation::Vertical => self.col < GRID_SIZE && self.row + self.length <= GRID_SIZE,
        }
    }

    /// The `k`-th covered cell.
    #[inline]
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.row, self.col + k),
            Orientation::Vertical => (self.row + k, self.col),
        }
    }

    /// Covered cells from the start of the span.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| self.cell(k))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                row == self.row && col >= self.col && col < self.col + self.length
            }
            Orientation::Vertical => {
                col == self.col && row >= self.row && row < self.row + self.length
            }
        }
    }

    /// Occupancy mask of the span.
    pub fn mask(&self) -> Result<Mask, FleetError> {
        Ok(Mask::from_cells(self.cells())?)
    }
}
