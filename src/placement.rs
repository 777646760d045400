//! Enumeration of every on-board span for a ship length.

use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Placement};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// All placements of `length` along `orientation`, ordered by row then column.
///
/// Horizontal spans visit every row with column starts `0..=10-length`;
/// vertical spans visit row starts `0..=10-length` with every column. A length
/// of zero or longer than the board yields nothing.
pub fn placements(length: usize, orientation: Orientation) -> Placements {
    let (rows, cols) = if length == 0 || length > GRID_SIZE {
        (0, 0)
    } else {
        match orientation {
            Orientation::Horizontal => (GRID_SIZE, GRID_SIZE - length + 1),
            Orientation::Vertical => (GRID_SIZE - length + 1, GRID_SIZE),
        }
    };
    Placements {
        length,
        orientation,
        rows,
        cols,
        next: 0,
    }
}

/// Iterator returned by [`placements`].
#[derive(Debug, Clone)]
pub struct Placements {
    length: usize,
    orientation: Orientation,
    rows: usize,
    cols: usize,
    next: usize,
}

impl Iterator for Placements {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        if self.next >= self.rows * self.cols {
            return None;
        }
        let (row, col) = (self.next / self.cols, self.next % self.cols);
        self.next += 1;
        Some(Placement {
            length: self.length,
            orientation: self.orientation,
            row,
            col,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.rows * self.cols - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Placements {}
