//! Knowledge board: what the shooter has learned about the opponent's grid.

use core::fmt;
use core::str::FromStr;

use crate::common::{Coord, EngineError, Shot};
use crate::config::BOARD_SIZE;
use crate::mask::Mask;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// State of a single cell as seen by the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Unknown,
    Hit,
    Miss,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Unknown => '.',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
        }
    }
}

/// 10×10 grid of [`Cell`] states, stored as disjoint hit and miss masks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    hits: Mask,
    misses: Mask,
}

impl Board {
    /// Board with every cell unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from hit and miss sets. A cell in both is a hit.
    pub fn from_masks(hits: Mask, misses: Mask) -> Self {
        Self {
            hits,
            misses: misses & !hits,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        if self.hits.get(row, col)? {
            Ok(Cell::Hit)
        } else if self.misses.get(row, col)? {
            Ok(Cell::Miss)
        } else {
            Ok(Cell::Unknown)
        }
    }

    pub fn hits(&self) -> Mask {
        self.hits
    }

    pub fn misses(&self) -> Mask {
        self.misses
    }

    /// Cells not yet fired at.
    pub fn unknown(&self) -> Mask {
        !(self.hits | self.misses)
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count()
    }

    pub fn miss_count(&self) -> usize {
        self.misses.count()
    }

    pub fn unknown_count(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.hit_count() - self.miss_count()
    }

    /// Record the outcome of a shot at `coord`. Only unknown cells may change.
    pub fn apply(&mut self, coord: Coord, shot: Shot) -> Result<(), EngineError> {
        let (row, col) = coord;
        if self.cell(row, col)? != Cell::Unknown {
            return Err(EngineError::AlreadyResolved { row, col });
        }
        match shot {
            Shot::Hit => self.hits.set(row, col)?,
            Shot::Miss => self.misses.set(row, col)?,
        }
        Ok(())
    }
}

/// Functional form of [`Board::apply`]: returns the updated board and leaves
/// the input untouched.
pub fn apply_result(board: &Board, coord: Coord, is_hit: bool) -> Result<Board, EngineError> {
    let mut next = *board;
    next.apply(coord, Shot::from_hit(is_hit))?;
    Ok(next)
}

/// Error parsing the text form of a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBoardError {
    /// Unexpected character on the given zero-indexed line.
    InvalidCell { line: usize, ch: char },
    /// A line did not hold exactly ten cells.
    RowLength { line: usize, found: usize },
    /// The text did not hold exactly ten non-empty lines.
    RowCount { found: usize },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::InvalidCell { line, ch } => {
                write!(f, "line {}: unexpected cell {:?}", line + 1, ch)
            }
            ParseBoardError::RowLength { line, found } => write!(
                f,
                "line {}: expected {} cells, found {}",
                line + 1,
                GRID_SIZE,
                found
            ),
            ParseBoardError::RowCount { found } => {
                write!(f, "expected {} rows, found {}", GRID_SIZE, found)
            }
        }
    }
}

/// Parses ten lines of `.` (unknown), `X` (hit) and `o` (miss). Whitespace
/// inside a line is ignored, as are blank lines.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut row = 0;
        for (line_no, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if row >= GRID_SIZE {
                return Err(ParseBoardError::RowCount { found: row + 1 });
            }
            let mut col = 0;
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let shot = match ch {
                    '.' => None,
                    'X' | 'x' => Some(Shot::Hit),
                    'o' | 'O' => Some(Shot::Miss),
                    _ => return Err(ParseBoardError::InvalidCell { line: line_no, ch }),
                };
                if col < GRID_SIZE {
                    if let Some(shot) = shot {
                        let mask = match shot {
                            Shot::Hit => &mut board.hits,
                            Shot::Miss => &mut board.misses,
                        };
                        let _ = mask.set(row, col);
                    }
                }
                col += 1;
            }
            if col != GRID_SIZE {
                return Err(ParseBoardError::RowLength {
                    line: line_no,
                    found: col,
                });
            }
            row += 1;
        }
        if row != GRID_SIZE {
            return Err(ParseBoardError::RowCount { found: row });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if c > 0 {
                    write!(f, " ")?;
                }
                let cell = self.cell(r, c).map_err(|_| fmt::Error)?;
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
