//! Common types: coordinates, shot outcomes and engine errors.

use core::fmt;

use crate::mask::MaskError;

/// Zero-indexed `(row, col)` board coordinate.
pub type Coord = (usize, usize);

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    Hit,
    Miss,
}

impl Shot {
    pub fn from_hit(is_hit: bool) -> Self {
        if is_hit {
            Shot::Hit
        } else {
            Shot::Miss
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(self, Shot::Hit)
    }
}

/// Errors returned by the estimation core and the turn driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Underlying mask error (out-of-bounds coordinate).
    Mask(MaskError),
    /// A move was requested but no unknown cells remain, or a resolved
    /// driver was stepped again.
    InvalidState,
    /// The cell was already resolved to a hit or miss.
    AlreadyResolved { row: usize, col: usize },
}

impl From<MaskError> for EngineError {
    fn from(err: MaskError) -> Self {
        EngineError::Mask(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Mask(e) => write!(f, "mask error: {}", e),
            EngineError::InvalidState => write!(f, "no unknown cells remain to fire at"),
            EngineError::AlreadyResolved { row, col } => {
                write!(f, "cell ({}, {}) was already fired at", row, col)
            }
        }
    }
}

/// Errors returned while building a fleet layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    Mask(MaskError),
    /// Ship index outside the roster.
    InvalidIndex,
    ShipAlreadyPlaced,
    /// Placement length differs from the roster entry.
    LengthMismatch { expected: usize, found: usize },
    ShipOverlaps,
    ShipOutOfBounds,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
    /// A hand-drawn footprint is not a straight contiguous span.
    InvalidFootprint,
}

impl From<MaskError> for FleetError {
    fn from(err: MaskError) -> Self {
        FleetError::Mask(err)
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Mask(e) => write!(f, "mask error: {}", e),
            FleetError::InvalidIndex => write!(f, "ship index is out of range"),
            FleetError::ShipAlreadyPlaced => write!(f, "ship is already placed"),
            FleetError::LengthMismatch { expected, found } => write!(
                f,
                "placement covers {} cells but the ship is {} long",
                found, expected
            ),
            FleetError::ShipOverlaps => write!(f, "ship placement overlaps another ship"),
            FleetError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            FleetError::UnableToPlaceShip => write!(f, "unable to place ship"),
            FleetError::InvalidFootprint => {
                write!(f, "footprint is not a straight contiguous span")
            }
        }
    }
}
