//! Opponent ship layout and the oracle the shooter queries.

use core::fmt;

use log::debug;
use rand::Rng;

use crate::common::{Coord, FleetError};
use crate::config::{BOARD_SIZE, NUM_SHIPS, PLACEMENT_ATTEMPTS, SHIPS};
use crate::mask::Mask;
use crate::ship::{Orientation, Placement};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Ground truth about the opponent board.
///
/// The shooter only ever asks whether a ship occupies a cell; it never sees
/// or changes the layout behind the answer.
pub trait Oracle {
    fn is_ship(&self, coord: Coord) -> bool;
}

impl Oracle for Mask {
    fn is_ship(&self, coord: Coord) -> bool {
        self.contains(coord.0, coord.1)
    }
}

/// Ships placed in roster order.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: [Option<Placement>; NUM_SHIPS],
    ship_map: Mask,
}

impl Fleet {
    /// Fleet with no ships placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupancy mask of every placed ship.
    pub fn ship_map(&self) -> Mask {
        self.ship_map
    }

    pub fn placement(&self, index: usize) -> Option<Placement> {
        self.ships.get(index).copied().flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// True once every occupied cell appears in `hits`.
    pub fn all_hit(&self, hits: &Mask) -> bool {
        (self.ship_map & *hits) == self.ship_map
    }

    /// Place roster ship `index` at `placement`.
    pub fn place(&mut self, index: usize, placement: Placement) -> Result<(), FleetError> {
        let def = SHIPS.get(index).ok_or(FleetError::InvalidIndex)?;
        if self.ships[index].is_some() {
            return Err(FleetError::ShipAlreadyPlaced);
        }
        if placement.length != def.length() {
            return Err(FleetError::LengthMismatch {
                expected: def.length(),
                found: placement.length,
            });
        }
        let placement = Placement::new(
            placement.length,
            placement.orientation,
            placement.row,
            placement.col,
        )?;
        let mask = placement.mask()?;
        if self.ship_map.intersects(&mask) {
            return Err(FleetError::ShipOverlaps);
        }
        self.ship_map |= mask;
        self.ships[index] = Some(placement);
        Ok(())
    }

    /// Build a complete fleet from one placement per roster entry.
    pub fn from_placements(placements: &[Placement; NUM_SHIPS]) -> Result<Self, FleetError> {
        let mut fleet = Self::new();
        for (i, &p) in placements.iter().enumerate() {
            fleet.place(i, p)?;
        }
        Ok(fleet)
    }

    /// A random non-overlapping placement for roster ship `index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        index: usize,
    ) -> Result<Placement, FleetError> {
        let def = SHIPS.get(index).ok_or(FleetError::InvalidIndex)?;
        let len = def.length();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - len),
                Orientation::Vertical => (GRID_SIZE - len, GRID_SIZE - 1),
            };
            let row = rng.random_range(0..=max_r);
            let col = rng.random_range(0..=max_c);
            let placement = Placement::new(len, orient, row, col)?;
            if !self.ship_map.intersects(&placement.mask()?) {
                return Ok(placement);
            }
        }
        Err(FleetError::UnableToPlaceShip)
    }

    /// Place every roster ship at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, FleetError> {
        let mut fleet = Self::new();
        for i in 0..NUM_SHIPS {
            let placement = fleet.random_placement(rng, i)?;
            fleet.place(i, placement)?;
        }
        debug!("random fleet placed: {:?}", fleet.ships);
        Ok(fleet)
    }
}

impl Oracle for Fleet {
    fn is_ship(&self, coord: Coord) -> bool {
        self.ship_map.contains(coord.0, coord.1)
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fleet")
            .field("ships", &self.ships)
            .field("cells", &self.ship_map.count())
            .finish()
    }
}

/// Turn a hand-drawn footprint into a placement of `length`.
///
/// The footprint must hold exactly `length` cells that share one row or one
/// column and have no gaps.
pub fn footprint_placement(footprint: &Mask, length: usize) -> Result<Placement, FleetError> {
    if length == 0 || footprint.count() != length {
        return Err(FleetError::InvalidFootprint);
    }
    let mut cells = footprint.cells();
    let (row, col) = cells.next().ok_or(FleetError::InvalidFootprint)?;
    let orientation = if length == 1 || footprint.cells().all(|(r, _)| r == row) {
        Orientation::Horizontal
    } else if footprint.cells().all(|(_, c)| c == col) {
        Orientation::Vertical
    } else {
        return Err(FleetError::InvalidFootprint);
    };
    let placement =
        Placement::new(length, orientation, row, col).map_err(|_| FleetError::InvalidFootprint)?;
    // Cells come out row-major, so the first is the span's start.
    if placement.cells().all(|(r, c)| footprint.contains(r, c)) {
        Ok(placement)
    } else {
        Err(FleetError::InvalidFootprint)
    }
}
