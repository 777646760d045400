use crate::ship::ShipDef;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Ship lengths in roster order, as consumed by the probability accumulator.
pub const SHIP_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Per-hit multiplier applied to placements that cover known hits.
pub const HIT_MULTIPLIER: u32 = 4;

/// Default ceiling on the number of turns a hunt or match may take.
pub const DEFAULT_TURN_LIMIT: usize = 100;

/// Random placement attempts per ship before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 1000;

