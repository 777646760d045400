use crate::{
    ai,
    board::Board,
    common::{Coord, EngineError, FleetError, Shot},
    fleet::Fleet,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Lay out this player's own fleet.
    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<Fleet, FleetError>;

    /// Choose the next cell to fire at given what is known of the opponent.
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Result<Coord, EngineError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _shot: Shot) {}
}

/// Player that places at random and fires at the best-scoring cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<Fleet, FleetError> {
        Fleet::random(rng)
    }

    fn select_target(&mut self, _rng: &mut SmallRng, board: &Board) -> Result<Coord, EngineError> {
        ai::next_move(board).map(|(coord, _)| coord)
    }
}
