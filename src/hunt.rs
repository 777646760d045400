//! Bounded turn driver: score, select, reveal, record, repeat.

use log::{debug, info};

use crate::{
    ai::{compute_probabilities, select_move, ScoreGrid},
    board::Board,
    common::{Coord, EngineError, Shot},
    config::{DEFAULT_TURN_LIMIT, TOTAL_SHIP_CELLS},
    fleet::Oracle,
};

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum TurnState {
    AwaitingMove,
    Resolved(Resolution),
}

/// Why a hunt stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Resolution {
    /// Every ship cell has been hit.
    FleetDestroyed,
    /// The turn ceiling was reached first.
    TurnLimit,
    /// No unknown cells were left to fire at.
    BoardExhausted,
}

/// Record of one completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// One-based turn number.
    pub turn: usize,
    pub coord: Coord,
    pub shot: Shot,
    /// Score the chosen cell carried when it was selected.
    pub score: u32,
    /// Grid the move was selected from.
    pub grid: ScoreGrid,
}

/// Summary of a finished hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Outcome {
    pub turns: usize,
    pub hits: usize,
    pub misses: usize,
    pub resolution: Resolution,
}

/// One shooter working through an opponent board.
///
/// Knowledge lives in the [`Board`]; everything else is recomputed per turn.
#[derive(Debug, Clone)]
pub struct Hunt {
    board: Board,
    turns: usize,
    turn_limit: usize,
    target_hits: usize,
    state: TurnState,
}

impl Default for Hunt {
    fn default() -> Self {
        Self::new()
    }
}

impl Hunt {
    /// Fresh hunt with the default turn ceiling.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_TURN_LIMIT)
    }

    pub fn with_limit(turn_limit: usize) -> Self {
        Self::from_board(Board::new(), turn_limit)
    }

    /// Resume from existing knowledge. Turns already taken are not counted
    /// against `turn_limit`.
    pub fn from_board(board: Board, turn_limit: usize) -> Self {
        let mut hunt = Self {
            board,
            turns: 0,
            turn_limit,
            target_hits: TOTAL_SHIP_CELLS,
            state: TurnState::AwaitingMove,
        };
        hunt.check_terminal();
        hunt
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn turn_limit(&self) -> usize {
        self.turn_limit
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, TurnState::Resolved(_))
    }

    fn check_terminal(&mut self) {
        let resolution = if self.board.hit_count() >= self.target_hits {
            Resolution::FleetDestroyed
        } else if self.turns >= self.turn_limit {
            Resolution::TurnLimit
        } else if self.board.unknown_count() == 0 {
            Resolution::BoardExhausted
        } else {
            return;
        };
        info!(
            "hunt resolved after {} turns: {:?} ({} hits, {} misses)",
            self.turns,
            resolution,
            self.board.hit_count(),
            self.board.miss_count()
        );
        self.state = TurnState::Resolved(resolution);
    }

    /// Play one turn against `oracle`.
    pub fn step<O: Oracle + ?Sized>(&mut self, oracle: &O) -> Result<TurnReport, EngineError> {
        if self.is_resolved() {
            return Err(EngineError::InvalidState);
        }
        let grid = compute_probabilities(&self.board);
        let coord = select_move(&grid)?;
        let shot = Shot::from_hit(oracle.is_ship(coord));
        self.board.apply(coord, shot)?;
        self.turns += 1;

        let score = grid.get(coord.0, coord.1);
        debug!(
            "turn {}: fire at ({}, {}) score {} -> {:?}",
            self.turns, coord.0, coord.1, score, shot
        );
        self.check_terminal();
        Ok(TurnReport {
            turn: self.turns,
            coord,
            shot,
            score,
            grid,
        })
    }

    /// Play until resolved, handing every turn to `on_turn`.
    pub fn run_with<O, F>(&mut self, oracle: &O, mut on_turn: F) -> Result<Outcome, EngineError>
    where
        O: Oracle + ?Sized,
        F: FnMut(&TurnReport, &Board),
    {
        while !self.is_resolved() {
            let report = self.step(oracle)?;
            on_turn(&report, &self.board);
        }
        self.outcome().ok_or(EngineError::InvalidState)
    }

    /// Play until resolved.
    pub fn run<O: Oracle + ?Sized>(&mut self, oracle: &O) -> Result<Outcome, EngineError> {
        self.run_with(oracle, |_, _| {})
    }

    /// Final summary, once resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::Resolved(resolution) => Some(Outcome {
                turns: self.turns,
                hits: self.board.hit_count(),
                misses: self.board.miss_count(),
                resolution,
            }),
            TurnState::AwaitingMove => None,
        }
    }
}
