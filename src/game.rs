//! Two-player match: each side fires once per round until one has hit every
//! ship cell of the other.

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coord, Shot},
    config::{DEFAULT_TURN_LIMIT, TOTAL_SHIP_CELLS},
    fleet::{Fleet, Oracle},
    player::Player,
};

/// Seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    /// The round ceiling was reached without a winner.
    Draw,
}

/// Errors that end a match early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    Fleet(PlayerId, crate::common::FleetError),
    Engine(PlayerId, crate::common::EngineError),
    /// `play_round` was called after the match ended.
    Finished,
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::Fleet(p, e) => write!(f, "player {:?} could not place ships: {}", p, e),
            MatchError::Engine(p, e) => write!(f, "player {:?} could not fire: {}", p, e),
            MatchError::Finished => write!(f, "match is already over"),
        }
    }
}

/// One player's fleet plus what it has learned about the opponent.
#[derive(Debug)]
struct Side<P> {
    player: P,
    fleet: Fleet,
    knowledge: Board,
    rng: SmallRng,
}

/// Shot fired during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volley {
    pub shooter: PlayerId,
    pub coord: Coord,
    pub shot: Shot,
}

/// Alternating match between two players.
pub struct Match<A, B> {
    one: Side<A>,
    two: Side<B>,
    round: usize,
    round_limit: usize,
    status: GameStatus,
}

impl<A: Player, B: Player> Match<A, B> {
    /// Seat both players and let each place its fleet with its own generator.
    pub fn new(
        mut a: A,
        mut rng_a: SmallRng,
        mut b: B,
        mut rng_b: SmallRng,
    ) -> Result<Self, MatchError> {
        let fleet_a = a
            .place_ships(&mut rng_a)
            .map_err(|e| MatchError::Fleet(PlayerId::One, e))?;
        let fleet_b = b
            .place_ships(&mut rng_b)
            .map_err(|e| MatchError::Fleet(PlayerId::Two, e))?;
        Ok(Self {
            one: Side {
                player: a,
                fleet: fleet_a,
                knowledge: Board::new(),
                rng: rng_a,
            },
            two: Side {
                player: b,
                fleet: fleet_b,
                knowledge: Board::new(),
                rng: rng_b,
            },
            round: 0,
            round_limit: DEFAULT_TURN_LIMIT,
            status: GameStatus::InProgress,
        })
    }

    /// Override the round ceiling.
    pub fn with_round_limit(mut self, limit: usize) -> Self {
        self.round_limit = limit;
        self
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Rounds played so far; a round is one shot by each player, or one
    /// shot by player one if that shot wins.
    pub fn rounds(&self) -> usize {
        self.round
    }

    /// What `id` knows about its opponent's board.
    pub fn knowledge(&self, id: PlayerId) -> &Board {
        match id {
            PlayerId::One => &self.one.knowledge,
            PlayerId::Two => &self.two.knowledge,
        }
    }

    pub fn fleet(&self, id: PlayerId) -> &Fleet {
        match id {
            PlayerId::One => &self.one.fleet,
            PlayerId::Two => &self.two.fleet,
        }
    }

    fn fire<P: Player, Q>(
        id: PlayerId,
        shooter: &mut Side<P>,
        target: &Side<Q>,
    ) -> Result<Volley, MatchError> {
        let coord = shooter
            .player
            .select_target(&mut shooter.rng, &shooter.knowledge)
            .map_err(|e| MatchError::Engine(id, e))?;
        let shot = Shot::from_hit(target.fleet.is_ship(coord));
        shooter
            .knowledge
            .apply(coord, shot)
            .map_err(|e| MatchError::Engine(id, e))?;
        shooter.player.handle_shot_result(coord, shot);
        debug!("{:?} fires at ({}, {}): {:?}", id, coord.0, coord.1, shot);
        Ok(Volley {
            shooter: id,
            coord,
            shot,
        })
    }

    fn has_won<P>(side: &Side<P>) -> bool {
        side.knowledge.hit_count() >= TOTAL_SHIP_CELLS
    }

    fn finish(&mut self, status: GameStatus) {
        info!("match over after {} rounds: {:?}", self.round, status);
        self.status = status;
    }

    /// Play one round and return the shots fired in it.
    pub fn play_round(&mut self) -> Result<[Option<Volley>; 2], MatchError> {
        if self.status != GameStatus::InProgress {
            return Err(MatchError::Finished);
        }
        self.round += 1;

        let first = Self::fire(PlayerId::One, &mut self.one, &self.two)?;
        if Self::has_won(&self.one) {
            self.finish(GameStatus::Won(PlayerId::One));
            return Ok([Some(first), None]);
        }

        let second = Self::fire(PlayerId::Two, &mut self.two, &self.one)?;
        if Self::has_won(&self.two) {
            self.finish(GameStatus::Won(PlayerId::Two));
        } else if self.round >= self.round_limit {
            self.finish(GameStatus::Draw);
        }
        Ok([Some(first), Some(second)])
    }

    /// Play rounds until the match ends.
    pub fn run(&mut self) -> Result<GameStatus, MatchError> {
        while self.status == GameStatus::InProgress {
            self.play_round()?;
        }
        Ok(self.status)
    }
}
