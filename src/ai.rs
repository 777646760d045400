// Placement-counting estimator for the opponent board.
// Uses no_std and avoids heap allocations.

use log::trace;

use crate::{
    board::Board,
    common::{Coord, EngineError},
    config::{BOARD_SIZE, HIT_MULTIPLIER, SHIP_LENGTHS},
    mask::Mask,
    placement::placements,
    ship::{Orientation, Placement},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Per-cell scores for one turn, plus the set of cells eligible as moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreGrid {
    scores: [[u32; GRID_SIZE]; GRID_SIZE],
    candidates: Mask,
}

impl ScoreGrid {
    /// Grid over raw scores where every cell is a move candidate.
    pub fn from_scores(scores: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self {
            scores,
            candidates: Mask::full(),
        }
    }

    pub fn scores(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.scores
    }

    /// Score at `(row, col)`; zero outside the board.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.scores
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// Cells that were unknown when the grid was computed.
    pub fn candidates(&self) -> Mask {
        self.candidates
    }

    pub fn max(&self) -> u32 {
        self.scores.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn min(&self) -> u32 {
        self.scores.iter().flatten().copied().min().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.scores.iter().flatten().map(|&v| v as u64).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.scores.iter().flatten().all(|&v| v == 0)
    }

    /// Number of cells scoring strictly more than `coord`.
    pub fn rank_of(&self, coord: Coord) -> usize {
        let score = self.get(coord.0, coord.1);
        self.scores.iter().flatten().filter(|&&v| v > score).count()
    }

    /// Scores scaled to sum to one. A flat zero grid spreads the mass
    /// uniformly over the candidates instead.
    pub fn normalized(&self) -> [[f64; GRID_SIZE]; GRID_SIZE] {
        let mut matrix = [[0.0f64; GRID_SIZE]; GRID_SIZE];
        let total = self.total();
        if total == 0 {
            let n = self.candidates.count();
            if n == 0 {
                return matrix;
            }
            let uniform = 1.0 / n as f64;
            for (r, c) in self.candidates.cells() {
                matrix[r][c] = uniform;
            }
            return matrix;
        }
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                matrix[r][c] = self.scores[r][c] as f64 / total as f64;
            }
        }
        matrix
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for ScoreGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.scores, serializer)
    }
}

/// Weight a valid placement adds to each of its unresolved cells.
///
/// Placements over known hits are favoured in proportion to how many hits
/// they explain, so the search closes in on a wounded ship.
pub fn placement_weight(length: usize, hit_count: usize) -> u32 {
    let factor = if hit_count > 0 {
        HIT_MULTIPLIER * hit_count as u32
    } else {
        1
    };
    length as u32 * factor
}

/// Hits covered by `placement`, or `None` if it crosses a miss.
fn covered_hits(placement: &Placement, board: &Board) -> Option<usize> {
    let hits = board.hits();
    let misses = board.misses();
    let mut n_hits = 0usize;
    for (r, c) in placement.cells() {
        if misses.contains(r, c) {
            return None;
        }
        if hits.contains(r, c) {
            n_hits += 1;
        }
    }
    Some(n_hits)
}

/// Score every cell of `board` against the standard roster.
pub fn compute_probabilities(board: &Board) -> ScoreGrid {
    compute_probabilities_for(board, &SHIP_LENGTHS)
}

/// Score every cell of `board` by summing placement weights over `lengths`.
///
/// Each length is counted independently and lengths are never retired once
/// a ship of that size has been sunk; the board carries no sunk information.
pub fn compute_probabilities_for(board: &Board, lengths: &[usize]) -> ScoreGrid {
    let mut scores = [[0u32; GRID_SIZE]; GRID_SIZE];
    let hits = board.hits();

    for &len in lengths {
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            for placement in placements(len, orient) {
                let Some(n_hits) = covered_hits(&placement, board) else {
                    continue;
                };
                let weight = placement_weight(len, n_hits);
                for (r, c) in placement.cells() {
                    if !hits.contains(r, c) {
                        scores[r][c] += weight;
                    }
                }
            }
        }
    }

    let grid = ScoreGrid {
        scores,
        candidates: board.unknown(),
    };
    trace!("score grid computed: max={} total={}", grid.max(), grid.total());
    grid
}

/// Highest-scoring candidate cell; ties go to the first in row-major order.
///
/// When every candidate scores zero (unknown cells walled in by misses) the
/// first candidate is returned. A grid without candidates means the board is
/// fully resolved and yields `InvalidState`.
pub fn select_move(grid: &ScoreGrid) -> Result<Coord, EngineError> {
    let mut best: Option<(Coord, u32)> = None;
    for (r, c) in grid.candidates.cells() {
        let score = grid.scores[r][c];
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some(((r, c), score)),
        }
    }
    best.map(|(coord, _)| coord).ok_or(EngineError::InvalidState)
}

/// Score the board and pick the next shot in one call.
pub fn next_move(board: &Board) -> Result<(Coord, ScoreGrid), EngineError> {
    let grid = compute_probabilities(board);
    let coord = select_move(&grid)?;
    Ok((coord, grid))
}
