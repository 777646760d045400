use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    Board, EngineError, Fleet, Hunt, Mask, Resolution, Shot, TurnState, DEFAULT_TURN_LIMIT,
    TOTAL_SHIP_CELLS,
};

#[test]
fn test_first_step_fires_at_best_cell() {
    let fleet = Fleet::random(&mut SmallRng::seed_from_u64(7)).unwrap();
    let mut hunt = Hunt::new();
    assert_eq!(hunt.state(), TurnState::AwaitingMove);
    let report = hunt.step(&fleet).unwrap();
    assert_eq!(report.turn, 1);
    assert_eq!(report.coord, (4, 4));
    assert_eq!(report.score, 126);
    assert_eq!(report.shot, Shot::from_hit(fleet.ship_map().contains(4, 4)));
    assert_eq!(hunt.turns(), 1);
}

#[test]
fn test_hunt_sinks_whole_fleet() {
    let fleet = Fleet::random(&mut SmallRng::seed_from_u64(2024)).unwrap();
    let mut hunt = Hunt::new();
    let outcome = hunt.run(&fleet).unwrap();
    assert_eq!(outcome.resolution, Resolution::FleetDestroyed);
    assert_eq!(outcome.hits, TOTAL_SHIP_CELLS);
    assert_eq!(outcome.turns, outcome.hits + outcome.misses);
    assert!(outcome.turns <= DEFAULT_TURN_LIMIT);
    assert!(fleet.all_hit(&hunt.board().hits()));
    assert_eq!(hunt.board().hits(), fleet.ship_map());
}

#[test]
fn test_turn_limit_stops_hunt() {
    let fleet = Fleet::random(&mut SmallRng::seed_from_u64(3)).unwrap();
    let mut hunt = Hunt::with_limit(5);
    let outcome = hunt.run(&fleet).unwrap();
    assert_eq!(outcome.turns, 5);
    assert_eq!(outcome.resolution, Resolution::TurnLimit);
    assert_eq!(hunt.state(), TurnState::Resolved(Resolution::TurnLimit));
}

#[test]
fn test_step_after_resolution_is_invalid() {
    let fleet = Fleet::random(&mut SmallRng::seed_from_u64(3)).unwrap();
    let mut hunt = Hunt::with_limit(1);
    hunt.step(&fleet).unwrap();
    assert!(hunt.is_resolved());
    assert_eq!(hunt.step(&fleet).unwrap_err(), EngineError::InvalidState);
}

#[test]
fn test_empty_ocean_exhausts_board() {
    // No ships at all: the driver must still stop once every cell is known.
    let ocean = Mask::new();
    let mut hunt = Hunt::with_limit(1000);
    let outcome = hunt.run(&ocean).unwrap();
    assert_eq!(outcome.turns, 100);
    assert_eq!(outcome.misses, 100);
    assert_eq!(outcome.resolution, Resolution::BoardExhausted);
}

#[test]
fn test_resume_from_finished_board() {
    let hits = Mask::from_cells((0..TOTAL_SHIP_CELLS).map(|i| (i / 10, i % 10))).unwrap();
    let hunt = Hunt::from_board(Board::from_masks(hits, Mask::new()), 100);
    assert_eq!(hunt.state(), TurnState::Resolved(Resolution::FleetDestroyed));
    assert_eq!(hunt.outcome().unwrap().turns, 0);
}

#[test]
fn test_reports_reach_observer_in_order() {
    let fleet = Fleet::random(&mut SmallRng::seed_from_u64(11)).unwrap();
    let mut seen = Vec::new();
    let outcome = Hunt::new()
        .run_with(&fleet, |report, board| {
            assert_eq!(board.hit_count() + board.miss_count(), report.turn);
            seen.push(report.turn);
        })
        .unwrap();
    assert_eq!(seen, (1..=outcome.turns).collect::<Vec<_>>());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn hunts_terminate_and_never_repeat(seed in any::<u64>()) {
        let fleet = Fleet::random(&mut SmallRng::seed_from_u64(seed)).unwrap();
        let mut hunt = Hunt::new();
        let mut fired = Mask::new();
        while !hunt.is_resolved() {
            let report = hunt.step(&fleet).unwrap();
            prop_assert!(!fired.contains(report.coord.0, report.coord.1));
            fired.set(report.coord.0, report.coord.1).unwrap();
        }
        let outcome = hunt.outcome().unwrap();
        prop_assert!(outcome.turns <= DEFAULT_TURN_LIMIT);
        prop_assert_eq!(outcome.resolution, Resolution::FleetDestroyed);
    }

    #[test]
    fn hunts_are_deterministic(seed in any::<u64>()) {
        let fleet = Fleet::random(&mut SmallRng::seed_from_u64(seed)).unwrap();
        let a = Hunt::new().run(&fleet).unwrap();
        let b = Hunt::new().run(&fleet).unwrap();
        prop_assert_eq!(a, b);
    }
}
