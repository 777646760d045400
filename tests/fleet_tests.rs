use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    footprint_placement, Fleet, FleetError, Mask, Oracle, Orientation, Placement, NUM_SHIPS,
    SHIPS, TOTAL_SHIP_CELLS,
};

fn h(len: usize, row: usize, col: usize) -> Placement {
    Placement::new(len, Orientation::Horizontal, row, col).unwrap()
}

#[test]
fn test_manual_place_and_query() {
    let mut fleet = Fleet::new();
    fleet.place(0, h(5, 0, 0)).unwrap();
    assert!(fleet.is_ship((0, 4)));
    assert!(!fleet.is_ship((0, 5)));
    assert!(!fleet.is_complete());
    assert_eq!(fleet.placement(0), Some(h(5, 0, 0)));
    assert_eq!(fleet.placement(1), None);
}

#[test]
fn test_place_rejections() {
    let mut fleet = Fleet::new();
    fleet.place(0, h(5, 0, 0)).unwrap();
    assert_eq!(fleet.place(0, h(5, 5, 0)).unwrap_err(), FleetError::ShipAlreadyPlaced);
    assert_eq!(fleet.place(NUM_SHIPS, h(2, 5, 0)).unwrap_err(), FleetError::InvalidIndex);
    assert_eq!(
        fleet.place(1, h(3, 5, 0)).unwrap_err(),
        FleetError::LengthMismatch { expected: 4, found: 3 }
    );
    assert_eq!(fleet.place(1, h(4, 0, 3)).unwrap_err(), FleetError::ShipOverlaps);
    assert_eq!(
        Placement::new(4, Orientation::Vertical, 7, 0).unwrap_err(),
        FleetError::ShipOutOfBounds
    );
    // Unchecked placements are re-validated on the way in.
    let off_board = Placement {
        length: 4,
        orientation: Orientation::Horizontal,
        row: 3,
        col: 8,
    };
    assert_eq!(fleet.place(1, off_board).unwrap_err(), FleetError::ShipOutOfBounds);
}

#[test]
fn test_from_placements_and_all_hit() {
    let fleet = Fleet::from_placements(&[
        h(5, 0, 0),
        h(4, 2, 0),
        h(3, 4, 0),
        h(3, 6, 0),
        h(2, 8, 0),
    ])
    .unwrap();
    assert!(fleet.is_complete());
    assert_eq!(fleet.ship_map().count(), TOTAL_SHIP_CELLS);
    assert!(!fleet.all_hit(&Mask::new()));
    assert!(fleet.all_hit(&fleet.ship_map()));
    assert!(fleet.all_hit(&Mask::full()));
}

#[test]
fn test_random_fleet_is_reproducible() {
    let a = Fleet::random(&mut SmallRng::seed_from_u64(42)).unwrap();
    let b = Fleet::random(&mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
    for i in 0..NUM_SHIPS {
        assert_eq!(a.placement(i).unwrap().length, SHIPS[i].length());
    }
}

#[test]
fn test_footprint_accepts_straight_spans() {
    let row = Mask::from_cells([(3, 2), (3, 3), (3, 4)]).unwrap();
    assert_eq!(footprint_placement(&row, 3).unwrap(), h(3, 3, 2));

    let col = Mask::from_cells([(5, 9), (6, 9), (7, 9), (8, 9)]).unwrap();
    assert_eq!(
        footprint_placement(&col, 4).unwrap(),
        Placement::new(4, Orientation::Vertical, 5, 9).unwrap()
    );
}

#[test]
fn test_footprint_rejects_bad_shapes() {
    let gap = Mask::from_cells([(3, 2), (3, 4), (3, 5)]).unwrap();
    assert_eq!(footprint_placement(&gap, 3).unwrap_err(), FleetError::InvalidFootprint);

    let bent = Mask::from_cells([(3, 2), (3, 3), (4, 3)]).unwrap();
    assert_eq!(footprint_placement(&bent, 3).unwrap_err(), FleetError::InvalidFootprint);

    let short = Mask::from_cells([(0, 0), (0, 1)]).unwrap();
    assert_eq!(footprint_placement(&short, 3).unwrap_err(), FleetError::InvalidFootprint);

    assert_eq!(
        footprint_placement(&Mask::new(), 0).unwrap_err(),
        FleetError::InvalidFootprint
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleets_never_overlap(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::random(&mut rng).unwrap();
        prop_assert!(fleet.is_complete());
        prop_assert_eq!(fleet.ship_map().count(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn footprint_of_placement_round_trips(
        len in 1usize..=5,
        vertical in any::<bool>(),
        a in 0usize..10,
        b in 0usize..6,
    ) {
        let (orient, row, col) = if vertical {
            (Orientation::Vertical, b, a)
        } else {
            (Orientation::Horizontal, a, b)
        };
        let p = Placement::new(len, orient, row, col).unwrap();
        let found = footprint_placement(&p.mask().unwrap(), len).unwrap();
        prop_assert_eq!(found.cells().collect::<Vec<_>>(), p.cells().collect::<Vec<_>>());
    }
}
