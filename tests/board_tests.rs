use salvo::{apply_result, Board, Cell, EngineError, ParseBoardError, Shot};

#[test]
fn test_new_board_is_unknown() {
    let board = Board::new();
    assert_eq!(board.unknown_count(), 100);
    assert_eq!(board.cell(0, 0).unwrap(), Cell::Unknown);
    assert_eq!(board.cell(9, 9).unwrap(), Cell::Unknown);
}

#[test]
fn test_apply_marks_cells_once() {
    let mut board = Board::new();
    board.apply((2, 3), Shot::Hit).unwrap();
    board.apply((7, 1), Shot::Miss).unwrap();
    assert_eq!(board.cell(2, 3).unwrap(), Cell::Hit);
    assert_eq!(board.cell(7, 1).unwrap(), Cell::Miss);
    assert_eq!(board.hit_count(), 1);
    assert_eq!(board.miss_count(), 1);
    assert_eq!(board.unknown_count(), 98);

    // repeated shot triggers error
    assert_eq!(
        board.apply((2, 3), Shot::Miss).unwrap_err(),
        EngineError::AlreadyResolved { row: 2, col: 3 }
    );
    assert_eq!(board.cell(2, 3).unwrap(), Cell::Hit);
}

#[test]
fn test_apply_out_of_bounds() {
    let mut board = Board::new();
    assert!(matches!(
        board.apply((10, 0), Shot::Hit),
        Err(EngineError::Mask(_))
    ));
}

#[test]
fn test_apply_result_leaves_input_untouched() {
    let board = Board::new();
    let next = apply_result(&board, (4, 4), true).unwrap();
    assert_eq!(board.cell(4, 4).unwrap(), Cell::Unknown);
    assert_eq!(next.cell(4, 4).unwrap(), Cell::Hit);

    let after_miss = apply_result(&next, (4, 5), false).unwrap();
    assert_eq!(after_miss.cell(4, 5).unwrap(), Cell::Miss);
    assert!(apply_result(&after_miss, (4, 4), false).is_err());
}

#[test]
fn test_parse_and_display() {
    let text = "\
X . . . . . . . . o
. . . . . . . . . .
. . . . . . . . . .
. . . . . . . . . .
. . . . X X . . . .
. . . . . . . . . .
. . . . . . . . . .
. . . . . . . . . .
. . . . . . . . . .
o . . . . . . . . .
";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.hit_count(), 3);
    assert_eq!(board.miss_count(), 2);
    assert_eq!(board.cell(0, 9).unwrap(), Cell::Miss);
    assert_eq!(board.cell(4, 5).unwrap(), Cell::Hit);
    assert_eq!(board.to_string(), text);
}

#[test]
fn test_parse_errors() {
    let short = ".........\n".repeat(10);
    assert_eq!(
        short.parse::<Board>().unwrap_err(),
        ParseBoardError::RowLength { line: 0, found: 9 }
    );

    let few = "..........\n".repeat(3);
    assert_eq!(
        few.parse::<Board>().unwrap_err(),
        ParseBoardError::RowCount { found: 3 }
    );

    let bad = format!("..#.......\n{}", "..........\n".repeat(9));
    assert_eq!(
        bad.parse::<Board>().unwrap_err(),
        ParseBoardError::InvalidCell { line: 0, ch: '#' }
    );
}
