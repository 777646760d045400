use salvo::export::{csv_file_name, save_csv, write_csv};
use salvo::palette::{lerp_hsv, GREEN, RED};
use salvo::ui::{cell_shade, coord_label, probability_table, render, score_shade, PlotMode};
use salvo::{apply_result, compute_probabilities, Board, Cell, ScoreGrid};

#[test]
fn test_plot_mode_toggles() {
    assert_eq!(PlotMode::default(), PlotMode::HitsMisses);
    assert_eq!(PlotMode::HitsMisses.toggle(), PlotMode::Probabilities);
    assert_eq!(PlotMode::Probabilities.toggle().toggle(), PlotMode::Probabilities);
}

#[test]
fn test_shades() {
    assert_eq!(cell_shade(Cell::Miss), 0.0);
    assert_eq!(cell_shade(Cell::Unknown), 0.5);
    assert_eq!(cell_shade(Cell::Hit), 1.0);
    assert_eq!(score_shade(5, 5, 5), 0.5);
    assert_eq!(score_shade(0, 0, 10), 0.0);
    assert_eq!(score_shade(10, 0, 10), 1.0);
    assert_eq!(lerp_hsv(RED, GREEN, score_shade(10, 0, 10)), GREEN);
}

#[test]
fn test_render_has_header_and_rows() {
    let board = apply_result(&Board::new(), (0, 0), true).unwrap();
    let grid = compute_probabilities(&board);

    let hits = render(PlotMode::HitsMisses, &board, &grid, 1);
    let lines: Vec<_> = hits.lines().collect();
    assert_eq!(lines[0], "Hits/Misses. Turn: 1.");
    assert_eq!(lines.len(), 12);
    assert!(lines[2].starts_with(" 1 "));
    assert!(lines[2].contains(" X"));

    let probs = render(PlotMode::Probabilities, &board, &grid, 1);
    assert!(probs.starts_with("Probabilities. Turn: 1."));
    assert!(probs.contains(&grid.max().to_string()));
}

#[test]
fn test_probability_table_and_labels() {
    let table = probability_table(&compute_probabilities(&Board::new()));
    assert!(table.starts_with("Probability distribution:"));
    assert_eq!(table.lines().count(), 12);
    assert_eq!(coord_label((0, 0)), "A1");
    assert_eq!(coord_label((9, 2)), "C10");
}

#[test]
fn test_csv_rows() {
    let mut scores = [[0u32; 10]; 10];
    scores[0][1] = 7;
    scores[9][9] = 42;
    let mut out = Vec::new();
    write_csv(&ScoreGrid::from_scores(scores), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let rows: Vec<_> = text.lines().collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0], "0,7,0,0,0,0,0,0,0,0");
    assert_eq!(rows[9], "0,0,0,0,0,0,0,0,0,42");
}

#[test]
fn test_save_csv_writes_file() {
    let dir = std::env::temp_dir().join(format!("salvo-csv-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let grid = compute_probabilities(&Board::new());
    let path = save_csv(&grid, &dir, 3).unwrap();
    assert_eq!(path.file_name().unwrap(), csv_file_name(3).as_str());
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("34,51,66,75,80,80,75,66,51,34\n"));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_score_grid_serializes_as_rows() {
    let grid = compute_probabilities(&Board::new());
    let v = serde_json::to_value(grid).unwrap();
    assert_eq!(v[4][4], 126);
    assert_eq!(v.as_array().unwrap().len(), 10);
}
