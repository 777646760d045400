#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    ai::ScoreGrid,
    board::{Board, Cell},
    config::BOARD_SIZE,
    palette::{lerp_hsv, Rgb, GREEN, RED},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Which view of a turn to draw. Passed explicitly to every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotMode {
    #[default]
    HitsMisses,
    Probabilities,
}

impl PlotMode {
    pub fn toggle(self) -> Self {
        match self {
            PlotMode::HitsMisses => PlotMode::Probabilities,
            PlotMode::Probabilities => PlotMode::HitsMisses,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PlotMode::HitsMisses => "Hits/Misses",
            PlotMode::Probabilities => "Probabilities",
        }
    }
}

/// Heat-map position of a knowledge cell: misses red, hits green.
pub fn cell_shade(cell: Cell) -> f64 {
    match cell {
        Cell::Unknown => 0.5,
        Cell::Hit => 1.0,
        Cell::Miss => 0.0,
    }
}

/// Heat-map position of a score relative to the grid's range. A flat grid
/// sits in the middle.
pub fn score_shade(value: u32, min: u32, max: u32) -> f64 {
    if max == min {
        0.5
    } else {
        (value as f64 - min as f64) / (max as f64 - min as f64)
    }
}

fn column_header(out: &mut String, width: usize) {
    out.push_str("   ");
    for c in 0..GRID_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {:>width$}", ch, width = width);
    }
    out.push('\n');
}

fn paint(out: &mut String, color: Rgb, text: &str) {
    let _ = write!(
        out,
        "\x1b[48;2;{};{};{}m\x1b[30m{}\x1b[0m",
        color.0, color.1, color.2, text
    );
}

/// Draw one turn in the chosen mode as a coloured terminal grid.
pub fn render(mode: PlotMode, board: &Board, grid: &ScoreGrid, turn: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}. Turn: {}.", mode.title(), turn);
    let (min, max) = (grid.min(), grid.max());
    let width = match mode {
        PlotMode::HitsMisses => 1,
        PlotMode::Probabilities => max.to_string().len().max(1),
    };
    column_header(&mut out, width);
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let cell = board.cell(r, c).unwrap_or(Cell::Unknown);
            let (t, text) = match mode {
                PlotMode::HitsMisses => {
                    let sym = match cell {
                        Cell::Unknown => '.',
                        Cell::Hit => 'X',
                        Cell::Miss => 'o',
                    };
                    (cell_shade(cell), format!(" {}", sym))
                }
                PlotMode::Probabilities => {
                    let v = grid.get(r, c);
                    (
                        score_shade(v, min, max),
                        format!(" {:>width$}", v, width = width),
                    )
                }
            };
            paint(&mut out, lerp_hsv(RED, GREEN, t), &text);
        }
        out.push('\n');
    }
    out
}

/// Plain-text table of normalised probabilities.
pub fn probability_table(grid: &ScoreGrid) -> String {
    let pdf = grid.normalized();
    let mut out = String::from("Probability distribution:\n");
    column_header(&mut out, 4);
    for (r, row) in pdf.iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for v in row {
            let _ = write!(out, " {:4.2}", v);
        }
        out.push('\n');
    }
    out
}

/// Human coordinate label, column letter then one-based row (`A1`).
pub fn coord_label(coord: (usize, usize)) -> String {
    let col = (b'A' + coord.1 as u8) as char;
    format!("{}{}", col, coord.0 + 1)
}
