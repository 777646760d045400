#![cfg(feature = "std")]

//! CSV dumps of score grids.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::ai::ScoreGrid;

/// Write `grid` as ten comma-separated rows.
pub fn write_csv<W: Write>(grid: &ScoreGrid, mut out: W) -> io::Result<()> {
    for row in grid.scores() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    out.flush()
}

/// File name used for the grid of `turn`.
pub fn csv_file_name(turn: usize) -> String {
    format!("scores_turn{}.csv", turn)
}

/// Save the grid of `turn` under `dir`, returning the file written.
pub fn save_csv(grid: &ScoreGrid, dir: &Path, turn: usize) -> io::Result<PathBuf> {
    let path = dir.join(csv_file_name(turn));
    let file = File::create(&path)?;
    write_csv(grid, BufWriter::new(file))?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}
