#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{
    compute_probabilities, init_logging, select_move,
    ui::{coord_label, probability_table, render, PlotMode},
    AiPlayer, Board, Fleet, GameStatus, Hunt, Match, DEFAULT_TURN_LIMIT,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Plot {
    Hits,
    Probabilities,
    /// Print only the final summary.
    None,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Let the estimator hunt down a randomly placed fleet.
    Hunt {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_TURN_LIMIT)]
        turn_limit: usize,
        #[arg(long, value_enum, default_value_t = Plot::Hits)]
        plot: Plot,
        #[arg(long, help = "Write each turn's score grid as CSV into this directory")]
        csv_dir: Option<PathBuf>,
    },
    /// Play an AI against another AI.
    Duel {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_TURN_LIMIT)]
        round_limit: usize,
    },
    /// Score a board read from a file (or stdin) and suggest the next shot.
    Odds {
        #[arg(help = "Ten lines of '.', 'X' (hit) and 'o' (miss); '-' for stdin")]
        board: PathBuf,
        #[arg(long, help = "Show normalised probabilities instead of raw scores")]
        normalized: bool,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn run_hunt(
    seed: Option<u64>,
    turn_limit: usize,
    plot: Plot,
    csv_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (fleet will be reproducible)", s);
    }
    let mut rng = seeded_rng(seed);
    let fleet = Fleet::random(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    if let Some(dir) = &csv_dir {
        std::fs::create_dir_all(dir)?;
    }

    let mode = match plot {
        Plot::Hits => Some(PlotMode::HitsMisses),
        Plot::Probabilities => Some(PlotMode::Probabilities),
        Plot::None => None,
    };
    let mut csv_error = None;
    let mut hunt = Hunt::with_limit(turn_limit);
    let outcome = hunt
        .run_with(&fleet, |report, board| {
            if let Some(mode) = mode {
                println!("{} -> {:?}", coord_label(report.coord), report.shot);
                print!("{}", render(mode, board, &report.grid, report.turn));
            }
            if let Some(dir) = &csv_dir {
                if let Err(e) = salvo::export::save_csv(&report.grid, dir, report.turn) {
                    csv_error.get_or_insert(e);
                }
            }
        })
        .map_err(|e| anyhow::anyhow!(e))?;
    if let Some(e) = csv_error {
        return Err(e.into());
    }

    println!("Fleet:");
    println!("{}", fleet.ship_map());
    println!(
        "Finished in {} turns with {} hits and {} misses ({:?})",
        outcome.turns, outcome.hits, outcome.misses, outcome.resolution
    );
    Ok(())
}

#[cfg(feature = "std")]
fn run_duel(seed: Option<u64>, round_limit: usize) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng1 = seeded_rng(seed);
    let rng2 = seeded_rng(seed.map(|s| s.wrapping_add(1)));
    let mut game = Match::new(AiPlayer::new(), rng1, AiPlayer::new(), rng2)
        .map_err(|e| anyhow::anyhow!(e))?
        .with_round_limit(round_limit);
    let status = game.run().map_err(|e| anyhow::anyhow!(e))?;
    match status {
        GameStatus::Won(id) => println!("Player {:?} won after {} rounds", id, game.rounds()),
        GameStatus::Draw => println!("No winner after {} rounds", game.rounds()),
        GameStatus::InProgress => println!("Match stopped after {} rounds", game.rounds()),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn run_odds(path: PathBuf, normalized: bool) -> anyhow::Result<()> {
    let text = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(&path)?
    };
    let board: Board = text.parse().map_err(|e| anyhow::anyhow!("{}", e))?;
    let grid = compute_probabilities(&board);
    if normalized {
        print!("{}", probability_table(&grid));
    } else {
        print!(
            "{}",
            render(PlotMode::Probabilities, &board, &grid, board.hit_count() + board.miss_count())
        );
    }
    match select_move(&grid) {
        Ok(coord) => println!(
            "Suggested shot: {} (score {})",
            coord_label(coord),
            grid.get(coord.0, coord.1)
        ),
        Err(_) => println!("Board is fully resolved; no shot to suggest"),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Hunt {
            seed,
            turn_limit,
            plot,
            csv_dir,
        } => run_hunt(seed, turn_limit, plot, csv_dir),
        Commands::Duel { seed, round_limit } => run_duel(seed, round_limit),
        Commands::Odds { board, normalized } => run_odds(board, normalized),
    }
}
