use rand::{rngs::SmallRng, SeedableRng};
use salvo::{AiPlayer, Fleet, GameStatus, Hunt, Match, PlayerId};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    salvo::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut game = Match::new(
        AiPlayer::new(),
        SmallRng::seed_from_u64(seed1),
        AiPlayer::new(),
        SmallRng::seed_from_u64(seed2),
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    let status = game.run().map_err(|e| anyhow::anyhow!(e))?;

    let winner = match status {
        GameStatus::Won(PlayerId::One) => Some("player1"),
        GameStatus::Won(PlayerId::Two) => Some("player2"),
        _ => None,
    };

    // Solo hunts against each player's fleet measure the estimator alone.
    let mut hunts = Vec::new();
    for id in [PlayerId::One, PlayerId::Two] {
        let fleet: Fleet = *game.fleet(id);
        let outcome = Hunt::new().run(&fleet).map_err(|e| anyhow::anyhow!(e))?;
        hunts.push(outcome);
    }

    let k1 = game.knowledge(PlayerId::One);
    let k2 = game.knowledge(PlayerId::Two);
    let result = json!({
        "rounds": game.rounds(),
        "player1": {"hits": k1.hit_count(), "shots": k1.hit_count() + k1.miss_count()},
        "player2": {"hits": k2.hit_count(), "shots": k2.hit_count() + k2.miss_count()},
        "winner": winner,
        "solo_hunts": hunts,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
