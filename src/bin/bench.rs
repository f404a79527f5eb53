use clap::Parser;
use std::time::{Duration, Instant};

use fourbot::board::{Board, Player};
use fourbot::search::{Difficulty, Engine};

#[derive(Parser, Debug)]
#[command(name = "fourbot-bench", version, about = "Benchmark FourBot search speed on one position")]
struct Args {
    /// Difficulty level 1..3
    #[arg(long, default_value_t = 3)]
    level: u8,

    /// Budget in milliseconds for the deepening difficulties
    #[arg(long, default_value_t = 1000)]
    budget: u64,

    /// Columns to replay before searching, alternating red/yellow, e.g. "3,3,2,4"
    #[arg(long, default_value = "")]
    opening: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let difficulty = Difficulty::from_level(args.level)?;

    let mut board = Board::default();
    let mut side = Player::Red;
    for token in args.opening.split(',').filter(|t| !t.trim().is_empty()) {
        let col: usize = token.trim().parse()?;
        if !board.add_piece(col, side) {
            anyhow::bail!("opening column {} is not playable", col);
        }
        side = side.opponent();
    }

    let mut engine = Engine::new(difficulty, Player::Yellow, Duration::from_millis(args.budget));
    let t0 = Instant::now();
    let res = engine.best_move(&mut board);
    let dt = t0.elapsed();
    match res {
        Some(r) => {
            let nps = if dt.as_secs_f64() > 0.0 { r.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
            println!(
                "column={} score={} depth={} nodes={} elapsed={:.3}s nps={:.1}",
                r.column, r.score, r.depth, r.nodes, dt.as_secs_f64(), nps
            );
        }
        None => println!("no open columns in the given position"),
    }
    Ok(())
}
