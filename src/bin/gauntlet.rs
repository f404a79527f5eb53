use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use fourbot::board::{Board, Player};
use fourbot::search::{Difficulty, Engine};

#[derive(Parser, Debug)]
#[command(name = "fourbot-gauntlet", about = "Pit two difficulty levels against each other")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    /// Difficulty of contender A
    #[arg(long, default_value_t = 1)]
    level_a: u8,
    /// Difficulty of contender B
    #[arg(long, default_value_t = 3)]
    level_b: u8,
    /// Budget in milliseconds per move for the deepening difficulties
    #[arg(long, default_value_t = 200)]
    budget: u64,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Random plies per side before the engines take over
    #[arg(long, default_value_t = 1)]
    random_plies: usize,
    /// Write a JSON report here
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Report {
    level_a: u8,
    level_b: u8,
    games: usize,
    wins_a: usize,
    wins_b: usize,
    draws: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let level_a = Difficulty::from_level(args.level_a)?;
    let level_b = Difficulty::from_level(args.level_b)?;
    let budget = Duration::from_millis(args.budget);
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut report = Report {
        level_a: args.level_a,
        level_b: args.level_b,
        games: args.games,
        wins_a: 0,
        wins_b: 0,
        draws: 0,
    };

    for game in 0..args.games {
        // Colors alternate between games so neither contender keeps the
        // first-move advantage.
        let a_plays_red = game % 2 == 0;
        let winner = play_game(level_a, level_b, a_plays_red, budget, args.random_plies, &mut rng)?;
        match winner {
            Some(p) if (p == Player::Red) == a_plays_red => report.wins_a += 1,
            Some(_) => report.wins_b += 1,
            None => report.draws += 1,
        }
        eprintln!(
            "game {:>3}: {}",
            game + 1,
            match winner {
                Some(p) => format!("{} wins", p),
                None => "draw".to_string(),
            }
        );
    }

    println!(
        "level {} vs level {}: +{} -{} ={} over {} games",
        args.level_a, args.level_b, report.wins_a, report.wins_b, report.draws, report.games
    );
    if let Some(path) = args.out {
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn play_game(
    level_a: Difficulty,
    level_b: Difficulty,
    a_plays_red: bool,
    budget: Duration,
    random_plies: usize,
    rng: &mut SmallRng,
) -> anyhow::Result<Option<Player>> {
    let (red_level, yellow_level) = if a_plays_red {
        (level_a, level_b)
    } else {
        (level_b, level_a)
    };
    let mut red = Engine::new(red_level, Player::Red, budget);
    let mut yellow = Engine::new(yellow_level, Player::Yellow, budget);

    let mut board = Board::default();
    let mut side = Player::Red;

    // Seeded random opening so repeated games differ.
    for _ in 0..random_plies * 2 {
        let moves = board.valid_moves();
        if moves.is_empty() || board.winner().is_some() {
            break;
        }
        let col = moves[rng.gen_range(0..moves.len())];
        board.add_piece(col, side);
        side = side.opponent();
    }

    loop {
        if let Some(winner) = board.winner() {
            return Ok(Some(winner));
        }
        if board.is_full() {
            return Ok(None);
        }
        let engine = if side == Player::Red { &mut red } else { &mut yellow };
        let outcome = match engine.best_move(&mut board) {
            Some(outcome) => outcome,
            None => return Ok(None),
        };
        if !board.add_piece(outcome.column, side) {
            anyhow::bail!("engine picked unplayable column {}", outcome.column);
        }
        side = side.opponent();
    }
}
