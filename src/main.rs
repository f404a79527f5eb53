use anyhow::Result;
use clap::Parser;
use log::info;
use std::time::Duration;

use fourbot::board::{Board, Player};
use fourbot::console;
use fourbot::search::{self, Difficulty, Engine};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Connect Four against a tiered search engine", long_about = None)]
struct Args {
    /// Difficulty level: 1 beginner, 2 intermediate, 3 professional (menu prompt when omitted)
    #[arg(long)]
    level: Option<u8>,

    /// Wall-clock budget in seconds for the deepening difficulties
    #[arg(long, default_value_t = search::DEFAULT_BUDGET.as_secs_f64())]
    budget: f64,

    /// Board rows
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 7)]
    cols: usize,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Let the engine open the game
    #[arg(long)]
    ai_first: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.budget.is_finite() || args.budget < 0.0 {
        anyhow::bail!("budget must be a non-negative number of seconds");
    }
    if args.rows < 4 || args.cols < 4 {
        anyhow::bail!("the board needs at least 4 rows and 4 columns");
    }
    if args.cols > 10 {
        anyhow::bail!("boards wider than 10 columns have no key labels");
    }

    let difficulty = match args.level {
        Some(level) => Difficulty::from_level(level)?,
        None => console::prompt_difficulty()?,
    };
    let color = !args.no_color;

    let mut board = Board::new(args.rows, args.cols);
    let mut engine = Engine::new(
        difficulty,
        Player::Yellow,
        Duration::from_secs_f64(args.budget),
    );
    info!(
        "starting game: {:?}, budget {:.1}s, board {}x{}",
        difficulty, args.budget, args.rows, args.cols
    );

    let mut humans_turn = !args.ai_first;
    loop {
        println!("{}", console::render(&board, color));

        if let Some(winner) = board.winner() {
            match winner {
                Player::Red => println!("You win!"),
                Player::Yellow => println!("The engine wins!"),
            }
            break;
        }
        if board.is_full() {
            println!("Draw, the board is full.");
            break;
        }

        if humans_turn {
            let col = console::prompt_column(&board)?;
            board.add_piece(col, Player::Red);
        } else {
            println!("Thinking...");
            match engine.best_move(&mut board) {
                Some(outcome) => {
                    board.add_piece(outcome.column, Player::Yellow);
                    println!(
                        "Engine plays column {} (score {}, depth {}, {} nodes, {:.2}s)",
                        outcome.column + 1,
                        outcome.score,
                        outcome.depth,
                        outcome.nodes,
                        outcome.elapsed.as_secs_f64()
                    );
                }
                None => {
                    println!("No open column left to play.");
                    break;
                }
            }
        }
        humans_turn = !humans_turn;
    }

    Ok(())
}
