//! Terminal front end: board rendering, column input, difficulty prompt.

use std::io::{self, Write};

use thiserror::Error;

use crate::board::{Board, Player};
use crate::search::Difficulty;

// Home-row keys mapped to columns 0..=6.
const COLUMN_KEYS: [char; 7] = ['a', 's', 'd', 'f', 'g', 'h', 'j'];

const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";
const BLUE: &str = "\x1b[94m";
const CYAN: &str = "\x1b[96m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a column key or number")]
    Unrecognized(String),
    #[error("'{0}' is outside the board")]
    OutOfRange(String),
}

/// Maps user input to a 0-based column: a home-row key (`a`..`j`) or a
/// 1-based column number. Validity of the move itself is the caller's call.
pub fn parse_column(input: &str, cols: usize) -> Result<usize, InputError> {
    let token = input.trim().to_lowercase();
    if let Some(col) = token
        .chars()
        .next()
        .filter(|_| token.len() == 1)
        .and_then(|c| COLUMN_KEYS.iter().position(|&k| k == c))
    {
        return if col < cols {
            Ok(col)
        } else {
            Err(InputError::OutOfRange(token))
        };
    }
    let number: i64 = token
        .parse()
        .map_err(|_| InputError::Unrecognized(token.clone()))?;
    if number >= 1 && (number as usize) <= cols {
        Ok(number as usize - 1)
    } else {
        Err(InputError::OutOfRange(token))
    }
}

/// Draws the board the way the terminal game shows it: a framed key row on
/// top, one line per board row, discs colored per player. With `color` off
/// the discs fall back to the player initials so the grid stays readable.
pub fn render(board: &Board, color: bool) -> String {
    let rule = "=".repeat(4 * board.cols() - 1);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&paint(&rule, BLUE, color));
    out.push('\n');
    out.push_str(&paint(&key_row(board.cols()), CYAN, color));
    out.push('\n');
    out.push_str(&paint(&rule, BLUE, color));
    out.push_str("\n\n");

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            match board.get(row, col) {
                None => out.push_str("[ ] "),
                Some(player) => {
                    out.push('[');
                    out.push_str(&disc(player, color));
                    out.push_str("] ");
                }
            }
        }
        out.push('\n');
    }

    out.push_str(&paint(&rule, BLUE, color));
    out.push('\n');
    out
}

fn disc(player: Player, color: bool) -> String {
    if !color {
        return match player {
            Player::Red => "R".to_string(),
            Player::Yellow => "Y".to_string(),
        };
    }
    let code = match player {
        Player::Red => RED,
        Player::Yellow => YELLOW,
    };
    format!("{}{}⬤{}", code, BOLD, RESET)
}

fn key_row(cols: usize) -> String {
    let labels: Vec<String> = (0..cols)
        .map(|col| match COLUMN_KEYS.get(col) {
            Some(&key) => format!("[{}]", key),
            None => format!("[{}]", (col + 1) % 10),
        })
        .collect();
    labels.join(" ")
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Asks for a column until the player names one that is open.
pub fn prompt_column(board: &Board) -> io::Result<usize> {
    let mut input = String::new();
    loop {
        print!("Which column do you play? ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while waiting for a move",
            ));
        }
        match parse_column(&input, board.cols()) {
            Ok(col) if board.is_valid_move(col) => return Ok(col),
            Ok(col) => println!("Column {} is already full, try another.", col + 1),
            Err(err) => println!("{}, try again.", err),
        }
    }
}

/// Shows the difficulty menu and asks until a valid level is entered.
pub fn prompt_difficulty() -> io::Result<Difficulty> {
    println!("Choose a difficulty:");
    println!("1 - Beginner");
    println!("2 - Intermediate");
    println!("3 - Professional");
    let mut input = String::new();
    loop {
        print!("Enter your choice (1, 2 or 3): ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while waiting for a difficulty",
            ));
        }
        match input.trim().parse::<u8>() {
            Ok(level) => match Difficulty::from_level(level) {
                Ok(difficulty) => return Ok(difficulty),
                Err(err) => println!("{}.", err),
            },
            Err(_) => println!("Enter a number, 1, 2 or 3."),
        }
    }
}
