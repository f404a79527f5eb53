pub mod engine;
pub mod eval;
pub mod ordering;

pub use engine::{Engine, SearchOutcome};

use std::time::Duration;
use thiserror::Error;

/// Score bound for the alpha-beta window, strictly above every tier's win
/// magnitude so no evaluation can saturate it.
pub(crate) const INF: i32 = 1_000_000;

/// Wall-clock budget the deepening difficulties get by default.
pub const DEFAULT_BUDGET: Duration = Duration::from_millis(3000);

/// Deepest iteration the time-bounded loop will attempt.
pub const MAX_DEEPENING_DEPTH: u32 = 14;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty level {0}, expected 1, 2 or 3")]
pub struct UnknownLevel(pub u8);

/// Playing strength. Each variant fixes the algorithm, the depth or time
/// policy, the move ordering and the evaluation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Professional,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Result<Difficulty, UnknownLevel> {
        match level {
            1 => Ok(Difficulty::Beginner),
            2 => Ok(Difficulty::Intermediate),
            3 => Ok(Difficulty::Professional),
            other => Err(UnknownLevel(other)),
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Professional => 3,
        }
    }
}
