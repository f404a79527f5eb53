// Connect Four engine: gravity board, tiered evaluation, alpha-beta search.
pub mod board;
pub mod console;
pub mod search;
