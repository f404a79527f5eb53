use std::fmt;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Yellow => write!(f, "Yellow"),
        }
    }
}

/// Gravity-fill grid. Row 0 is the top row; pieces dropped into a column
/// land on the lowest empty cell. Within a column, occupied cells are
/// contiguous from the bottom up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn center_col(&self) -> usize {
        self.cols / 2
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row * self.cols + col]
    }

    /// True iff the column exists and its top cell is still empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col).is_none()
    }

    /// Drops a piece into the lowest empty cell of the column. Returns false
    /// without touching the grid when the move is invalid.
    pub fn add_piece(&mut self, col: usize, player: Player) -> bool {
        if !self.is_valid_move(col) {
            return false;
        }
        for row in (0..self.rows).rev() {
            let i = row * self.cols + col;
            if self.cells[i].is_none() {
                self.cells[i] = Some(player);
                return true;
            }
        }
        false
    }

    /// Clears the topmost piece of the column, undoing a prior `add_piece`.
    /// The caller guarantees the column is not empty.
    pub fn remove_piece(&mut self, col: usize) {
        debug_assert!(col < self.cols, "remove_piece: column {} out of range", col);
        for row in 0..self.rows {
            let i = row * self.cols + col;
            if self.cells[i].is_some() {
                self.cells[i] = None;
                return;
            }
        }
        debug_assert!(false, "remove_piece on empty column {}", col);
    }

    /// Open columns in ascending order.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&c| self.is_valid_move(c)).collect()
    }

    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|c| !self.is_valid_move(c))
    }

    /// Scans rows, columns and both diagonal directions for four in a row.
    /// Red is checked before Yellow, so a grid where both sides hold a run
    /// (unreachable through legal play) still resolves deterministically.
    pub fn winner(&self) -> Option<Player> {
        for player in [Player::Red, Player::Yellow] {
            if self.has_run(player) {
                return Some(player);
            }
        }
        None
    }

    fn has_run(&self, player: Player) -> bool {
        let want = Some(player);
        for row in 0..self.rows {
            for col in 0..self.cols.saturating_sub(3) {
                if (0..4).all(|i| self.get(row, col + i) == want) {
                    return true;
                }
            }
        }
        for row in 0..self.rows.saturating_sub(3) {
            for col in 0..self.cols {
                if (0..4).all(|i| self.get(row + i, col) == want) {
                    return true;
                }
            }
        }
        for row in 0..self.rows.saturating_sub(3) {
            for col in 0..self.cols.saturating_sub(3) {
                if (0..4).all(|i| self.get(row + i, col + i) == want) {
                    return true;
                }
                if (0..4).all(|i| self.get(row + 3 - i, col + i) == want) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
