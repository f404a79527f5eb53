use crate::board::{Board, Player};

// Terminal magnitudes per tier. Each dominates every heuristic sum its tier
// can produce, so a found win always outranks positional credit.
pub const BEGINNER_WIN: i32 = 1_000;
pub const INTERMEDIATE_WIN: i32 = 10_000;
pub const PROFESSIONAL_WIN: i32 = 100_000;

/// Counts 4-cell windows (along rows, columns and both diagonals) holding
/// exactly `target` of `player`'s pieces and no opponent piece. Such a
/// window is still a live threat of that exact size.
pub fn count_windows(board: &Board, player: Player, target: u32) -> i32 {
    let rows = board.rows();
    let cols = board.cols();
    let mut count = 0;
    for row in 0..rows {
        for col in 0..cols.saturating_sub(3) {
            if window_matches(board, player, target, |i| (row, col + i)) {
                count += 1;
            }
        }
    }
    for row in 0..rows.saturating_sub(3) {
        for col in 0..cols {
            if window_matches(board, player, target, |i| (row + i, col)) {
                count += 1;
            }
        }
    }
    for row in 0..rows.saturating_sub(3) {
        for col in 0..cols.saturating_sub(3) {
            if window_matches(board, player, target, |i| (row + i, col + i)) {
                count += 1;
            }
            if window_matches(board, player, target, |i| (row + 3 - i, col + i)) {
                count += 1;
            }
        }
    }
    count
}

fn window_matches(
    board: &Board,
    player: Player,
    target: u32,
    cell: impl Fn(usize) -> (usize, usize),
) -> bool {
    let mut own = 0;
    for i in 0..4 {
        let (row, col) = cell(i);
        match board.get(row, col) {
            Some(p) if p == player => own += 1,
            Some(_) => return false,
            None => {}
        }
    }
    own == target
}

fn center_column_pieces(board: &Board, player: Player) -> i32 {
    let center = board.center_col();
    (0..board.rows())
        .filter(|&row| board.get(row, center) == Some(player))
        .count() as i32
}

/// Tier-1: open threes and twos, symmetric for both sides.
pub fn beginner(board: &Board, side: Player) -> i32 {
    match board.winner() {
        Some(p) if p == side => return BEGINNER_WIN,
        Some(_) => return -BEGINNER_WIN,
        None => {}
    }
    let foe = side.opponent();
    let mut score = 0;
    score += count_windows(board, side, 3) * 5;
    score += count_windows(board, side, 2) * 2;
    score -= count_windows(board, foe, 3) * 5;
    score -= count_windows(board, foe, 2) * 2;
    score
}

/// Tier-2: adds singleton windows, weighs opponent threats heavier and
/// rewards owning the center column.
pub fn intermediate(board: &Board, side: Player) -> i32 {
    match board.winner() {
        Some(p) if p == side => return INTERMEDIATE_WIN,
        Some(_) => return -INTERMEDIATE_WIN,
        None => {}
    }
    let foe = side.opponent();
    let mut score = 0;
    score += count_windows(board, side, 3) * 50;
    score += count_windows(board, side, 2) * 10;
    score += count_windows(board, side, 1);
    score -= count_windows(board, foe, 3) * 80;
    score -= count_windows(board, foe, 2) * 15;
    score -= count_windows(board, foe, 1) * 2;
    score += center_column_pieces(board, side) * 6;
    score
}

/// Tier-3: three aggregate terms (sequences, center occupancy, threats),
/// each weighted asymmetrically with the opponent above self.
pub fn professional(board: &Board, side: Player) -> i32 {
    match board.winner() {
        Some(p) if p == side => return PROFESSIONAL_WIN,
        Some(_) => return -PROFESSIONAL_WIN,
        None => {}
    }
    let foe = side.opponent();
    let mut score = 0;
    score += advanced_sequences(board, side) * 100;
    score -= advanced_sequences(board, foe) * 120;
    score += positional_strength(board, side) * 10;
    score -= positional_strength(board, foe) * 12;
    score += threats(board, side) * 1000;
    score -= threats(board, foe) * 1200;
    score
}

fn advanced_sequences(board: &Board, player: Player) -> i32 {
    count_windows(board, player, 3) * 5 + count_windows(board, player, 2) * 2
}

fn positional_strength(board: &Board, player: Player) -> i32 {
    center_column_pieces(board, player) * 3
}

fn threats(board: &Board, player: Player) -> i32 {
    count_windows(board, player, 3) * 10
}
