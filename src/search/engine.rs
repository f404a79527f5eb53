use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Player};
use crate::search::eval;
use crate::search::ordering::center_out;
use crate::search::{Difficulty, INF, MAX_DEEPENING_DEPTH};

/// What a finished search hands back to the caller: the chosen column plus
/// diagnostics for telemetry display.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub column: usize,
    pub score: i32,
    /// Deepest fully completed iteration; the fixed depth for Beginner, at
    /// least 1 for the deepening difficulties.
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Adversarial searcher for one side of the board. The difficulty fixes the
/// algorithm, depth/time policy, move ordering and evaluation tier.
pub struct Engine {
    difficulty: Difficulty,
    side: Player,
    budget: Duration,
    nodes: u64,
}

impl Engine {
    pub fn new(difficulty: Difficulty, side: Player, budget: Duration) -> Self {
        Engine {
            difficulty,
            side,
            budget,
            nodes: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn side(&self) -> Player {
        self.side
    }

    /// Nodes visited by the most recent `best_move` call.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks a column for the engine side. Returns `None` only when the
    /// board has no open column at all; on a board that is already decided
    /// but still has room it falls back to the first open column instead of
    /// failing. The caller is expected to check `winner`/`is_full` first.
    pub fn best_move(&mut self, board: &mut Board) -> Option<SearchOutcome> {
        let start = Instant::now();
        self.nodes = 0;

        let fallback = *board.valid_moves().first()?;

        let (column, score, depth) = match self.difficulty {
            Difficulty::Beginner => {
                let (col, score) = self.minimax(board, 3, true);
                (col.unwrap_or(fallback), score, 3)
            }
            Difficulty::Intermediate => {
                // The fixed depth-5 pass is superseded by the deepening loop
                // below; its cost still counts against the budget.
                let _ = self.alphabeta(board, 5, -INF, INF, true);
                self.deepen(board, fallback, start)
            }
            Difficulty::Professional => self.deepen(board, fallback, start),
        };

        Some(SearchOutcome {
            column,
            score,
            depth,
            nodes: self.nodes,
            elapsed: start.elapsed(),
        })
    }

    /// Iterative deepening: full alpha-beta passes at increasing depth, the
    /// wall clock checked between passes only. A pass that has started
    /// always completes, so the last iteration may overrun the budget.
    /// Depth 1 runs unconditionally, which keeps a real answer available
    /// even when the budget is already spent.
    fn deepen(&mut self, board: &mut Board, fallback: usize, start: Instant) -> (usize, i32, u32) {
        let mut column = fallback;
        let mut score = 0;
        let mut completed = 0;

        for depth in 1..=MAX_DEEPENING_DEPTH {
            if depth > 1 && start.elapsed() > self.budget {
                break;
            }
            let (col, pass_score) = self.alphabeta(board, depth, -INF, INF, true);
            if let Some(col) = col {
                column = col;
            }
            score = pass_score;
            completed = depth;
            debug!(
                "depth {} done: column={} score={} nodes={}",
                depth, column, score, self.nodes
            );
        }

        (column, score, completed)
    }

    /// Plain minimax. Returns `None` for the column at terminal nodes; inner
    /// nodes always name the best child column.
    fn minimax(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> (Option<usize>, i32) {
        self.nodes += 1;

        if board.winner().is_some() || depth == 0 || board.is_full() {
            return (None, self.evaluate(board));
        }

        let moves = board.valid_moves();
        // Non-terminal, so at least one column is open.
        let mut best_col = moves[0];

        if maximizing {
            let mut best_score = -INF;
            for col in moves {
                board.add_piece(col, self.side);
                let (_, score) = self.minimax(board, depth - 1, false);
                board.remove_piece(col);
                if score > best_score {
                    best_score = score;
                    best_col = col;
                }
            }
            (Some(best_col), best_score)
        } else {
            let mut best_score = INF;
            for col in moves {
                board.add_piece(col, self.side.opponent());
                let (_, score) = self.minimax(board, depth - 1, true);
                board.remove_piece(col);
                if score < best_score {
                    best_score = score;
                    best_col = col;
                }
            }
            (Some(best_col), best_score)
        }
    }

    /// Alpha-beta. Prunes siblings once beta <= alpha; the root (column,
    /// score) pair is identical to plain minimax on the same position.
    fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (Option<usize>, i32) {
        self.nodes += 1;

        if board.winner().is_some() || depth == 0 || board.is_full() {
            return (None, self.evaluate(board));
        }

        let mut moves = board.valid_moves();
        if self.difficulty == Difficulty::Professional {
            moves = center_out(board.cols(), &moves);
        }
        let mut best_col = moves[0];

        if maximizing {
            let mut best_score = -INF;
            for col in moves {
                board.add_piece(col, self.side);
                let (_, score) = self.alphabeta(board, depth - 1, alpha, beta, false);
                board.remove_piece(col);
                if score > best_score {
                    best_score = score;
                    best_col = col;
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            (Some(best_col), best_score)
        } else {
            let mut best_score = INF;
            for col in moves {
                board.add_piece(col, self.side.opponent());
                let (_, score) = self.alphabeta(board, depth - 1, alpha, beta, true);
                board.remove_piece(col);
                if score < best_score {
                    best_score = score;
                    best_col = col;
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            (Some(best_col), best_score)
        }
    }

    fn evaluate(&self, board: &Board) -> i32 {
        match self.difficulty {
            Difficulty::Beginner => eval::beginner(board, self.side),
            Difficulty::Intermediate => eval::intermediate(board, self.side),
            Difficulty::Professional => eval::professional(board, self.side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEST_BUDGET: Duration = Duration::from_millis(80);

    fn engine(difficulty: Difficulty) -> Engine {
        Engine::new(difficulty, Player::Yellow, TEST_BUDGET)
    }

    /// Red on the far left, Yellow with an open three completed only by
    /// column 4.
    fn single_winning_column_board() -> Board {
        let mut board = Board::default();
        board.add_piece(0, Player::Red);
        board.add_piece(1, Player::Yellow);
        board.add_piece(2, Player::Yellow);
        board.add_piece(3, Player::Yellow);
        board.add_piece(1, Player::Red);
        board.add_piece(2, Player::Red);
        board
    }

    #[test]
    fn every_difficulty_takes_the_winning_column() {
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Professional,
        ] {
            let mut board = single_winning_column_board();
            let outcome = engine(difficulty)
                .best_move(&mut board)
                .expect("open columns remain");
            assert_eq!(
                outcome.column, 4,
                "{:?} must finish the open three",
                difficulty
            );
            board.add_piece(outcome.column, Player::Yellow);
            assert_eq!(board.winner(), Some(Player::Yellow));
        }
    }

    #[test]
    fn winning_scores_carry_the_tier_magnitude() {
        let cases = [
            (Difficulty::Beginner, eval::BEGINNER_WIN),
            (Difficulty::Intermediate, eval::INTERMEDIATE_WIN),
            (Difficulty::Professional, eval::PROFESSIONAL_WIN),
        ];
        for (difficulty, magnitude) in cases {
            let mut board = single_winning_column_board();
            let outcome = engine(difficulty).best_move(&mut board).unwrap();
            assert_eq!(
                outcome.score, magnitude,
                "{:?} should report the terminal magnitude",
                difficulty
            );
        }
    }

    #[test]
    fn every_difficulty_blocks_an_open_three() {
        // Red threatens column 1; Yellow has no win of its own.
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Professional,
        ] {
            let mut board = Board::default();
            board.add_piece(2, Player::Red);
            board.add_piece(6, Player::Yellow);
            board.add_piece(3, Player::Red);
            board.add_piece(6, Player::Yellow);
            board.add_piece(4, Player::Red);
            board.add_piece(5, Player::Yellow);
            let outcome = engine(difficulty).best_move(&mut board).unwrap();
            assert_eq!(
                outcome.column, 1,
                "{:?} must block the open three",
                difficulty
            );
        }
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Professional,
        ] {
            let mut board = Board::default();
            board.add_piece(3, Player::Red);
            board.add_piece(3, Player::Yellow);
            board.add_piece(4, Player::Red);
            let before = board.clone();
            engine(difficulty).best_move(&mut board).unwrap();
            assert_eq!(board, before, "{:?} search must undo every move", difficulty);
        }
    }

    #[test]
    fn pruning_never_changes_the_root_answer() {
        let positions = [
            Board::default(),
            single_winning_column_board(),
            {
                let mut b = Board::default();
                b.add_piece(3, Player::Red);
                b.add_piece(3, Player::Yellow);
                b.add_piece(2, Player::Red);
                b.add_piece(4, Player::Yellow);
                b.add_piece(4, Player::Red);
                b
            },
        ];
        for board in positions {
            for depth in 1..=4 {
                // Intermediate keeps the natural column order in both
                // algorithms, which the comparison depends on.
                let mut eng = engine(Difficulty::Intermediate);
                let mut plain_board = board.clone();
                let plain = eng.minimax(&mut plain_board, depth, true);
                let mut pruned_board = board.clone();
                let pruned = eng.alphabeta(&mut pruned_board, depth, -INF, INF, true);
                assert_eq!(
                    plain, pruned,
                    "alpha-beta diverged from minimax at depth {}",
                    depth
                );
            }
        }
    }

    #[test]
    fn zero_budget_still_returns_a_playable_column() {
        let mut board = Board::default();
        board.add_piece(0, Player::Red);
        let mut eng = Engine::new(Difficulty::Professional, Player::Yellow, Duration::ZERO);
        let outcome = eng.best_move(&mut board).unwrap();
        assert!(
            board.valid_moves().contains(&outcome.column),
            "column {} is not playable",
            outcome.column
        );
        assert!(outcome.depth >= 1, "depth 1 runs even on a spent budget");
    }

    #[test]
    fn full_board_yields_no_outcome() {
        let mut board = Board::default();
        for col in 0..board.cols() {
            for i in 0..board.rows() {
                let player = if (col + i) % 2 == 0 { Player::Red } else { Player::Yellow };
                board.add_piece(col, player);
            }
        }
        assert!(board.is_full());
        assert!(engine(Difficulty::Beginner).best_move(&mut board).is_none());
    }

    #[test]
    fn decided_board_falls_back_to_the_first_open_column() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.add_piece(0, Player::Red);
        }
        assert_eq!(board.winner(), Some(Player::Red));
        let outcome = engine(Difficulty::Beginner).best_move(&mut board).unwrap();
        assert_eq!(outcome.column, board.valid_moves()[0]);
        assert_eq!(outcome.score, -eval::BEGINNER_WIN);
    }

    #[test]
    fn node_counter_resets_between_searches() {
        let mut board = Board::default();
        let mut eng = engine(Difficulty::Beginner);
        let first = eng.best_move(&mut board).unwrap();
        let second = eng.best_move(&mut board).unwrap();
        assert!(first.nodes > 0);
        assert_eq!(
            first.nodes, second.nodes,
            "identical searches must count identical nodes"
        );
        assert_eq!(eng.nodes(), second.nodes);
    }

    #[test]
    fn deepening_reports_the_completed_depth() {
        let mut board = single_winning_column_board();
        let outcome = engine(Difficulty::Professional).best_move(&mut board).unwrap();
        assert!(outcome.depth >= 1, "at least depth 1 must complete");
        assert!(outcome.depth <= MAX_DEEPENING_DEPTH);
    }
}
