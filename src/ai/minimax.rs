use tracing::debug;

use crate::error::SolverError;
use crate::game::{Board, Move, Player};

use super::solver::Solver;
use super::tree::GameState;

/// Base value of a won leaf, multiplied by the number of empty cells
/// remaining. Terminal scores always exceed any line-occupancy score in
/// magnitude, and earlier wins outrank later ones.
const WIN_VALUE: i64 = 10_000;

/// A solver that searches the game tree to a fixed depth and ranks moves
/// with the minimax algorithm. The search is deliberately unpruned: it
/// visits every node of the depth-bounded tree, so its cost is exponential
/// in the configured depth.
pub struct MinimaxSolver {
    player: Player,
    depth: u32,
}

impl MinimaxSolver {
    /// A solver searching to `depth` plies on behalf of `player`.
    pub fn new(player: Player, depth: u32) -> Self {
        MinimaxSolver { player, depth }
    }

    /// Assign a minimax value to every node of the tree rooted at `state`
    /// and return the root's value. Leaves are scored by [`evaluate`]; an
    /// interior node takes the maximum of its children when this solver's
    /// player is about to move, the minimum otherwise. Children are visited
    /// in order, post-order overall.
    ///
    /// [`evaluate`]: MinimaxSolver::evaluate
    pub fn minimax(&self, state: &mut GameState) -> i64 {
        if state.children().is_empty() {
            let value = self.evaluate(state.board());
            state.set_value(value);
            return value;
        }

        let maximizing = state.player_to_move() == self.player;
        let mut best = if maximizing { i64::MIN } else { i64::MAX };
        for child in state.children_mut() {
            let value = self.minimax(child);
            if (maximizing && value > best) || (!maximizing && value < best) {
                best = value;
            }
        }
        state.set_value(best);
        best
    }

    /// Score a leaf board from this solver's perspective. A won board scores
    /// `±WIN_VALUE` per remaining empty cell. Otherwise every win location
    /// contributes +1 per own piece and -1 per opponent piece, rewarding
    /// control of many potential lines.
    pub fn evaluate(&self, board: &Board) -> i64 {
        match board.winner() {
            Some(winner) => {
                let empty = board.count_empty() as i64;
                if winner == self.player {
                    WIN_VALUE * empty
                } else {
                    -WIN_VALUE * empty
                }
            }
            None => {
                let mut value = 0;
                for location in board.win_locations() {
                    for cell in location {
                        match cell {
                            Some(p) if p == self.player => value += 1,
                            Some(_) => value -= 1,
                            None => {}
                        }
                    }
                }
                value
            }
        }
    }
}

impl Solver for MinimaxSolver {
    /// Build the game tree from `board`, evaluate it, and return every
    /// immediate move tied for the best value, in ascending column order.
    fn propose_moves(&mut self, board: Option<&Board>) -> Result<Vec<Move>, SolverError> {
        let board = board.ok_or(SolverError::MissingBoard)?;

        let mut root = GameState::new(self.player, *board, None);
        root.build_tree(self.depth);
        let best = self.minimax(&mut root);

        let moves: Vec<Move> = root
            .children()
            .iter()
            .filter(|child| child.value() == Some(best))
            .filter_map(|child| child.last_move())
            .collect();
        debug!(
            player = %self.player,
            depth = self.depth,
            value = best,
            candidates = moves.len(),
            "minimax search complete"
        );
        Ok(moves)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_columns(columns: &[(Player, usize)]) -> Board {
        let mut board = Board::new();
        for &(player, column) in columns {
            board.make_move(Move::new(player, column)).unwrap();
        }
        board
    }

    // --- Heuristic tests ---

    #[test]
    fn test_empty_board_evaluates_to_zero() {
        let solver = MinimaxSolver::new(Player::Red, 4);
        assert_eq!(solver.evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_won_board_scales_with_empty_cells() {
        let solver = MinimaxSolver::new(Player::Red, 4);

        // Vertical red win, 4 pieces placed
        let fast_win = board_from_columns(&[
            (Player::Red, 1),
            (Player::Red, 1),
            (Player::Red, 1),
            (Player::Red, 1),
        ]);
        // Same win with two extra yellow pieces on the board
        let slow_win = board_from_columns(&[
            (Player::Yellow, 0),
            (Player::Yellow, 6),
            (Player::Red, 1),
            (Player::Red, 1),
            (Player::Red, 1),
            (Player::Red, 1),
        ]);

        assert_eq!(solver.evaluate(&fast_win), WIN_VALUE * 38);
        assert_eq!(solver.evaluate(&slow_win), WIN_VALUE * 36);
        assert!(solver.evaluate(&fast_win) > solver.evaluate(&slow_win));
    }

    #[test]
    fn test_opponent_win_scores_negative() {
        let solver = MinimaxSolver::new(Player::Red, 4);
        let yellow_win = board_from_columns(&[
            (Player::Yellow, 2),
            (Player::Yellow, 2),
            (Player::Yellow, 2),
            (Player::Yellow, 2),
        ]);
        assert_eq!(solver.evaluate(&yellow_win), -WIN_VALUE * 38);
    }

    #[test]
    fn test_win_dominates_any_line_occupancy_score() {
        let solver = MinimaxSolver::new(Player::Red, 4);

        // A busy non-terminal midgame position
        let midgame = board_from_columns(&[
            (Player::Red, 1),
            (Player::Yellow, 2),
            (Player::Red, 2),
            (Player::Yellow, 1),
            (Player::Red, 3),
            (Player::Yellow, 3),
            (Player::Red, 3),
            (Player::Yellow, 0),
        ]);
        assert_eq!(midgame.winner(), None);

        let win = board_from_columns(&[
            (Player::Red, 1),
            (Player::Red, 1),
            (Player::Red, 1),
            (Player::Red, 1),
        ]);

        assert!(solver.evaluate(&midgame).abs() < WIN_VALUE);
        assert!(solver.evaluate(&win) >= WIN_VALUE);
    }

    // --- Search tests ---

    #[test]
    fn test_rejects_missing_board() {
        let mut solver = MinimaxSolver::new(Player::Red, 10);
        assert_eq!(solver.propose_moves(None), Err(SolverError::MissingBoard));
    }

    #[test]
    fn test_takes_immediate_win() {
        // Red holds the bottom row at columns 0..2; column 3 wins at once
        let board = board_from_columns(&[
            (Player::Red, 0),
            (Player::Yellow, 0),
            (Player::Red, 1),
            (Player::Yellow, 1),
            (Player::Red, 2),
            (Player::Yellow, 2),
        ]);

        let mut solver = MinimaxSolver::new(Player::Red, 2);
        let moves = solver.propose_moves(Some(&board)).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0], Move::new(Player::Red, 3));
    }

    #[test]
    fn test_finds_both_winning_columns() {
        let board = board_from_columns(&[
            (Player::Red, 1),
            (Player::Yellow, 2),
            (Player::Red, 2),
            (Player::Yellow, 1),
            (Player::Red, 3),
            (Player::Yellow, 3),
            (Player::Red, 3),
            (Player::Yellow, 0),
            (Player::Red, 4),
            (Player::Yellow, 5),
            (Player::Red, 2),
            (Player::Yellow, 4),
            (Player::Red, 4),
            (Player::Yellow, 6),
        ]);

        // Red has two winning moves here. Will it spot that?
        let mut solver = MinimaxSolver::new(Player::Red, 6);
        let moves = solver.propose_moves(Some(&board)).unwrap();

        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], Move::new(Player::Red, 1));
        assert_eq!(moves[1], Move::new(Player::Red, 4));
    }

    #[test]
    fn test_blocks_opponent_winning_move() {
        let board = board_from_columns(&[
            (Player::Yellow, 0),
            (Player::Red, 0),
            (Player::Yellow, 1),
            (Player::Red, 0),
            (Player::Yellow, 2),
        ]);

        // Yellow threatens a horizontal win at column 3. Will red spot that?
        let mut solver = MinimaxSolver::new(Player::Red, 5);
        let moves = solver.propose_moves(Some(&board)).unwrap();

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0], Move::new(Player::Red, 3));
    }

    #[test]
    fn test_no_moves_on_won_board() {
        let board = board_from_columns(&[
            (Player::Yellow, 5),
            (Player::Yellow, 5),
            (Player::Yellow, 5),
            (Player::Yellow, 5),
        ]);

        let mut solver = MinimaxSolver::new(Player::Red, 3);
        let moves = solver.propose_moves(Some(&board)).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn test_name_is_minimax() {
        let solver = MinimaxSolver::new(Player::Red, 4);
        assert_eq!(solver.name(), "Minimax");
    }
}
