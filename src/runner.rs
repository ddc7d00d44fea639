//! Turn orchestration between two solvers sharing one board.

use tracing::{debug, info};

use crate::ai::Solver;
use crate::error::RunnerError;
use crate::game::{Board, Player};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Drives a game between two solvers. Each turn the active solver is asked
/// for its proposals on the current board and the first proposal is applied;
/// ties among equally good moves are broken by taking the lowest column.
pub struct GameRunner {
    red: Box<dyn Solver>,
    yellow: Box<dyn Solver>,
    board: Board,
    to_move: Player,
}

impl GameRunner {
    /// A runner starting from an empty board with red to move.
    pub fn new(red: Box<dyn Solver>, yellow: Box<dyn Solver>) -> Self {
        Self::with_board(red, yellow, Board::new(), Player::Red)
    }

    /// A runner resuming from a pre-seeded position.
    pub fn with_board(
        red: Box<dyn Solver>,
        yellow: Box<dyn Solver>,
        board: Board,
        to_move: Player,
    ) -> Self {
        GameRunner {
            red,
            yellow,
            board,
            to_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Alternate turns until the board has a winner or no column is
    /// playable. Blocks for the full duration of every solver's search.
    pub fn play(&mut self) -> Result<GameOutcome, RunnerError> {
        loop {
            if let Some(winner) = self.board.winner() {
                info!(winner = %winner, "game over");
                return Ok(GameOutcome::Winner(winner));
            }
            if self.board.is_full() {
                info!("game over, board full");
                return Ok(GameOutcome::Draw);
            }

            let player = self.to_move;
            let solver = match player {
                Player::Red => &mut self.red,
                Player::Yellow => &mut self.yellow,
            };
            let proposals = solver.propose_moves(Some(&self.board))?;
            let mv = proposals
                .first()
                .copied()
                .ok_or(RunnerError::NoMoveProposed { player })?;

            debug!(player = %player, column = mv.column, "applying move");
            self.board.make_move(mv)?;
            self.to_move = player.opponent();
        }
    }
}
