use crate::error::SolverError;
use crate::game::{Board, Move, Player};

use super::solver::Solver;

/// A test double that always proposes its configured column while that
/// column is playable, falling back to the lowest legal column otherwise.
pub struct FixedSolver {
    player: Player,
    column: usize,
}

impl FixedSolver {
    pub fn new(player: Player, column: usize) -> Self {
        FixedSolver { player, column }
    }
}

impl Solver for FixedSolver {
    fn propose_moves(&mut self, board: Option<&Board>) -> Result<Vec<Move>, SolverError> {
        let board = board.ok_or(SolverError::MissingBoard)?;
        let legal = board.legal_moves(self.player);
        let preferred = legal.iter().find(|mv| mv.column == self.column);
        Ok(preferred.or_else(|| legal.first()).copied().into_iter().collect())
    }

    fn name(&self) -> &str {
        "Fixed"
    }
}
