use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::SolverError;
use crate::game::{Board, Move, Player};

use super::solver::Solver;

/// A solver that picks uniformly at random among legal moves.
pub struct RandomSolver {
    player: Player,
    rng: StdRng,
}

impl RandomSolver {
    pub fn new(player: Player) -> Self {
        RandomSolver {
            player,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Solver for RandomSolver {
    fn propose_moves(&mut self, board: Option<&Board>) -> Result<Vec<Move>, SolverError> {
        let board = board.ok_or(SolverError::MissingBoard)?;
        let legal = board.legal_moves(self.player);
        if legal.is_empty() {
            return Ok(Vec::new());
        }
        let idx = self.rng.random_range(0..legal.len());
        Ok(vec![legal[idx]])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
