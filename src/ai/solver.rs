use crate::error::SolverError;
use crate::game::{Board, Move};

/// Universal interface for move sources. The minimax search, the random
/// solver, and the fixed-column test double are interchangeable behind it.
pub trait Solver {
    /// Propose candidate moves for the given board. More than one move means
    /// the proposals are considered equally good; the caller picks among
    /// them. An empty result means the board has no legal moves. Passing
    /// `None` for the board fails with [`SolverError::MissingBoard`] before
    /// any work is done.
    fn propose_moves(&mut self, board: Option<&Board>) -> Result<Vec<Move>, SolverError>;

    /// Return the solver's display name.
    fn name(&self) -> &str {
        "Solver"
    }
}
