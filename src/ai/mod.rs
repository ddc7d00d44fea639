//! Move selection: the solver interface, the fixed-depth minimax search,
//! and the simple solvers used for testing and casual play.

mod fixed;
mod minimax;
mod random;
mod solver;
mod tree;

pub use fixed::FixedSolver;
pub use minimax::MinimaxSolver;
pub use random::RandomSolver;
pub use solver::Solver;
pub use tree::GameState;
