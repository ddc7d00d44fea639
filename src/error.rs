use std::path::PathBuf;

use crate::game::Player;

/// Errors raised when a piece placement is rejected. The board is left
/// unchanged on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: column {column} is full")]
    ColumnFull { column: usize },

    #[error("illegal move: column {column} is out of range")]
    OutOfRange { column: usize },

    #[error("illegal move: the game is already over")]
    GameOver,
}

/// Errors raised at the solver entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    #[error("invalid input: no board was provided")]
    MissingBoard,
}

/// Errors that can occur while running a game between two solvers.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("{player} solver proposed no move for a playable board")]
    NoMoveProposed { player: Player },

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
