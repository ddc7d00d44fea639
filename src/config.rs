use std::path::Path;

use crate::ai::{FixedSolver, MinimaxSolver, RandomSolver, Solver};
use crate::error::ConfigError;
use crate::game::{Player, NUM_COLS};

/// Which move source to construct for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    Minimax,
    Random,
    Fixed,
}

/// Per-side solver settings. `depth` applies to minimax solvers, `column`
/// to fixed solvers; the other fields are ignored for a given kind.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub kind: SolverKind,
    pub depth: u32,
    pub column: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            kind: SolverKind::Minimax,
            depth: 4,
            column: 3,
        }
    }
}

impl SolverConfig {
    /// Construct the configured solver for `player`.
    pub fn build(&self, player: Player) -> Box<dyn Solver> {
        match self.kind {
            SolverKind::Minimax => Box::new(MinimaxSolver::new(player, self.depth)),
            SolverKind::Random => Box::new(RandomSolver::new(player)),
            SolverKind::Fixed => Box::new(FixedSolver::new(player, self.column)),
        }
    }

    fn validate(&self, side: &str) -> Result<(), ConfigError> {
        if self.kind == SolverKind::Minimax && self.depth == 0 {
            return Err(ConfigError::Validation(format!(
                "{side}.depth must be >= 1"
            )));
        }
        if self.kind == SolverKind::Fixed && self.column >= NUM_COLS {
            return Err(ConfigError::Validation(format!(
                "{side}.column must be < {NUM_COLS}"
            )));
        }
        Ok(())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub red: SolverConfig,
    pub yellow: SolverConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.red.validate("red")?;
        self.yellow.validate("yellow")?;
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
