use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::Player;
use minimax_connect_four::runner::{GameOutcome, GameRunner};

/// Play a game of Connect Four between two configured solvers.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override red's search depth
    #[arg(long)]
    red_depth: Option<u32>,

    /// Override yellow's search depth
    #[arg(long)]
    yellow_depth: Option<u32>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.red_depth {
        config.red.depth = depth;
    }
    if let Some(depth) = cli.yellow_depth {
        config.yellow.depth = depth;
    }
    config.validate().context("validating config")?;

    let red = config.red.build(Player::Red);
    let yellow = config.yellow.build(Player::Yellow);
    let mut runner = GameRunner::new(red, yellow);
    let outcome = runner.play().context("running game")?;

    println!("{}", runner.board());
    match outcome {
        GameOutcome::Winner(player) => println!("{player} wins"),
        GameOutcome::Draw => println!("Draw"),
    }
    Ok(())
}
