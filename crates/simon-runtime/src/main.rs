//! `simon`: play the Simon memory game in a terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use simon_runtime::commands::{login, play, scores};
use simon_runtime::{CliOverrides, GameContainer, RuntimeConfig};

/// Simon: repeat the growing sequence of signals
#[derive(Parser, Debug)]
#[command(name = "simon")]
#[command(about = "Terminal Simon memory game with a shared leaderboard")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Score server base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory for the cached leaderboard and player profile
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Do not contact the score server
    #[arg(long, global = true)]
    offline: bool,

    /// How long each signal stays lit, in milliseconds
    #[arg(long, global = true)]
    tone_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play until you quit (default)
    Play,
    /// Set the name stored with your scores
    Login {
        /// Player name
        name: String,
    },
    /// Show the leaderboard
    Scores,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            data_dir: self.data_dir.clone(),
            offline: self.offline,
            tone_ms: self.tone_ms,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs on stderr, game board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::load(args.config.as_deref(), &args.overrides())
        .context("loading configuration")?;
    let container = GameContainer::new(config).context("initializing score stores")?;

    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stats = play::run(&container).await?;
            info!(games = stats.games_finished, best = stats.best_score, "Goodbye");
        }
        Command::Login { name } => println!("{}", login::run(&container, &name)?),
        Command::Scores => println!("{}", scores::run(&container).await),
    }

    Ok(())
}
