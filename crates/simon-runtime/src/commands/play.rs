//! `simon play`: run games in the terminal until the player quits.

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::sync::Arc;
use tokio::sync::mpsc;

use simon_session::{DriverStats, SessionDriver};

use crate::adapters::{spawn_reader, stdout_writer, SharedWriter, TerminalDisplay, TerminalSignalPad};
use crate::container::GameContainer;

const INPUT_BUFFER: usize = 32;

pub async fn run(container: &GameContainer) -> Result<DriverStats> {
    play_with(container, io::BufReader::new(io::stdin()), stdout_writer()).await
}

pub async fn play_with<R>(container: &GameContainer, input: R, out: SharedWriter) -> Result<DriverStats>
where
    R: BufRead + Send + 'static,
{
    let config = container.config();
    let bank = config.session.signals.clone();

    let pad = Arc::new(TerminalSignalPad::new(bank.clone(), config.tone(), out.clone()));
    let display = Arc::new(TerminalDisplay::new(out));
    display.message(pad.legend());
    display.message("Type a number or color and press Enter. [n] new game, [q] quit");

    let session = container
        .session(pad, display.clone())
        .context("building game session")?;

    let (tx, rx) = mpsc::channel(INPUT_BUFFER);
    spawn_reader(input, bank, tx).context("starting input reader")?;

    let (_, stats) = SessionDriver::new(session, rx)
        .run()
        .await
        .context("running game session")?;

    display.message(format!(
        "Games finished: {}, best score: {}",
        stats.games_finished, stats.best_score
    ));
    Ok(stats)
}
