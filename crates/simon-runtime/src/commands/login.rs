//! `simon login <NAME>`: remember the player name for future scores.

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::container::GameContainer;

pub fn run(container: &GameContainer, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        bail!("player name must not be blank");
    }

    container
        .profile()
        .login(name)
        .with_context(|| format!("saving profile to {}", container.profile().path().display()))?;

    info!(player = %name, "Logged in");
    Ok(format!("Logged in as {}", name))
}
