//! File-backed cache and profile adapters.
//!
//! Both persist small JSON documents under the data directory and write them
//! atomically via a temp file + rename.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::Leaderboard;
use crate::error::StoreError;
use crate::ports::{IdentityProvider, LeaderboardCache};

/// File name of the cached leaderboard
pub const SCORES_FILE: &str = "scores.json";

/// File name of the player profile
pub const PROFILE_FILE: &str = "profile.json";

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = std::fs::File::create(&temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    std::fs::rename(&temp_path, path)?;
    Ok(())
}

fn read_if_present(path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Leaderboard cache stored as a JSON array of score records
pub struct FileLeaderboardCache {
    path: PathBuf,
}

impl FileLeaderboardCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Cache at `{data_dir}/scores.json`
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::new(data_dir.as_ref().join(SCORES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardCache for FileLeaderboardCache {
    fn load(&self) -> Result<Option<Leaderboard>, StoreError> {
        let Some(bytes) = read_if_present(&self.path)? else {
            debug!(path = %self.path.display(), "No cached leaderboard");
            return Ok(None);
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let board: Leaderboard = serde_json::from_slice(&bytes)?;
        Ok(Some(board))
    }

    fn store(&self, board: &Leaderboard) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(board)?;
        write_atomically(&self.path, &bytes)?;
        debug!(path = %self.path.display(), entries = board.len(), "Cached leaderboard");
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
}

/// Player profile stored as `{"user_name": ...}`
///
/// The session only reads it; the login flow writes it.
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Profile at `{data_dir}/profile.json`
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::new(data_dir.as_ref().join(PROFILE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_profile(&self) -> Result<Profile, StoreError> {
        match read_if_present(&self.path)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Profile::default()),
        }
    }

    /// Record the logged-in player's name
    pub fn login(&self, name: &str) -> Result<(), StoreError> {
        let profile = Profile {
            user_name: Some(name.to_string()),
        };
        write_atomically(&self.path, &serde_json::to_vec(&profile)?)
    }
}

impl IdentityProvider for FileProfileStore {
    fn player_name(&self) -> Option<String> {
        match self.read_profile() {
            Ok(profile) => profile.user_name,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable player profile");
                None
            }
        }
    }
}
