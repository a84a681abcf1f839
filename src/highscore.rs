//! Single-integer high score persistence.
//!
//! The file format is four little-endian bytes: one signed 32-bit score.
//! A missing, short or unreadable file means "no prior high score" and is
//! never an error; writes happen only when a finished run beats the
//! stored value.

use std::io;
use std::path::{Path, PathBuf};

/// Default score file, written next to the executable
pub const HIGH_SCORE_FILE: &str = "highscore.dat";

#[derive(Debug, Clone)]
pub struct HighScore {
    pub value: i32,
    path: PathBuf,
}

impl HighScore {
    /// Load the stored high score, defaulting to 0 on any read problem.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let value = match read_score(&path) {
            Ok(score) => {
                log::info!("loaded high score {score} from {}", path.display());
                score
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => {
                log::warn!("unreadable high score file {}: {err}", path.display());
                0
            }
        };
        Self { value, path }
    }

    /// Record a finished run. Persists and returns true only when `score`
    /// beats the stored value.
    pub fn submit(&mut self, score: i32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        if let Err(err) = std::fs::write(&self.path, score.to_le_bytes()) {
            log::warn!("failed to save high score to {}: {err}", self.path.display());
        } else {
            log::info!("new high score {score} saved");
        }
        true
    }
}

fn read_score(path: &Path) -> io::Result<i32> {
    let bytes = std::fs::read(path)?;
    let Some(head) = bytes.first_chunk::<4>() else {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected 4 bytes, found {}", bytes.len()),
        ));
    };
    Ok(i32::from_le_bytes(*head))
}
