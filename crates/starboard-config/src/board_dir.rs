//! Discovery and management of the `.starboard/` directory.
//!
//! The `.starboard/` directory holds the backing data file and the
//! optional `config.yaml`. This module finds it by walking up the
//! directory tree, and creates it when initializing a new board.

use crate::config::ConfigError;
use std::path::{Path, PathBuf};

/// The name of the starboard data directory.
const BOARD_DIR_NAME: &str = ".starboard";

/// The name of the environment variable that can override the data
/// directory location.
const BOARD_DIR_ENV: &str = "STARBOARD_DIR";

/// Walk up the directory tree from `start` looking for a `.starboard/`
/// directory.
///
/// The `STARBOARD_DIR` environment variable is checked first (highest
/// priority). Returns `None` if the filesystem root is reached without
/// finding one.
pub fn find_board_dir(start: &Path) -> Option<PathBuf> {
    // 1. Check STARBOARD_DIR environment variable (highest priority).
    if let Ok(env_dir) = std::env::var(BOARD_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    // 2. Walk up from `start` looking for .starboard/.
    let start = match start.canonicalize() {
        Ok(p) => p,
        Err(_) => return None,
    };

    let mut current = start.as_path();
    loop {
        let candidate = current.join(BOARD_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent;
            }
            _ => break, // Reached filesystem root.
        }
    }

    None
}

/// Walk up the directory tree looking for `.starboard/`, returning an
/// error if not found.
///
/// # Errors
///
/// Returns [`ConfigError::BoardDirNotFound`] if no `.starboard/`
/// directory is found.
pub fn find_board_dir_or_error(start: &Path) -> Result<PathBuf, ConfigError> {
    find_board_dir(start).ok_or(ConfigError::BoardDirNotFound)
}

/// Create the `.starboard/` directory under `base` if it does not exist,
/// returning its path.
pub fn ensure_board_dir(base: &Path) -> Result<PathBuf, ConfigError> {
    let dir = base.join(BOARD_DIR_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
