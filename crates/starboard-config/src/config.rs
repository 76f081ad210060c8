//! Configuration types and loading for the starboard system.
//!
//! The main entry point is [`BoardConfig`], which represents the contents
//! of `.starboard/config.yaml`. Configuration is loaded with
//! [`load_config`] and saved with [`save_config`]. All fields use serde
//! defaults so a missing, empty, or partially-specified file yields a
//! usable config.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding the admin username.
pub const ADMIN_USER_ENV: &str = "SB_ADMIN_USER";

/// Environment variable overriding the admin password.
pub const ADMIN_PASSWORD_ENV: &str = "SB_ADMIN_PASSWORD";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// The `.starboard/` directory was not found.
    #[error("no .starboard directory found (run 'sb init' first)")]
    BoardDirNotFound,
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Admin credential configuration section.
///
/// These are the expected values for the single-admin gate; the
/// `SB_ADMIN_USER` / `SB_ADMIN_PASSWORD` environment variables take
/// precedence over the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Expected admin username.
    #[serde(default = "default_admin_username")]
    pub username: String,

    /// Expected admin password.
    #[serde(default = "default_admin_password")]
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password: default_admin_password(),
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "starboard".to_string()
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full starboard configuration, corresponding to
/// `.starboard/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BoardConfig {
    /// Admin credentials.
    #[serde(default)]
    pub admin: AdminConfig,

    /// Output JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl BoardConfig {
    /// Returns the effective admin credentials as `(username, password)`.
    ///
    /// Environment variables override the file values.
    pub fn admin_credentials(&self) -> (String, String) {
        let username = non_empty_env(ADMIN_USER_ENV).unwrap_or_else(|| self.admin.username.clone());
        let password =
            non_empty_env(ADMIN_PASSWORD_ENV).unwrap_or_else(|| self.admin.password.clone());
        (username, password)
    }

    /// Verifies supplied credentials against the effective admin
    /// credentials. A plain string comparison.
    pub fn verify_admin(&self, username: &str, password: &str) -> bool {
        let (expected_username, expected_password) = self.admin_credentials();
        username == expected_username && password == expected_password
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from `config.yaml` inside the given `.starboard/`
/// directory.
///
/// If the file does not exist, a default [`BoardConfig`] is returned.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be
/// read, or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_config(board_dir: &Path) -> Result<BoardConfig> {
    let config_path = board_dir.join("config.yaml");

    if !config_path.exists() {
        return Ok(BoardConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;

    // An empty file is valid and yields default config.
    if content.trim().is_empty() {
        return Ok(BoardConfig::default());
    }

    let config: BoardConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to `config.yaml` inside the given `.starboard/`
/// directory. The directory is created if it does not exist.
pub fn save_config(board_dir: &Path, config: &BoardConfig) -> Result<()> {
    std::fs::create_dir_all(board_dir)?;

    let config_path = board_dir.join("config.yaml");
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(config_path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.admin.username, "admin");
        assert_eq!(cfg.admin.password, "starboard");
        assert!(!cfg.json);
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let dir = PathBuf::from("/nonexistent/path/.starboard");
        let cfg = load_config(&dir).unwrap();
        assert_eq!(cfg.admin.username, "admin");
    }

    #[test]
    fn test_roundtrip_config() {
        let dir = tempfile::tempdir().unwrap();
        let board_dir = dir.path().join(".starboard");

        let mut cfg = BoardConfig::default();
        cfg.admin.username = "root".to_string();
        cfg.json = true;

        save_config(&board_dir, &cfg).unwrap();
        let loaded = load_config(&board_dir).unwrap();

        assert_eq!(loaded.admin.username, "root");
        assert!(loaded.json);
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let yaml = "admin:\n  username: root\n";
        let cfg: BoardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.admin.username, "root");
        // Everything else should be default.
        assert_eq!(cfg.admin.password, "starboard");
        assert!(!cfg.json);
    }

    #[test]
    fn test_verify_admin_against_file_values() {
        let cfg = BoardConfig::default();
        // Env overrides may be set in the surrounding environment; only
        // assert the file-value path when they are absent.
        if std::env::var(ADMIN_USER_ENV).is_err() && std::env::var(ADMIN_PASSWORD_ENV).is_err() {
            assert!(cfg.verify_admin("admin", "starboard"));
            assert!(!cfg.verify_admin("admin", "wrong"));
            assert!(!cfg.verify_admin("someone", "starboard"));
        }
    }
}
