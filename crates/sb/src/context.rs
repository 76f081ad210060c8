//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds all the state a command handler needs:
//! resolved data directory, the admin session, and global flags. It is
//! constructed once in `main` after CLI parsing, before dispatch -- no
//! global mutable state.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use starboard_config::board_dir::find_board_dir;
use starboard_config::config::{BoardConfig, load_config};
use starboard_storage::JsonStore;

use crate::cli::GlobalArgs;

/// Credentials supplied for this invocation, if any.
///
/// Verification happens lazily, only when a command needs write access.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Runtime context passed to every command handler.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Explicit data directory override (e.g., from `--dir`).
    pub dir: Option<PathBuf>,

    /// Credentials supplied via flags or environment.
    pub session: AdminSession,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            dir: global.dir.as_ref().map(PathBuf::from),
            session: AdminSession {
                username: global.username.clone(),
                password: global.password.clone(),
            },
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// Returns the resolved `.starboard/` directory, auto-discovering by
    /// walking up from the current directory if no override was given.
    pub fn resolve_board_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.dir {
            return Ok(dir.clone());
        }
        let cwd = env::current_dir().context("failed to get current directory")?;
        let board_dir =
            find_board_dir(&cwd).context("no starboard found. Run 'sb init' to create one.")?;
        tracing::debug!(dir = %board_dir.display(), "resolved starboard directory");
        Ok(board_dir)
    }

    /// Opens the store and loads the config for the resolved directory.
    pub fn open(&self) -> Result<(JsonStore, BoardConfig)> {
        let board_dir = self.resolve_board_dir()?;
        let config = load_config(&board_dir)?;
        Ok((JsonStore::new(&board_dir), config))
    }

    /// Verifies the session credentials against the effective admin
    /// credentials. Called by every mutating command before it writes.
    pub fn require_admin(&self, config: &BoardConfig) -> Result<()> {
        let (username, password) = match (&self.session.username, &self.session.password) {
            (Some(u), Some(p)) => (u.as_str(), p.as_str()),
            _ => bail!(
                "admin credentials required for write commands.\n\
                Pass --username/--password or set SB_USERNAME/SB_PASSWORD."
            ),
        };

        if !config.verify_admin(username, password) {
            bail!("invalid admin credentials");
        }
        Ok(())
    }
}
