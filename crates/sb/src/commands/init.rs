//! `sb init` -- initialize a starboard in the current directory.

use std::env;

use anyhow::{Context, Result, bail};

use starboard_config::board_dir::ensure_board_dir;
use starboard_config::config::{BoardConfig, save_config};
use starboard_storage::json_store::STARS_FILE;
use starboard_storage::{JsonStore, StarStore};

use crate::cli::InitArgs;
use crate::context::RuntimeContext;

/// Execute the `sb init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let cwd = env::current_dir().context("failed to get current directory")?;

    // Safety guard: check for existing data unless --force
    let data_path = cwd.join(".starboard").join(STARS_FILE);
    if !args.force && data_path.exists() {
        bail!(
            "Found existing data file at {}\n\n\
            This directory is already initialized.\n\
            Use --force to re-initialize (the existing data is kept).",
            data_path.display()
        );
    }

    let board_dir = ensure_board_dir(&cwd)
        .with_context(|| format!("failed to create starboard directory in {}", cwd.display()))?;

    // Write a default config so the admin section is discoverable.
    let config_path = board_dir.join("config.yaml");
    if !config_path.exists() {
        save_config(&board_dir, &BoardConfig::default())?;
    }

    // Seed an empty collection so later loads see a well-formed file.
    let store = JsonStore::new(&board_dir);
    if !store.path().exists() {
        store.save(&[])?;
    }

    if !ctx.quiet {
        println!("Initialized starboard in {}", board_dir.display());
    }
    Ok(())
}
