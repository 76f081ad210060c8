//! `sb delete` -- delete a star.

use anyhow::{Result, bail};

use starboard_storage::StarStore;

use crate::cli::DeleteArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `sb delete` command.
pub fn run(ctx: &RuntimeContext, args: &DeleteArgs) -> Result<()> {
    let (store, config) = ctx.open()?;
    ctx.require_admin(&config)?;

    // Safety: require --force for deletion
    if !args.force {
        bail!(
            "deletion is destructive and cannot be undone.\n\
            Use --force to confirm deletion of '{}'.",
            args.identifier
        );
    }

    let removed = store.delete(&args.identifier)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "identifier": args.identifier,
            "removed": removed,
        }));
    } else if !removed {
        eprintln!("Star {} not found", args.identifier);
    } else if !ctx.quiet {
        println!("Deleted {}", args.identifier);
    }
    Ok(())
}
