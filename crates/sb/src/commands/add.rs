//! `sb add` -- add a star or update an existing one.

use anyhow::{Context, Result};

use starboard_core::star::StarBuilder;
use starboard_core::validation::validate_star;
use starboard_storage::StarStore;

use crate::cli::AddArgs;
use crate::context::RuntimeContext;
use crate::output::{StarView, output_json};

/// Execute the `sb add` command.
///
/// This is an upsert keyed by case-insensitive name: a matching record
/// is replaced (keeping its contributions), otherwise a new one is
/// appended.
pub fn run(ctx: &RuntimeContext, args: &AddArgs) -> Result<()> {
    let (store, config) = ctx.open()?;
    ctx.require_admin(&config)?;

    let star = StarBuilder::new(args.name.clone())
        .role(args.role.clone().unwrap_or_default())
        .bio(args.bio.clone().unwrap_or_default())
        .build();
    validate_star(&star)?;

    let name = star.name.clone();
    let updated = store.upsert(star)?;

    let stored = store
        .get(&name)
        .context("star missing right after upsert")?;

    if ctx.json {
        output_json(&StarView::from_star(&stored));
    } else if !ctx.quiet {
        if updated {
            println!("Updated {} ({})", stored.name, stored.id);
        } else {
            println!("Added {} ({})", stored.name, stored.id);
        }
    }
    Ok(())
}
