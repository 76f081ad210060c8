//! `sb show` -- show star details.

use anyhow::{Result, bail};

use starboard_storage::StarStore;

use crate::cli::ShowArgs;
use crate::context::RuntimeContext;
use crate::output::{format_star_detail, output_json};

/// Execute the `sb show` command.
pub fn run(ctx: &RuntimeContext, args: &ShowArgs) -> Result<()> {
    let (store, _config) = ctx.open()?;

    let Some(star) = store.get(&args.identifier) else {
        bail!("star not found: {}", args.identifier);
    };

    if ctx.json {
        // Full record including contributions, not the summary view.
        output_json(&star);
    } else {
        println!("{}", format_star_detail(&star));
    }
    Ok(())
}
