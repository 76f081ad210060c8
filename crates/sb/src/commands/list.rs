//! `sb list` -- list stars with contribution counts.

use anyhow::Result;

use starboard_storage::StarStore;

use crate::cli::ListArgs;
use crate::context::RuntimeContext;
use crate::output::{StarView, format_star_row, output_json, output_table};

/// Execute the `sb list` command.
pub fn run(ctx: &RuntimeContext, args: &ListArgs) -> Result<()> {
    let (store, _config) = ctx.open()?;
    let stars = store.load();

    if ctx.json {
        let views: Vec<StarView> = stars.iter().map(StarView::from_star).collect();
        output_json(&views);
        return Ok(());
    }

    if stars.is_empty() {
        if !ctx.quiet {
            println!("No stars yet. Add one with 'sb add <name>'.");
        }
        return Ok(());
    }

    let month = args.month.as_deref();
    let rows: Vec<Vec<String>> = stars.iter().map(|s| format_star_row(s, month)).collect();
    let count_header = match month {
        Some(prefix) => format!("CONTRIBS ({})", prefix),
        None => "CONTRIBS".to_string(),
    };
    output_table(&["ID", "NAME", "ROLE", &count_header], &rows);
    Ok(())
}
