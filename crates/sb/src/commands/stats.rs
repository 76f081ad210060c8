//! `sb stats` -- totals and per-month contribution counts.

use anyhow::Result;
use serde::Serialize;

use starboard_core::month::{contributions_for_month, current_month, previous_month};
use starboard_core::star::Star;
use starboard_storage::StarStore;

use crate::cli::StatsArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Aggregated dashboard numbers.
#[derive(Debug, Serialize)]
struct Stats {
    stars: usize,
    contributions: usize,
    months: Vec<MonthCount>,
}

#[derive(Debug, Serialize)]
struct MonthCount {
    month: String,
    contributions: usize,
}

fn month_count(stars: &[Star], prefix: &str) -> MonthCount {
    let contributions = stars
        .iter()
        .map(|s| contributions_for_month(&s.contributions, prefix).len())
        .sum();
    MonthCount {
        month: prefix.to_string(),
        contributions,
    }
}

/// Execute the `sb stats` command.
pub fn run(ctx: &RuntimeContext, args: &StatsArgs) -> Result<()> {
    let (store, _config) = ctx.open()?;
    let stars = store.load();

    let months = match args.month.as_deref() {
        Some(prefix) => vec![month_count(&stars, prefix)],
        None => vec![
            month_count(&stars, &current_month()),
            month_count(&stars, &previous_month()),
        ],
    };

    let stats = Stats {
        stars: stars.len(),
        contributions: stars.iter().map(|s| s.contributions.len()).sum(),
        months,
    };

    if ctx.json {
        output_json(&stats);
        return Ok(());
    }

    println!("Stars:         {}", stats.stars);
    println!("Contributions: {}", stats.contributions);
    for month in &stats.months {
        println!("  {}: {}", month.month, month.contributions);
    }
    Ok(())
}
