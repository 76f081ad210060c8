//! `sb contrib` -- manage a star's contributions.

use anyhow::{Result, bail};

use starboard_core::kinds::ContributionKind;
use starboard_core::linkcheck::link_is_valid;
use starboard_core::month::{contributions_for_month, current_month, looks_like_month_key};
use starboard_core::star::Contribution;
use starboard_storage::StarStore;

use crate::cli::{ContribAddArgs, ContribArgs, ContribCommands, ContribListArgs, ContribRemoveArgs};
use crate::context::RuntimeContext;
use crate::output::{format_contribution_line, output_json};

/// Execute the `sb contrib` command.
pub fn run(ctx: &RuntimeContext, args: &ContribArgs) -> Result<()> {
    match &args.command {
        ContribCommands::Add(add_args) => run_add(ctx, add_args),
        ContribCommands::Remove(remove_args) => run_remove(ctx, remove_args),
        ContribCommands::List(list_args) => run_list(ctx, list_args),
    }
}

/// Execute `sb contrib add`.
fn run_add(ctx: &RuntimeContext, args: &ContribAddArgs) -> Result<()> {
    let (store, config) = ctx.open()?;
    ctx.require_admin(&config)?;

    let kind = ContributionKind::from(args.kind.as_str());
    let month = args.month.clone().unwrap_or_else(current_month);

    if !args.force {
        if !link_is_valid(&args.url, &kind) {
            bail!(
                "url '{}' does not look like a {} link (use --force to add anyway)",
                args.url,
                kind
            );
        }
        if !looks_like_month_key(&month) {
            bail!("month '{}' is not a YYYY-MM key (use --force to add anyway)", month);
        }
    }

    let contribution = Contribution {
        kind,
        title: args.title.clone(),
        url: args.url.clone(),
        month,
        description: args.description.clone().unwrap_or_default(),
    };

    store.add_contribution(&args.identifier, contribution.clone())?;

    if ctx.json {
        output_json(&contribution);
    } else if !ctx.quiet {
        println!(
            "Added {} contribution '{}' to {}",
            contribution.kind, contribution.title, args.identifier
        );
    }
    Ok(())
}

/// Execute `sb contrib remove`.
fn run_remove(ctx: &RuntimeContext, args: &ContribRemoveArgs) -> Result<()> {
    let (store, config) = ctx.open()?;
    ctx.require_admin(&config)?;

    let removed = store.remove_contribution(&args.identifier, args.index)?;

    if ctx.json {
        output_json(&removed);
    } else if !ctx.quiet {
        println!("Removed '{}' from {}", removed.title, args.identifier);
    }
    Ok(())
}

/// Execute `sb contrib list`.
fn run_list(ctx: &RuntimeContext, args: &ContribListArgs) -> Result<()> {
    let (store, _config) = ctx.open()?;

    let Some(star) = store.get(&args.identifier) else {
        bail!("star not found: {}", args.identifier);
    };

    let contributions: Vec<&Contribution> = match args.month.as_deref() {
        Some(prefix) => contributions_for_month(&star.contributions, prefix),
        None => star.contributions.iter().collect(),
    };

    if ctx.json {
        output_json(&contributions);
        return Ok(());
    }

    if contributions.is_empty() {
        if !ctx.quiet {
            println!("No contributions for {}", star.name);
        }
        return Ok(());
    }

    // Indexes are positions in the full list so they stay valid for
    // 'sb contrib remove' even when a month filter is active.
    for (index, contribution) in star.contributions.iter().enumerate() {
        if let Some(prefix) = args.month.as_deref() {
            if !contribution.month.starts_with(prefix) {
                continue;
            }
        }
        println!("{}", format_contribution_line(index, contribution));
    }
    Ok(())
}
