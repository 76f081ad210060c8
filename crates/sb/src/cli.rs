//! Clap CLI definitions for the `sb` command.
//!
//! This module defines the complete CLI structure using clap 4 derive
//! macros.

use clap::{Args, Parser, Subcommand};

/// sb -- Contributor dashboard.
///
/// Tracks stars (contributor profiles) and their contributions in a
/// single JSON file.
#[derive(Parser, Debug)]
#[command(
    name = "sb",
    about = "Contributor dashboard",
    long_about = "Tracks stars (contributor profiles) and their dated, typed contributions in a single JSON data file.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Data directory (default: auto-discover .starboard/).
    #[arg(long, global = true)]
    pub dir: Option<String>,

    /// Admin username for write commands (default: $SB_USERNAME).
    #[arg(long, global = true, env = "SB_USERNAME")]
    pub username: Option<String>,

    /// Admin password for write commands (default: $SB_PASSWORD).
    #[arg(long, global = true, env = "SB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a starboard in the current directory.
    Init(InitArgs),

    /// Add a star or update an existing one (matched by name).
    #[command(alias = "upsert")]
    Add(AddArgs),

    /// Show star details.
    #[command(alias = "view")]
    Show(ShowArgs),

    /// List stars.
    List(ListArgs),

    /// Delete a star.
    Delete(DeleteArgs),

    /// Manage a star's contributions.
    Contrib(ContribArgs),

    /// Show totals and per-month contribution counts.
    Stats(StatsArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Print version and platform info.
    Version,
}

/// Arguments for `sb init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Re-initialize even if a data file already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `sb add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// The star's display name (canonical identity, case-insensitive).
    pub name: String,

    /// The star's role or title.
    #[arg(long)]
    pub role: Option<String>,

    /// A short bio.
    #[arg(long)]
    pub bio: Option<String>,
}

/// Arguments for `sb show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Star identifier: slug id or name (case-insensitive).
    pub identifier: String,
}

/// Arguments for `sb list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only count contributions whose month starts with this prefix
    /// (e.g., "2024-05" or "2024").
    #[arg(long)]
    pub month: Option<String>,
}

/// Arguments for `sb delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Star identifier: slug id or name (case-insensitive).
    pub identifier: String,

    /// Confirm the deletion.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `sb contrib`.
#[derive(Args, Debug)]
pub struct ContribArgs {
    #[command(subcommand)]
    pub command: ContribCommands,
}

/// Subcommands of `sb contrib`.
#[derive(Subcommand, Debug)]
pub enum ContribCommands {
    /// Append a contribution to a star.
    Add(ContribAddArgs),

    /// Remove a contribution by index.
    Remove(ContribRemoveArgs),

    /// List a star's contributions.
    List(ContribListArgs),
}

/// Arguments for `sb contrib add`.
#[derive(Args, Debug)]
pub struct ContribAddArgs {
    /// Star identifier: slug id or name (case-insensitive).
    pub identifier: String,

    /// Contribution kind (youtube, medium, linkedin, substack,
    /// meetups/events, open source, other, or any custom string).
    #[arg(short = 'k', long)]
    pub kind: String,

    /// Contribution title.
    #[arg(short = 't', long)]
    pub title: String,

    /// Contribution URL.
    #[arg(short = 'u', long)]
    pub url: String,

    /// Month key, YYYY-MM (default: current month).
    #[arg(short = 'm', long)]
    pub month: Option<String>,

    /// Optional description.
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Skip URL and month validation.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `sb contrib remove`.
#[derive(Args, Debug)]
pub struct ContribRemoveArgs {
    /// Star identifier: slug id or name (case-insensitive).
    pub identifier: String,

    /// Zero-based contribution index (as shown by `sb contrib list`).
    pub index: usize,
}

/// Arguments for `sb contrib list`.
#[derive(Args, Debug)]
pub struct ContribListArgs {
    /// Star identifier: slug id or name (case-insensitive).
    pub identifier: String,

    /// Only show contributions whose month starts with this prefix.
    #[arg(long)]
    pub month: Option<String>,
}

/// Arguments for `sb stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Month prefix to report on instead of the current/previous months.
    #[arg(long)]
    pub month: Option<String>,
}

/// Arguments for `sb completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Supported completion shells.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
