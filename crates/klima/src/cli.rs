//! Clap derive structures for the `klima` CLI.
//!
//! Defines the command tree, global flags, and shared enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// klima -- admin console for an air-conditioner fleet
#[derive(Debug, Parser)]
#[command(
    name = "klima",
    version,
    about = "Manage a fleet of air-conditioning units from the command line",
    long_about = "List, filter, create, edit, and delete the conditioners tracked by a\n\
        fleet API, plus browse its reference data (statuses, types, manufacturers).\n\
        All writes go to the server; the list shown is always a fresh mirror of it.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL (overrides config and KLIMA_API_URL)
    #[arg(long, short = 'u', env = "KLIMA_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "KLIMA_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "KLIMA_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List conditioners, with optional filtering
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one conditioner in full
    Show(ShowArgs),

    /// Create a conditioner
    #[command(alias = "new")]
    Create(DraftArgs),

    /// Replace a conditioner (all fields required)
    #[command(alias = "edit")]
    Update(UpdateArgs),

    /// Delete a conditioner
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List operational statuses
    Statuses,

    /// List unit types
    Types,

    /// List manufacturers
    Manufacturers,
}

// ── Per-command args ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring over name, model, and serial number
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Keep only this status id
    #[arg(long)]
    pub status: Option<i64>,

    /// Keep only this type id
    #[arg(long = "type")]
    pub type_id: Option<i64>,

    /// Keep only this manufacturer id
    #[arg(long)]
    pub manufacturer: Option<i64>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Conditioner id
    pub id: i64,
}

/// Draft fields for create/update. All of them are required by the API;
/// omissions are reported field-by-field before anything is sent.
#[derive(Debug, Args)]
pub struct DraftArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Model designation
    #[arg(long)]
    pub model: Option<String>,

    /// Serial number
    #[arg(long)]
    pub serial_number: Option<String>,

    /// Where the unit is installed
    #[arg(long)]
    pub location: Option<String>,

    /// Installation date, YYYY-MM-DD
    #[arg(long)]
    pub installation_date: Option<String>,

    /// Status id (see `klima statuses`)
    #[arg(long)]
    pub status: Option<i64>,

    /// Type id (see `klima types`)
    #[arg(long = "type")]
    pub type_id: Option<i64>,

    /// Manufacturer id (see `klima manufacturers`)
    #[arg(long)]
    pub manufacturer: Option<i64>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Conditioner id
    pub id: i64,

    #[command(flatten)]
    pub draft: DraftArgs,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Conditioner id
    pub id: i64,
}
