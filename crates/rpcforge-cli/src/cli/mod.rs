//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use rpcforge_core::domain::DuplicatePolicy;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "rpcforge",
    bin_name = "rpcforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a remote-callable operation across a layered service codebase",
    long_about = "rpcforge derives one consistent family of names from a project id, a \
                  route and a method name, generates the request/response carriers, \
                  validator, mapper, converter and manager, and patches the existing \
                  interface, implementation and constants files in place.",
    after_help = "EXAMPLES:\n\
        \x20 rpcforge generate --project treasurecore --path order --method query\n\
        \x20 rpcforge generate -p refundcore -r refund.detail -m getRefundInfo --dry-run\n\
        \x20 rpcforge projects\n\
        \x20 rpcforge completions bash > /usr/share/bash-completion/completions/rpcforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold one operation.
    #[command(
        visible_alias = "g",
        about = "Generate and patch the artifacts for one operation",
        after_help = "EXAMPLES:\n\
            \x20 rpcforge generate --project treasurecore --path order --method query\n\
            \x20 rpcforge generate -p treasurecore -r order -m query --root ../service --dry-run\n\
            \x20 rpcforge generate -p treasurecore -r order -m query --on-duplicate reject"
    )]
    Generate(GenerateArgs),

    /// List the known projects and their wiring.
    #[command(
        visible_alias = "ls",
        about = "List known projects",
        after_help = "EXAMPLES:\n\
            \x20 rpcforge projects\n\
            \x20 rpcforge projects --format json"
    )]
    Projects(ProjectsArgs),

    /// List templates, or print one.
    #[command(
        about = "List templates",
        after_help = "EXAMPLES:\n\
            \x20 rpcforge templates\n\
            \x20 rpcforge templates --show facadeImpl"
    )]
    Templates(TemplatesArgs),

    /// Initialise an rpcforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 rpcforge init           # platform config directory\n\
            \x20 rpcforge init --local   # .rpcforge.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 rpcforge completions bash > ~/.local/share/bash-completion/completions/rpcforge\n\
            \x20 rpcforge completions zsh  > ~/.zfunc/_rpcforge\n\
            \x20 rpcforge completions fish > ~/.config/fish/completions/rpcforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 rpcforge config get defaults.author\n\
            \x20 rpcforge config get layout.common_prefix\n\
            \x20 rpcforge config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `rpcforge generate`.
///
/// Missing values are prompted for when the `interactive` feature is on and
/// stdin is a terminal.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Project id, e.g. `treasurecore`.
    #[arg(short = 'p', long = "project", value_name = "ID", help = "Project id")]
    pub project: Option<String>,

    /// Route path bound on the interface, e.g. `order`.
    #[arg(short = 'r', long = "path", value_name = "ROUTE", help = "Route path")]
    pub path: Option<String>,

    /// Method name, e.g. `query`.
    #[arg(short = 'm', long = "method", value_name = "NAME", help = "Method name")]
    pub method: Option<String>,

    /// Author recorded in generated headers.
    #[arg(
        short = 'a',
        long = "author",
        value_name = "NAME",
        help = "Author (default: defaults.author, then $USER)"
    )]
    pub author: Option<String>,

    /// Repository root the layout is relative to.
    #[arg(long = "root", value_name = "DIR", help = "Repository root (default: .)")]
    pub root: Option<PathBuf>,

    /// Report what would change without writing anything.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,

    /// Re-render new-artifact files that already exist.
    #[arg(long = "force", help = "Overwrite existing generated files")]
    pub force: bool,

    /// What to do when a patched file already declares the method.
    #[arg(
        long = "on-duplicate",
        value_enum,
        value_name = "POLICY",
        help = "Duplicate declaration policy"
    )]
    pub on_duplicate: Option<DuplicateArg>,

    /// Fixed date for generated headers (`yyyy-MM-dd`).
    #[arg(long = "date", value_name = "DATE", hide = true)]
    pub date: Option<String>,
}

/// CLI spelling of [`DuplicatePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicateArg {
    /// Leave the file alone.
    Skip,
    /// Append a second copy.
    Append,
    /// Stop with an error.
    #[value(alias = "error")]
    Reject,
}

impl From<DuplicateArg> for DuplicatePolicy {
    fn from(arg: DuplicateArg) -> Self {
        match arg {
            DuplicateArg::Skip => Self::Skip,
            DuplicateArg::Append => Self::Append,
            DuplicateArg::Reject => Self::Reject,
        }
    }
}

// ── projects / templates ──────────────────────────────────────────────────────

/// Arguments for `rpcforge projects`.
#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Arguments for `rpcforge templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Print the text of one template instead of listing.
    #[arg(long = "show", value_name = "ID", help = "Print one template")]
    pub show: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `rpcforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.rpcforge.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `rpcforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `rpcforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
