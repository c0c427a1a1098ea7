//! Clap derive structures for the `tether` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// tether -- CLI for IoT platform management
#[derive(Debug, Parser)]
#[command(
    name = "tether",
    version,
    about = "Manage IoT platform actuators, adapters, and rule triggers",
    long_about = "A CLI for administering an IoT platform backend.\n\n\
        Registers actuators and adapters, manages CEP rule triggers,\n\
        and inspects live deployment states.",
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
    /// Platform profile to use
    #[arg(long, short = 'p', env = "TETHER_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Platform URL (overrides profile)
    #[arg(long, short = 'P', env = "TETHER_PLATFORM", global = true)]
    pub platform: Option<String>,

    /// Basic-auth username
    #[arg(long, short = 'u', env = "TETHER_USERNAME", global = true)]
    pub username: Option<String>,

    /// Basic-auth password
    #[arg(long, env = "TETHER_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "TETHER_OUTPUT",
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

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "TETHER_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "TETHER_TIMEOUT", global = true)]
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
    /// Plain text, one value per line (scripting)
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
    /// Manage actuators
    #[command(alias = "act", alias = "a")]
    Actuators(ActuatorsArgs),

    /// Manage adapters (device-side driver packages)
    #[command(alias = "ad")]
    Adapters(AdaptersArgs),

    /// Manage CEP rule triggers
    #[command(alias = "tr", alias = "t")]
    Triggers(TriggersArgs),

    /// View and change platform settings
    Settings(SettingsArgs),

    /// Reference data (actuator types, parameter types)
    Types(TypesArgs),

    /// Show platform REST documentation metadata
    Docs,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ACTUATORS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ActuatorsArgs {
    #[command(subcommand)]
    pub command: ActuatorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ActuatorsCommand {
    /// List registered actuators with their deployment states
    #[command(alias = "ls")]
    List,

    /// Get actuator details
    Get {
        /// Actuator ID or name
        actuator: String,
    },

    /// Register a new actuator
    Create {
        /// Display name
        name: String,

        /// Actuator type (see `tether types actuators`)
        #[arg(long, short = 't')]
        r#type: Option<String>,

        /// Adapter ID or name
        #[arg(long, short = 'a')]
        adapter: String,

        /// Device ID the actuator is attached to
        #[arg(long, short = 'd')]
        device: String,
    },

    /// Delete an actuator
    #[command(alias = "rm")]
    Delete {
        /// Actuator ID or name
        actuator: String,
    },

    /// Fetch the live deployment state of one actuator
    State {
        /// Actuator ID or name
        actuator: String,
    },

    /// Refresh the deployment states of all actuators
    States,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ADAPTERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AdaptersArgs {
    #[command(subcommand)]
    pub command: AdaptersCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdaptersCommand {
    /// List registered adapters
    #[command(alias = "ls")]
    List,

    /// Get adapter details
    Get {
        /// Adapter ID or name
        adapter: String,
    },

    /// Register a new adapter from local files
    Create {
        /// Display name
        name: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Unit of the controlled quantity (e.g. "%", "°C")
        #[arg(long)]
        unit: Option<String>,

        /// Path to the adapter service file
        #[arg(long, value_name = "PATH")]
        service_file: PathBuf,

        /// Additional routine files (repeatable)
        #[arg(long = "routine", value_name = "PATH")]
        routines: Vec<PathBuf>,

        /// Deployment parameter, as "name:kind[:unit][:mandatory]".
        /// Kind is one of text, number, switch.
        #[arg(long = "param", value_name = "SPEC")]
        parameters: Vec<String>,
    },

    /// Delete an adapter (cascade-deletes components using it)
    #[command(alias = "rm")]
    Delete {
        /// Adapter ID or name
        adapter: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  RULE TRIGGERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TriggersArgs {
    #[command(subcommand)]
    pub command: TriggersCommand,
}

#[derive(Debug, Subcommand)]
pub enum TriggersCommand {
    /// List registered rule triggers
    #[command(alias = "ls")]
    List,

    /// Create a rule trigger (prompts for the query if not given)
    Create {
        /// Display name
        name: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// CEP query string (prompted interactively when omitted)
        #[arg(long)]
        query: Option<String>,
    },

    /// Delete a rule trigger
    #[command(alias = "rm")]
    Delete {
        /// Trigger ID or name
        trigger: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SETTINGS / TYPES / CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show current platform settings
    Show,

    /// Change broker settings
    Set {
        /// Broker location
        #[arg(long, value_enum)]
        broker: BrokerArg,

        /// Broker IP address (required for remote)
        #[arg(long)]
        address: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BrokerArg {
    /// Broker runs alongside the platform
    Local,
    /// Broker runs on a separate host
    Remote,
}

#[derive(Debug, Args)]
pub struct TypesArgs {
    #[command(subcommand)]
    pub command: TypesCommand,
}

#[derive(Debug, Subcommand)]
pub enum TypesCommand {
    /// List available actuator types
    Actuators,

    /// List available deployment parameter types
    Parameters,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved configuration (secrets masked)
    Show,

    /// Print the config file path
    Path,

    /// Interactively create or update a profile
    Init,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
