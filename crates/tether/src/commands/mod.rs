//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod actuators;
pub mod adapters;
pub mod config_cmd;
pub mod settings;
pub mod triggers;
pub mod util;

use tether_core::Platform;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a platform-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    platform: &Platform,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Actuators(args) => actuators::handle(platform, args, global).await,
        Command::Adapters(args) => adapters::handle(platform, args, global).await,
        Command::Triggers(args) => triggers::handle(platform, args, global).await,
        Command::Settings(args) => settings::handle(platform, args, global).await,
        Command::Types(args) => settings::handle_types(platform, args, global),
        Command::Docs => settings::handle_docs(platform, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
