mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tether_core::Platform;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a platform connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "tether", &mut std::io::stdout());
            Ok(())
        }

        // All other commands require a platform connection
        cmd => {
            let platform_config = build_platform_config(&cli.global)?;
            let platform = Platform::new(platform_config);
            platform.connect().await?;

            tracing::debug!(command = ?cmd, "dispatching command");
            let result = commands::dispatch(cmd, &platform, &cli.global).await;
            platform.disconnect().await;
            result
        }
    }
}

/// Build a `PlatformConfig` from the config file, profile, and CLI overrides.
fn build_platform_config(
    global: &cli::GlobalOpts,
) -> Result<tether_core::PlatformConfig, CliError> {
    let cfg = config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);

    let mut platform_config = if let Some(profile) = cfg.profiles.get(&profile_name) {
        config::resolve_profile(profile, &profile_name, global)?
    } else if global.profile.is_some() {
        // An explicitly requested profile that doesn't exist is an error,
        // not a fall-through to bare flags.
        let mut available: Vec<_> = cfg.profiles.keys().cloned().collect();
        available.sort();
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available.join(", "),
        });
    } else {
        // No profile configured -- try to build from CLI flags / env vars alone
        config::resolve_flags_only(global)?
    };

    // CLI invocations are single request-response cycles; the background
    // state poll only wastes a request.
    platform_config.state_poll_interval = Duration::ZERO;
    Ok(platform_config)
}
