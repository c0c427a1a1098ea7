//! Settings, reference data, and documentation handlers.

use std::sync::Arc;

use tabled::Tabled;
use tether_core::{BrokerLocation, ComponentType, ParameterType, Platform, Settings};

use crate::cli::{BrokerArg, GlobalOpts, SettingsArgs, SettingsCommand, TypesArgs, TypesCommand};
use crate::error::CliError;
use crate::output;

// ── Settings ────────────────────────────────────────────────────────

pub async fn handle(
    platform: &Platform,
    args: SettingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SettingsCommand::Show => {
            let settings = platform
                .store()
                .settings()
                .ok_or_else(|| CliError::ApiError {
                    message: "Settings are unavailable".into(),
                    status: None,
                })?;
            let out = output::render_single(
                &global.output,
                &settings,
                format_settings,
                |s| s.broker_location.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SettingsCommand::Set { broker, address } => {
            let broker_location = match broker {
                BrokerArg::Local => BrokerLocation::Local,
                BrokerArg::Remote => BrokerLocation::Remote,
            };
            if broker_location == BrokerLocation::Remote && address.is_none() {
                return Err(CliError::Validation {
                    field: "address".into(),
                    reason: "a remote broker requires --address".into(),
                });
            }
            platform
                .save_settings(Settings {
                    broker_location,
                    broker_address: address,
                })
                .await?;
            if !global.quiet {
                eprintln!("Settings saved");
            }
            Ok(())
        }
    }
}

fn format_settings(s: &Settings) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    let _ = writeln!(out, "Broker location: {}", s.broker_location);
    let _ = write!(
        out,
        "Broker address:  {}",
        s.broker_address.as_deref().unwrap_or("-")
    );
    out
}

// ── Reference data ──────────────────────────────────────────────────

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&ComponentType> for TypeRow {
    fn from(t: &ComponentType) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
        }
    }
}

impl From<&ParameterType> for TypeRow {
    fn from(t: &ParameterType) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
        }
    }
}

pub fn handle_types(
    platform: &Platform,
    args: TypesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match args.command {
        TypesCommand::Actuators => {
            let types: Arc<Vec<ComponentType>> = platform.store().actuator_types();
            output::render_list(&global.output, &types, |t| TypeRow::from(t), |t| t.name.clone())
        }
        TypesCommand::Parameters => {
            let types: Arc<Vec<ParameterType>> = platform.store().parameter_types();
            output::render_list(&global.output, &types, |t| TypeRow::from(t), |t| t.name.clone())
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Documentation metadata ──────────────────────────────────────────

pub fn handle_docs(platform: &Platform, global: &GlobalOpts) -> Result<(), CliError> {
    let docs = platform
        .store()
        .documentation()
        .ok_or_else(|| CliError::ApiError {
            message: "Documentation metadata is unavailable".into(),
            status: None,
        })?;
    let out = output::render_single(
        &global.output,
        &docs,
        |d| {
            format!(
                "{} {}\n{}",
                d.title,
                d.version,
                d.description.as_deref().unwrap_or("")
            )
            .trim_end()
            .to_owned()
        },
        |d| d.title.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
