//! Adapter command handlers.

use std::sync::Arc;

use tabled::Tabled;
use tether_core::{Adapter, CreateAdapterRequest, DeleteOutcome, Platform};

use crate::cli::{AdaptersArgs, AdaptersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AdapterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Params")]
    parameters: usize,
    #[tabled(rename = "Routines")]
    routines: usize,
}

impl From<&Arc<Adapter>> for AdapterRow {
    fn from(a: &Arc<Adapter>) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name.clone(),
            unit: a.unit.clone().unwrap_or_default(),
            parameters: a.parameters.len(),
            routines: a.routine_names.len(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    platform: &Platform,
    args: AdaptersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AdaptersCommand::List => {
            let snap = platform.store().adapters_snapshot();
            let out = output::render_list(
                &global.output,
                &snap,
                |a| AdapterRow::from(a),
                |a| a.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AdaptersCommand::Get { adapter } => {
            let id = util::resolve_adapter_id(platform, &adapter)?;
            let item = platform
                .store()
                .adapter(&id)
                .ok_or_else(|| CliError::NotFound {
                    resource_type: "adapter".into(),
                    identifier: adapter,
                    list_command: "adapters list".into(),
                })?;
            let out = output::render_single(
                &global.output,
                &item,
                |a| format_adapter_detail(a),
                |a| a.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AdaptersCommand::Create {
            name,
            description,
            unit,
            service_file,
            routines,
            parameters,
        } => {
            let parameters = parameters
                .iter()
                .map(|spec| util::parse_parameter(spec))
                .collect::<Result<Vec<_>, _>>()?;

            let service_file = util::read_file_payload(&service_file)?;
            let routine_files = routines
                .iter()
                .map(|p| util::read_file_payload(p))
                .collect::<Result<Vec<_>, _>>()?;

            let created = platform
                .create_adapter(CreateAdapterRequest {
                    name,
                    description,
                    unit,
                    parameters,
                    service_file,
                    routine_files,
                })
                .await?;
            if !global.quiet {
                eprintln!("Adapter '{}' created ({})", created.name, created.id);
            }
            Ok(())
        }

        AdaptersCommand::Delete { adapter } => {
            let id = util::resolve_adapter_id(platform, &adapter)?;
            let outcome = platform
                .delete_adapter(&id, |prompt| {
                    let decision = util::confirm_delete(&prompt, global.yes);
                    async move { decision }
                })
                .await?;
            match outcome {
                DeleteOutcome::Deleted(_) => {
                    if !global.quiet {
                        eprintln!("Adapter deleted");
                    }
                }
                DeleteOutcome::Aborted => {}
            }
            Ok(())
        }
    }
}

fn format_adapter_detail(a: &Arc<Adapter>) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    let _ = writeln!(out, "ID:          {}", a.id);
    let _ = writeln!(out, "Name:        {}", a.name);
    let _ = writeln!(out, "Description: {}", a.description.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "Unit:        {}", a.unit.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "Parameters:");
    for p in &a.parameters {
        let mandatory = if p.mandatory { " (mandatory)" } else { "" };
        let _ = writeln!(out, "  - {} [{}]{mandatory}", p.name, p.kind);
    }
    let _ = write!(out, "Routines:    {}", a.routine_names.join(", "));
    out
}
