//! Actuator command handlers.

use std::sync::Arc;

use owo_colors::OwoColorize;
use tabled::Tabled;
use tether_core::{Actuator, ComponentState, CreateActuatorRequest, DeleteOutcome, Platform};

use crate::cli::{ActuatorsArgs, ActuatorsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ActuatorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    component_type: String,
    #[tabled(rename = "Adapter")]
    adapter: String,
    #[tabled(rename = "State")]
    state: String,
}

impl From<&Arc<Actuator>> for ActuatorRow {
    fn from(a: &Arc<Actuator>) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name.clone(),
            component_type: a.component_type.clone().unwrap_or_default(),
            adapter: a.adapter_id.as_ref().map(ToString::to_string).unwrap_or_default(),
            state: a.state.to_string(),
        }
    }
}

fn colorize_state(state: ComponentState, color: bool) -> String {
    if !color {
        return state.to_string();
    }
    match state {
        ComponentState::Running | ComponentState::Deployed => state.to_string().green().to_string(),
        ComponentState::Ready => state.to_string().cyan().to_string(),
        ComponentState::NotReady | ComponentState::Unknown => {
            state.to_string().red().to_string()
        }
        ComponentState::Loading => state.to_string().yellow().to_string(),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    platform: &Platform,
    args: ActuatorsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ActuatorsCommand::List => {
            let snap = platform.store().actuators_snapshot();
            let out = output::render_list(
                &global.output,
                &snap,
                |a| ActuatorRow::from(a),
                |a| a.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ActuatorsCommand::Get { actuator } => {
            let id = util::resolve_actuator_id(platform, &actuator)?;
            let item = platform
                .store()
                .actuator(&id)
                .ok_or_else(|| CliError::NotFound {
                    resource_type: "actuator".into(),
                    identifier: actuator,
                    list_command: "actuators list".into(),
                })?;
            let out = output::render_single(
                &global.output,
                &item,
                |a| format_actuator_detail(a, output::should_color(&global.color)),
                |a| a.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ActuatorsCommand::Create {
            name,
            r#type,
            adapter,
            device,
        } => {
            let adapter_id = util::resolve_adapter_id(platform, &adapter)?;
            let created = platform
                .create_actuator(CreateActuatorRequest {
                    name,
                    component_type: r#type,
                    adapter_id,
                    device_id: device.into(),
                })
                .await?;
            if !global.quiet {
                eprintln!("Actuator '{}' created ({})", created.name, created.id);
            }
            Ok(())
        }

        ActuatorsCommand::Delete { actuator } => {
            let id = util::resolve_actuator_id(platform, &actuator)?;
            let outcome = platform
                .delete_actuator(&id, |prompt| {
                    let decision = util::confirm_delete(&prompt, global.yes);
                    async move { decision }
                })
                .await?;
            match outcome {
                DeleteOutcome::Deleted(_) => {
                    if !global.quiet {
                        eprintln!("Actuator deleted");
                    }
                }
                DeleteOutcome::Aborted => {}
            }
            Ok(())
        }

        ActuatorsCommand::State { actuator } => {
            let id = util::resolve_actuator_id(platform, &actuator)?;
            let state = platform.refresh_actuator_state(&id).await?;
            let rendered = colorize_state(state, output::should_color(&global.color));
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        ActuatorsCommand::States => {
            platform.refresh_all_actuator_states().await?;
            let snap = platform.store().actuators_snapshot();
            let out = output::render_list(
                &global.output,
                &snap,
                |a| ActuatorRow::from(a),
                |a| format!("{}\t{}", a.id, a.state),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

fn format_actuator_detail(a: &Arc<Actuator>, color: bool) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    let _ = writeln!(out, "ID:      {}", a.id);
    let _ = writeln!(out, "Name:    {}", a.name);
    let _ = writeln!(out, "Type:    {}", a.component_type.as_deref().unwrap_or("-"));
    let _ = writeln!(
        out,
        "Adapter: {}",
        a.adapter_id.as_ref().map(ToString::to_string).as_deref().unwrap_or("-")
    );
    let _ = writeln!(
        out,
        "Device:  {}",
        a.device_id.as_ref().map(ToString::to_string).as_deref().unwrap_or("-")
    );
    let _ = write!(out, "State:   {}", colorize_state(a.state, color));
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tether_core::EntityId;

    fn actuator(id: &str, name: &str, state: ComponentState) -> Arc<Actuator> {
        Arc::new(Actuator {
            id: EntityId::from(id),
            name: name.into(),
            component_type: Some("light".into()),
            adapter_id: Some(EntityId::from("ad1")),
            device_id: Some(EntityId::from("d1")),
            state,
        })
    }

    // Row conversion goes through a closure; `From` on `&Arc<Actuator>`
    // alone does not satisfy the higher-ranked bound on `render_list`.
    #[test]
    fn table_rendering_includes_every_column() {
        let data = vec![actuator("a1", "Lamp", ComponentState::Running)];
        let out = output::render_list(
            &OutputFormat::Table,
            &data,
            |a| ActuatorRow::from(a),
            |a| a.id.to_string(),
        );
        assert!(out.contains("Lamp"));
        assert!(out.contains("RUNNING"));
        assert!(out.contains("ad1"));
    }

    #[test]
    fn plain_rendering_emits_one_id_per_line() {
        let data = vec![
            actuator("a1", "Lamp", ComponentState::Ready),
            actuator("a2", "Fan", ComponentState::Unknown),
        ];
        let out = output::render_list(
            &OutputFormat::Plain,
            &data,
            |a| ActuatorRow::from(a),
            |a| a.id.to_string(),
        );
        assert_eq!(out, "a1\na2");
    }
}
