//! Shared helpers for command handlers.

use std::path::Path;

use tether_core::{
    Confirmation, DeletePrompt, EntityId, FilePayload, Parameter, ParameterKind, Platform,
};

use crate::error::CliError;

/// Resolve an actuator identifier (ID or name) via snapshot lookup.
pub fn resolve_actuator_id(platform: &Platform, identifier: &str) -> Result<EntityId, CliError> {
    let snap = platform.store().actuators_snapshot();
    for actuator in snap.iter() {
        if actuator.id.as_str() == identifier || actuator.name == identifier {
            return Ok(actuator.id.clone());
        }
    }
    Err(CliError::NotFound {
        resource_type: "actuator".into(),
        identifier: identifier.into(),
        list_command: "actuators list".into(),
    })
}

/// Resolve an adapter identifier (ID or name) via snapshot lookup.
pub fn resolve_adapter_id(platform: &Platform, identifier: &str) -> Result<EntityId, CliError> {
    let snap = platform.store().adapters_snapshot();
    for adapter in snap.iter() {
        if adapter.id.as_str() == identifier || adapter.name == identifier {
            return Ok(adapter.id.clone());
        }
    }
    Err(CliError::NotFound {
        resource_type: "adapter".into(),
        identifier: identifier.into(),
        list_command: "adapters list".into(),
    })
}

/// Resolve a rule trigger identifier (ID or name) via snapshot lookup.
pub fn resolve_trigger_id(platform: &Platform, identifier: &str) -> Result<EntityId, CliError> {
    let snap = platform.store().rule_triggers_snapshot();
    for trigger in snap.iter() {
        if trigger.id.as_str() == identifier || trigger.name == identifier {
            return Ok(trigger.id.clone());
        }
    }
    Err(CliError::NotFound {
        resource_type: "rule trigger".into(),
        identifier: identifier.into(),
        list_command: "triggers list".into(),
    })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Present a delete prompt (including cascade warnings) and return the
/// decision. Prompt failures count as a decline -- nothing is deleted.
pub fn confirm_delete(prompt: &DeletePrompt, yes_flag: bool) -> Confirmation {
    if !prompt.cascades.is_empty() {
        eprintln!("Deleting this {} also removes:", prompt.resource);
        for dep in &prompt.cascades {
            eprintln!("  - {} ({})", dep.name, dep.kind);
        }
    }
    let message = format!("Delete {} '{}'?", prompt.resource, prompt.name);
    match confirm(&message, yes_flag) {
        Ok(true) => Confirmation::Confirmed,
        Ok(false) | Err(_) => Confirmation::Cancelled,
    }
}

/// Read a local file into an inline upload payload. The payload name is
/// the file name component of the path.
pub fn read_file_payload(path: &Path) -> Result<FilePayload, CliError> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::Validation {
            field: "file".into(),
            reason: format!("not a file path: {}", path.display()),
        })?;
    Ok(FilePayload::from_bytes(name, &bytes))
}

/// Parse a deployment parameter spec: `name:kind[:unit][:mandatory]`.
pub fn parse_parameter(spec: &str) -> Result<Parameter, CliError> {
    let mut parts = spec.split(':');
    let name = parts.next().unwrap_or_default();
    let kind_str = parts.next().unwrap_or_default();
    if name.is_empty() || kind_str.is_empty() {
        return Err(CliError::Validation {
            field: "param".into(),
            reason: format!("expected 'name:kind[:unit][:mandatory]', got '{spec}'"),
        });
    }

    let kind = match kind_str.to_ascii_lowercase().as_str() {
        "text" => ParameterKind::Text,
        "number" => ParameterKind::Number,
        "switch" => ParameterKind::Switch,
        other => {
            return Err(CliError::Validation {
                field: "param".into(),
                reason: format!("unknown parameter kind '{other}' (text, number, switch)"),
            });
        }
    };

    let mut unit = String::new();
    let mut mandatory = false;
    for part in parts {
        if part.eq_ignore_ascii_case("mandatory") {
            mandatory = true;
        } else {
            unit = part.to_owned();
        }
    }

    Ok(Parameter {
        name: name.to_owned(),
        kind,
        unit,
        mandatory,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_parameter_spec() {
        let p = parse_parameter("interval:number").unwrap();
        assert_eq!(p.name, "interval");
        assert_eq!(p.kind, ParameterKind::Number);
        assert!(p.unit.is_empty());
        assert!(!p.mandatory);
    }

    #[test]
    fn parses_full_parameter_spec() {
        let p = parse_parameter("brightness:number:%:mandatory").unwrap();
        assert_eq!(p.unit, "%");
        assert!(p.mandatory);
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(parse_parameter("x:blob").is_err());
        assert!(parse_parameter("nokind").is_err());
    }
}
