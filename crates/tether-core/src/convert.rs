//! Wire DTO ↔ domain conversions.

use tether_api::models as wire;

use crate::command::requests::{
    CreateActuatorRequest, CreateAdapterRequest, CreateRuleTriggerRequest,
};
use crate::model::{
    Actuator, Adapter, BrokerLocation, ComponentState, ComponentType, DocumentationMetadata,
    EntityId, Parameter, ParameterKind, ParameterType, RuleTrigger, Settings,
};

// ── Wire → domain ───────────────────────────────────────────────────

impl From<wire::ActuatorDto> for Actuator {
    fn from(dto: wire::ActuatorDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            component_type: dto.component_type,
            adapter_id: dto.adapter.map(EntityId::from),
            device_id: dto.device.map(EntityId::from),
            state: ComponentState::Loading,
        }
    }
}

impl From<wire::AdapterDto> for Adapter {
    fn from(dto: wire::AdapterDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            description: dto.description,
            unit: dto.unit,
            parameters: dto.parameters.into_iter().map(Parameter::from).collect(),
            routine_names: dto.routines,
        }
    }
}

impl From<wire::ParameterDto> for Parameter {
    fn from(dto: wire::ParameterDto) -> Self {
        Self {
            // Unrecognized kinds degrade to Text rather than dropping
            // the parameter.
            kind: dto.kind.parse().unwrap_or(ParameterKind::Text),
            name: dto.name,
            unit: dto.unit,
            mandatory: dto.mandatory,
        }
    }
}

impl From<wire::RuleTriggerDto> for RuleTrigger {
    fn from(dto: wire::RuleTriggerDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            description: dto.description,
            query: dto.query,
        }
    }
}

impl From<wire::SettingsDto> for Settings {
    fn from(dto: wire::SettingsDto) -> Self {
        Self {
            broker_location: dto
                .broker_location
                .parse()
                .unwrap_or(BrokerLocation::Local),
            broker_address: dto.broker_ip_address,
        }
    }
}

impl From<wire::DocumentationMetadataDto> for DocumentationMetadata {
    fn from(dto: wire::DocumentationMetadataDto) -> Self {
        Self {
            title: dto.title,
            version: dto.version,
            description: dto.description,
        }
    }
}

impl From<wire::ComponentTypeDto> for ComponentType {
    fn from(dto: wire::ComponentTypeDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            category: dto.component,
        }
    }
}

impl From<wire::ParameterTypeDto> for ParameterType {
    fn from(dto: wire::ParameterTypeDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
        }
    }
}

// ── Domain → wire ───────────────────────────────────────────────────

impl From<&Parameter> for wire::ParameterDto {
    fn from(p: &Parameter) -> Self {
        Self {
            name: p.name.clone(),
            kind: p.kind.to_string(),
            unit: p.unit.clone(),
            mandatory: p.mandatory,
        }
    }
}

pub(crate) fn actuator_create_dto(req: &CreateActuatorRequest) -> wire::ActuatorCreateDto {
    wire::ActuatorCreateDto {
        name: req.name.clone(),
        component_type: req.component_type.clone(),
        adapter: req.adapter_id.to_string(),
        device: req.device_id.to_string(),
    }
}

/// Build the adapter create payload, appending the mandatory
/// `noisy_data` switch if the caller did not declare it.
pub(crate) fn adapter_create_dto(req: &CreateAdapterRequest) -> wire::AdapterCreateDto {
    let mut parameters: Vec<wire::ParameterDto> =
        req.parameters.iter().map(wire::ParameterDto::from).collect();
    if !parameters.iter().any(|p| p.name == "noisy_data") {
        parameters.push(wire::ParameterDto::from(&Parameter::noisy_data()));
    }

    wire::AdapterCreateDto {
        name: req.name.clone(),
        description: req.description.clone(),
        unit: req.unit.clone(),
        parameters,
        service_file: req.service_file.clone(),
        routines: req.routine_files.clone(),
    }
}

pub(crate) fn trigger_create_dto(req: &CreateRuleTriggerRequest) -> wire::RuleTriggerCreateDto {
    wire::RuleTriggerCreateDto {
        name: req.name.clone(),
        description: req.description.clone(),
        query: req.query.clone(),
    }
}

pub(crate) fn settings_dto(settings: &Settings) -> wire::SettingsDto {
    wire::SettingsDto {
        broker_location: settings.broker_location.to_string(),
        broker_ip_address: settings.broker_address.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tether_api::FilePayload;

    #[test]
    fn adapter_create_appends_noisy_data_parameter() {
        let req = CreateAdapterRequest {
            name: "temp".into(),
            description: None,
            unit: None,
            parameters: vec![],
            service_file: FilePayload::from_bytes("service.py", b"pass"),
            routine_files: vec![],
        };
        let dto = adapter_create_dto(&req);
        assert_eq!(dto.parameters.len(), 1);
        assert_eq!(dto.parameters[0].name, "noisy_data");
        assert!(dto.parameters[0].mandatory);
    }

    #[test]
    fn adapter_create_does_not_duplicate_noisy_data() {
        let req = CreateAdapterRequest {
            name: "temp".into(),
            description: None,
            unit: None,
            parameters: vec![Parameter::noisy_data()],
            service_file: FilePayload::from_bytes("service.py", b"pass"),
            routine_files: vec![],
        };
        let dto = adapter_create_dto(&req);
        assert_eq!(
            dto.parameters
                .iter()
                .filter(|p| p.name == "noisy_data")
                .count(),
            1
        );
    }

    #[test]
    fn unknown_parameter_kind_degrades_to_text() {
        let dto = wire::ParameterDto {
            name: "threshold".into(),
            kind: "Slider".into(),
            unit: String::new(),
            mandatory: false,
        };
        assert_eq!(Parameter::from(dto).kind, ParameterKind::Text);
    }

    #[test]
    fn settings_round_trip_preserves_broker_fields() {
        let settings = Settings {
            broker_location: BrokerLocation::Remote,
            broker_address: Some("10.0.0.7".into()),
        };
        let dto = settings_dto(&settings);
        assert_eq!(dto.broker_location, "REMOTE");
        assert_eq!(Settings::from(dto), settings);
    }
}
