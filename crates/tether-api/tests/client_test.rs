#![allow(clippy::unwrap_used)]
// Integration tests for `RestClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tether_api::models::{ActuatorCreateDto, AdapterCreateDto, ParameterDto, SettingsDto};
use tether_api::{Error, FilePayload, RestClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, RestClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = RestClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Actuators ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_actuators() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/actuators"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "5c97dc2583aeb6078c5ab672",
                "name": "window-blind",
                "componentType": "Motor",
                "adapter": "ad-1",
                "device": "dev-1"
            }
        ])))
        .mount(&server)
        .await;

    let actuators = client.list_actuators().await.unwrap();
    assert_eq!(actuators.len(), 1);
    assert_eq!(actuators[0].name, "window-blind");
    assert_eq!(actuators[0].component_type.as_deref(), Some("Motor"));
}

#[tokio::test]
async fn test_create_actuator_returns_assigned_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/actuators"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "new-7",
            "name": "valve",
            "adapter": "ad-1",
            "device": "dev-2"
        })))
        .mount(&server)
        .await;

    let dto = ActuatorCreateDto {
        name: "valve".into(),
        component_type: None,
        adapter: "ad-1".into(),
        device: "dev-2".into(),
    };
    let created = client.create_actuator(&dto).await.unwrap();
    assert_eq!(created.id, "new-7");
}

#[tokio::test]
async fn test_delete_actuator() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/actuators/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_actuator("abc").await.unwrap();
}

#[tokio::test]
async fn test_actuator_state_unwraps_content() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/actuators/state/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "content": "RUNNING" }
        })))
        .mount(&server)
        .await;

    let state = client.actuator_state("abc").await.unwrap();
    assert_eq!(state, "RUNNING");
}

#[tokio::test]
async fn test_all_actuator_states_map() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/actuators/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "a1": "DEPLOYED", "a2": "READY" }
        })))
        .mount(&server)
        .await;

    let states = client.all_actuator_states().await.unwrap();
    assert_eq!(states.len(), 2);
    assert_eq!(states.get("a1").map(String::as_str), Some("DEPLOYED"));
}

// ── Adapters ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_adapter_ships_files_inline() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/adapters"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "ad-9",
            "name": "temperature",
            "parameters": [],
            "routines": ["install.sh"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dto = AdapterCreateDto {
        name: "temperature".into(),
        description: None,
        unit: Some("°C".into()),
        parameters: vec![ParameterDto {
            name: "noisy_data".into(),
            kind: "Switch".into(),
            unit: String::new(),
            mandatory: true,
        }],
        service_file: FilePayload::from_bytes("service.py", b"pass"),
        routines: vec![FilePayload::from_bytes("install.sh", b"#!/bin/sh")],
    };

    let created = client.create_adapter(&dto).await.unwrap();
    assert_eq!(created.id, "ad-9");
    assert_eq!(created.routines, vec!["install.sh".to_owned()]);
}

#[tokio::test]
async fn test_adapter_using_components() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/adapters/ad-1/using-components"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "window-blind", "component": "actuator" },
            { "name": "hall-sensor", "component": "sensor" }
        ])))
        .mount(&server)
        .await;

    let deps = client.adapter_using_components("ad-1").await.unwrap();
    assert_eq!(deps.len(), 2);
    assert_eq!(deps[1].component, "sensor");
}

// ── Rule triggers ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_rule_triggers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/rule-triggers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "t-1",
                "name": "overheat",
                "description": "temp above threshold",
                "query": "SELECT * FROM sensor-42 WHERE value > 30"
            }
        ])))
        .mount(&server)
        .await;

    let triggers = client.list_rule_triggers().await.unwrap();
    assert_eq!(triggers.len(), 1);
    assert_eq!(triggers[0].name, "overheat");
}

// ── Settings / reference data ───────────────────────────────────────

#[tokio::test]
async fn test_save_settings_posts_wire_shape() {
    let (server, client) = setup().await;

    let expected = json!({
        "brokerLocation": "REMOTE",
        "brokerIPAddress": "10.0.0.7"
    });
    Mock::given(method("POST"))
        .and(path("/api/settings"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let dto = SettingsDto {
        broker_location: "REMOTE".into(),
        broker_ip_address: Some("10.0.0.7".into()),
    };
    client.save_settings(&dto).await.unwrap();
}

#[tokio::test]
async fn test_component_types_filters_by_category() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/component-types"))
        .and(query_param("component", "ACTUATOR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [ { "id": "ct-1", "name": "Motor", "component": "ACTUATOR" } ]
        })))
        .mount(&server)
        .await;

    let types = client.component_types("ACTUATOR").await.unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name, "Motor");
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/actuators"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_actuators().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_not_found_maps_to_not_found_error() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/actuators/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.delete_actuator("missing").await;
    assert!(
        matches!(result, Err(Error::NotFound { .. })),
        "expected NotFound error, got: {result:?}"
    );
}
