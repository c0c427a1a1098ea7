//! End-to-end Platform tests against a mock backend.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::sync::broadcast::error::TryRecvError;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tether_core::{
    Command, ComponentState, Confirmation, ConnectionState, CoreError, CreateActuatorRequest,
    CreateRuleTriggerRequest, DeleteOutcome, Platform, PlatformConfig, Settings, Severity,
};

fn test_config(server: &MockServer) -> PlatformConfig {
    let mut config = PlatformConfig::new(Url::parse(&server.uri()).unwrap());
    config.timeout = Duration::from_secs(5);
    // Tests drive refreshes explicitly.
    config.state_poll_interval = Duration::ZERO;
    config
}

/// Mount everything `connect()` touches, with the given actuator list
/// and state map. Reference data, settings, and the other lists get
/// healthy defaults.
async fn mount_baseline(server: &MockServer, actuators: serde_json::Value, states: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/component-types"))
        .and(query_param("component", "ACTUATOR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": "ct1", "name": "light", "component": "ACTUATOR"}],
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/parameter-types"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "pt1", "name": "Text"}])),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/actuators"))
        .respond_with(ResponseTemplate::new(200).set_body_json(actuators))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/adapters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/rule-triggers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brokerLocation": "LOCAL",
            "brokerIPAddress": null,
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/docs/metadata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Platform API",
            "version": "1.0",
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/actuators/state"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": states})),
        )
        .mount(server)
        .await;
}

fn actuator_json(id: &str, name: &str) -> serde_json::Value {
    json!({"id": id, "name": name, "componentType": "light", "adapter": "ad1", "device": "d1"})
}

#[tokio::test]
async fn connect_loads_lists_and_decorates_states() {
    let server = MockServer::start().await;
    mount_baseline(
        &server,
        json!([actuator_json("a1", "Lamp"), actuator_json("a2", "Fan")]),
        json!({"a1": "RUNNING"}),
    )
    .await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();

    assert_eq!(*platform.connection_state().borrow(), ConnectionState::Connected);

    let snapshot = platform.store().actuators_snapshot();
    assert_eq!(snapshot.len(), 2);
    // Display order mirrors the backend list order.
    assert_eq!(snapshot[0].name, "Lamp");
    assert_eq!(snapshot[1].name, "Fan");
    // a1 has a reported state; a2 was missing from the map.
    assert_eq!(snapshot[0].state, ComponentState::Running);
    assert_eq!(snapshot[1].state, ComponentState::Unknown);

    platform.disconnect().await;
    assert_eq!(
        *platform.connection_state().borrow(),
        ConnectionState::Disconnected
    );
}

#[tokio::test]
async fn created_actuator_joins_the_list_with_its_state() {
    let server = MockServer::start().await;
    mount_baseline(&server, json!([actuator_json("a1", "Lamp")]), json!({"a1": "READY"})).await;
    Mock::given(method("POST"))
        .and(path("/api/actuators"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(actuator_json("a2", "Fan")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/actuators/state/a2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"content": "DEPLOYED"},
        })))
        .mount(&server)
        .await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();

    let created = platform
        .create_actuator(CreateActuatorRequest {
            name: "Fan".into(),
            component_type: Some("light".into()),
            adapter_id: "ad1".into(),
            device_id: "d1".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.id.as_str(), "a2");
    assert_eq!(created.state, ComponentState::Deployed);

    // Appended after the existing entry, not re-sorted.
    let snapshot = platform.store().actuators_snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1].id.as_str(), "a2");

    platform.disconnect().await;
}

#[tokio::test]
async fn connect_populates_reference_data_and_settings() {
    let server = MockServer::start().await;
    mount_baseline(&server, json!([actuator_json("a1", "Lamp")]), json!({"a1": "READY"})).await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();

    // Nothing subscribes to these; the values must be stored anyway.
    let store = platform.store();
    assert_eq!(store.actuator_types().len(), 1);
    assert_eq!(store.parameter_types().len(), 1);
    assert!(store.settings().is_some());
    assert!(store.documentation().is_some());
    assert!(store.last_state_refresh().is_some());

    platform.disconnect().await;
}

#[tokio::test]
async fn created_actuator_is_visible_as_loading_while_its_state_is_fetched() {
    let server = MockServer::start().await;
    mount_baseline(&server, json!([actuator_json("a1", "Lamp")]), json!({"a1": "READY"})).await;
    Mock::given(method("POST"))
        .and(path("/api/actuators"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(actuator_json("a2", "Fan")),
        )
        .mount(&server)
        .await;
    // The follow-up state lookup is slow, leaving a window in which the
    // new entry sits in the list still marked Loading.
    Mock::given(method("GET"))
        .and(path("/api/actuators/state/a2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": {"content": "DEPLOYED"}}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();

    let mut actuators = platform.store().subscribe_actuators();
    let handle = {
        let platform = platform.clone();
        tokio::spawn(async move {
            platform
                .create_actuator(CreateActuatorRequest {
                    name: "Fan".into(),
                    component_type: Some("light".into()),
                    adapter_id: "ad1".into(),
                    device_id: "d1".into(),
                })
                .await
        })
    };

    let snapshot = loop {
        let snapshot = actuators.changed().await.unwrap();
        if snapshot.iter().any(|a| a.id.as_str() == "a2") {
            break snapshot;
        }
    };
    let fan = snapshot.iter().find(|a| a.id.as_str() == "a2").unwrap();
    assert_eq!(fan.state, ComponentState::Loading);

    let created = handle.await.unwrap().unwrap();
    assert_eq!(created.state, ComponentState::Deployed);

    platform.disconnect().await;
}

#[tokio::test]
async fn confirmed_delete_removes_the_actuator() {
    let server = MockServer::start().await;
    mount_baseline(&server, json!([actuator_json("a1", "Lamp")]), json!({})).await;
    Mock::given(method("DELETE"))
        .and(path("/api/actuators/a1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();

    let outcome = platform
        .delete_actuator(&"a1".into(), |prompt| async move {
            assert_eq!(prompt.name, "Lamp");
            Confirmation::Confirmed
        })
        .await
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted("a1".into()));
    assert!(platform.store().actuators_snapshot().is_empty());

    platform.disconnect().await;
}

#[tokio::test]
async fn cancelled_delete_sends_no_request_and_no_notification() {
    let server = MockServer::start().await;
    mount_baseline(&server, json!([actuator_json("a1", "Lamp")]), json!({})).await;
    Mock::given(method("DELETE"))
        .and(path("/api/actuators/a1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();
    let mut notifications = platform.notifications();

    let outcome = platform
        .delete_actuator(&"a1".into(), |_| async { Confirmation::Cancelled })
        .await
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::Aborted);
    assert_eq!(platform.store().actuators_snapshot().len(), 1);
    assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));

    platform.disconnect().await;
}

#[tokio::test]
async fn failed_bulk_state_fetch_marks_all_unknown_and_notifies_once() {
    let server = MockServer::start().await;
    mount_baseline(
        &server,
        json!([actuator_json("a1", "Lamp"), actuator_json("a2", "Fan")]),
        json!({"a1": "RUNNING", "a2": "READY"}),
    )
    .await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();
    let mut notifications = platform.notifications();

    // Backend starts failing after the initial healthy pass.
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/actuators/state"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = platform.execute(Command::RefreshAllActuatorStates).await;
    assert!(result.is_err());

    let snapshot = platform.store().actuators_snapshot();
    assert!(snapshot.iter().all(|a| a.state == ComponentState::Unknown));

    // One notification for the batch, not one per actuator.
    let first = notifications.try_recv().unwrap();
    assert_eq!(first.severity, Severity::Error);
    assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));

    platform.disconnect().await;
}

#[tokio::test]
async fn reference_data_failure_degrades_without_blocking_connect() {
    let server = MockServer::start().await;
    mount_failing_reference(&server).await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();

    assert_eq!(*platform.connection_state().borrow(), ConnectionState::Connected);
    assert!(platform.store().actuator_types().is_empty());
    assert!(!platform.warnings().await.is_empty());

    platform.disconnect().await;
}

#[tokio::test]
async fn reconnect_clears_stale_warnings() {
    let server = MockServer::start().await;
    mount_failing_reference(&server).await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();
    assert!(!platform.warnings().await.is_empty());
    platform.disconnect().await;

    // Backend recovers; the next connection starts clean.
    server.reset().await;
    mount_baseline(&server, json!([]), json!({})).await;
    platform.connect().await.unwrap();

    assert!(platform.warnings().await.is_empty());
    platform.disconnect().await;
}

/// Reference endpoints fail; everything else is healthy and empty.
async fn mount_failing_reference(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/component-types"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/parameter-types"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
    for list in ["/api/actuators", "/api/adapters", "/api/rule-triggers"] {
        Mock::given(method("GET"))
            .and(path(list))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brokerLocation": "LOCAL",
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/docs/metadata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Platform API",
            "version": "1.0",
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/actuators/state"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": {}})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn failed_list_fetch_fails_the_connect() {
    let server = MockServer::start().await;
    // Knock out the actuator list specifically. Mounted first: wiremock
    // matches mocks in mount order, so this must precede the healthy
    // default for the same path.
    Mock::given(method("GET"))
        .and(path("/api/actuators"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_failing_reference(&server).await;

    let platform = Platform::new(test_config(&server));
    let result = platform.connect().await;

    assert!(result.is_err());
    assert_eq!(*platform.connection_state().borrow(), ConnectionState::Failed);
}

#[tokio::test]
async fn save_settings_updates_store_and_notifies_success() {
    let server = MockServer::start().await;
    mount_baseline(&server, json!([]), json!({})).await;
    Mock::given(method("POST"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brokerLocation": "REMOTE",
            "brokerIPAddress": "10.0.0.7",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();
    let mut notifications = platform.notifications();

    let settings = Settings {
        broker_location: tether_core::BrokerLocation::Remote,
        broker_address: Some("10.0.0.7".into()),
    };
    platform.save_settings(settings.clone()).await.unwrap();

    assert_eq!(platform.store().settings(), Some(settings));
    let note = notifications.try_recv().unwrap();
    assert_eq!(note.severity, Severity::Success);

    platform.disconnect().await;
}

#[tokio::test]
async fn create_rule_trigger_appends_to_list() {
    let server = MockServer::start().await;
    mount_baseline(&server, json!([]), json!({})).await;
    Mock::given(method("POST"))
        .and(path("/api/rule-triggers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "t1",
            "name": "overheat",
            "description": "fires on high temperature",
            "query": "SELECT * FROM TemperatureEvent WHERE value > 80",
        })))
        .mount(&server)
        .await;

    let platform = Platform::new(test_config(&server));
    platform.connect().await.unwrap();

    let trigger = platform
        .create_rule_trigger(CreateRuleTriggerRequest {
            name: "overheat".into(),
            description: Some("fires on high temperature".into()),
            query: "SELECT * FROM TemperatureEvent WHERE value > 80".into(),
        })
        .await
        .unwrap();

    assert_eq!(trigger.id.as_str(), "t1");
    assert_eq!(platform.store().rule_triggers_snapshot().len(), 1);

    platform.disconnect().await;
}

#[tokio::test]
async fn commands_are_rejected_while_disconnected() {
    let server = MockServer::start().await;
    let platform = Platform::new(test_config(&server));

    let err = platform
        .execute(Command::RefreshAllActuatorStates)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::PlatformDisconnected));
}

#[tokio::test]
async fn oneshot_connects_runs_and_disconnects() {
    let server = MockServer::start().await;
    mount_baseline(&server, json!([actuator_json("a1", "Lamp")]), json!({"a1": "READY"})).await;

    let count = Platform::oneshot(test_config(&server), |platform| async move {
        Ok(platform.store().actuators_snapshot().len())
    })
    .await
    .unwrap();

    assert_eq!(count, 1);
}
