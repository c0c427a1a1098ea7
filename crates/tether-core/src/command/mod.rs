// ── Command API ──
//
// All write operations flow through a unified `Command` enum. Each
// command travels with a oneshot response channel; the outcome of an
// add or delete is the resolved future, not a watched result field.

pub mod requests;

use std::sync::Arc;

use crate::error::CoreError;
use crate::model::{Actuator, Adapter, ComponentState, EntityId, RuleTrigger, Settings};

pub use requests::{CreateActuatorRequest, CreateAdapterRequest, CreateRuleTriggerRequest};

/// A command envelope sent through the command channel.
pub(crate) struct CommandEnvelope {
    pub command: Command,
    pub response_tx: tokio::sync::oneshot::Sender<Result<CommandOutcome, CoreError>>,
}

/// All possible write (and on-demand refresh) operations against the
/// platform.
#[derive(Debug, Clone)]
pub enum Command {
    // ── Actuators ────────────────────────────────────────────────────
    CreateActuator(CreateActuatorRequest),
    DeleteActuator { id: EntityId },
    RefreshActuatorState { id: EntityId },
    RefreshAllActuatorStates,

    // ── Adapters ─────────────────────────────────────────────────────
    CreateAdapter(CreateAdapterRequest),
    DeleteAdapter { id: EntityId },

    // ── Rule triggers ────────────────────────────────────────────────
    CreateRuleTrigger(CreateRuleTriggerRequest),
    DeleteRuleTrigger { id: EntityId },

    // ── Settings ─────────────────────────────────────────────────────
    SaveSettings(Settings),
}

/// Successful command results.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    Ok,
    Actuator(Arc<Actuator>),
    Adapter(Arc<Adapter>),
    RuleTrigger(Arc<RuleTrigger>),
    Deleted(EntityId),
    State(ComponentState),
}
