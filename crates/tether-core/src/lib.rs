//! Reactive data layer between `tether-api` and UI consumers.
//!
//! This crate owns the business logic, domain model, and reactive data
//! infrastructure for the tether workspace:
//!
//! - **[`Platform`]** -- Central facade managing the full lifecycle:
//!   [`connect()`](Platform::connect) authenticates, loads reference data,
//!   fetches an initial snapshot of every resource kind, then spawns
//!   background tasks for actuator state polling and command processing.
//!   [`Platform::oneshot()`] provides a lightweight fire-and-forget mode
//!   for single CLI invocations.
//!
//! - **[`DataStore`]** -- Ordered reactive storage built on
//!   `EntityCollection<T>` (`IndexMap` + `tokio::sync::watch` channels).
//!   Collections preserve insertion order and are unique by id; upserts
//!   replace in place.
//!
//! - **[`EntityStream<T>`]** -- Subscription handle vended by the store.
//!   Exposes `current()` / `latest()` / `changed()` so front ends react to
//!   mutations instead of polling a result field.
//!
//! - **[`Command`]** -- Typed mutation requests routed through an `mpsc`
//!   channel to the platform's command processor; every request carries a
//!   oneshot response channel, so the outcome of an add or delete comes
//!   back as a future rather than a watched field.
//!
//! - **[`TriggerWizard`]** -- Finite-state machine over the named steps of
//!   the rule-trigger creation flow, decoupled from any rendering layer.

pub mod command;
pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod notify;
pub mod store;
pub mod stream;
pub mod wizard;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::requests::*;
pub use command::{Command, CommandOutcome};
pub use config::{Credentials, PlatformConfig};
pub use controller::{
    AdapterPreprocess, Confirmation, ConnectionState, DeleteOutcome, DeletePrompt,
    DependentComponent, Platform,
};
pub use error::CoreError;
pub use notify::{Notification, Severity};
pub use store::DataStore;
pub use stream::EntityStream;
pub use wizard::{TriggerDraft, TriggerWizard, WizardError, WizardStep};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Actuator, Adapter, BrokerLocation, ComponentState, ComponentType, DocumentationMetadata,
    EntityId, Parameter, ParameterKind, ParameterType, RuleTrigger, Settings,
};

// File payloads travel through core requests unchanged.
pub use tether_api::FilePayload;
