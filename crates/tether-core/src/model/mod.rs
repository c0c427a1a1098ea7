//! Canonical domain types.
//!
//! Wire DTOs (`tether_api::models`) are converted into these types at the
//! store boundary ([`crate::convert`]); everything above the API crate
//! works exclusively with this model.

mod adapter;
mod component;
mod id;
mod reference;
mod settings;
mod trigger;

pub use adapter::{Adapter, Parameter, ParameterKind};
pub use component::{Actuator, ComponentState};
pub use id::EntityId;
pub use reference::{ComponentType, ParameterType};
pub use settings::{BrokerLocation, DocumentationMetadata, Settings};
pub use trigger::RuleTrigger;

/// Implemented by every entity stored in an
/// [`EntityCollection`](crate::store::collection::EntityCollection).
pub trait Keyed {
    fn id(&self) -> &EntityId;
}
