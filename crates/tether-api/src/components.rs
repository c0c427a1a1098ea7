// Actuator endpoints
//
// CRUD via `api/actuators`, deployment state via `api/actuators/state`.

use std::collections::HashMap;

use tracing::debug;

use crate::client::RestClient;
use crate::error::Error;
use crate::models::{ActuatorCreateDto, ActuatorDto, ApiResponse, StateContent};

impl RestClient {
    /// List all registered actuators.
    ///
    /// `GET /api/actuators`
    pub async fn list_actuators(&self) -> Result<Vec<ActuatorDto>, Error> {
        let url = self.api_url("actuators")?;
        self.get(url).await
    }

    /// Register a new actuator. Returns the stored entity with its
    /// server-assigned id.
    ///
    /// `POST /api/actuators`
    pub async fn create_actuator(&self, dto: &ActuatorCreateDto) -> Result<ActuatorDto, Error> {
        let url = self.api_url("actuators")?;
        debug!(name = %dto.name, "creating actuator");
        self.post(url, dto).await
    }

    /// Delete an actuator by id.
    ///
    /// `DELETE /api/actuators/{id}`
    pub async fn delete_actuator(&self, id: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("actuators/{id}"))?;
        debug!(id, "deleting actuator");
        self.delete(url).await
    }

    /// Fetch the deployment state of a single actuator.
    ///
    /// `GET /api/actuators/state/{id}` →
    /// `{ "success": true, "data": { "content": "RUNNING" } }`
    pub async fn actuator_state(&self, id: &str) -> Result<String, Error> {
        let url = self.api_url(&format!("actuators/state/{id}"))?;
        let resp: ApiResponse<StateContent> = self.get(url).await?;
        resp.data
            .map(|s| s.content)
            .ok_or_else(|| Error::Deserialization {
                message: "state response carried no data".into(),
                body: String::new(),
            })
    }

    /// Fetch the deployment states of all registered actuators as an
    /// id → state map.
    ///
    /// `GET /api/actuators/state`
    pub async fn all_actuator_states(&self) -> Result<HashMap<String, String>, Error> {
        let url = self.api_url("actuators/state")?;
        let resp: ApiResponse<HashMap<String, String>> = self.get(url).await?;
        Ok(resp.data.unwrap_or_default())
    }
}
