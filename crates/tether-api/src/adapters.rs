// Adapter endpoints
//
// CRUD via `api/adapters`, plus the dependent-component lookup used to
// enrich delete confirmations with cascade warnings.

use tracing::debug;

use crate::client::RestClient;
use crate::error::Error;
use crate::models::{AdapterCreateDto, AdapterDto, UsingComponentDto};

impl RestClient {
    /// List all registered adapters.
    ///
    /// `GET /api/adapters`
    pub async fn list_adapters(&self) -> Result<Vec<AdapterDto>, Error> {
        let url = self.api_url("adapters")?;
        self.get(url).await
    }

    /// Register a new adapter, shipping its service and routine files
    /// inline as data URLs.
    ///
    /// `POST /api/adapters`
    pub async fn create_adapter(&self, dto: &AdapterCreateDto) -> Result<AdapterDto, Error> {
        let url = self.api_url("adapters")?;
        debug!(name = %dto.name, routines = dto.routines.len(), "creating adapter");
        self.post(url, dto).await
    }

    /// Delete an adapter by id. Components using it are cascade-deleted
    /// by the backend.
    ///
    /// `DELETE /api/adapters/{id}`
    pub async fn delete_adapter(&self, id: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("adapters/{id}"))?;
        debug!(id, "deleting adapter");
        self.delete(url).await
    }

    /// List the components currently using an adapter.
    ///
    /// `GET /api/adapters/{id}/using-components`
    pub async fn adapter_using_components(
        &self,
        id: &str,
    ) -> Result<Vec<UsingComponentDto>, Error> {
        let url = self.api_url(&format!("adapters/{id}/using-components"))?;
        self.get(url).await
    }
}
