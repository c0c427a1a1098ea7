// Reference data endpoints
//
// Component types and parameter types, loaded once at connect time.

use crate::client::RestClient;
use crate::error::Error;
use crate::models::{ApiResponse, ComponentTypeDto, ParameterTypeDto};

impl RestClient {
    /// List the component types registered for a category
    /// (e.g. `"ACTUATOR"`).
    ///
    /// `GET /api/component-types?component={category}`
    pub async fn component_types(&self, category: &str) -> Result<Vec<ComponentTypeDto>, Error> {
        let mut url = self.api_url("component-types")?;
        url.query_pairs_mut().append_pair("component", category);
        let resp: ApiResponse<Vec<ComponentTypeDto>> = self.get(url).await?;
        if !resp.success {
            return Err(Error::Api {
                status: 200,
                message: "component type lookup reported failure".into(),
            });
        }
        Ok(resp.data.unwrap_or_default())
    }

    /// List all parameter types usable in adapter definitions.
    ///
    /// `GET /api/parameter-types`
    pub async fn parameter_types(&self) -> Result<Vec<ParameterTypeDto>, Error> {
        let url = self.api_url("parameter-types")?;
        self.get(url).await
    }
}
