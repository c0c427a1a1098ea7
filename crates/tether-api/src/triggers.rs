// Rule trigger endpoints

use tracing::debug;

use crate::client::RestClient;
use crate::error::Error;
use crate::models::{RuleTriggerCreateDto, RuleTriggerDto};

impl RestClient {
    /// List all rule triggers.
    ///
    /// `GET /api/rule-triggers`
    pub async fn list_rule_triggers(&self) -> Result<Vec<RuleTriggerDto>, Error> {
        let url = self.api_url("rule-triggers")?;
        self.get(url).await
    }

    /// Register a new rule trigger.
    ///
    /// `POST /api/rule-triggers`
    pub async fn create_rule_trigger(
        &self,
        dto: &RuleTriggerCreateDto,
    ) -> Result<RuleTriggerDto, Error> {
        let url = self.api_url("rule-triggers")?;
        debug!(name = %dto.name, "creating rule trigger");
        self.post(url, dto).await
    }

    /// Delete a rule trigger by id.
    ///
    /// `DELETE /api/rule-triggers/{id}`
    pub async fn delete_rule_trigger(&self, id: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("rule-triggers/{id}"))?;
        debug!(id, "deleting rule trigger");
        self.delete(url).await
    }
}
