// Settings and documentation endpoints

use tracing::debug;

use crate::client::RestClient;
use crate::error::Error;
use crate::models::{DocumentationMetadataDto, SettingsDto};

impl RestClient {
    /// Fetch the application settings.
    ///
    /// `GET /api/settings`
    pub async fn get_settings(&self) -> Result<SettingsDto, Error> {
        let url = self.api_url("settings")?;
        self.get(url).await
    }

    /// Persist the application settings.
    ///
    /// `POST /api/settings`
    pub async fn save_settings(&self, dto: &SettingsDto) -> Result<(), Error> {
        let url = self.api_url("settings")?;
        debug!(broker_location = %dto.broker_location, "saving settings");
        // The backend echoes the stored settings; we only care about success.
        let _: serde_json::Value = self.post(url, dto).await?;
        Ok(())
    }

    /// Fetch metadata about the platform's REST documentation.
    ///
    /// `GET /api/docs/metadata`
    pub async fn documentation_metadata(&self) -> Result<DocumentationMetadataDto, Error> {
        let url = self.api_url("docs/metadata")?;
        self.get(url).await
    }
}
