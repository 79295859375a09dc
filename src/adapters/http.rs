use crate::core::{ConfigProvider, ShipmentSource, Snapshot};
use crate::utils::error::{PickerError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Reads the pallet list with a single `GET`.
pub struct HttpShipmentSource {
    endpoint: String,
    client: Client,
}

impl HttpShipmentSource {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            endpoint: config.endpoint().to_string(),
            client,
        })
    }
}

#[async_trait]
impl ShipmentSource for HttpShipmentSource {
    async fn fetch(&self) -> Result<Snapshot> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", self.endpoint, e);
            PickerError::ApiError(e)
        })?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            tracing::error!("Shipment endpoint answered {}", status);
            return Err(PickerError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Snapshot::from_json(&body).inspect_err(|e| {
            tracing::error!("Shipment response could not be decoded: {}", e);
        })
    }
}
