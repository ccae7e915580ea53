//! HTTP transport — the live registry behind the two-route API layer.

use super::{RacerRecord, RegistryTransport, TransportError, WriteReceipt};
use crate::config::TransportConfig;
use crate::price::Price;
use crate::types::RacerId;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct PriceUpdate {
    price: Price,
}

pub struct HttpTransport {
    base_url: String,
    admin_token: String,
    client: Client,
}

impl HttpTransport {
    pub fn from_config(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        // No timeout by default: a hung registry stalls the race loop,
        // matching the original behavior. TRANSPORT_TIMEOUT_MS opts in.
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms.max(1)));
        }
        let client = builder
            .build()
            .map_err(|err| TransportError::BuildClient(err.to_string()))?;

        Ok(Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
            admin_token: config.admin_token.clone(),
            client,
        })
    }

    fn success_body(response: reqwest::blocking::Response) -> Result<String, TransportError> {
        let status = response.status();
        let body = response
            .text()
            .map_err(|err| TransportError::Http(err.to_string()))?;
        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl RegistryTransport for HttpTransport {
    fn read_all(&self) -> Result<Vec<RacerRecord>, TransportError> {
        let url = format!("{}/api/racers", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| TransportError::Http(err.to_string()))?;
        let body = Self::success_body(response)?;
        serde_json::from_str(&body).map_err(|err| TransportError::Decode(err.to_string()))
    }

    fn write_price(&self, id: RacerId, price: Price) -> Result<WriteReceipt, TransportError> {
        let url = format!("{}/api/racers/{id}/price", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.admin_token)
            .json(&PriceUpdate { price })
            .send()
            .map_err(|err| TransportError::Http(err.to_string()))?;
        let body = Self::success_body(response)?;
        serde_json::from_str(&body).map_err(|err| TransportError::Decode(err.to_string()))
    }
}
