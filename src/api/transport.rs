use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::api::error::TransportError;
use crate::config::ApiConfig;

/// Fetches a JSON body from the content store.
pub trait Transport {
    fn fetch_data(
        &self,
        url: &str,
        bearer_token: &str,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

/// `reqwest`-backed transport used by the binary.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| TransportError::Request {
                url: config.base_url.clone(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn fetch_data(&self, url: &str, bearer_token: &str) -> Result<Value, TransportError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(bearer_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.json::<Value>().await.map_err(TransportError::decode)
    }
}
