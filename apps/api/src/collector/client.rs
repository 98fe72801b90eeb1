//! HTTP client for `POST /api/generate-ads`.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::ad::{AdCandidate, GenerateAdsResponse};
use crate::models::brief::Brief;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
const GENERATE_PATH: &str = "/api/generate-ads";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    error: Option<String>,
}

#[derive(Clone)]
pub struct AdsApiClient {
    client: Client,
    endpoint: String,
}

impl AdsApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: format!("{}{GENERATE_PATH}", base_url.trim_end_matches('/')),
        })
    }

    /// Submits a brief and returns the candidates in response order.
    pub async fn generate(&self, brief: &Brief) -> Result<Vec<AdCandidate>, ClientError> {
        let response = self.client.post(&self.endpoint).json(brief).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody {
                    message,
                    error: Some(detail),
                }) => format!("{message}: {detail}"),
                Ok(ErrorBody { message, .. }) => message,
                Err(_) => body,
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateAdsResponse = response.json().await?;
        Ok(body.ads)
    }
}
