//! HTTP gateway to the bird service API.
//!
//! One method per operation the UI issues.  Each performs exactly one
//! network call and either resolves with the decoded body or returns the
//! failure unmodified -- no retries, no fallback.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use aviary_shared::{Bird, BirdFields};

use crate::error::GatewayError;

/// Shape of the server's error bodies: `{"message": ..., "error": ...}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the bird service REST API.
#[derive(Debug, Clone)]
pub struct BirdApi {
    http: reqwest::Client,
    base_url: String,
}

impl BirdApi {
    /// Create a gateway for the API at `base_url`,
    /// e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn birds_url(&self) -> String {
        format!("{}/api/birds", self.base_url.trim_end_matches('/'))
    }

    /// Fetch all birds.
    pub async fn fetch_birds(&self) -> Result<Vec<Bird>, GatewayError> {
        let resp = self.http.get(self.birds_url()).send().await?;
        let birds: Vec<Bird> = decode(resp).await?;

        debug!(count = birds.len(), "Fetched birds");
        Ok(birds)
    }

    /// Create a bird; the server assigns the id.
    pub async fn create_bird(&self, fields: &BirdFields) -> Result<Bird, GatewayError> {
        let resp = self
            .http
            .post(self.birds_url())
            .json(fields)
            .send()
            .await?;
        decode(resp).await
    }

    /// Replace the fields of the bird with `id`.
    pub async fn update_bird(
        &self,
        id: &str,
        fields: &BirdFields,
    ) -> Result<Bird, GatewayError> {
        let url = format!("{}/{id}", self.birds_url());
        let resp = self.http.put(url).json(fields).send().await?;
        decode(resp).await
    }

    /// Delete the bird with `id`.
    pub async fn delete_bird(&self, id: &str) -> Result<(), GatewayError> {
        let url = format!("{}/{id}", self.birds_url());
        let resp = self.http.delete(url).send().await?;

        // The body is only a confirmation message; the status is what counts.
        check(resp).await?;
        Ok(())
    }
}

/// Reject a non-2xx response, preferring the server's own error message.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    Err(GatewayError::Api { status, message })
}

/// Decode a success body, or turn a non-2xx response into [`GatewayError::Api`].
async fn decode<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, GatewayError> {
    let resp = check(resp).await?;
    Ok(resp.json().await?)
}
