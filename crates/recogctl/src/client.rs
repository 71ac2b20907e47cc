//! HTTP client for the platform's recognize endpoint.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::json;

use recog_common::ServiceReply;

/// Client for one bot's intent-recognition endpoint.
pub struct RecognizeClient {
    client: reqwest::Client,
    request_url: String,
}

impl RecognizeClient {
    pub fn new(platform_url: &str, odin_id: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            request_url: format!("{}/bot/{}/intent/recognize", platform_url, odin_id),
        }
    }

    /// Issue one recognize request. A non-200 status is not an error
    /// here: the raw body is carried through so the failure shows up
    /// in the output artifact. Only a transport failure aborts.
    pub async fn recognize(&self, user_phrase: &str) -> Result<ServiceReply> {
        let response = self
            .client
            .post(&self.request_url)
            .json(&json!({ "query": user_phrase }))
            .send()
            .await
            .with_context(|| format!("Recognize request to {} failed", self.request_url))?;

        let success = response.status() == StatusCode::OK;
        let body = response
            .text()
            .await
            .context("Failed to read recognize response body")?;

        Ok(ServiceReply { success, body })
    }
}
