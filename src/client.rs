use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::Config;
use crate::error::BenchError;
use crate::query;

/// Header selecting the project the query runs against.
pub const PROJECT_HEADER: &str = "x-selected-project";

/// HTTP client for the image query API
pub struct ApiClient {
    /// Shared HTTP client with connection pooling
    client: Client,

    /// Target endpoint
    url: String,

    /// Project selection header value
    project: String,

    /// Bearer credential
    token: String,

    /// Page limit for query variables
    page_limit: usize,
}

/// Outcome of one completed request exchange
#[derive(Debug, Clone, Copy)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body_bytes: u64,
}

impl ApiClient {
    /// Create a new API client from the run configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_request_timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
            project: config.project.clone(),
            token: config.api_token.clone(),
            page_limit: config.page_limit,
        })
    }

    /// POST one `GetImages` request filtering on the given labels.
    ///
    /// The response body is read to completion before returning so that
    /// callers timing this call measure the full exchange. Transport
    /// errors propagate; non-2xx statuses do not.
    pub async fn query_images(&self, labels: Vec<String>) -> std::result::Result<ApiResponse, BenchError> {
        let request = query::build_get_images_request(labels, self.page_limit);
        let body = serde_json::to_vec(&request)?;

        let response = self
            .client
            .post(&self.url)
            .header(PROJECT_HEADER, &self.project)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("bearer {}", self.token))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        Ok(ApiResponse {
            status,
            body_bytes: bytes.len() as u64,
        })
    }
}
