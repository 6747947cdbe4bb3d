//! HTTP client for the remote file-collection service.
//!
//! Provides a minimal client with generic GET / multipart POST helpers and the two
//! domain calls the intake controller needs (upload a batch, list stored records).
//! A non-success status on GET surfaces as [`IntakeError::Http`] wrapped in
//! `anyhow`. Multipart POSTs only care about the body: whatever JSON the service
//! answers with is returned, whatever the status.

pub mod api;

use anyhow::{Context, Result};
use intake_core::{IntakeConfig, IntakeError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Endpoint layout of the remote service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub upload_path: String,
    pub records_path: String,
    /// Multipart field every file is attached under
    pub upload_field: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        let config = IntakeConfig::default();
        Self {
            upload_path: config.upload_path,
            records_path: config.records_path,
            upload_field: config.upload_field,
        }
    }
}

/// HTTP client for the remote file-collection service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints: Endpoints::default(),
        })
    }

    pub fn from_config(config: &IntakeConfig) -> Result<Self> {
        Ok(Self::new(config.api_url.clone(), config.http_timeout)?.with_endpoints(Endpoints {
            upload_path: config.upload_path.clone(),
            records_path: config.records_path.clone(),
            upload_field: config.upload_field.clone(),
        }))
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        tracing::debug!(url = %url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| IntakeError::Request(e.to_string()))?;

        read_json(response).await
    }

    /// POST multipart form and deserialize the response body.
    ///
    /// The status is not checked; a non-success status is only logged.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.build_url(path);
        tracing::debug!(url = %url, "POST multipart");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| IntakeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "POST answered with non-success status");
        }

        parse_body(response).await
    }
}

/// Check the status, then parse the whole body as JSON.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(IntakeError::Http {
            status: status.as_u16(),
            body: error_text,
        }
        .into());
    }

    parse_body(response).await
}

async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response
        .bytes()
        .await
        .map_err(|e| IntakeError::Request(e.to_string()))?;

    let parsed = serde_json::from_slice(&body).map_err(|e| IntakeError::Decode(e.to_string()))?;
    Ok(parsed)
}
