//! HTTP client for the upstream employee API.
//!
//! # Responsibilities
//! - Issue list/fetch/create/delete calls against the configured base URL
//! - Deserialize the uniform `{status, data, message}` envelope
//! - Surface non-2xx responses as typed errors carrying the upstream
//!   status and message
//!
//! # Design Decisions
//! - One outbound call per operation, no retries
//! - Ids are passed through verbatim into the upstream path
//! - Explicit connect/request timeouts from config

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::upstream::types::{
    Employee, ErrorEnvelope, ListEnvelope, RecordEnvelope, UpstreamError, UpstreamResult,
};

/// Operations the upstream employee API offers.
///
/// The HTTP layer is constructed against this trait so tests can
/// substitute a scripted implementation.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Fetch every employee, in whatever order the upstream returns.
    async fn list_all(&self) -> UpstreamResult<Vec<Employee>>;

    /// Fetch a single employee by id.
    async fn fetch_by_id(&self, id: &str) -> UpstreamResult<Employee>;

    /// Submit a new employee record, returning the upstream's stored
    /// representation (which may differ from the input).
    async fn create(&self, employee: &Employee) -> UpstreamResult<Employee>;

    /// Delete an employee by id. Success is the absence of an error.
    async fn delete_by_id(&self, id: &str) -> UpstreamResult<()>;
}

/// Reqwest-backed client for the upstream API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> UpstreamResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl EmployeeApi for UpstreamClient {
    async fn list_all(&self) -> UpstreamResult<Vec<Employee>> {
        let url = format!("{}/employees", self.base_url);
        let response = self.client.get(&url).send().await?;
        let envelope: ListEnvelope = self.handle_response(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn fetch_by_id(&self, id: &str) -> UpstreamResult<Employee> {
        let url = format!("{}/employee/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        let envelope: RecordEnvelope = self.handle_response(response).await?;
        envelope.data.ok_or(UpstreamError::MissingData)
    }

    async fn create(&self, employee: &Employee) -> UpstreamResult<Employee> {
        let url = format!("{}/create", self.base_url);
        let response = self.client.post(&url).json(employee).send().await?;
        let envelope: RecordEnvelope = self.handle_response(response).await?;
        envelope.data.ok_or(UpstreamError::MissingData)
    }

    async fn delete_by_id(&self, id: &str) -> UpstreamResult<()> {
        let url = format!("{}/delete/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            return Err(api_error(status, response).await);
        }
        Ok(())
    }
}

/// Build an API error from a non-2xx response, preferring the
/// envelope's message field when the body parses as one.
async fn api_error(status: reqwest::StatusCode, response: reqwest::Response) -> UpstreamError {
    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorEnvelope>(&text) {
        Ok(envelope) => envelope.message,
        Err(_) => text,
    };
    UpstreamError::Api { status, message }
}
