// src/statements/client.rs
use crate::utils::error::SourceError;
use crate::statements::models::StatementInfo;
use reqwest::header;
use std::time::Duration;

const STATEMENT_USER_AGENT: &str = concat!("msccap_extractor/", env!("CARGO_PKG_VERSION"));
// Be conservative with the rate server; one request at a time plus a pause.
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 150;

/// Downloads statement PDFs, one request at a time.
pub struct StatementClient {
    client: reqwest::Client,
    request_delay: Duration,
}

impl StatementClient {
    /// Creates a client that waits `request_delay_ms` before every request.
    pub fn new(request_delay_ms: u64) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(STATEMENT_USER_AGENT)
            // Connection is released once the body is read, nothing is pooled
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client,
            request_delay: Duration::from_millis(request_delay_ms),
        })
    }

    /// Downloads the raw PDF bytes of a statement.
    pub async fn download_statement(&self, statement: &StatementInfo) -> Result<Vec<u8>, SourceError> {
        tracing::info!("Downloading statement {} from: {}", statement.id, statement.url);

        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        let response = self.client.get(&statement.url)
            .header(header::ACCEPT, "application/pdf,*/*")
            .send()
            .await?; // Propagates reqwest::Error as SourceError::Network

        // Check if the request was successful (status code 2xx)
        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for URL: {}", status, statement.url);
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(SourceError::NotFound(statement.url.clone()));
            }
            return Err(SourceError::Http(status));
        }

        let body = response.bytes().await?;
        tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), statement.url);

        Ok(body.to_vec())
    }
}
