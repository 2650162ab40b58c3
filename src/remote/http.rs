//! HTTP implementation of [`TicketSource`].

use std::time::Duration;

use reqwest::Client;

use super::TicketSource;
use crate::error::{BoardError, Result};
use crate::ticket::BoardSnapshot;

/// Fixed endpoint serving the board feed.
pub const BOARD_API_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Fetches the board feed with a single unauthenticated GET.
///
/// No retry and no caching across calls. Timeouts are fixed and not
/// exposed to callers.
pub struct HttpTicketSource {
    client: Client,
    endpoint: String,
}

impl HttpTicketSource {
    /// Create a source against the fixed endpoint.
    ///
    /// Configures the HTTP client with a 30s connect timeout and a 60s
    /// total timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(HttpTicketSource {
            client,
            endpoint: BOARD_API_URL.to_string(),
        })
    }

    /// Override the endpoint, for deployments serving the feed elsewhere.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TicketSource for HttpTicketSource {
    async fn fetch(&self) -> Result<BoardSnapshot> {
        tracing::debug!("fetching board feed from {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Network(format!(
                "unexpected status {status} from {}",
                self.endpoint
            )));
        }

        // Read the body first so a parse failure is classified as a
        // malformed response rather than a transport error.
        let body = response.text().await?;
        BoardSnapshot::parse(&body)
    }
}
