use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

use super::models::{
    AnalysisOutcome, ApiError, HealthStatus, Stats, TransactionList, TransactionRequest,
};
use super::FraudApi;

/// HTTP client for the fraud-scoring backend
pub struct FraudApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl FraudApiClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client against the given base URL
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Self::REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .default_headers(Self::create_headers())
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a prepared request and decode a 2xx JSON body.
    /// Any failure is logged under `operation` and returned as-is.
    async fn send<T: DeserializeOwned>(
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let result = Self::execute::<T>(request).await;
        if let Err(e) = &result {
            error!("Error {}: {}", operation, e);
        }
        result
    }

    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl FraudApi for FraudApiClient {
    /// POST /api/analyze
    async fn analyze_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<AnalysisOutcome, ApiError> {
        let builder = self.http_client.post(self.url("/api/analyze")).json(request);
        Self::send("analyzing transaction", builder).await
    }

    /// GET /api/transactions
    async fn get_transactions(&self) -> Result<TransactionList, ApiError> {
        let builder = self.http_client.get(self.url("/api/transactions"));
        Self::send("fetching transactions", builder).await
    }

    /// GET /api/stats
    async fn get_stats(&self) -> Result<Stats, ApiError> {
        let builder = self.http_client.get(self.url("/api/stats"));
        Self::send("fetching stats", builder).await
    }

    /// GET /
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let builder = self.http_client.get(self.url("/"));
        Self::send("checking API health", builder).await
    }
}
