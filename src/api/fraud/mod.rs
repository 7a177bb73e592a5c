pub mod client;
pub mod models;

use async_trait::async_trait;

pub use client::FraudApiClient;
pub use models::{
    AnalysisOutcome, AnalysisResult, ApiError, Device, HealthStatus, Stats, Transaction,
    TransactionList, TransactionRequest,
};

/// Operations offered by the fraud-scoring backend
#[async_trait]
pub trait FraudApi: Send + Sync {
    async fn analyze_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<AnalysisOutcome, ApiError>;
    async fn get_transactions(&self) -> Result<TransactionList, ApiError>;
    async fn get_stats(&self) -> Result<Stats, ApiError>;
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}
