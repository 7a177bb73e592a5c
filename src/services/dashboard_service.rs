use std::time::Instant;
use tracing::{debug, error, info};

use crate::api::fraud::{
    AnalysisOutcome, ApiError, FraudApi, Stats, Transaction, TransactionRequest,
};
use crate::models::{DashboardError, FormField, PingMetrics, TransactionForm};

/// Message stored as the result whenever an analysis call fails
pub const ANALYSIS_FAILED: &str = "Failed to analyze transaction";

/// Dashboard state for one operator session.
///
/// Owns the form draft, the last verdict, the transaction list and the
/// stats, and drives the API client. Mutated only through `&mut self`, so
/// at most one call is in flight at a time.
pub struct Dashboard<A: FraudApi> {
    api: A,
    started_at: Instant,
    pub stats: Stats,
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub result: Option<AnalysisOutcome>,
    pub form: TransactionForm,
}

impl<A: FraudApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            started_at: Instant::now(),
            stats: Stats::default(),
            transactions: Vec::new(),
            loading: false,
            result: None,
            form: TransactionForm::default(),
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial load. Only the transaction list is fetched here; stats are
    /// loaded on demand with `fetch_stats`.
    pub async fn mount(&mut self) {
        self.fetch_transactions().await;
    }

    /// Replace the transaction list. Failures keep the current list.
    pub async fn fetch_transactions(&mut self) {
        match self.api.get_transactions().await {
            Ok(list) => {
                debug!("Loaded {} transactions", list.transactions.len());
                self.transactions = list.transactions;
            }
            Err(e) => error!("Failed to fetch transactions: {}", e),
        }
    }

    /// Replace the stats. Failures keep the current values.
    pub async fn fetch_stats(&mut self) {
        match self.api.get_stats().await {
            Ok(stats) => self.stats = stats,
            Err(e) => error!("Failed to fetch stats: {}", e),
        }
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), DashboardError> {
        let field: FormField = field.parse()?;
        self.form.set(field, value)
    }

    /// Validate the draft and enter the loading state.
    ///
    /// On error nothing changes, like a browser refusing an incomplete form.
    pub fn begin_submit(&mut self) -> Result<TransactionRequest, DashboardError> {
        if self.loading {
            return Err(DashboardError::Busy);
        }
        let request = self.form.to_request()?;
        self.loading = true;
        self.result = None;
        Ok(request)
    }

    /// Store the outcome of the pending analysis and leave the loading state
    pub fn finish_submit(&mut self, outcome: Result<AnalysisOutcome, ApiError>) {
        self.result = Some(match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("Analysis failed: {}", e);
                AnalysisOutcome::error(ANALYSIS_FAILED)
            }
        });
        self.loading = false;
    }

    /// Submit the current draft for analysis
    pub async fn submit(&mut self) -> Result<(), DashboardError> {
        let request = self.begin_submit()?;
        info!(
            "Analyzing transaction {} ({} from {})",
            request.transaction_id, request.amount, request.device
        );
        let outcome = self.api.analyze_transaction(&request).await;
        self.finish_submit(outcome);
        Ok(())
    }

    /// Ping the backend root and report the round trip
    pub async fn check_health(&self) -> Result<PingMetrics, ApiError> {
        let start = Instant::now();
        let status = self.api.health().await?;
        let roundtrip_ms = start.elapsed().as_millis() as u64;

        let elapsed = self.started_at.elapsed();
        let hours = elapsed.as_secs() / 3600;
        let minutes = (elapsed.as_secs() % 3600) / 60;
        let seconds = elapsed.as_secs() % 60;

        Ok(PingMetrics {
            message: status.message,
            roundtrip_ms,
            uptime: format!("{}h {}m {}s", hours, minutes, seconds),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::api::fraud::{
        AnalysisOutcome, ApiError, FraudApi, HealthStatus, Stats, TransactionList,
        TransactionRequest,
    };

    /// Scripted backend: each call pops the next queued reply and is recorded
    #[derive(Default)]
    pub struct MockApi {
        pub analyze_replies: Mutex<VecDeque<Result<AnalysisOutcome, ApiError>>>,
        pub transaction_replies: Mutex<VecDeque<Result<TransactionList, ApiError>>>,
        pub stats_replies: Mutex<VecDeque<Result<Stats, ApiError>>>,
        pub analyze_calls: Mutex<Vec<TransactionRequest>>,
        pub transaction_calls: Mutex<usize>,
        pub stats_calls: Mutex<usize>,
    }

    fn unscripted() -> ApiError {
        ApiError::Request("no reply scripted".to_string())
    }

    impl MockApi {
        pub fn with_analyze(self, reply: Result<AnalysisOutcome, ApiError>) -> Self {
            self.analyze_replies.lock().unwrap().push_back(reply);
            self
        }

        pub fn with_transactions(self, reply: Result<TransactionList, ApiError>) -> Self {
            self.transaction_replies.lock().unwrap().push_back(reply);
            self
        }

        pub fn with_stats(self, reply: Result<Stats, ApiError>) -> Self {
            self.stats_replies.lock().unwrap().push_back(reply);
            self
        }
    }

    #[async_trait]
    impl FraudApi for MockApi {
        async fn analyze_transaction(
            &self,
            request: &TransactionRequest,
        ) -> Result<AnalysisOutcome, ApiError> {
            self.analyze_calls.lock().unwrap().push(request.clone());
            self.analyze_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(unscripted()))
        }

        async fn get_transactions(&self) -> Result<TransactionList, ApiError> {
            *self.transaction_calls.lock().unwrap() += 1;
            self.transaction_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(unscripted()))
        }

        async fn get_stats(&self) -> Result<Stats, ApiError> {
            *self.stats_calls.lock().unwrap() += 1;
            self.stats_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(unscripted()))
        }

        async fn health(&self) -> Result<HealthStatus, ApiError> {
            Ok(HealthStatus {
                message: "AI Fraud Detection API is running".to_string(),
            })
        }
    }
}
