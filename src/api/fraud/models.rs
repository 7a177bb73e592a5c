use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Device a transaction was made from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Mobile,
    Desktop,
    Tablet,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Mobile, Device::Desktop, Device::Tablet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Mobile => "mobile",
            Device::Desktop => "desktop",
            Device::Tablet => "tablet",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Device::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// Request body for POST /api/analyze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub transaction_id: String,
    pub user_id: String,
    pub amount: f64,
    pub location: String,
    pub device: Device,
}

/// Verdict returned by POST /api/analyze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAnalysisResult")]
pub struct AnalysisResult {
    pub transaction_id: String,
    pub is_fraud: bool,
    pub risk_score: f64,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Wire form of a verdict. Older backends report `flagged` instead of
/// `is_fraud` and leave out `confidence`; some send both flags.
#[derive(Deserialize)]
struct RawAnalysisResult {
    transaction_id: String,
    #[serde(default)]
    is_fraud: Option<bool>,
    #[serde(default)]
    flagged: Option<bool>,
    risk_score: f64,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    reason: Option<String>,
}

impl TryFrom<RawAnalysisResult> for AnalysisResult {
    type Error = String;

    fn try_from(raw: RawAnalysisResult) -> Result<Self, Self::Error> {
        let is_fraud = raw
            .is_fraud
            .or(raw.flagged)
            .ok_or_else(|| "missing field `is_fraud`".to_string())?;

        Ok(AnalysisResult {
            transaction_id: raw.transaction_id,
            is_fraud,
            risk_score: raw.risk_score,
            confidence: raw.confidence,
            reason: raw.reason,
        })
    }
}

/// Either a verdict or the `{ "error": ... }` shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Error { error: String },
    Verdict(AnalysisResult),
}

impl AnalysisOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        AnalysisOutcome::Error {
            error: message.into(),
        }
    }
}

/// One recorded transaction from GET /api/transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub user_id: String,
    pub amount: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Response from GET /api/transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

/// Response from GET /api/stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_transactions: u64,
    pub flagged_count: u64,
    /// Percentage, 0-100
    pub accuracy: f64,
}

/// Response from GET /
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}

/// Errors raised by the fraud API client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Request Error: {0}")]
    Request(String),
    #[error("HTTP Error ({status}): {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_decode() {
            ApiError::Deserialization(e.to_string())
        } else {
            ApiError::Request(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_lowercase_device() {
        let req = TransactionRequest {
            transaction_id: "TXN001".to_string(),
            user_id: "U123".to_string(),
            amount: 50000.0,
            location: "Colombo".to_string(),
            device: Device::Tablet,
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["device"], "tablet");
        assert_eq!(value["amount"], 50000.0);
    }

    #[test]
    fn test_device_from_str() {
        assert_eq!("Desktop".parse::<Device>(), Ok(Device::Desktop));
        assert!("laptop".parse::<Device>().is_err());
    }

    #[test]
    fn test_outcome_parses_verdict() {
        let outcome: AnalysisOutcome = serde_json::from_value(json!({
            "transaction_id": "TXN001",
            "is_fraud": true,
            "risk_score": 0.82,
            "confidence": 0.91,
            "reason": "Unusual amount"
        }))
        .unwrap();

        match outcome {
            AnalysisOutcome::Verdict(r) => {
                assert!(r.is_fraud);
                assert_eq!(r.reason.as_deref(), Some("Unusual amount"));
            }
            other => panic!("expected verdict, got {:?}", other),
        }
    }

    #[test]
    fn test_outcome_accepts_flagged_without_confidence() {
        let outcome: AnalysisOutcome = serde_json::from_value(json!({
            "transaction_id": "T9",
            "risk_score": 0.95,
            "flagged": true
        }))
        .unwrap();

        assert_eq!(
            outcome,
            AnalysisOutcome::Verdict(AnalysisResult {
                transaction_id: "T9".to_string(),
                is_fraud: true,
                risk_score: 0.95,
                confidence: 0.0,
                reason: None,
            })
        );
    }

    #[test]
    fn test_outcome_prefers_is_fraud_when_both_flags_present() {
        let outcome: AnalysisOutcome = serde_json::from_value(json!({
            "transaction_id": "T",
            "risk_score": 0.9,
            "flagged": true,
            "is_fraud": false,
            "confidence": 0.5
        }))
        .unwrap();

        match outcome {
            AnalysisOutcome::Verdict(r) => {
                assert!(!r.is_fraud);
                assert_eq!(r.confidence, 0.5);
            }
            other => panic!("expected verdict, got {:?}", other),
        }
    }

    #[test]
    fn test_verdict_without_any_flag_is_rejected() {
        let parsed = serde_json::from_value::<AnalysisOutcome>(json!({
            "transaction_id": "T",
            "risk_score": 0.9
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_outcome_parses_error_shape() {
        let outcome: AnalysisOutcome =
            serde_json::from_value(json!({ "error": "model unavailable" })).unwrap();
        assert_eq!(outcome, AnalysisOutcome::error("model unavailable"));
    }

    #[test]
    fn test_transaction_optional_fields() {
        let list: TransactionList = serde_json::from_value(json!({
            "transactions": [
                { "transaction_id": "T2", "user_id": "U2", "amount": 2000, "device": "web" },
                { "transaction_id": "T3", "user_id": "U3", "amount": 15000.5 }
            ]
        }))
        .unwrap();

        assert_eq!(list.transactions[0].device.as_deref(), Some("web"));
        assert_eq!(list.transactions[1].location, None);
        assert_eq!(list.transactions[1].amount, 15000.5);
    }
}
