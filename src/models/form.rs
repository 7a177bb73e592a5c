use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::api::fraud::{Device, TransactionRequest};

/// Errors raised by dashboard operations before anything is sent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("Unknown field `{0}`. Fields: transaction_id, user_id, amount, location, device")]
    UnknownField(String),
    #[error("Invalid device `{0}`. Choose mobile, desktop or tablet")]
    InvalidDevice(String),
    #[error("Please fill in `{0}`")]
    MissingField(FormField),
    #[error("Amount must be a number, got `{0}`")]
    InvalidAmount(String),
    #[error("An analysis is already in progress")]
    Busy,
}

/// Editable fields of the analysis form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TransactionId,
    UserId,
    Amount,
    Location,
    Device,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::TransactionId => "transaction_id",
            FormField::UserId => "user_id",
            FormField::Amount => "amount",
            FormField::Location => "location",
            FormField::Device => "device",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transaction_id" | "txn" | "id" => Ok(FormField::TransactionId),
            "user_id" | "user" => Ok(FormField::UserId),
            "amount" => Ok(FormField::Amount),
            "location" => Ok(FormField::Location),
            "device" => Ok(FormField::Device),
            _ => Err(DashboardError::UnknownField(s.to_string())),
        }
    }
}

/// Draft of the next transaction to analyze.
///
/// Values are kept as typed; `amount` is only parsed on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub transaction_id: String,
    pub user_id: String,
    pub amount: String,
    pub location: String,
    pub device: Device,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            transaction_id: String::new(),
            user_id: String::new(),
            amount: String::new(),
            location: "Colombo".to_string(),
            device: Device::Mobile,
        }
    }
}

impl TransactionForm {
    /// Update one field by name
    pub fn set(&mut self, field: FormField, value: &str) -> Result<(), DashboardError> {
        match field {
            FormField::TransactionId => self.transaction_id = value.to_string(),
            FormField::UserId => self.user_id = value.to_string(),
            FormField::Amount => self.amount = value.to_string(),
            FormField::Location => self.location = value.to_string(),
            FormField::Device => {
                self.device = value
                    .parse()
                    .map_err(DashboardError::InvalidDevice)?;
            }
        }
        Ok(())
    }

    /// Check required fields and coerce the amount
    pub fn to_request(&self) -> Result<TransactionRequest, DashboardError> {
        for (field, value) in [
            (FormField::TransactionId, &self.transaction_id),
            (FormField::UserId, &self.user_id),
            (FormField::Amount, &self.amount),
        ] {
            if value.trim().is_empty() {
                return Err(DashboardError::MissingField(field));
            }
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| DashboardError::InvalidAmount(self.amount.clone()))?;

        Ok(TransactionRequest {
            transaction_id: self.transaction_id.clone(),
            user_id: self.user_id.clone(),
            amount,
            location: self.location.clone(),
            device: self.device,
        })
    }
}
