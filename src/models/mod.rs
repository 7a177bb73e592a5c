//! Data models for the dashboard console
//!
//! The wire types live in `api::fraud::models`; these are the view-side
//! structs the services and commands pass around.

pub mod form;
pub mod ping;

pub use form::{DashboardError, FormField, TransactionForm};
pub use ping::PingMetrics;
