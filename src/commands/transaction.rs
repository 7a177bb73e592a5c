use crate::api::fraud::FraudApi;
use crate::services::dashboard_service::Dashboard;
use crate::services::view_service;

/// Reload the transaction list and show it
pub async fn execute<A: FraudApi>(dashboard: &mut Dashboard<A>) -> Result<String, String> {
    dashboard.fetch_transactions().await;
    Ok(view_service::render_transactions(&dashboard.transactions))
}
