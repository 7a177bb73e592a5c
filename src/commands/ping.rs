use crate::api::fraud::FraudApi;
use crate::services::dashboard_service::Dashboard;
use crate::services::ping_service;

pub async fn execute<A: FraudApi>(dashboard: &Dashboard<A>) -> Result<String, String> {
    let metrics = ping_service::get_ping_metrics(dashboard).await?;
    Ok(ping_service::render_ping(&metrics))
}
