use crate::api::fraud::FraudApi;
use crate::services::dashboard_service::Dashboard;
use crate::services::view_service;

pub async fn execute<A: FraudApi>(dashboard: &mut Dashboard<A>) -> Result<String, String> {
    dashboard.fetch_stats().await;
    Ok(view_service::render_stat_cards(&dashboard.stats))
}
