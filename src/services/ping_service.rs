use crate::api::fraud::{ApiError, FraudApi};
use crate::models::PingMetrics;
use crate::services::dashboard_service::Dashboard;

pub async fn get_ping_metrics<A: FraudApi>(dashboard: &Dashboard<A>) -> Result<PingMetrics, String> {
    dashboard
        .check_health()
        .await
        .map_err(|e: ApiError| format!("Backend unreachable at this time ({})", e))
}

pub fn render_ping(metrics: &PingMetrics) -> String {
    format!(
        "Pong! 🏓\n  Backend: {}\n  Response Roundtrip: {}ms\n  Session Uptime: {}\n",
        metrics.message, metrics.roundtrip_ms, metrics.uptime
    )
}
