use crate::api::fraud::FraudApi;
use crate::services::dashboard_service::Dashboard;
use crate::services::view_service;

pub async fn execute<A: FraudApi>(dashboard: &mut Dashboard<A>) -> Result<String, String> {
    dashboard.submit().await.map_err(|e| e.to_string())?;

    let outcome = dashboard
        .result
        .as_ref()
        .ok_or("No result was recorded".to_string())?;
    Ok(view_service::render_result(outcome))
}
