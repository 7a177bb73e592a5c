use crate::api::fraud::FraudApi;
use crate::services::dashboard_service::Dashboard;
use crate::services::view_service;

pub fn execute<A: FraudApi>(dashboard: &mut Dashboard<A>, args: &[&str]) -> Result<String, String> {
    let Some((field, value)) = args.split_first() else {
        return Err("Usage: `set <field> <value>`. Fields: transaction_id, user_id, amount, location, device".to_string());
    };

    dashboard
        .set_field(field, &value.join(" "))
        .map_err(|e| e.to_string())?;

    Ok(view_service::render_form(&dashboard.form, dashboard.loading))
}
