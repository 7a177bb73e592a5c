pub mod analyze;
pub mod help;
pub mod ping;
pub mod set;
pub mod stats;
pub mod transaction;

use tracing::{debug, warn};

use crate::api::fraud::FraudApi;
use crate::services::dashboard_service::Dashboard;
use crate::services::view_service;

/// What the console loop should do after a line is handled
#[derive(Debug, PartialEq)]
pub enum CommandOutcome {
    Print(String),
    Quit,
}

pub async fn handle_line<A: FraudApi>(dashboard: &mut Dashboard<A>, line: &str) -> CommandOutcome {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return CommandOutcome::Print(String::new());
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];
    debug!("Command `{}` with {} args", command, args.len());

    let result = match command.as_str() {
        "set" => set::execute(dashboard, args),
        "submit" | "analyze" => analyze::execute(dashboard).await,
        "refresh" | "transactions" | "tr" => transaction::execute(dashboard).await,
        "stats" => stats::execute(dashboard).await,
        "ping" => ping::execute(dashboard).await,
        "show" | "view" => Ok(view_service::render_dashboard(dashboard)),
        "help" | "?" => Ok(help::execute()),
        "quit" | "exit" => return CommandOutcome::Quit,
        _ => Err(format!(
            "Unknown command `{}`. Type `help` for the list of commands.",
            command
        )),
    };

    match result {
        Ok(output) => CommandOutcome::Print(output),
        Err(e) => {
            warn!("Command `{}` failed: {}", command, e);
            CommandOutcome::Print(format!("❌ {}\n", e))
        }
    }
}
