use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

use api::fraud::FraudApiClient;
use commands::CommandOutcome;
use config::Config;
use services::dashboard_service::Dashboard;
use services::view_service;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so they don't interleave with the rendered dashboard
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("fraud_dashboard=info".parse().expect("valid directive"))
                .add_directive("reqwest=warn".parse().expect("valid directive")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!("🛡️  Starting fraud dashboard against {}", config.api_base_url);

    let client = match FraudApiClient::new(&config.api_base_url) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create API client: {}", e);
            return;
        }
    };

    let mut dashboard = Dashboard::new(client);
    dashboard.mount().await;

    if let Err(e) = run_console(&mut dashboard).await {
        error!("Console error: {}", e);
    }
}

async fn run_console(dashboard: &mut Dashboard<FraudApiClient>) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    stdout
        .write_all(view_service::render_dashboard(dashboard).as_bytes())
        .await?;
    stdout.write_all(b"\nType `help` for commands.\n> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match commands::handle_line(dashboard, &line).await {
            CommandOutcome::Print(output) => {
                stdout.write_all(output.as_bytes()).await?;
                stdout.write_all(b"> ").await?;
                stdout.flush().await?;
            }
            CommandOutcome::Quit => break,
        }
    }

    info!("Goodbye");
    Ok(())
}
