//! Balance Service entry point
//!
//! Loads `config/{env}.yaml`, initializes logging, connects to PostgreSQL,
//! ensures the schema, and runs the HTTP gateway until shutdown.

use std::sync::Arc;

use anyhow::Context;

use balance_service::account::Database;
use balance_service::config::AppConfig;
use balance_service::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env);
    let _log_guard = logging::init_logging(&app_config);

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    tracing::info!(
        "Starting balance service v{} in {} mode",
        env!("CARGO_PKG_VERSION"),
        env
    );

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(async {
        let db = Database::connect(&app_config.postgres_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        db.ensure_schema()
            .await
            .context("Failed to ensure database schema")?;

        gateway::run_server(&app_config.gateway.host, port, Arc::new(db)).await;
        Ok(())
    })
}
