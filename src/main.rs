//! # Webserver - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa logging, construye los stores una
//! sola vez y arranca el accept loop.

use anyhow::{anyhow, Context};
use std::sync::Arc;
use tracing::info;
use webserver::config::Config;
use webserver::logging;
use webserver::server::Server;
use webserver::store::AppState;

fn main() -> anyhow::Result<()> {
    let config = Config::new();

    logging::init(&config.log_level, config.log_format)?;
    config.validate().map_err(|e| anyhow!("invalid configuration: {}", e))?;

    let state = Arc::new(AppState::new());

    if let Some(path) = &config.users_file {
        let count = state
            .users
            .load_from_file(path)
            .with_context(|| format!("failed to load users from {}", path.display()))?;
        info!(count, file = %path.display(), "usuarios precargados");
    }

    if config.seed_demo_user && state.seed_demo_user() {
        info!("usuario de prueba 'jay' agregado");
    }

    let server = Server::bind(config.clone(), Arc::clone(&state))
        .with_context(|| format!("failed to bind {}", config.address()))?;

    server.run().context("server stopped")?;

    Ok(())
}
