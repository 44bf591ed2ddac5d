//! # Logging
//! src/logging.rs
//!
//! Inicializa el subscriber global de `tracing`. `RUST_LOG` tiene prioridad
//! sobre el nivel configurado por CLI.

use crate::config::LogFormat;
use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Construye el filtro: `RUST_LOG` si está definido, si no `default_level`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Instala el subscriber global
///
/// Falla si ya había uno instalado.
pub fn init(default_level: &str, format: LogFormat) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .with_thread_names(true);

    match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    }
    .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
