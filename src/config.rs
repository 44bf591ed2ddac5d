//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor con soporte para argumentos CLI y variables
//! de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./webserver --port 8080 \
//!   --webapp-dir ./webapp \
//!   --workers 8 \
//!   --queue-capacity 128 \
//!   --seed-demo-user
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 WEBAPP_DIR=/srv/webapp LOG_FORMAT=json ./webserver
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Formato de salida de los logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Texto legible para humanos
    Pretty,
    /// Una línea JSON por evento
    Json,
}

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "webserver")]
#[command(about = "Servidor HTTP/1.1 con registro de usuarios, login y sesiones por cookie")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz de los archivos estáticos
    #[arg(long = "webapp-dir", default_value = "./webapp", env = "WEBAPP_DIR")]
    pub webapp_dir: PathBuf,

    // === Workers ===

    /// Número de threads que atienden conexiones
    #[arg(long, default_value = "8", env = "WORKERS")]
    pub workers: usize,

    /// Conexiones que pueden esperar en cola antes de responder 503
    #[arg(long = "queue-capacity", default_value = "128", env = "QUEUE_CAPACITY")]
    pub queue_capacity: usize,

    /// Valor del header Retry-After en las respuestas 503
    #[arg(long = "retry-after-secs", default_value = "1", env = "RETRY_AFTER_SECS")]
    pub retry_after_secs: u64,

    // === Usuarios ===

    /// Archivo JSON con usuarios a precargar
    #[arg(long = "users-file", env = "USERS_FILE")]
    pub users_file: Option<PathBuf>,

    /// Agrega el usuario de prueba `jay` si no hay usuarios
    #[arg(long = "seed-demo-user", env = "SEED_DEMO_USER")]
    pub seed_demo_user: bool,

    // === Logging ===

    /// Nivel de log por defecto (RUST_LOG tiene prioridad)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,

    /// Formato de los logs
    #[arg(long = "log-format", value_enum, default_value = "pretty", env = "LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use webserver::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("Workers must be >= 1".to_string());
        }
        if self.queue_capacity == 0 {
            return Err("Queue capacity must be >= 1".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if !self.webapp_dir.is_dir() {
            return Err(format!(
                "Webapp dir {} is not a directory",
                self.webapp_dir.display()
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            webapp_dir: PathBuf::from("./webapp"),
            workers: 8,
            queue_capacity: 128,
            retry_after_secs: 1,
            users_file: None,
            seed_demo_user: false,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> (Config, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.webapp_dir = dir.path().to_path_buf();
        (config, dir)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.webapp_dir, PathBuf::from("./webapp"));
        assert_eq!(config.workers, 8);
        assert!(!config.seed_demo_user);
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "0.0.0.0".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_success() {
        let (config, _dir) = valid_config();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_workers() {
        let (mut config, _dir) = valid_config();
        config.workers = 0;
        assert!(config.validate().unwrap_err().contains("Workers"));
    }

    #[test]
    fn test_validate_invalid_queue_capacity() {
        let (mut config, _dir) = valid_config();
        config.queue_capacity = 0;
        assert!(config.validate().unwrap_err().contains("Queue capacity"));
    }

    #[test]
    fn test_validate_missing_webapp_dir() {
        let (mut config, _dir) = valid_config();
        config.webapp_dir = PathBuf::from("/definitely/not/here");
        assert!(config.validate().unwrap_err().contains("Webapp dir"));
    }

    #[test]
    fn test_parse_cli_args() {
        let config = Config::try_parse_from([
            "webserver",
            "--port",
            "9090",
            "--webapp-dir",
            "/srv/webapp",
            "--workers",
            "2",
            "--seed-demo-user",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.webapp_dir, PathBuf::from("/srv/webapp"));
        assert_eq!(config.workers, 2);
        assert!(config.seed_demo_user);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.users_file.is_none());
    }

    #[test]
    fn test_parse_invalid_port() {
        assert!(Config::try_parse_from(["webserver", "--port", "not-a-port"]).is_err());
    }
}
