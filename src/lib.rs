//! # Webserver
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo escrito desde cero: lee bytes crudos del
//! socket, parsea a mano request line, headers y body url-encoded, y arma
//! las respuestas header por header.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: codec de headers/query/cookies, lectura de requests, respuestas
//! - `router`: clasificación del path y dispatch
//! - `handlers`: registro, login, listado de usuarios y archivos estáticos
//! - `store`: usuarios y sesiones en memoria, protegidos por `Mutex`
//! - `server`: accept loop, pool de workers y connection handler
//! - `config` / `logging`: CLI, variables de entorno y `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use std::sync::Arc;
//! use webserver::config::Config;
//! use webserver::server::Server;
//! use webserver::store::AppState;
//!
//! let state = Arc::new(AppState::new());
//! let server = Server::bind(Config::default(), state).expect("bind");
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod store;
