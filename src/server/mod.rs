//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes y las encola en un pool de workers
//! 3. Cada worker lee, despacha y responde una conexión
//! 4. Si la cola está llena, responde 503

pub mod connection;
pub mod pool;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
