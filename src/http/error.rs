//! # Errores del Servidor
//! src/http/error.rs
//!
//! Taxonomía única de errores que puede producir el camino
//! lectura → dispatch → escritura de un request.
//!
//! Todos se capturan en el borde del connection handler: se registran en el
//! log y la conexión se cierra. Ninguno tumba el proceso y ninguno se reintenta.

use std::fmt;
use std::io;

/// Errores que pueden ocurrir mientras se atiende un request
#[derive(Debug)]
pub enum HttpError {
    /// Request line, header, cookie o formulario malformado
    Parse(String),

    /// Percent-encoding inválido o bytes que no son UTF-8
    Decode(String),

    /// Fallo de lectura/escritura del socket o EOF prematuro
    Io(io::Error),

    /// Login contra un userId que no existe en el store
    UserNotFound(String),
}

impl HttpError {
    /// Atajo para construir un `Parse` desde cualquier cosa imprimible
    pub fn parse(msg: impl Into<String>) -> Self {
        HttpError::Parse(msg.into())
    }

    /// Atajo para construir un `Decode`
    pub fn decode(msg: impl Into<String>) -> Self {
        HttpError::Decode(msg.into())
    }

    /// EOF antes de tiempo (el cliente cerró a mitad del request)
    pub fn unexpected_eof(what: &str) -> Self {
        HttpError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("connection closed while reading {}", what),
        ))
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Parse(msg) => write!(f, "Parse error: {}", msg),
            HttpError::Decode(msg) => write!(f, "Decode error: {}", msg),
            HttpError::Io(e) => write!(f, "I/O error: {}", e),
            HttpError::UserNotFound(id) => write!(f, "User not found: {}", id),
        }
    }
}

impl std::error::Error for HttpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HttpError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HttpError {
    fn from(e: io::Error) -> Self {
        HttpError::Io(e)
    }
}

/// Alias usado por todo el módulo `http`
pub type Result<T> = std::result::Result<T, HttpError>;
