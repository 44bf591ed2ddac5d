//! # Construcción y Escritura de Respuestas HTTP
//!
//! Cada forma de respuesta que emite el servidor es un template fijo de
//! headers más un body opcional:
//!
//! ```text
//! HTTP/1.1 302 Found\r\n
//! Location: /\r\n
//! Set-Cookie: JSESSIONID=01HX...; Path=/\r\n
//! \r\n
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use webserver::http::{Response, StatusCode};
//!
//! let response = Response::html(b"<h1>hola</h1>".to_vec());
//! assert_eq!(response.status(), StatusCode::Ok);
//!
//! let mut wire = Vec::new();
//! response.write_to(&mut wire).unwrap();
//! assert!(wire.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

use super::StatusCode;
use std::io::{self, Write};

/// Nombre de la cookie de sesión
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// Body fijo de la respuesta 404
pub const NOT_FOUND_BODY: &str = "요청하신 페이지가 없습니다";

const HTML_CONTENT_TYPE: &str = "text/html;charset=utf-8";
const CSS_CONTENT_TYPE: &str = "text/css;charset=utf-8";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 302, etc.)
    status: StatusCode,

    /// Headers en el orden en que se escriben
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header al final del template
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Establece el body y agrega `Content-Length`
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        let length = body.len().to_string();
        self.body = body;
        self.with_header("Content-Length", &length)
    }

    /// 200 con `text/html`
    pub fn html(body: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", HTML_CONTENT_TYPE)
            .with_body(body)
    }

    /// 200 con `text/css`
    pub fn css(body: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", CSS_CONTENT_TYPE)
            .with_body(body)
    }

    /// 302 a `location`, sin body
    pub fn redirect(location: &str) -> Self {
        Self::new(StatusCode::Found).with_header("Location", location)
    }

    /// 302 a `/` que además fija la cookie de sesión
    pub fn redirect_with_session(session_id: &str) -> Self {
        Self::redirect("/").with_header(
            "Set-Cookie",
            &format!("{}={}; Path=/", SESSION_COOKIE, session_id),
        )
    }

    /// 404 con el mensaje fijo
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
            .with_header("Content-Type", HTML_CONTENT_TYPE)
            .with_body(NOT_FOUND_BODY.as_bytes().to_vec())
    }

    /// 503 cuando no hay lugar en la cola de conexiones
    pub fn service_unavailable(retry_after_secs: u64) -> Self {
        Self::new(StatusCode::ServiceUnavailable)
            .with_header("Content-Type", HTML_CONTENT_TYPE)
            .with_header("Retry-After", &retry_after_secs.to_string())
            .with_body(b"<h1>Server busy, try again later</h1>".to_vec())
    }

    /// Escribe status line, headers, línea vacía y body; luego hace flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "HTTP/1.1 {}\r\n", self.status)?;

        for (name, value) in &self.headers {
            write!(out, "{}: {}\r\n", name, value)?;
        }

        out.write_all(b"\r\n")?;
        out.write_all(&self.body)?;
        out.flush()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Busca el valor de un header por nombre exacto
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
