//! # Lectura de Requests desde un Stream
//! src/http/reader.rs
//!
//! Lee un request HTTP/1.1 directamente de un `BufRead` (en producción un
//! `BufReader<TcpStream>`), línea por línea:
//!
//! ```text
//! read_request_line  →  "POST /user/create HTTP/1.1"
//! read_headers       →  hasta la línea vacía (inclusive)
//! read_body(n)       →  exactamente n bytes, ni uno más
//! ```
//!
//! Nunca se lee más allá del header block ni más allá de `Content-Length`:
//! lo que venga después queda sin consumir en el stream.

use super::codec::{decode_path, extract_path, parse_header_line};
use super::error::{HttpError, Result};
use super::request::{find_header, Request};
use std::collections::HashMap;
use std::io::{BufRead, Read};
use tracing::trace;

/// Tamaño máximo de body que aceptamos (1 MiB)
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Largo máximo de la request line o de una línea de header (8 KiB)
pub const MAX_LINE_BYTES: usize = 8 * 1024;

/// Lector de requests sobre cualquier `BufRead`
pub struct RequestReader<R> {
    inner: R,
}

impl<R: BufRead> RequestReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Devuelve el stream subyacente (con lo que no se haya consumido)
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Lee el request completo: request line, headers y body opcional
    ///
    /// # Ejemplo
    /// ```
    /// use std::io::Cursor;
    /// use webserver::http::RequestReader;
    ///
    /// let raw = "POST /user/login HTTP/1.1\r\nContent-Length: 8\r\n\r\nuserId=a";
    /// let mut reader = RequestReader::new(Cursor::new(raw));
    /// let request = reader.read_request().unwrap();
    ///
    /// assert_eq!(request.path(), "/user/login");
    /// assert_eq!(request.body(), Some("userId=a"));
    /// ```
    pub fn read_request(&mut self) -> Result<Request> {
        let request_line = self.read_request_line()?;

        let target = extract_path(&request_line)?;
        let method = request_line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        let path = decode_path(&target)?;

        let headers = self.read_headers()?;

        let body = match content_length(&headers)? {
            Some(length) => Some(self.read_body(length)?),
            None => None,
        };

        Ok(Request::new(method, target, path, headers, body))
    }

    /// Lee la primera línea del request
    pub fn read_request_line(&mut self) -> Result<String> {
        let line = self
            .read_line()?
            .ok_or_else(|| HttpError::unexpected_eof("request line"))?;

        if line.trim().is_empty() {
            return Err(HttpError::parse("empty request line"));
        }

        trace!(request_line = %line, "request line leída");
        Ok(line)
    }

    /// Lee headers hasta encontrar la línea vacía
    ///
    /// # Errores
    ///
    /// `HttpError::Io` si el stream termina antes de la línea vacía,
    /// `HttpError::Parse` si alguna línea no es un header válido.
    pub fn read_headers(&mut self) -> Result<HashMap<String, String>> {
        let mut headers = HashMap::new();

        loop {
            let line = self
                .read_line()?
                .ok_or_else(|| HttpError::unexpected_eof("headers"))?;

            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                break;
            }

            let pair = parse_header_line(&line)?;
            headers.insert(pair.key, pair.value);
        }

        Ok(headers)
    }

    /// Lee exactamente `length` bytes de body y los decodifica como UTF-8
    pub fn read_body(&mut self, length: usize) -> Result<String> {
        if length > MAX_BODY_BYTES {
            return Err(HttpError::parse(format!(
                "body too large: {} bytes (max {})",
                length, MAX_BODY_BYTES
            )));
        }

        let mut buffer = vec![0u8; length];
        self.inner.read_exact(&mut buffer)?;

        String::from_utf8(buffer).map_err(|e| HttpError::decode(format!("body is not UTF-8: {}", e)))
    }

    /// Lee una línea terminada en `\n` (o `\r\n`) sin el terminador
    ///
    /// Retorna `None` si el stream ya estaba en EOF y `HttpError::Parse` si
    /// la línea supera `MAX_LINE_BYTES` sin terminar.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        let bytes_read = (&mut self.inner)
            .take(MAX_LINE_BYTES as u64)
            .read_until(b'\n', &mut raw)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        if bytes_read == MAX_LINE_BYTES && raw.last() != Some(&b'\n') {
            return Err(HttpError::parse(format!(
                "line too long (max {} bytes)",
                MAX_LINE_BYTES
            )));
        }

        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }

        String::from_utf8(raw)
            .map(Some)
            .map_err(|e| HttpError::decode(format!("line is not UTF-8: {}", e)))
    }
}

/// Obtiene `Content-Length` de un mapa de headers
///
/// `Ok(None)` si el header no está; `HttpError::Parse` si no es un entero
/// no negativo.
pub fn content_length(headers: &HashMap<String, String>) -> Result<Option<usize>> {
    match find_header(headers, "Content-Length") {
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| HttpError::parse(format!("invalid Content-Length: {:?}", raw))),
        None => Ok(None),
    }
}
