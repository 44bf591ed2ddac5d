//! # Request HTTP/1.1
//! src/http/request.rs
//!
//! Representación de un request ya leído del socket. Lo construye
//! `RequestReader` y vive solo mientras dura el dispatch.
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path?query HTTP/1.1`
//! 2. **Headers**: pares `Name: Value` (claves tal como llegaron)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: solo si hay `Content-Length`

use std::collections::HashMap;

/// Request HTTP ya parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método tal como llegó (solo se usa para logging)
    method: String,

    /// Request-target crudo (ej: "/user/list.html?x=1")
    target: String,

    /// Path decodificado y sin query (ej: "/user/list.html")
    path: String,

    /// Headers HTTP, claves case-sensitive
    headers: HashMap<String, String>,

    /// Body, presente solo si el request traía `Content-Length`
    body: Option<String>,
}

impl Request {
    pub fn new(
        method: String,
        target: String,
        path: String,
        headers: HashMap<String, String>,
        body: Option<String>,
    ) -> Self {
        Self {
            method,
            target,
            path,
            headers,
            body,
        }
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el request-target sin decodificar
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene el path decodificado
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene todos los headers
    #[cfg(test)]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header comparando el nombre sin distinguir mayúsculas
    ///
    /// # Ejemplo
    /// ```
    /// use std::collections::HashMap;
    /// use webserver::http::Request;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert("cookie".to_string(), "JSESSIONID=abc".to_string());
    /// let request = Request::new("GET".into(), "/".into(), "/".into(), headers, None);
    ///
    /// assert_eq!(request.header("Cookie"), Some("JSESSIONID=abc"));
    /// assert_eq!(request.header("Host"), None);
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Obtiene el body del request
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Busca un header sin distinguir mayúsculas/minúsculas
pub fn find_header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
