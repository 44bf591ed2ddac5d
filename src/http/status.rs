//! # Códigos de Estado HTTP
//!
//! Solo los códigos que este servidor llega a emitir:
//!
//! - **2xx**: 200 OK (páginas, CSS, lista de usuarios)
//! - **3xx**: 302 Found (registro, login, sesión inválida)
//! - **4xx**: 404 Not Found (archivo inexistente)
//! - **5xx**: 503 Service Unavailable (cola de conexiones llena)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 302 Found - Redirección a `Location`
    Found = 302,

    /// 404 Not Found - Recurso no encontrado bajo el asset root
    NotFound = 404,

    /// 503 Service Unavailable - Todos los workers ocupados y la cola llena
    ServiceUnavailable = 503,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use webserver::http::StatusCode;
    /// assert_eq!(StatusCode::Found.as_u16(), 302);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::NotFound => "Not Found",
            StatusCode::ServiceUnavailable => "Service Unavailable",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
