//! # Módulo HTTP
//!
//! Implementa a mano el subconjunto de HTTP/1.1 que necesita el servidor,
//! sin librerías de alto nivel:
//!
//! - Tokenizado de headers, query strings y cookies (`codec`)
//! - Lectura de requests directamente del socket (`reader`)
//! - Templates fijos de respuesta (`response`)
//! - Taxonomía de errores (`error`)
//!
//! ### Formato de Request
//!
//! ```text
//! POST /user/create HTTP/1.1\r\n
//! Content-Length: 46\r\n
//! \r\n
//! userId=jay&password=1234&name=Kim&email=j%40x.com
//! ```
//!
//! Sin chunked encoding, sin keep-alive, sin pipelining: un request por
//! conexión.

pub mod codec;
pub mod error;
pub mod reader;
pub mod request;
pub mod response;
pub mod status;

// Re-exportamos los tipos principales para facilitar su uso
pub use error::HttpError;
pub use reader::RequestReader;
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
