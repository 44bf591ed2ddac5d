//! # Codec de Headers, Query Strings y Cookies
//! src/http/codec.rs
//!
//! Funciones puras que tokenizan las piezas de texto de un request:
//!
//! ```text
//! POST /user/login HTTP/1.1          ← extract_path
//! Content-Length: 25                 ← parse_header_line
//! Cookie: JSESSIONID=01HX...         ← parse_cookies
//!
//! userId=jay&password=1234           ← decode_form = parse_query_string + percent_decode
//! ```
//!
//! Ninguna función muta estado compartido: todas retornan `Result` y el que
//! llama decide qué hacer con el error.

use super::error::{HttpError, Result};
use std::collections::HashMap;

/// Par `clave: valor` de una línea de header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPair {
    pub key: String,
    pub value: String,
}

/// Parsea una línea de header `Name: Value`
///
/// Se corta en el primer `:`; el valor queda sin espacios alrededor.
///
/// # Ejemplo
/// ```
/// use webserver::http::codec::parse_header_line;
///
/// let pair = parse_header_line("Content-Length: 11").unwrap();
/// assert_eq!(pair.key, "Content-Length");
/// assert_eq!(pair.value, "11");
/// ```
pub fn parse_header_line(line: &str) -> Result<HeaderPair> {
    let colon_pos = line
        .find(':')
        .ok_or_else(|| HttpError::parse(format!("header without colon: {:?}", line)))?;

    let key = line[..colon_pos].trim();
    if key.is_empty() {
        return Err(HttpError::parse(format!("header without name: {:?}", line)));
    }

    Ok(HeaderPair {
        key: key.to_string(),
        value: line[colon_pos + 1..].trim().to_string(),
    })
}

/// Parsea una query string (o un body url-encoded) en un HashMap
///
/// No decodifica nada: separa por `&` y luego por el primer `=`.
/// Si una clave se repite gana la última.
///
/// # Ejemplo
/// ```
/// use webserver::http::codec::parse_query_string;
///
/// let params = parse_query_string("a=1&b=2&a=3");
/// assert_eq!(params.get("a").map(String::as_str), Some("3"));
/// assert_eq!(params.get("b").map(String::as_str), Some("2"));
/// ```
pub fn parse_query_string(raw: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for param in raw.split('&') {
        if param.is_empty() {
            continue;
        }

        match param.split_once('=') {
            Some((key, value)) => {
                params.insert(key.to_string(), value.to_string());
            }
            // Parámetro sin valor (ej: "?debug")
            None => {
                params.insert(param.to_string(), String::new());
            }
        }
    }

    params
}

/// Decodifica `%XX` y `+` → espacio
///
/// # Errores
///
/// `HttpError::Decode` si un `%` no va seguido de dos dígitos hex, o si los
/// bytes resultantes no son UTF-8 válido.
pub fn percent_decode(raw: &str) -> Result<String> {
    decode_escapes(&raw.replace('+', " "))
}

/// Extrae el path (segundo token) de una request line
///
/// Formato esperado: `METHOD PATH VERSION`
pub fn extract_path(request_line: &str) -> Result<String> {
    request_line
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| HttpError::parse(format!("invalid request line: {:?}", request_line)))
}

/// Decodifica el path de un request-target
///
/// Descarta `?query` y decodifica `%XX`. A diferencia de los formularios,
/// un `+` en el path es literal.
pub fn decode_path(target: &str) -> Result<String> {
    let path = target.split_once('?').map_or(target, |(path, _)| path);
    decode_escapes(path)
}

/// Parsea y decodifica un body `application/x-www-form-urlencoded`
///
/// Primero separa los pares y después decodifica cada clave y valor, así un
/// `%26` dentro de un valor no se confunde con el separador `&`.
pub fn decode_form(raw: &str) -> Result<HashMap<String, String>> {
    let mut form = HashMap::new();
    for (key, value) in parse_query_string(raw) {
        form.insert(percent_decode(&key)?, percent_decode(&value)?);
    }
    Ok(form)
}

/// Parsea el valor de un header `Cookie`
///
/// Formato: `name=value; other=value`. Un par sin `=` es un error.
pub fn parse_cookies(raw: &str) -> Result<HashMap<String, String>> {
    let mut cookies = HashMap::new();

    for pair in raw.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| HttpError::parse(format!("malformed cookie pair: {:?}", pair)))?;
        cookies.insert(name.trim().to_string(), value.trim().to_string());
    }

    Ok(cookies)
}

/// Valida que cada `%` tenga dos dígitos hex y delega el decoding
fn decode_escapes(raw: &str) -> Result<String> {
    let bytes = raw.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(HttpError::decode(format!(
                    "malformed escape at offset {} in {:?}",
                    i, raw
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| HttpError::decode(format!("decoded bytes are not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_line() {
        let pair = parse_header_line("Host: localhost:8080").unwrap();
        assert_eq!(pair.key, "Host");
        assert_eq!(pair.value, "localhost:8080");
    }

    #[test]
    fn test_parse_header_line_trims_value() {
        let pair = parse_header_line("Content-Length:    42   ").unwrap();
        assert_eq!(pair.key, "Content-Length");
        assert_eq!(pair.value, "42");
    }

    #[test]
    fn test_parse_header_line_keeps_key_case() {
        let pair = parse_header_line("content-length: 3").unwrap();
        assert_eq!(pair.key, "content-length");
    }

    #[test]
    fn test_parse_header_line_without_colon() {
        assert!(matches!(parse_header_line("garbage"), Err(HttpError::Parse(_))));
        assert!(matches!(parse_header_line(": value"), Err(HttpError::Parse(_))));
    }

    #[test]
    fn test_parse_query_string_last_wins() {
        let params = parse_query_string("a=1&b=2&a=3");
        assert_eq!(params.len(), 2);
        assert_eq!(params["a"], "3");
        assert_eq!(params["b"], "2");
    }

    #[test]
    fn test_parse_query_string_empty() {
        assert!(parse_query_string("").is_empty());
    }

    #[test]
    fn test_parse_query_string_edge_cases() {
        let params = parse_query_string("debug&&x=&y=a=b");
        assert_eq!(params["debug"], "");
        assert_eq!(params["x"], "");
        // Solo se corta en el primer '='
        assert_eq!(params["y"], "a=b");
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("hello%20world+again").unwrap(), "hello world again");
        assert_eq!(percent_decode("j%40x.com").unwrap(), "j@x.com");
        assert_eq!(percent_decode("a%2Bb").unwrap(), "a+b");
        assert_eq!(percent_decode("%EA%B9%80").unwrap(), "김");
    }

    #[test]
    fn test_percent_decode_malformed() {
        assert!(matches!(percent_decode("100%"), Err(HttpError::Decode(_))));
        assert!(matches!(percent_decode("%2"), Err(HttpError::Decode(_))));
        assert!(matches!(percent_decode("%zz"), Err(HttpError::Decode(_))));
    }

    #[test]
    fn test_percent_decode_invalid_utf8() {
        assert!(matches!(percent_decode("%FF%FE"), Err(HttpError::Decode(_))));
    }

    #[test]
    fn test_extract_path() {
        assert_eq!(extract_path("GET /index.html HTTP/1.1").unwrap(), "/index.html");
        assert_eq!(extract_path("POST /user/create").unwrap(), "/user/create");
        assert!(matches!(extract_path("GET"), Err(HttpError::Parse(_))));
        assert!(matches!(extract_path(""), Err(HttpError::Parse(_))));
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/user/list.html?page=2").unwrap(), "/user/list.html");
        assert_eq!(decode_path("/my%20file.html").unwrap(), "/my file.html");
        assert_eq!(decode_path("/a+b.html").unwrap(), "/a+b.html");
        assert!(decode_path("/bad%zz").is_err());
    }

    #[test]
    fn test_decode_form() {
        let form = decode_form("userId=jay&password=1234&name=Kim+Jay&email=j%40x.com").unwrap();
        assert_eq!(form["userId"], "jay");
        assert_eq!(form["name"], "Kim Jay");
        assert_eq!(form["email"], "j@x.com");
    }

    #[test]
    fn test_decode_form_encoded_separator() {
        let form = decode_form("password=a%26b%3Dc").unwrap();
        assert_eq!(form["password"], "a&b=c");
    }

    #[test]
    fn test_parse_cookies() {
        let cookies = parse_cookies("JSESSIONID=abc123").unwrap();
        assert_eq!(cookies["JSESSIONID"], "abc123");

        let cookies = parse_cookies("theme=dark; JSESSIONID=xyz ;").unwrap();
        assert_eq!(cookies["theme"], "dark");
        assert_eq!(cookies["JSESSIONID"], "xyz");
    }

    #[test]
    fn test_parse_cookies_malformed() {
        assert!(matches!(parse_cookies("JSESSIONID"), Err(HttpError::Parse(_))));
    }
}
