//! # Handlers de Usuario
//! src/handlers/user.rs
//!
//! Registro, login y listado protegido por sesión.

use super::pages;
use crate::http::codec::{decode_form, parse_cookies};
use crate::http::response::SESSION_COOKIE;
use crate::http::{HttpError, Request, Response};
use crate::store::{AppState, User};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Página a la que se redirige cuando no hay sesión válida
pub const LOGIN_PAGE: &str = "/user/login.html";

/// Decodifica el body url-encoded de un request
///
/// Falla con `Parse` si el request no traía `Content-Length`.
fn form_body(request: &Request) -> Result<HashMap<String, String>, HttpError> {
    let body = request
        .body()
        .ok_or_else(|| HttpError::parse(format!("{} requires a Content-Length body", request.path())))?;
    decode_form(body)
}

/// `POST /user/create`: registra un usuario y redirige a `/`
///
/// El store solo se toca después de validar el formulario completo.
pub fn create(request: &Request, state: &AppState) -> Result<Response, HttpError> {
    let form = form_body(request)?;
    let user = User::from_form(&form)?;

    info!(user_id = %user.user_id, "usuario registrado");
    state.users.add_user(user);

    Ok(Response::redirect("/"))
}

/// `POST /user/login`: verifica credenciales y abre una sesión
///
/// Un userId desconocido y una password incorrecta terminan igual: con la
/// página de login fallido.
pub fn login(request: &Request, state: &AppState, asset_root: &Path) -> Result<Response, HttpError> {
    let form = form_body(request)?;
    let user_id = field(&form, "userId")?;
    let password = field(&form, "password")?;

    let user = match state.users.find_user_by_id(user_id) {
        Some(user) => user,
        None => {
            let err = HttpError::UserNotFound(user_id.to_string());
            warn!(error = %err, "login rechazado");
            return pages::login_failed(asset_root);
        }
    };

    if !user.matches_credentials(user_id, password) {
        warn!(user_id = %user_id, "login rechazado: password incorrecta");
        return pages::login_failed(asset_root);
    }

    let session_id = state.sessions.create_session(user);
    info!(user_id = %user_id, "login exitoso");

    Ok(Response::redirect_with_session(&session_id))
}

/// `*list.html`: listado de usuarios, solo con sesión válida
pub fn list(request: &Request, state: &AppState) -> Result<Response, HttpError> {
    let session_id = match session_id(request)? {
        Some(id) => id,
        None => {
            debug!("request sin cookie de sesión");
            return Ok(Response::redirect(LOGIN_PAGE));
        }
    };

    if !state.sessions.session_exists(&session_id) {
        debug!(session_id = %session_id, "sesión desconocida");
        return Ok(Response::redirect(LOGIN_PAGE));
    }

    let users = state.users.find_all();
    debug!(count = users.len(), "listando usuarios");

    Ok(Response::html(pages::user_list(&users).into_bytes()))
}

/// Extrae `JSESSIONID` del header `Cookie`
///
/// `Ok(None)` si no hay header o no trae esa cookie; `Parse` si el header
/// está malformado.
fn session_id(request: &Request) -> Result<Option<String>, HttpError> {
    let raw = match request.header("Cookie") {
        Some(raw) => raw,
        None => return Ok(None),
    };

    Ok(parse_cookies(raw)?.remove(SESSION_COOKIE))
}

fn field<'a>(form: &'a HashMap<String, String>, name: &str) -> Result<&'a str, HttpError> {
    form.get(name)
        .map(String::as_str)
        .ok_or_else(|| HttpError::parse(format!("missing form field: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;

    fn post(path: &str, body: &str) -> Request {
        let mut headers = HashMap::new();
        headers.insert("Content-Length".to_string(), body.len().to_string());
        Request::new(
            "POST".to_string(),
            path.to_string(),
            path.to_string(),
            headers,
            Some(body.to_string()),
        )
    }

    fn get_with_cookie(path: &str, cookie: Option<&str>) -> Request {
        let mut headers = HashMap::new();
        if let Some(cookie) = cookie {
            headers.insert("Cookie".to_string(), cookie.to_string());
        }
        Request::new("GET".to_string(), path.to_string(), path.to_string(), headers, None)
    }

    fn state_with_jay() -> AppState {
        let state = AppState::new();
        state.users.add_user(User::new("jay", "1234", "Kim", "j@x.com"));
        state
    }

    #[test]
    fn test_create_user() {
        let state = AppState::new();
        let request = post("/user/create", "userId=jay&password=1234&name=Kim&email=j%40x.com");

        let response = create(&request, &state).unwrap();

        assert_eq!(response.status(), StatusCode::Found);
        assert_eq!(response.header("Location"), Some("/"));
        let user = state.users.find_user_by_id("jay").unwrap();
        assert_eq!(user.email, "j@x.com");
    }

    #[test]
    fn test_create_user_without_body() {
        let state = AppState::new();
        let request = get_with_cookie("/user/create", None);

        assert!(matches!(create(&request, &state), Err(HttpError::Parse(_))));
        assert_eq!(state.users.size_of_users(), 0);
    }

    #[test]
    fn test_create_user_incomplete_form_does_not_insert() {
        let state = AppState::new();
        let request = post("/user/create", "userId=jay&password=1234");

        assert!(create(&request, &state).is_err());
        assert_eq!(state.users.size_of_users(), 0);
    }

    #[test]
    fn test_login_success() {
        let state = state_with_jay();
        let root = tempfile::tempdir().unwrap();

        let response = login(&post("/user/login", "userId=jay&password=1234"), &state, root.path()).unwrap();

        assert_eq!(response.status(), StatusCode::Found);
        assert_eq!(response.header("Location"), Some("/"));
        let cookie = response.header("Set-Cookie").unwrap();
        let session_id = cookie
            .strip_prefix("JSESSIONID=")
            .and_then(|rest| rest.strip_suffix("; Path=/"))
            .unwrap();
        assert!(!session_id.is_empty());
        assert!(state.sessions.session_exists(session_id));
    }

    #[test]
    fn test_login_wrong_password() {
        let state = state_with_jay();
        let root = tempfile::tempdir().unwrap();

        let response = login(&post("/user/login", "userId=jay&password=nope"), &state, root.path()).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.header("Set-Cookie").is_none());
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn test_login_unknown_user_still_responds() {
        let state = state_with_jay();
        let root = tempfile::tempdir().unwrap();

        let response = login(&post("/user/login", "userId=ghost&password=1234"), &state, root.path()).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(String::from_utf8_lossy(response.body()).contains("Login failed"));
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn test_login_missing_field() {
        let state = state_with_jay();
        let root = tempfile::tempdir().unwrap();

        let result = login(&post("/user/login", "userId=jay"), &state, root.path());
        assert!(matches!(result, Err(HttpError::Parse(_))));
    }

    #[test]
    fn test_list_with_valid_session() {
        let state = state_with_jay();
        let jay = state.users.find_user_by_id("jay").unwrap();
        let session_id = state.sessions.create_session(jay);

        let cookie = format!("JSESSIONID={}", session_id);
        let response = list(&get_with_cookie("/user/list.html", Some(&cookie)), &state).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(String::from_utf8_lossy(response.body()).contains("jay"));
    }

    #[test]
    fn test_list_without_cookie_redirects() {
        let state = state_with_jay();
        let response = list(&get_with_cookie("/user/list.html", None), &state).unwrap();

        assert_eq!(response.status(), StatusCode::Found);
        assert_eq!(response.header("Location"), Some(LOGIN_PAGE));
    }

    #[test]
    fn test_list_with_unknown_session_redirects() {
        let state = state_with_jay();
        let response = list(&get_with_cookie("/user/list.html", Some("JSESSIONID=bogus")), &state).unwrap();

        assert_eq!(response.header("Location"), Some(LOGIN_PAGE));
    }

    #[test]
    fn test_list_with_other_cookies_only_redirects() {
        let state = state_with_jay();
        let response = list(&get_with_cookie("/user/list.html", Some("theme=dark")), &state).unwrap();

        assert_eq!(response.header("Location"), Some(LOGIN_PAGE));
    }

    #[test]
    fn test_list_with_malformed_cookie() {
        let state = state_with_jay();
        let result = list(&get_with_cookie("/user/list.html", Some("garbage")), &state);

        assert!(matches!(result, Err(HttpError::Parse(_))));
    }
}
