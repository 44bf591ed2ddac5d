//! # Páginas Generadas
//! src/handlers/pages.rs
//!
//! HTML que no sale tal cual del asset root: el listado de usuarios y el
//! fallback de "login fallido".

use super::assets;
use crate::http::{HttpError, Response};
use crate::store::User;
use std::fmt::Write;
use std::path::Path;

/// Path del template estático de login fallido
pub const LOGIN_FAILED_PAGE: &str = "/user/login_failed.html";

const LOGIN_FAILED_FALLBACK: &str = "<!DOCTYPE html>\n\
<html>\n\
<head><meta charset=\"utf-8\"><title>Login failed</title></head>\n\
<body>\n\
<h1>Login failed</h1>\n\
<p>Wrong user id or password.</p>\n\
<a href=\"/user/login.html\">Try again</a>\n\
</body>\n\
</html>\n";

/// Página de login fallido
///
/// Usa `user/login_failed.html` del asset root si existe.
pub fn login_failed(asset_root: &Path) -> Result<Response, HttpError> {
    let body = assets::read_asset(asset_root, LOGIN_FAILED_PAGE)?
        .unwrap_or_else(|| LOGIN_FAILED_FALLBACK.as_bytes().to_vec());
    Ok(Response::html(body))
}

/// Renderiza la tabla de usuarios
pub fn user_list(users: &[User]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Users</title>\
         <link href=\"/css/styles.css\" rel=\"stylesheet\"></head>\n<body>\n\
         <table>\n<thead><tr><th>#</th><th>User ID</th><th>Name</th><th>Email</th></tr></thead>\n<tbody>\n",
    );

    for (index, user) in users.iter().enumerate() {
        // Escribir en un String no falla
        let _ = writeln!(
            html,
            "<tr><th scope=\"row\">{}</th><td>{}</td><td>{}</td><td>{}</td></tr>",
            index + 1,
            escape_html(&user.user_id),
            escape_html(&user.name),
            escape_html(&user.email),
        );
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use std::fs;

    #[test]
    fn test_user_list_contains_users() {
        let html = user_list(&[
            User::new("jay", "1234", "김자윤", "jay@gmail.com"),
            User::new("amy", "pw", "Amy", "a@x.com"),
        ]);

        assert!(html.contains("<td>jay</td>"));
        assert!(html.contains("<td>김자윤</td>"));
        assert!(html.contains("<th scope=\"row\">2</th><td>amy</td>"));
        // Las passwords nunca se muestran
        assert!(!html.contains("1234"));
    }

    #[test]
    fn test_user_list_escapes_html() {
        let html = user_list(&[User::new("<script>", "pw", "a&b", "\"q\"")]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a&amp;b"));
        assert!(html.contains("&quot;q&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_login_failed_fallback() {
        let root = tempfile::tempdir().unwrap();
        let response = login_failed(root.path()).unwrap();
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(String::from_utf8_lossy(response.body()).contains("Login failed"));
    }

    #[test]
    fn test_login_failed_from_asset_root() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("user")).unwrap();
        fs::write(root.path().join("user/login_failed.html"), "custom failure").unwrap();

        let response = login_failed(root.path()).unwrap();
        assert_eq!(response.body(), b"custom failure");
    }
}
