//! # Dispatcher de Rutas
//! src/router/mod.rs
//!
//! Clasifica el path decodificado de un request y lo dirige al handler
//! correspondiente. La clasificación es de un solo paso, sin estado entre
//! requests, y la primera regla que coincide gana:
//!
//! ```text
//! /                  → /index.html (y sigue como página estática)
//! /user/create       → registro
//! /user/login        → login
//! *list.html*        → listado (requiere sesión)
//! *.css*             → hoja de estilos
//! cualquier otro     → página estática o 404
//! ```

use crate::handlers::{assets, user};
use crate::http::{HttpError, Request, Response};
use crate::store::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Ruta resuelta para un path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CreateUser,
    Login,
    UserList,
    Stylesheet(String),
    StaticPage(String),
}

impl Route {
    /// Clasifica un path ya decodificado
    ///
    /// # Ejemplo
    /// ```
    /// use webserver::router::Route;
    ///
    /// assert_eq!(Route::classify("/"), Route::StaticPage("/index.html".to_string()));
    /// assert_eq!(Route::classify("/user/login"), Route::Login);
    /// assert_eq!(Route::classify("/user/list.html"), Route::UserList);
    /// ```
    pub fn classify(path: &str) -> Route {
        let path = if path == "/" { "/index.html" } else { path };

        if path == "/user/create" {
            Route::CreateUser
        } else if path == "/user/login" {
            Route::Login
        } else if path.contains("list.html") {
            Route::UserList
        } else if path.contains(".css") {
            Route::Stylesheet(path.to_string())
        } else {
            Route::StaticPage(path.to_string())
        }
    }
}

/// Dispatcher con el estado y el asset root inyectados
pub struct Dispatcher {
    state: Arc<AppState>,
    asset_root: PathBuf,
}

impl Dispatcher {
    pub fn new(state: Arc<AppState>, asset_root: impl Into<PathBuf>) -> Self {
        Self {
            state,
            asset_root: asset_root.into(),
        }
    }

    /// Ejecuta el handler que corresponde al path del request
    pub fn dispatch(&self, request: &Request) -> Result<Response, HttpError> {
        let route = Route::classify(request.path());
        debug!(?route, path = %request.path(), "ruta resuelta");

        match route {
            Route::CreateUser => user::create(request, &self.state),
            Route::Login => user::login(request, &self.state, &self.asset_root),
            Route::UserList => user::list(request, &self.state),
            Route::Stylesheet(path) => assets::serve_css(&self.asset_root, &path),
            Route::StaticPage(path) => assets::serve_page(&self.asset_root, &path),
        }
    }
}
