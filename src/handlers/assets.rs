//! # Archivos Estáticos
//! src/handlers/assets.rs
//!
//! Sirve bytes tal cual desde el asset root: `root + path decodificado`.

use crate::http::{HttpError, Response};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resuelve un path de URL bajo el asset root
///
/// Retorna `None` si el path intenta salir del root (`..`).
pub fn resolve(asset_root: &Path, url_path: &str) -> Option<PathBuf> {
    let relative = Path::new(url_path.trim_start_matches('/'));

    let mut resolved = asset_root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            // ParentDir, RootDir, Prefix
            _ => return None,
        }
    }

    Some(resolved)
}

/// Lee un asset; `Ok(None)` si no existe o no es un archivo regular
pub fn read_asset(asset_root: &Path, url_path: &str) -> Result<Option<Vec<u8>>, HttpError> {
    let full_path = match resolve(asset_root, url_path) {
        Some(path) => path,
        None => {
            debug!(path = %url_path, "path fuera del asset root");
            return Ok(None);
        }
    };

    if !full_path.is_file() {
        return Ok(None);
    }

    Ok(Some(fs::read(&full_path)?))
}

/// Página HTML del asset root, o 404
pub fn serve_page(asset_root: &Path, url_path: &str) -> Result<Response, HttpError> {
    Ok(match read_asset(asset_root, url_path)? {
        Some(body) => Response::html(body),
        None => Response::not_found(),
    })
}

/// Hoja de estilos del asset root, o 404
pub fn serve_css(asset_root: &Path, url_path: &str) -> Result<Response, HttpError> {
    Ok(match read_asset(asset_root, url_path)? {
        Some(body) => Response::css(body),
        None => Response::not_found(),
    })
}
