//! # Handlers de Rutas
//! src/handlers/mod.rs
//!
//! Cada handler recibe el request ya leído y lo que necesite del estado,
//! y retorna la `Response` a escribir (o el error que corta la conexión).
//!
//! - `user`: registro, login y listado de usuarios
//! - `assets`: archivos estáticos (HTML y CSS)
//! - `pages`: HTML generado (listado, login fallido)

pub mod assets;
pub mod pages;
pub mod user;
