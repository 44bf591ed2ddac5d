//! # Store de Sesiones
//! src/store/sessions.rs
//!
//! Mapa `sessionId → User`. Las sesiones se crean en el login y nunca
//! expiran: viven hasta que el proceso termina.

use super::user::User;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use ulid::Ulid;

/// Store de sesiones thread-safe
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, User>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, User>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Genera un id opaco nuevo, registra la sesión y lo retorna
    pub fn create_session(&self, user: User) -> String {
        let session_id = Ulid::new().to_string();
        self.add_session(&session_id, user);
        session_id
    }

    /// Registra una sesión con un id ya existente
    pub fn add_session(&self, session_id: &str, user: User) {
        self.lock().insert(session_id.to_string(), user);
    }

    /// Verifica si el id corresponde a una sesión activa
    pub fn session_exists(&self, session_id: &str) -> bool {
        self.lock().contains_key(session_id)
    }

    /// Usuario dueño de la sesión, si existe
    pub fn find_user(&self, session_id: &str) -> Option<User> {
        self.lock().get(session_id).cloned()
    }

    /// Cantidad de sesiones activas
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
