//! # Store de Usuarios
//! src/store/users.rs
//!
//! Tabla en memoria `userId → User`, protegida por un `Mutex`.
//! Opcionalmente se precarga desde un archivo JSON al arrancar.

use super::user::User;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Store de usuarios thread-safe
#[derive(Debug, Default)]
pub struct UserStore {
    /// Ordenado por userId para que el listado sea estable
    users: Mutex<BTreeMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Agrega (o reemplaza) un usuario
    pub fn add_user(&self, user: User) {
        let mut users = self.lock();
        if users.contains_key(&user.user_id) {
            debug!(user_id = %user.user_id, "reemplazando usuario existente");
        }
        users.insert(user.user_id.clone(), user);
    }

    /// Busca un usuario por id
    pub fn find_user_by_id(&self, user_id: &str) -> Option<User> {
        self.lock().get(user_id).cloned()
    }

    /// Todos los usuarios, ordenados por id
    pub fn find_all(&self) -> Vec<User> {
        self.lock().values().cloned().collect()
    }

    /// Cantidad de usuarios registrados
    pub fn size_of_users(&self) -> usize {
        self.lock().len()
    }

    /// Carga usuarios desde un archivo JSON (`[{"userId": ..}, ..]`)
    ///
    /// Retorna cuántos usuarios se cargaron.
    pub fn load_from_file(&self, path: &Path) -> io::Result<usize> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let loaded: Vec<User> = serde_json::from_reader(reader)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let count = loaded.len();
        for user in loaded {
            self.add_user(user);
        }

        Ok(count)
    }
}
