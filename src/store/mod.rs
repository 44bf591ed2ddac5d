//! # Stores en Memoria
//! src/store/mod.rs
//!
//! Estado compartido entre todas las conexiones. Se construye una sola vez
//! en `main`, se inyecta al dispatcher detrás de un `Arc` y se libera al
//! terminar el proceso.

pub mod sessions;
pub mod user;
pub mod users;

pub use sessions::SessionStore;
pub use user::User;
pub use users::UserStore;

/// Estado de la aplicación: usuarios y sesiones
#[derive(Debug, Default)]
pub struct AppState {
    pub users: UserStore,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega el usuario de prueba `jay` si el store está vacío
    ///
    /// Retorna `true` si efectivamente lo agregó.
    pub fn seed_demo_user(&self) -> bool {
        if self.users.size_of_users() > 0 {
            return false;
        }
        self.users.add_user(User::new("jay", "1234", "김자윤", "jay@gmail.com"));
        true
    }
}
