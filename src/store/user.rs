//! # Modelo de Usuario
//! src/store/user.rs

use crate::http::HttpError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Usuario registrado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(user_id: &str, password: &str, name: &str, email: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// Construye un usuario desde un formulario ya decodificado
    ///
    /// Los cuatro campos (`userId`, `password`, `name`, `email`) son
    /// obligatorios; si falta alguno no se construye nada.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, HttpError> {
        Ok(Self {
            user_id: required(form, "userId")?,
            password: required(form, "password")?,
            name: required(form, "name")?,
            email: required(form, "email")?,
        })
    }

    /// Verifica credenciales: mismo userId y misma password
    pub fn matches_credentials(&self, user_id: &str, password: &str) -> bool {
        self.user_id == user_id && self.password == password
    }
}

fn required(form: &HashMap<String, String>, field: &str) -> Result<String, HttpError> {
    form.get(field)
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| HttpError::parse(format!("missing form field: {}", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_from_form() {
        let user = User::from_form(&form(&[
            ("userId", "jay"),
            ("password", "1234"),
            ("name", "Kim"),
            ("email", "j@x.com"),
        ]))
        .unwrap();

        assert_eq!(user, User::new("jay", "1234", "Kim", "j@x.com"));
    }

    #[test]
    fn test_from_form_missing_field() {
        let result = User::from_form(&form(&[("userId", "jay"), ("password", "1234")]));
        assert!(matches!(result, Err(HttpError::Parse(ref msg)) if msg.contains("name")));
    }

    #[test]
    fn test_from_form_empty_field() {
        let result = User::from_form(&form(&[
            ("userId", ""),
            ("password", "1234"),
            ("name", "Kim"),
            ("email", "j@x.com"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_matches_credentials() {
        let user = User::new("jay", "1234", "Kim", "j@x.com");
        assert!(user.matches_credentials("jay", "1234"));
        assert!(!user.matches_credentials("jay", "wrong"));
        assert!(!user.matches_credentials("other", "1234"));
    }

    #[test]
    fn test_serde_camel_case() {
        let json = r#"{"userId":"jay","password":"1234","name":"Kim","email":"j@x.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, "jay");
        assert!(serde_json::to_string(&user).unwrap().contains("\"userId\""));
    }
}
