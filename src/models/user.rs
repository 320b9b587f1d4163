use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sesión autenticada devuelta por /auth/login y /auth/register.
/// Una sesión no nula implica un token no vacío: es la credencial bearer de
/// todas las llamadas de tratamientos.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "name", default)]
    pub display_name: String,
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Cuerpo de error que devuelve el backend en auth (todas las variantes que
/// se han visto: `message`, `error`, y errores por campo en `errors`)
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct AuthErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, String>,
}

/// Fallo de login/registro: mensaje + errores por campo + status HTTP
#[derive(Clone, PartialEq, Debug)]
pub struct AuthError {
    pub message: String,
    pub field_errors: HashMap<String, String>,
    pub status_code: Option<u16>,
}

impl AuthError {
    /// Fallo de transporte o de parseo: sin status ni errores por campo
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: HashMap::new(),
            status_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_parses_minimal_server_response() {
        let session: Session = serde_json::from_str(r#"{"userId":1,"token":"tok1"}"#).unwrap();
        assert_eq!(session.user_id, 1);
        assert_eq!(session.token, "tok1");
        assert_eq!(session.display_name, "");
    }

    #[test]
    fn session_ignores_unknown_fields() {
        let json = r#"{"userId":7,"name":"Ana","email":"a@b.com","token":"t","iat":123}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.user_id, 7);
        assert_eq!(session.display_name, "Ana");
    }

    #[test]
    fn auth_error_body_accepts_field_errors() {
        let json = r#"{"message":"Validation failed","errors":{"email":"Email already in use"}}"#;
        let body: AuthErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.message.as_deref(), Some("Validation failed"));
        assert_eq!(body.errors.get("email").unwrap(), "Email already in use");
    }
}
