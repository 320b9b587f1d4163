// ============================================================================
// AUTH STORE - Sesión + ciclo de vida de login/registro
// ============================================================================
// Reducer puro sobre (estado, intent) → estado. Los efectos (HTTP, escritura
// en localStorage) viven en hooks/use_auth.rs, síncronos con la transición.
// ============================================================================

use std::collections::HashMap;
use std::rc::Rc;

use yew::Reducible;

use crate::models::{AuthError, Session};

/// Estado de la petición de login/registro en curso.
/// Transiciones: Idle → Loading → {Succeeded | Failed}; un intent nuevo
/// vuelve a Loading.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthStore {
    pub user: Option<Session>,
    pub status: AuthStatus,
    pub error: Option<String>,
    pub field_errors: HashMap<String, String>,
}

impl AuthStore {
    /// Estado inicial restaurando la sesión guardada (corrupta ⇒ ausente)
    pub fn restored() -> Self {
        Self {
            user: crate::utils::load_session_or_clear(),
            ..Self::default()
        }
    }
}

/// Intents de autenticación despachados por la vista o por los handlers
/// de resolución de la API
#[derive(Clone, PartialEq, Debug)]
pub enum AuthIntent {
    Pending,
    Succeeded(Session),
    Failed(AuthError),
    Logout,
    ClearError,
    ClearFieldError(String),
}

impl Reducible for AuthStore {
    type Action = AuthIntent;

    fn reduce(self: Rc<Self>, intent: AuthIntent) -> Rc<Self> {
        let mut next = (*self).clone();
        match intent {
            AuthIntent::Pending => {
                next.status = AuthStatus::Loading;
                next.error = None;
                next.field_errors.clear();
            }
            AuthIntent::Succeeded(session) => {
                next.status = AuthStatus::Succeeded;
                next.user = Some(session);
                next.error = None;
                next.field_errors.clear();
            }
            AuthIntent::Failed(err) => {
                // la sesión vigente no cambia en un login fallido
                next.status = AuthStatus::Failed;
                next.error = Some(err.message);
                next.field_errors = err.field_errors;
            }
            AuthIntent::Logout => {
                next = AuthStore::default();
            }
            AuthIntent::ClearError => {
                next.error = None;
                next.field_errors.clear();
            }
            AuthIntent::ClearFieldError(field) => {
                next.field_errors.remove(&field);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(store: AuthStore, intent: AuthIntent) -> AuthStore {
        (*Rc::new(store).reduce(intent)).clone()
    }

    fn failure(message: &str) -> AuthError {
        AuthError {
            message: message.to_string(),
            field_errors: HashMap::new(),
            status_code: Some(401),
        }
    }

    #[test]
    fn login_success_commits_server_session() {
        // Escenario: el mock devuelve {userId:1, token:"tok1"}
        let session: Session = serde_json::from_str(r#"{"userId":1,"token":"tok1"}"#).unwrap();

        let store = dispatch(AuthStore::default(), AuthIntent::Pending);
        assert_eq!(store.status, AuthStatus::Loading);

        let store = dispatch(store, AuthIntent::Succeeded(session.clone()));
        assert_eq!(store.status, AuthStatus::Succeeded);
        assert_eq!(store.user, Some(session));
        assert!(store.error.is_none());
        assert!(store.field_errors.is_empty());
    }

    #[test]
    fn login_failure_keeps_previous_session() {
        let session: Session =
            serde_json::from_str(r#"{"userId":1,"name":"Ana","token":"tok1"}"#).unwrap();
        let store = AuthStore {
            user: Some(session.clone()),
            ..AuthStore::default()
        };

        let store = dispatch(store, AuthIntent::Pending);
        let store = dispatch(store, AuthIntent::Failed(failure("Invalid credentials")));

        assert_eq!(store.status, AuthStatus::Failed);
        assert_eq!(store.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(store.user, Some(session));
    }

    #[test]
    fn failure_records_field_errors() {
        let mut field_errors = HashMap::new();
        field_errors.insert("email".to_string(), "Email already in use".to_string());
        let err = AuthError {
            message: "Validation failed".to_string(),
            field_errors,
            status_code: Some(422),
        };

        let store = dispatch(AuthStore::default(), AuthIntent::Failed(err));
        assert_eq!(
            store.field_errors.get("email").unwrap(),
            "Email already in use"
        );

        let store = dispatch(store, AuthIntent::ClearFieldError("email".to_string()));
        assert!(store.field_errors.is_empty());
        // el mensaje general sigue hasta un ClearError explícito
        assert_eq!(store.error.as_deref(), Some("Validation failed"));
    }

    #[test]
    fn new_request_resets_previous_error() {
        let store = dispatch(AuthStore::default(), AuthIntent::Failed(failure("boom")));
        let store = dispatch(store, AuthIntent::Pending);
        assert_eq!(store.status, AuthStatus::Loading);
        assert!(store.error.is_none());
        assert!(store.field_errors.is_empty());
    }

    #[test]
    fn logout_is_idempotent_from_any_state() {
        let session: Session = serde_json::from_str(r#"{"userId":1,"token":"tok1"}"#).unwrap();
        let store = dispatch(AuthStore::default(), AuthIntent::Succeeded(session));

        let store = dispatch(store, AuthIntent::Logout);
        assert_eq!(store, AuthStore::default());

        // segundo logout: mismo resultado, sin error
        let store = dispatch(store, AuthIntent::Logout);
        assert_eq!(store, AuthStore::default());
    }

    #[test]
    fn clear_error_is_a_pure_state_edit() {
        let store = dispatch(AuthStore::default(), AuthIntent::Failed(failure("boom")));
        let store = dispatch(store, AuthIntent::ClearError);
        assert!(store.error.is_none());
        // el status no cambia: clearError no es una transición de petición
        assert_eq!(store.status, AuthStatus::Failed);
    }
}
