// ============================================================================
// USE AUTH HOOK - Login / registro / logout sobre el AuthStore
// ============================================================================
// Despacha intents al reducer puro y ejecuta los efectos: llamada HTTP y
// persistencia de la sesión, síncrona con la transición correspondiente.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_toasts::UseToastsHandle;
use crate::services::ApiClient;
use crate::stores::{AuthIntent, AuthStore};
use crate::utils::{clear_saved_session, save_session};

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseReducerHandle<AuthStore>,
    /// (email, password)
    pub login: Callback<(String, String)>,
    /// (name, email, password)
    pub register: Callback<(String, String, String)>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
    pub clear_field_error: Callback<String>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    // el estado inicial restaura la sesión de localStorage (fail-open)
    let state = use_reducer(AuthStore::restored);
    let toasts = use_context::<UseToastsHandle>();

    let login = {
        let state = state.clone();
        let toasts = toasts.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            let toasts = toasts.clone();
            state.dispatch(AuthIntent::Pending);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.login(&email, &password).await {
                    Ok(session) => {
                        // persistir antes de publicar la transición
                        if let Err(e) = save_session(&session) {
                            log::error!("❌ Error guardando sesión: {}", e);
                        }
                        log::info!("✅ Login exitoso: {}", email);
                        if let Some(toasts) = &toasts {
                            toasts
                                .success
                                .emit("Login successful! Welcome back!".to_string());
                        }
                        state.dispatch(AuthIntent::Succeeded(session));
                    }
                    Err(err) => {
                        log::error!("❌ Login fallido: {}", err.message);
                        if let Some(toasts) = &toasts {
                            toasts.error.emit(format!("Login failed: {}", err.message));
                        }
                        state.dispatch(AuthIntent::Failed(err));
                    }
                }
            });
        })
    };

    let register = {
        let state = state.clone();
        let toasts = toasts.clone();
        Callback::from(move |(name, email, password): (String, String, String)| {
            let state = state.clone();
            let toasts = toasts.clone();
            state.dispatch(AuthIntent::Pending);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.register(&name, &email, &password).await {
                    Ok(session) => {
                        if let Err(e) = save_session(&session) {
                            log::error!("❌ Error guardando sesión: {}", e);
                        }
                        log::info!("✅ Registro exitoso: {}", email);
                        if let Some(toasts) = &toasts {
                            toasts
                                .success
                                .emit("Registration successful! Welcome!".to_string());
                        }
                        state.dispatch(AuthIntent::Succeeded(session));
                    }
                    Err(err) => {
                        log::error!("❌ Registro fallido: {}", err.message);
                        if let Some(toasts) = &toasts {
                            toasts
                                .error
                                .emit(format!("Registration failed: {}", err.message));
                        }
                        state.dispatch(AuthIntent::Failed(err));
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Err(e) = clear_saved_session() {
                log::error!("❌ Error limpiando sesión guardada: {}", e);
            }
            log::info!("👋 Logout");
            state.dispatch(AuthIntent::Logout);
        })
    };

    let clear_error = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(AuthIntent::ClearError))
    };

    let clear_field_error = {
        let state = state.clone();
        Callback::from(move |field: String| state.dispatch(AuthIntent::ClearFieldError(field)))
    };

    UseAuthHandle {
        state,
        login,
        register,
        logout,
        clear_error,
        clear_field_error,
    }
}
