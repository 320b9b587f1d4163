// ============================================================================
// USE TREATMENTS HOOK - CRUD de tratamientos sobre el TreatmentStore
// ============================================================================
// Toma el token del AuthContext (referencia de solo lectura). Asegurarse de
// que exista sesión es responsabilidad del caller: la vista no monta estas
// pantallas sin sesión.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::UseAuthHandle;
use crate::hooks::use_toasts::UseToastsHandle;
use crate::models::TreatmentFields;
use crate::services::ApiClient;
use crate::stores::{TreatmentIntent, TreatmentStore};

#[derive(Clone, PartialEq)]
pub struct UseTreatmentsHandle {
    pub state: UseReducerHandle<TreatmentStore>,
    pub fetch_all: Callback<()>,
    pub add: Callback<TreatmentFields>,
    pub remove: Callback<String>,
    pub reset: Callback<()>,
}

#[hook]
pub fn use_treatments() -> UseTreatmentsHandle {
    let state = use_reducer(TreatmentStore::default);
    let auth = use_context::<UseAuthHandle>();
    let toasts = use_context::<UseToastsHandle>();

    let token = auth
        .as_ref()
        .and_then(|a| a.state.user.as_ref().map(|u| u.token.clone()));

    let fetch_all = {
        let state = state.clone();
        let toasts = toasts.clone();
        let token = token.clone();
        Callback::from(move |_| {
            let Some(token) = token.clone() else {
                log::warn!("⚠️ fetch_all sin sesión activa, se ignora");
                return;
            };
            let state = state.clone();
            let toasts = toasts.clone();
            state.dispatch(TreatmentIntent::FetchStarted);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.list_treatments(&token).await {
                    Ok(items) => {
                        log::info!("✅ Tratamientos cargados: {}", items.len());
                        state.dispatch(TreatmentIntent::FetchSucceeded(items));
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando tratamientos: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error.emit(e.clone());
                        }
                        state.dispatch(TreatmentIntent::FetchFailed(e));
                    }
                }
            });
        })
    };

    let add = {
        let state = state.clone();
        let toasts = toasts.clone();
        let token = token.clone();
        Callback::from(move |fields: TreatmentFields| {
            let Some(token) = token.clone() else {
                log::warn!("⚠️ add sin sesión activa, se ignora");
                return;
            };
            let state = state.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.create_treatment(&token, &fields).await {
                    Ok(created) => {
                        log::info!("✅ Tratamiento creado: {} ({})", created.name, created.id);
                        if let Some(toasts) = &toasts {
                            toasts
                                .success
                                .emit("Treatment added successfully".to_string());
                        }
                        state.dispatch(TreatmentIntent::AddSucceeded(created));
                    }
                    Err(e) => {
                        log::error!("❌ Error creando tratamiento: {}", e);
                        if let Some(toasts) = &toasts {
                            toasts.error.emit(e.clone());
                        }
                        state.dispatch(TreatmentIntent::AddFailed(e));
                    }
                }
            });
        })
    };

    let remove = {
        let state = state.clone();
        let toasts = toasts.clone();
        let token = token.clone();
        Callback::from(move |id: String| {
            let Some(token) = token.clone() else {
                log::warn!("⚠️ remove sin sesión activa, se ignora");
                return;
            };
            let state = state.clone();
            let toasts = toasts.clone();
            state.dispatch(TreatmentIntent::DeleteStarted);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.delete_treatment(&token, &id).await {
                    Ok(()) => {
                        // solo se quita de la lista con la confirmación del servidor
                        log::info!("✅ Tratamiento eliminado: {}", id);
                        if let Some(toasts) = &toasts {
                            toasts
                                .success
                                .emit("Treatment deleted successfully".to_string());
                        }
                        state.dispatch(TreatmentIntent::DeleteSucceeded(id));
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando tratamiento {}: {}", id, e);
                        if let Some(toasts) = &toasts {
                            toasts.error.emit(e.clone());
                        }
                        state.dispatch(TreatmentIntent::DeleteFailed(e));
                    }
                }
            });
        })
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(TreatmentIntent::Reset))
    };

    UseTreatmentsHandle {
        state,
        fetch_all,
        add,
        remove,
        reset,
    }
}
