use serde::Serialize;
use web_sys::{window, Storage};

use crate::models::Session;
use crate::utils::constants::STORAGE_KEY_USER;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

/// Deserializa una sesión guardada. La corrupción se trata como ausencia,
/// nunca como error. Una sesión no nula implica token no vacío: sin token no
/// hay credencial bearer, así que también cuenta como corrupta.
pub fn session_from_json(json: &str) -> Option<Session> {
    let session: Session = serde_json::from_str(json).ok()?;
    if session.token.is_empty() {
        return None;
    }
    Some(session)
}

/// Lee la sesión guardada al arrancar. Una entrada corrupta se elimina y la
/// app arranca deslogueada.
pub fn load_session_or_clear() -> Option<Session> {
    let storage = get_local_storage()?;
    let json = storage.get_item(STORAGE_KEY_USER).ok()??;
    match session_from_json(&json) {
        Some(session) => {
            log::info!("✅ Sesión restaurada: {}", session.display_name);
            Some(session)
        }
        None => {
            log::warn!("⚠️ Sesión guardada corrupta, se descarta");
            let _ = storage.remove_item(STORAGE_KEY_USER);
            None
        }
    }
}

/// Persiste la sesión (se llama junto con la transición a `Succeeded`)
pub fn save_session(session: &Session) -> Result<(), String> {
    save_to_storage(STORAGE_KEY_USER, session)
}

/// Elimina la sesión guardada (se llama junto con el logout)
pub fn clear_saved_session() -> Result<(), String> {
    remove_from_storage(STORAGE_KEY_USER)
}
