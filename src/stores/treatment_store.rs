// ============================================================================
// TREATMENT STORE - Lista de tratamientos + ciclo de vida CRUD
// ============================================================================
// Reducer puro; los requests concurrentes no se serializan: cada resolución
// aplica su mutación sobre la lista compartida (last-applied-wins).
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::Treatment;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TreatmentStatus {
    #[default]
    Idle,
    Loading,
    Deleting,
    Succeeded,
    Failed,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct TreatmentStore {
    pub items: Vec<Treatment>,
    pub status: TreatmentStatus,
    pub error: Option<String>,
}

/// Intents de la lista de tratamientos
#[derive(Clone, PartialEq, Debug)]
pub enum TreatmentIntent {
    FetchStarted,
    /// Reemplaza la colección entera con la respuesta del servidor
    FetchSucceeded(Vec<Treatment>),
    /// El snapshot anterior se conserva; solo se registra el error
    FetchFailed(String),
    /// Append al final: el servidor ya asignó el id canónico
    AddSucceeded(Treatment),
    AddFailed(String),
    DeleteStarted,
    /// Filtra el id confirmado por el servidor; el orden del resto no cambia
    DeleteSucceeded(String),
    DeleteFailed(String),
    /// Al cerrar sesión: la lista está scoped a la sesión actual
    Reset,
}

impl Reducible for TreatmentStore {
    type Action = TreatmentIntent;

    fn reduce(self: Rc<Self>, intent: TreatmentIntent) -> Rc<Self> {
        let mut next = (*self).clone();
        match intent {
            TreatmentIntent::FetchStarted => {
                next.status = TreatmentStatus::Loading;
            }
            TreatmentIntent::FetchSucceeded(items) => {
                next.status = TreatmentStatus::Succeeded;
                next.items = items;
                next.error = None;
            }
            TreatmentIntent::FetchFailed(message) => {
                next.status = TreatmentStatus::Failed;
                next.error = Some(message);
            }
            TreatmentIntent::AddSucceeded(treatment) => {
                next.status = TreatmentStatus::Succeeded;
                next.items.push(treatment);
                next.error = None;
            }
            TreatmentIntent::AddFailed(message) => {
                next.status = TreatmentStatus::Failed;
                next.error = Some(message);
            }
            TreatmentIntent::DeleteStarted => {
                next.status = TreatmentStatus::Deleting;
            }
            TreatmentIntent::DeleteSucceeded(id) => {
                next.status = TreatmentStatus::Succeeded;
                next.items.retain(|item| item.id != id);
                next.error = None;
            }
            TreatmentIntent::DeleteFailed(message) => {
                next.status = TreatmentStatus::Failed;
                next.error = Some(message);
            }
            TreatmentIntent::Reset => {
                next = TreatmentStore::default();
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(store: TreatmentStore, intent: TreatmentIntent) -> TreatmentStore {
        (*Rc::new(store).reduce(intent)).clone()
    }

    fn treatment(id: &str, name: &str) -> Treatment {
        Treatment {
            id: id.to_string(),
            name: name.to_string(),
            dosage: "500mg".to_string(),
            frequency: "2x/day".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-02-01".to_string(),
            description: None,
        }
    }

    fn store_with(items: Vec<Treatment>) -> TreatmentStore {
        TreatmentStore {
            items,
            status: TreatmentStatus::Succeeded,
            error: None,
        }
    }

    #[test]
    fn fetch_replaces_collection_wholesale() {
        let store = store_with(vec![treatment("a", "Vieja")]);
        let fresh = vec![treatment("b", "Nueva"), treatment("c", "Otra")];

        let store = dispatch(store, TreatmentIntent::FetchStarted);
        assert_eq!(store.status, TreatmentStatus::Loading);

        let store = dispatch(store, TreatmentIntent::FetchSucceeded(fresh.clone()));
        assert_eq!(store.items, fresh);
        assert_eq!(store.status, TreatmentStatus::Succeeded);
    }

    #[test]
    fn fetch_failure_preserves_previous_snapshot() {
        let items = vec![treatment("a", "Ibuprofeno")];
        let store = dispatch(
            store_with(items.clone()),
            TreatmentIntent::FetchFailed("HTTP 500: Internal Server Error".to_string()),
        );
        assert_eq!(store.items, items);
        assert_eq!(store.status, TreatmentStatus::Failed);
        assert!(store.error.is_some());
    }

    #[test]
    fn add_appends_preserving_order() {
        let items = vec![treatment("a", "Uno"), treatment("b", "Dos")];
        let nuevo = treatment("c", "Tres");

        let store = dispatch(
            store_with(items.clone()),
            TreatmentIntent::AddSucceeded(nuevo.clone()),
        );

        let mut expected = items;
        expected.push(nuevo);
        assert_eq!(store.items, expected);
        assert!(store.error.is_none());
    }

    #[test]
    fn add_failure_leaves_collection_unchanged() {
        let items = vec![treatment("a", "Uno")];
        let store = dispatch(
            store_with(items.clone()),
            TreatmentIntent::AddFailed("Failed to add treatment".to_string()),
        );
        assert_eq!(store.items, items);
        assert_eq!(store.error.as_deref(), Some("Failed to add treatment"));
    }

    #[test]
    fn delete_filters_matching_id_only() {
        let items = vec![treatment("a", "Uno"), treatment("b", "Dos"), treatment("c", "Tres")];

        let store = dispatch(store_with(items), TreatmentIntent::DeleteStarted);
        assert_eq!(store.status, TreatmentStatus::Deleting);

        let store = dispatch(store, TreatmentIntent::DeleteSucceeded("b".to_string()));
        let ids: Vec<&str> = store.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(store.status, TreatmentStatus::Succeeded);
    }

    #[test]
    fn delete_rejected_by_server_keeps_collection() {
        // Escenario: DELETE "x1" responde {success:false}
        let items = vec![treatment("x1", "Uno"), treatment("x2", "Dos")];

        let store = dispatch(store_with(items.clone()), TreatmentIntent::DeleteStarted);
        let store = dispatch(
            store,
            TreatmentIntent::DeleteFailed("Failed to delete treatment".to_string()),
        );

        assert_eq!(store.items, items);
        assert_eq!(store.status, TreatmentStatus::Failed);
        assert!(store.error.is_some());
    }

    #[test]
    fn concurrent_deletes_resolve_independently() {
        // dos deletes en vuelo: cada resolución aplica su propio filtrado
        let items = vec![treatment("a", "Uno"), treatment("b", "Dos"), treatment("c", "Tres")];
        let store = dispatch(store_with(items), TreatmentIntent::DeleteStarted);
        let store = dispatch(store, TreatmentIntent::DeleteStarted);

        let store = dispatch(store, TreatmentIntent::DeleteSucceeded("c".to_string()));
        let store = dispatch(store, TreatmentIntent::DeleteSucceeded("a".to_string()));

        let ids: Vec<&str> = store.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn reset_clears_session_scoped_state() {
        let store = dispatch(
            store_with(vec![treatment("a", "Uno")]),
            TreatmentIntent::Reset,
        );
        assert_eq!(store, TreatmentStore::default());
    }
}
