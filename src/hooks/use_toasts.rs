// ============================================================================
// USE TOASTS HOOK - Notificaciones transitorias con auto-dismiss
// ============================================================================

use std::cell::Cell;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::stores::{Toast, ToastIntent, ToastKind, ToastStore};

const TOAST_DURATION_MS: u32 = 3_000;

thread_local! {
    static NEXT_TOAST_ID: Cell<u32> = Cell::new(0);
}

fn next_toast_id() -> u32 {
    NEXT_TOAST_ID.with(|cell| {
        let id = cell.get();
        cell.set(id.wrapping_add(1));
        id
    })
}

#[derive(Clone, PartialEq)]
pub struct UseToastsHandle {
    pub state: UseReducerHandle<ToastStore>,
    pub success: Callback<String>,
    pub error: Callback<String>,
    pub dismiss: Callback<u32>,
}

fn push_toast(state: &UseReducerHandle<ToastStore>, kind: ToastKind, message: String) {
    let id = next_toast_id();
    state.dispatch(ToastIntent::Push(Toast { id, kind, message }));

    // auto-dismiss pasado el tiempo de exposición
    let state = state.clone();
    Timeout::new(TOAST_DURATION_MS, move || {
        state.dispatch(ToastIntent::Dismiss(id));
    })
    .forget();
}

#[hook]
pub fn use_toasts() -> UseToastsHandle {
    let state = use_reducer(ToastStore::default);

    let success = {
        let state = state.clone();
        Callback::from(move |message: String| push_toast(&state, ToastKind::Success, message))
    };

    let error = {
        let state = state.clone();
        Callback::from(move |message: String| push_toast(&state, ToastKind::Error, message))
    };

    let dismiss = {
        let state = state.clone();
        Callback::from(move |id: u32| state.dispatch(ToastIntent::Dismiss(id)))
    };

    UseToastsHandle {
        state,
        success,
        error,
        dismiss,
    }
}
