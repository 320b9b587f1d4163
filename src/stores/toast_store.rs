// ============================================================================
// TOAST STORE - Notificaciones transitorias de éxito/error
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastStore {
    pub toasts: Vec<Toast>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ToastIntent {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastStore {
    type Action = ToastIntent;

    fn reduce(self: Rc<Self>, intent: ToastIntent) -> Rc<Self> {
        let mut next = (*self).clone();
        match intent {
            ToastIntent::Push(toast) => next.toasts.push(toast),
            ToastIntent::Dismiss(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}
