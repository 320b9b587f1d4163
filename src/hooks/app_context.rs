// ============================================================================
// APP CONTEXT - Estado de aplicación explícito compartido por contexto
// ============================================================================
// Usa la Context API de Yew: los stores viven en providers explícitos en la
// raíz, no en singletons de módulo.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth, UseAuthHandle};
use crate::hooks::use_toasts::{use_toasts, UseToastsHandle};
use crate::hooks::use_treatments::{use_treatments, UseTreatmentsHandle};

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    pub children: Children,
}

#[function_component(ToastContextProvider)]
pub fn toast_context_provider(props: &ProviderProps) -> Html {
    let toasts = use_toasts();

    html! {
        <ContextProvider<UseToastsHandle> context={toasts}>
            {props.children.clone()}
        </ContextProvider<UseToastsHandle>>
    }
}

#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &ProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[function_component(TreatmentContextProvider)]
pub fn treatment_context_provider(props: &ProviderProps) -> Html {
    let treatments = use_treatments();

    html! {
        <ContextProvider<UseTreatmentsHandle> context={treatments}>
            {props.children.clone()}
        </ContextProvider<UseTreatmentsHandle>>
    }
}
