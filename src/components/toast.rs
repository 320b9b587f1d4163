use yew::prelude::*;

use crate::hooks::UseToastsHandle;
use crate::stores::ToastKind;

/// Overlay de notificaciones transitorias (click para descartar antes del
/// auto-dismiss)
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toasts = use_context::<UseToastsHandle>().expect("ToastContextProvider no montado");

    html! {
        <div class="toast-container">
            { for toasts.state.toasts.iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                };
                let onclick = {
                    let dismiss = toasts.dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| dismiss.emit(id))
                };
                html! {
                    <div key={toast.id.to_string()} {class} {onclick}>
                        { toast.message.clone() }
                    </div>
                }
            }) }
        </div>
    }
}
