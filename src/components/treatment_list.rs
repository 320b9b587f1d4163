use yew::prelude::*;

use super::TreatmentForm;
use crate::hooks::{UseAuthHandle, UseTreatmentsHandle};
use crate::stores::TreatmentStatus;

#[function_component(TreatmentList)]
pub fn treatment_list() -> Html {
    let auth = use_context::<UseAuthHandle>().expect("AuthContextProvider no montado");
    let treatments = use_context::<UseTreatmentsHandle>().expect("TreatmentContextProvider no montado");
    let show_form = use_state(|| false);

    // fetch al montar (ya hay sesión: esta pantalla no se monta sin ella)
    {
        let fetch_all = treatments.fetch_all.clone();
        use_effect_with((), move |_| {
            fetch_all.emit(());
            || ()
        });
    }

    let on_delete = {
        let remove = treatments.remove.clone();
        Callback::from(move |id: String| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Are you sure you want to delete this treatment?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                remove.emit(id);
            }
        })
    };

    let on_logout = {
        let auth = auth.clone();
        let reset = treatments.reset.clone();
        Callback::from(move |_: MouseEvent| {
            // la lista está scoped a la sesión: se vacía antes de salir
            reset.emit(());
            auth.logout.emit(());
        })
    };

    let on_open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };
    let on_close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };

    let display_name = auth
        .state
        .user
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();
    let status = treatments.state.status;
    let deleting = status == TreatmentStatus::Deleting;

    html! {
        <div class="treatment-screen">
            <nav class="top-bar">
                <h1>{format!("Treatment Management - {}", display_name)}</h1>
                <button class="logout-button" onclick={on_logout}>{"Logout"}</button>
            </nav>

            <main class="treatment-main">
                <div class="treatment-header">
                    <h2>{"My Treatments"}</h2>
                    <button class="add-button" onclick={on_open_form}>{"Add Treatment"}</button>
                </div>

                {
                    if status == TreatmentStatus::Loading && treatments.state.items.is_empty() {
                        html! { <p class="list-placeholder">{"Loading treatments..."}</p> }
                    } else if treatments.state.items.is_empty() {
                        html! {
                            <p class="list-placeholder">
                                {"No treatments found. Add one to get started!"}
                            </p>
                        }
                    } else {
                        html! {
                            <ul class="treatment-items">
                                { for treatments.state.items.iter().map(|t| {
                                    let onclick = {
                                        let on_delete = on_delete.clone();
                                        let id = t.id.clone();
                                        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                                    };
                                    html! {
                                        <li key={t.id.clone()} class="treatment-item">
                                            <div class="treatment-info">
                                                <h3>{&t.name}</h3>
                                                <p>{format!("{} · {}", t.dosage, t.frequency)}</p>
                                                <p class="treatment-dates">
                                                    {format!("{} → {}", t.start_date, t.end_date)}
                                                </p>
                                                { t.description.as_ref().map(|d| html! {
                                                    <p class="treatment-description">{d.clone()}</p>
                                                }) }
                                            </div>
                                            <button
                                                class="delete-button"
                                                disabled={deleting}
                                                {onclick}
                                            >
                                                {"Delete"}
                                            </button>
                                        </li>
                                    }
                                }) }
                            </ul>
                        }
                    }
                }
            </main>

            { if *show_form {
                html! { <TreatmentForm on_close={on_close_form} /> }
            } else {
                Html::default()
            } }
        </div>
    }
}
