use std::collections::HashMap;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::UseTreatmentsHandle;
use crate::models::TreatmentFields;
use crate::utils::validation::validate_treatment;

#[derive(Properties, PartialEq)]
pub struct TreatmentFormProps {
    pub on_close: Callback<()>,
}

/// Modal de alta de tratamiento. El id lo asigna el servidor; aquí solo se
/// recogen y validan los campos.
#[function_component(TreatmentForm)]
pub fn treatment_form(props: &TreatmentFormProps) -> Html {
    let treatments = use_context::<UseTreatmentsHandle>().expect("TreatmentContextProvider no montado");
    let name_ref = use_node_ref();
    let dosage_ref = use_node_ref();
    let frequency_ref = use_node_ref();
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();
    let description_ref = use_node_ref();
    let errors = use_state(HashMap::<String, String>::new);

    let on_submit = {
        let treatments = treatments.clone();
        let on_close = props.on_close.clone();
        let name_ref = name_ref.clone();
        let dosage_ref = dosage_ref.clone();
        let frequency_ref = frequency_ref.clone();
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();
        let description_ref = description_ref.clone();
        let errors = errors.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name), Some(dosage), Some(frequency), Some(start), Some(end)) = (
                name_ref.cast::<HtmlInputElement>(),
                dosage_ref.cast::<HtmlInputElement>(),
                frequency_ref.cast::<HtmlInputElement>(),
                start_ref.cast::<HtmlInputElement>(),
                end_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let description = description_ref
                .cast::<HtmlTextAreaElement>()
                .map(|t| t.value())
                .filter(|v| !v.trim().is_empty());

            let fields = TreatmentFields {
                name: name.value(),
                dosage: dosage.value(),
                frequency: frequency.value(),
                start_date: start.value(),
                end_date: end.value(),
                description,
            };

            let validation_errors = validate_treatment(&fields);
            if !validation_errors.is_empty() {
                errors.set(validation_errors);
                return;
            }

            treatments.add.emit(fields);
            on_close.emit(());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let field_error = |field: &str| -> Option<String> { errors.get(field).cloned() };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>{"Add Treatment"}</h3>

                <form onsubmit={on_submit}>
                    <div class="form-field">
                        <label for="treatment-name">{"Name *"}</label>
                        <input id="treatment-name" type="text" ref={name_ref} placeholder="e.g. Amoxicillin" />
                        { field_error("name").map(|msg| html! { <p class="field-error">{msg}</p> }) }
                    </div>

                    <div class="form-field">
                        <label for="treatment-dosage">{"Dosage *"}</label>
                        <input id="treatment-dosage" type="text" ref={dosage_ref} placeholder="e.g. 500mg" />
                        { field_error("dosage").map(|msg| html! { <p class="field-error">{msg}</p> }) }
                    </div>

                    <div class="form-field">
                        <label for="treatment-frequency">{"Frequency *"}</label>
                        <input id="treatment-frequency" type="text" ref={frequency_ref} placeholder="e.g. 3x/day" />
                        { field_error("frequency").map(|msg| html! { <p class="field-error">{msg}</p> }) }
                    </div>

                    <div class="form-field">
                        <label for="treatment-start">{"Start date *"}</label>
                        <input id="treatment-start" type="date" ref={start_ref} />
                        { field_error("startDate").map(|msg| html! { <p class="field-error">{msg}</p> }) }
                    </div>

                    <div class="form-field">
                        <label for="treatment-end">{"End date *"}</label>
                        <input id="treatment-end" type="date" ref={end_ref} />
                        { field_error("endDate").map(|msg| html! { <p class="field-error">{msg}</p> }) }
                    </div>

                    <div class="form-field">
                        <label for="treatment-description">{"Description"}</label>
                        <textarea id="treatment-description" ref={description_ref} placeholder="Optional notes" />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="cancel-button" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="submit-button">{"Save"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
