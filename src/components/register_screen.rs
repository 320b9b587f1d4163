use std::collections::HashMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{UseAuthHandle, UseToastsHandle};
use crate::stores::AuthStatus;
use crate::utils::validation::validate_register;

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    pub on_back_to_login: Callback<()>,
}

#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let auth = use_context::<UseAuthHandle>().expect("AuthContextProvider no montado");
    let toasts = use_context::<UseToastsHandle>();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let local_errors = use_state(HashMap::<String, String>::new);

    let on_submit = {
        let auth = auth.clone();
        let toasts = toasts.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let local_errors = local_errors.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name_input), Some(email_input), Some(password_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let name = name_input.value();
                let email = email_input.value();
                let password = password_input.value();

                let errors = validate_register(&name, &email, &password);
                if !errors.is_empty() {
                    local_errors.set(errors);
                    if let Some(toasts) = &toasts {
                        toasts.error.emit(
                            "Please ensure all required fields are filled correctly".to_string(),
                        );
                    }
                    return;
                }

                local_errors.set(HashMap::new());
                auth.register.emit((name, email, password));
            }
        })
    };

    let clear_field = {
        let auth = auth.clone();
        let local_errors = local_errors.clone();
        Callback::from(move |field: String| {
            if local_errors.contains_key(&field) {
                let mut next = (*local_errors).clone();
                next.remove(&field);
                local_errors.set(next);
            }
            auth.clear_field_error.emit(field);
        })
    };
    let on_name_input = {
        let clear_field = clear_field.clone();
        Callback::from(move |_: InputEvent| clear_field.emit("name".to_string()))
    };
    let on_email_input = {
        let clear_field = clear_field.clone();
        Callback::from(move |_: InputEvent| clear_field.emit("email".to_string()))
    };
    let on_password_input = {
        let clear_field = clear_field.clone();
        Callback::from(move |_: InputEvent| clear_field.emit("password".to_string()))
    };

    let on_back = {
        let on_back_to_login = props.on_back_to_login.clone();
        Callback::from(move |_: MouseEvent| on_back_to_login.emit(()))
    };

    let loading = auth.state.status == AuthStatus::Loading;
    let field_error = |field: &str| -> Option<String> {
        local_errors
            .get(field)
            .or_else(|| auth.state.field_errors.get(field))
            .cloned()
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2>{"Create Account"}</h2>
                <p class="auth-subtitle">{"Sign up to start tracking your treatments"}</p>

                <form onsubmit={on_submit}>
                    <div class="form-field">
                        <label for="name">{"Name *"}</label>
                        <input
                            id="name"
                            type="text"
                            ref={name_ref}
                            oninput={on_name_input}
                            placeholder="Enter your name"
                        />
                        { field_error("name").map(|msg| html! { <p class="field-error">{msg}</p> }) }
                    </div>

                    <div class="form-field">
                        <label for="email">{"Email Address *"}</label>
                        <input
                            id="email"
                            type="email"
                            ref={email_ref}
                            oninput={on_email_input}
                            placeholder="Enter your email"
                        />
                        { field_error("email").map(|msg| html! { <p class="field-error">{msg}</p> }) }
                    </div>

                    <div class="form-field">
                        <label for="password">{"Password *"}</label>
                        <input
                            id="password"
                            type="password"
                            ref={password_ref}
                            oninput={on_password_input}
                            placeholder="Choose a password"
                        />
                        { field_error("password").map(|msg| html! { <p class="field-error">{msg}</p> }) }
                    </div>

                    { auth.state.error.as_ref().map(|error| html! {
                        <div class="error-banner">{error.clone()}</div>
                    }) }

                    <button type="submit" disabled={loading}>
                        { if loading { "Signing Up..." } else { "Sign Up" } }
                    </button>
                </form>

                <p class="auth-switch">
                    {"Already have an account? "}
                    <button type="button" class="link-button" onclick={on_back}>
                        {"Sign In"}
                    </button>
                </p>
            </div>
        </div>
    }
}
