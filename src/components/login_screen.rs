use std::collections::HashMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{UseAuthHandle, UseToastsHandle};
use crate::stores::AuthStatus;
use crate::utils::validation::validate_login;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_show_register: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let auth = use_context::<UseAuthHandle>().expect("AuthContextProvider no montado");
    let toasts = use_context::<UseToastsHandle>();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    // errores de validación local; los del servidor vienen del AuthStore
    let local_errors = use_state(HashMap::<String, String>::new);

    let on_submit = {
        let auth = auth.clone();
        let toasts = toasts.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let local_errors = local_errors.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                let errors = validate_login(&email, &password);
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
                auth.login.emit((email, password));
            }
        })
    };

    // al volver a escribir en un campo se limpia su error
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
    let on_email_input = {
        let clear_field = clear_field.clone();
        Callback::from(move |_: InputEvent| clear_field.emit("email".to_string()))
    };
    let on_password_input = {
        let clear_field = clear_field.clone();
        Callback::from(move |_: InputEvent| clear_field.emit("password".to_string()))
    };

    let on_show_register = {
        let on_show_register = props.on_show_register.clone();
        Callback::from(move |_: MouseEvent| on_show_register.emit(()))
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
                <h2>{"Welcome Back"}</h2>
                <p class="auth-subtitle">{"Please sign in to continue"}</p>

                <form onsubmit={on_submit}>
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
                            placeholder="Enter your password"
                        />
                        { field_error("password").map(|msg| html! { <p class="field-error">{msg}</p> }) }
                    </div>

                    { auth.state.error.as_ref().map(|error| html! {
                        <div class="error-banner">{error.clone()}</div>
                    }) }

                    <button type="submit" disabled={loading}>
                        { if loading { "Signing In..." } else { "Sign In" } }
                    </button>
                </form>

                <p class="auth-switch">
                    {"Don't have an account? "}
                    <button type="button" class="link-button" onclick={on_show_register}>
                        {"Sign Up"}
                    </button>
                </p>
            </div>
        </div>
    }
}
