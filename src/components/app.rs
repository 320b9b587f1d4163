use yew::prelude::*;

use super::{LoginScreen, RegisterScreen, ToastHost, TreatmentList};
use crate::hooks::{
    AuthContextProvider, ToastContextProvider, TreatmentContextProvider, UseAuthHandle,
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastContextProvider>
            <AuthContextProvider>
                <TreatmentContextProvider>
                    <Screens />
                </TreatmentContextProvider>
            </AuthContextProvider>
            <ToastHost />
        </ToastContextProvider>
    }
}

/// Selector de pantalla: sin sesión ⇒ login/registro, con sesión ⇒ lista.
/// (Equivalente del ProtectedRoute: los stores no redirigen, lo hace la vista)
#[function_component(Screens)]
fn screens() -> Html {
    let auth = use_context::<UseAuthHandle>().expect("AuthContextProvider no montado");
    let show_register = use_state(|| false);

    if auth.state.user.is_some() {
        return html! { <TreatmentList /> };
    }

    if *show_register {
        let on_back_to_login = {
            let show_register = show_register.clone();
            Callback::from(move |_| show_register.set(false))
        };
        html! { <RegisterScreen {on_back_to_login} /> }
    } else {
        let on_show_register = {
            let show_register = show_register.clone();
            Callback::from(move |_| show_register.set(true))
        };
        html! { <LoginScreen {on_show_register} /> }
    }
}
