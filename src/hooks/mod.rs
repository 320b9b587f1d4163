pub mod app_context;
pub mod use_auth;
pub mod use_toasts;
pub mod use_treatments;

pub use app_context::{AuthContextProvider, ToastContextProvider, TreatmentContextProvider};
pub use use_auth::{use_auth, UseAuthHandle};
pub use use_toasts::{use_toasts, UseToastsHandle};
pub use use_treatments::{use_treatments, UseTreatmentsHandle};
