pub mod auth_store;
pub mod toast_store;
pub mod treatment_store;

pub use auth_store::{AuthIntent, AuthStatus, AuthStore};
pub use toast_store::{Toast, ToastIntent, ToastKind, ToastStore};
pub use treatment_store::{TreatmentIntent, TreatmentStatus, TreatmentStore};
