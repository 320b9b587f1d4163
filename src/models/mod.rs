pub mod treatment;
pub mod user;

pub use treatment::{DeleteResponse, Treatment, TreatmentFields};
pub use user::{AuthError, AuthErrorBody, LoginRequest, RegisterRequest, Session};
