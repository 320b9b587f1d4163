pub mod app;
pub mod login_screen;
pub mod register_screen;
pub mod toast;
pub mod treatment_form;
pub mod treatment_list;

pub use app::App;
pub use login_screen::LoginScreen;
pub use register_screen::RegisterScreen;
pub use toast::ToastHost;
pub use treatment_form::TreatmentForm;
pub use treatment_list::TreatmentList;
