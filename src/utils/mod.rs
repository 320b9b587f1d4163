// Utils compartidos

pub mod constants;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use storage::{clear_saved_session, load_session_or_clear, save_session};
