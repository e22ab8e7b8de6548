pub mod classify;
pub mod controller;
pub mod session;

pub use controller::AuthController;
pub use session::{Session, SessionState};
