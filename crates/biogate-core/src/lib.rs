pub mod auth;
pub mod config;
pub mod lifecycle;

pub use auth::{AttemptSummary, AuthenticationOutcome, DenialKind, UnavailableKind};
pub use config::AppConfig;
