//! Authentication session state shared with the rest of the application.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use biogate_core::auth::AuthenticationOutcome;
use serde::Serialize;

/// Whether the user is authenticated, and the last error shown to them.
///
/// `is_authenticated == true` always comes with `last_error == None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub last_error: Option<String>,
}

/// Cloneable handle to one session.
///
/// Anyone holding a handle can read. Only the controller in this crate writes.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SessionState {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated
    }

    pub fn last_error(&self) -> Option<String> {
        self.read().last_error.clone()
    }

    pub(crate) fn clear_error(&self) {
        self.write().last_error = None;
    }

    pub(crate) fn apply(&self, outcome: &AuthenticationOutcome) {
        let mut state = self.write();
        state.is_authenticated = outcome.is_authenticated();
        state.last_error = outcome.message().map(String::from);
    }

    pub(crate) fn reset(&self) {
        *self.write() = SessionState::default();
    }

    // Writes are plain assignments, so a poisoned lock still holds a valid state.
    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biogate_core::auth::DenialKind;

    #[test]
    fn new_session_is_signed_out() {
        let session = Session::new();
        assert_eq!(session.snapshot(), SessionState::default());
        assert!(!session.is_authenticated());
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn apply_authenticated_clears_error() {
        let session = Session::new();
        session.apply(&AuthenticationOutcome::Error {
            message: "first".into(),
        });
        session.apply(&AuthenticationOutcome::Authenticated);
        assert_eq!(
            session.snapshot(),
            SessionState {
                is_authenticated: true,
                last_error: None,
            }
        );
    }

    #[test]
    fn apply_denied_records_reason() {
        let session = Session::new();
        session.apply(&AuthenticationOutcome::Authenticated);
        session.apply(&AuthenticationOutcome::Denied {
            kind: DenialKind::AuthFailed,
            reason: "nope".into(),
        });
        assert!(!session.is_authenticated());
        assert_eq!(session.last_error().as_deref(), Some("nope"));
    }

    #[test]
    fn clear_error_keeps_authentication_flag() {
        let session = Session::new();
        session.apply(&AuthenticationOutcome::Authenticated);
        session.clear_error();
        assert!(session.is_authenticated());
    }

    #[test]
    fn clones_share_state() {
        let session = Session::new();
        let reader = session.clone();
        session.apply(&AuthenticationOutcome::Authenticated);
        assert!(reader.is_authenticated());
        session.reset();
        assert!(!reader.is_authenticated());
    }
}
