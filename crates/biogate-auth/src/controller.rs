use std::future::Future;
use std::sync::Arc;

use biogate_core::auth::AuthenticationOutcome;
use biogate_core::config::AuthConfig;
use biogate_provider::{AuthenticateOptions, BiometricProvider, ProviderError, ProviderResult};
use tokio::task::JoinError;

use crate::classify;
use crate::session::Session;

/// Drives one biometric attempt at a time and writes its result to the session.
///
/// Callers are expected to keep at most one `attempt` in flight per session.
pub struct AuthController {
    provider: Arc<dyn BiometricProvider>,
    session: Session,
    options: AuthenticateOptions,
}

impl AuthController {
    pub fn new(provider: Arc<dyn BiometricProvider>, session: Session, config: &AuthConfig) -> Self {
        Self {
            provider,
            session,
            options: AuthenticateOptions::from(config),
        }
    }

    /// Read handle to the session this controller writes.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run one authentication attempt. Never fails: every provider error,
    /// fault or panic resolves into an outcome.
    ///
    /// Must be polled inside a tokio runtime; provider calls are spawned onto it.
    pub async fn attempt(&self) -> AuthenticationOutcome {
        self.session.clear_error();

        let outcome = self.resolve().await;
        self.session.apply(&outcome);

        match outcome.message() {
            None => tracing::info!("Biometric authentication succeeded"),
            Some(reason) => tracing::info!(outcome = outcome.label(), "Biometric authentication did not succeed: {reason}"),
        }
        outcome
    }

    /// Return the session to its signed-out state.
    pub fn sign_out(&self) {
        self.session.reset();
        tracing::info!("Signed out");
    }

    async fn resolve(&self) -> AuthenticationOutcome {
        let availability = match self
            .guarded(|provider| async move { provider.check_biometry().await })
            .await
        {
            Ok(availability) => availability,
            Err(e) => return Self::classify_check_error(e),
        };

        if !availability.is_available {
            match availability.code {
                Some(code) => tracing::debug!("Biometry unavailable: {code}"),
                None => tracing::debug!("Biometry unavailable without a code"),
            }
            return classify::classify_unavailable(&availability);
        }
        tracing::debug!(
            biometry_type = ?availability.biometry_type,
            device_is_secure = availability.device_is_secure,
            "Biometry available, starting challenge"
        );

        let options = self.options.clone();
        match self
            .guarded(|provider| async move { provider.authenticate(&options).await })
            .await
        {
            Ok(()) => AuthenticationOutcome::Authenticated,
            Err(e) => Self::classify_error(e),
        }
    }

    /// The availability check has no failure channel of its own, so any
    /// error it returns is a fault regardless of the code it carries.
    fn classify_check_error(err: ProviderError) -> AuthenticationOutcome {
        let message = match err {
            ProviderError::Biometry { message, .. } | ProviderError::Fault(message) => message,
        };
        tracing::warn!("Biometry availability check failed: {message}");
        classify::classify_fault(Some(&message))
    }

    fn classify_error(err: ProviderError) -> AuthenticationOutcome {
        match err {
            ProviderError::Biometry { code, message } => {
                classify::classify_failure(code, Some(&message))
            }
            ProviderError::Fault(message) => {
                tracing::warn!("Biometric provider fault: {message}");
                classify::classify_fault(Some(&message))
            }
        }
    }

    /// Run a provider call on its own task so a panic inside the provider
    /// comes back as a fault instead of unwinding into the caller.
    async fn guarded<T, F, Fut>(&self, call: F) -> ProviderResult<T>
    where
        F: FnOnce(Arc<dyn BiometricProvider>) -> Fut,
        Fut: Future<Output = ProviderResult<T>> + Send + 'static,
        T: Send + 'static,
    {
        let provider = Arc::clone(&self.provider);
        tokio::spawn(call(provider))
            .await
            .unwrap_or_else(|e| Err(ProviderError::Fault(panic_message(e))))
    }
}

fn panic_message(err: JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biogate_provider::{BiometryErrorCode, SimulatedProvider};

    fn controller(provider: SimulatedProvider) -> (AuthController, Arc<SimulatedProvider>) {
        let provider = Arc::new(provider);
        let controller = AuthController::new(provider.clone(), Session::new(), &AuthConfig::default());
        (controller, provider)
    }

    #[tokio::test]
    async fn attempt_passes_configured_options() {
        let (controller, provider) = controller(SimulatedProvider::succeeding());
        controller.attempt().await;

        let options = provider.last_options().unwrap();
        assert_eq!(options.prompt, "Please authenticate to access the app");
        assert_eq!(options.cancel_label, "Cancel");
        assert!(options.allow_fallback_credential);
    }

    #[tokio::test]
    async fn unavailable_device_skips_challenge() {
        let (controller, provider) = controller(SimulatedProvider::unavailable(BiometryErrorCode::NotEnrolled));
        let outcome = controller.attempt().await;

        assert!(matches!(outcome, AuthenticationOutcome::Unavailable { .. }));
        assert_eq!(provider.check_calls(), 1);
        assert_eq!(provider.authenticate_calls(), 0);
    }

    #[tokio::test]
    async fn sign_out_does_not_touch_provider() {
        let (controller, provider) = controller(SimulatedProvider::succeeding());
        controller.sign_out();
        assert_eq!(provider.check_calls(), 0);
        assert_eq!(provider.authenticate_calls(), 0);
    }

    #[test]
    fn check_error_with_denial_code_is_still_a_fault() {
        let outcome = AuthController::classify_check_error(ProviderError::biometry(
            BiometryErrorCode::Lockout,
            "",
        ));
        assert_eq!(
            outcome,
            AuthenticationOutcome::Error {
                message: classify::UNEXPECTED_ERROR.into(),
            }
        );
    }

    #[test]
    fn fault_without_message_uses_fallback() {
        let outcome = AuthController::classify_error(ProviderError::Fault(String::new()));
        assert_eq!(outcome.message(), Some(classify::UNEXPECTED_ERROR));
    }
}
