use async_trait::async_trait;

use crate::error::ProviderResult;
use crate::types::{AuthenticateOptions, BiometryAvailability};

/// Platform service that performs the actual sensor-based identity check.
///
/// Uses `async-trait` for object safety (`dyn BiometricProvider`).
#[async_trait]
pub trait BiometricProvider: Send + Sync {
    /// Report whether a biometric challenge can run on this device right now.
    async fn check_biometry(&self) -> ProviderResult<BiometryAvailability>;

    /// Run one challenge. Resolves `Ok(())` on success, or
    /// `ProviderError::Biometry` when the user was not authenticated.
    async fn authenticate(&self, options: &AuthenticateOptions) -> ProviderResult<()>;
}
