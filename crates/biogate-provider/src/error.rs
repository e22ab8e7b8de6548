use thiserror::Error;

use crate::types::BiometryErrorCode;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Normal failure channel: the platform rejected or could not finish the challenge.
    /// `code` is `None` when the platform reported something unrecognizable.
    #[error("Biometry error: {message}")]
    Biometry {
        code: Option<BiometryErrorCode>,
        message: String,
    },

    /// The provider itself misbehaved outside its documented contract.
    #[error("Provider fault: {0}")]
    Fault(String),
}

impl ProviderError {
    pub fn biometry(code: BiometryErrorCode, message: impl Into<String>) -> Self {
        Self::Biometry {
            code: Some(code),
            message: message.into(),
        }
    }

    pub fn unrecognized(message: impl Into<String>) -> Self {
        Self::Biometry {
            code: None,
            message: message.into(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
