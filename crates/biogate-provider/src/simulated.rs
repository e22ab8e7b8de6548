//! Simulated provider for hosts without biometric hardware.
//!
//! Always answers from a canned device description and a canned challenge
//! result, so the rest of the application can run on a development machine.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use biogate_core::config::SimulatedConfig;

use crate::error::{ProviderError, ProviderResult};
use crate::traits::BiometricProvider;
use crate::types::{AuthenticateOptions, BiometryAvailability, BiometryErrorCode, BiometryType};

const DEFAULT_FAILURE_MESSAGE: &str = "Simulated authentication failed";

/// What the simulated challenge resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedResult {
    Success,
    Fail {
        code: Option<BiometryErrorCode>,
        message: String,
    },
    Fault(String),
}

#[derive(Debug, Default)]
struct Calls {
    check_biometry: usize,
    authenticate: usize,
    last_options: Option<AuthenticateOptions>,
}

/// In-memory `BiometricProvider` with a configurable canned result.
#[derive(Debug)]
pub struct SimulatedProvider {
    biometry_type: BiometryType,
    enrolled: bool,
    device_secure: bool,
    availability: Option<BiometryAvailability>,
    result: SimulatedResult,
    calls: Mutex<Calls>,
}

impl SimulatedProvider {
    fn new(result: SimulatedResult) -> Self {
        Self {
            biometry_type: BiometryType::FaceId,
            enrolled: true,
            device_secure: true,
            availability: None,
            result,
            calls: Mutex::new(Calls::default()),
        }
    }

    /// Available device whose challenge succeeds.
    pub fn succeeding() -> Self {
        Self::new(SimulatedResult::Success)
    }

    /// Available device whose challenge fails with `code`.
    pub fn failing(code: BiometryErrorCode) -> Self {
        Self::new(SimulatedResult::Fail {
            code: Some(code),
            message: DEFAULT_FAILURE_MESSAGE.into(),
        })
    }

    /// Device that reports itself unavailable with `code`.
    pub fn unavailable(code: BiometryErrorCode) -> Self {
        Self::succeeding().with_availability(BiometryAvailability::unavailable(Some(code), None))
    }

    /// Available device whose challenge breaks outside the normal failure channel.
    pub fn faulting(message: impl Into<String>) -> Self {
        Self::new(SimulatedResult::Fault(message.into()))
    }

    pub fn from_config(config: &SimulatedConfig) -> Self {
        let biometry_type = BiometryType::from_wire(&config.biometry_type).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown simulated biometry type '{}', using none",
                config.biometry_type
            );
            BiometryType::None
        });

        let provider = if config.result.trim().eq_ignore_ascii_case("success") {
            Self::succeeding()
        } else {
            match BiometryErrorCode::from_wire(&config.result) {
                Some(code) => Self::failing(code),
                None => Self::new(SimulatedResult::Fail {
                    code: None,
                    message: DEFAULT_FAILURE_MESSAGE.into(),
                }),
            }
        };
        let provider = match &config.message {
            Some(message) => provider.with_message(message.clone()),
            None => provider,
        };

        Self {
            biometry_type,
            enrolled: config.enrolled,
            device_secure: config.device_secure,
            ..provider
        }
    }

    /// Replace the derived availability snapshot with a fixed one.
    pub fn with_availability(mut self, availability: BiometryAvailability) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Replace the message attached to a simulated failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let SimulatedResult::Fail { message: m, .. } = &mut self.result {
            *m = message.into();
        }
        self
    }

    pub fn check_calls(&self) -> usize {
        self.calls().check_biometry
    }

    pub fn authenticate_calls(&self) -> usize {
        self.calls().authenticate
    }

    pub fn last_options(&self) -> Option<AuthenticateOptions> {
        self.calls().last_options.clone()
    }

    fn calls(&self) -> MutexGuard<'_, Calls> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn derived_availability(&self) -> BiometryAvailability {
        let code = if self.biometry_type == BiometryType::None {
            Some(BiometryErrorCode::NotSupported)
        } else if !self.enrolled {
            Some(BiometryErrorCode::NotEnrolled)
        } else if !self.device_secure {
            Some(BiometryErrorCode::PasscodeNotSet)
        } else {
            None
        };

        match code {
            None => BiometryAvailability::available(self.biometry_type),
            Some(code) => BiometryAvailability {
                is_available: false,
                code: Some(code),
                reason: None,
                biometry_type: self.biometry_type,
                device_is_secure: self.device_secure,
            },
        }
    }
}

#[async_trait]
impl BiometricProvider for SimulatedProvider {
    async fn check_biometry(&self) -> ProviderResult<BiometryAvailability> {
        self.calls().check_biometry += 1;
        Ok(self
            .availability
            .clone()
            .unwrap_or_else(|| self.derived_availability()))
    }

    async fn authenticate(&self, options: &AuthenticateOptions) -> ProviderResult<()> {
        {
            let mut calls = self.calls();
            calls.authenticate += 1;
            calls.last_options = Some(options.clone());
        }
        tracing::debug!("Simulating biometric challenge: {}", options.prompt);

        match &self.result {
            SimulatedResult::Success => Ok(()),
            SimulatedResult::Fail {
                code: Some(code),
                message,
            } => Err(ProviderError::biometry(*code, message.clone())),
            SimulatedResult::Fail { code: None, message } => {
                Err(ProviderError::unrecognized(message.clone()))
            }
            SimulatedResult::Fault(message) => Err(ProviderError::Fault(message.clone())),
        }
    }
}
