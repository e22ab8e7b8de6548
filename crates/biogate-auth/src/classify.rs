//! Pure mapping from provider reports to user-facing outcomes.
//!
//! Nothing here suspends or touches state, so every table can be tested
//! without a provider.

use biogate_core::auth::{AuthenticationOutcome, DenialKind, UnavailableKind};
use biogate_provider::{BiometryAvailability, BiometryErrorCode};

pub const NOT_AVAILABLE: &str = "Biometric authentication is not available";
pub const NOT_ENROLLED: &str = "Biometric authentication is not set up on this device";
pub const NOT_SUPPORTED: &str = "This device does not support biometric authentication";
pub const PASSCODE_NOT_SET: &str =
    "Device passcode is not set, which is required for biometric authentication";

pub const USER_CANCELLED: &str = "Authentication was canceled by the user";
pub const AUTH_FAILED: &str = "Authentication failed. Please try again.";
pub const LOCKED_OUT: &str =
    "Too many failed attempts. Biometric authentication is temporarily locked.";

pub const GENERIC_FAILURE: &str = "Authentication failed";
pub const UNEXPECTED_ERROR: &str = "Unexpected authentication error";

/// Unavailability codes with a dedicated message.
const UNAVAILABLE_TABLE: &[(BiometryErrorCode, UnavailableKind, &str)] = &[
    (BiometryErrorCode::NotEnrolled, UnavailableKind::NotEnrolled, NOT_ENROLLED),
    (BiometryErrorCode::NotSupported, UnavailableKind::NotSupported, NOT_SUPPORTED),
    (BiometryErrorCode::PasscodeNotSet, UnavailableKind::PasscodeNotSet, PASSCODE_NOT_SET),
];

/// Challenge failure codes with a dedicated message.
const DENIAL_TABLE: &[(BiometryErrorCode, DenialKind, &str)] = &[
    (BiometryErrorCode::UserCancel, DenialKind::UserCancelled, USER_CANCELLED),
    (BiometryErrorCode::AuthFailed, DenialKind::AuthFailed, AUTH_FAILED),
    (BiometryErrorCode::Lockout, DenialKind::LockedOut, LOCKED_OUT),
];

/// Blank provider messages count as absent.
fn non_blank(message: Option<&str>) -> Option<&str> {
    message.filter(|m| !m.trim().is_empty())
}

/// Classify a snapshot that reported `is_available == false`.
pub fn classify_unavailable(availability: &BiometryAvailability) -> AuthenticationOutcome {
    let Some(code) = availability.code else {
        return AuthenticationOutcome::Unavailable {
            kind: UnavailableKind::Other,
            reason: NOT_AVAILABLE.into(),
        };
    };

    match UNAVAILABLE_TABLE.iter().find(|(c, _, _)| *c == code) {
        Some((_, kind, reason)) => AuthenticationOutcome::Unavailable {
            kind: *kind,
            reason: (*reason).into(),
        },
        None => AuthenticationOutcome::Unavailable {
            kind: UnavailableKind::Other,
            reason: non_blank(availability.reason.as_deref())
                .unwrap_or(NOT_AVAILABLE)
                .into(),
        },
    }
}

/// Classify a failure delivered through the provider's normal error channel.
pub fn classify_failure(
    code: Option<BiometryErrorCode>,
    message: Option<&str>,
) -> AuthenticationOutcome {
    let message = non_blank(message).unwrap_or(GENERIC_FAILURE);

    let Some(code) = code else {
        return AuthenticationOutcome::Error {
            message: message.into(),
        };
    };

    match DENIAL_TABLE.iter().find(|(c, _, _)| *c == code) {
        Some((_, kind, reason)) => AuthenticationOutcome::Denied {
            kind: *kind,
            reason: (*reason).into(),
        },
        None => AuthenticationOutcome::Denied {
            kind: DenialKind::Other,
            reason: message.into(),
        },
    }
}

/// Classify a provider fault outside its normal failure channel.
pub fn classify_fault(message: Option<&str>) -> AuthenticationOutcome {
    AuthenticationOutcome::Error {
        message: non_blank(message).unwrap_or(UNEXPECTED_ERROR).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable(code: Option<BiometryErrorCode>, reason: Option<&str>) -> BiometryAvailability {
        BiometryAvailability::unavailable(code, reason.map(String::from))
    }

    #[test]
    fn not_enrolled_mentions_set_up() {
        let outcome = classify_unavailable(&unavailable(Some(BiometryErrorCode::NotEnrolled), None));
        assert_eq!(
            outcome,
            AuthenticationOutcome::Unavailable {
                kind: UnavailableKind::NotEnrolled,
                reason: NOT_ENROLLED.into(),
            }
        );
        assert!(outcome.message().unwrap().contains("not set up"));
    }

    #[test]
    fn each_unavailable_category_has_its_own_message() {
        let cases = [
            (BiometryErrorCode::NotSupported, UnavailableKind::NotSupported, NOT_SUPPORTED),
            (BiometryErrorCode::PasscodeNotSet, UnavailableKind::PasscodeNotSet, PASSCODE_NOT_SET),
        ];
        for (code, kind, reason) in cases {
            let outcome = classify_unavailable(&unavailable(Some(code), Some("ignored")));
            assert_eq!(
                outcome,
                AuthenticationOutcome::Unavailable {
                    kind,
                    reason: reason.into(),
                }
            );
        }
    }

    #[test]
    fn other_unavailable_code_uses_provider_reason() {
        let outcome = classify_unavailable(&unavailable(
            Some(BiometryErrorCode::InvalidContext),
            Some("Context was invalidated"),
        ));
        assert_eq!(
            outcome,
            AuthenticationOutcome::Unavailable {
                kind: UnavailableKind::Other,
                reason: "Context was invalidated".into(),
            }
        );
    }

    #[test]
    fn other_unavailable_code_without_reason_uses_generic() {
        let outcome = classify_unavailable(&unavailable(Some(BiometryErrorCode::AppCancel), Some("  ")));
        assert_eq!(outcome.message(), Some(NOT_AVAILABLE));
    }

    #[test]
    fn unavailable_without_code_is_generic_even_with_reason() {
        let outcome = classify_unavailable(&unavailable(None, Some("platform said no")));
        assert_eq!(
            outcome,
            AuthenticationOutcome::Unavailable {
                kind: UnavailableKind::Other,
                reason: NOT_AVAILABLE.into(),
            }
        );
    }

    #[test]
    fn user_cancel_is_denied() {
        let outcome = classify_failure(Some(BiometryErrorCode::UserCancel), Some("raw"));
        assert_eq!(
            outcome,
            AuthenticationOutcome::Denied {
                kind: DenialKind::UserCancelled,
                reason: USER_CANCELLED.into(),
            }
        );
        assert!(outcome.message().unwrap().contains("canceled by the user"));
    }

    #[test]
    fn auth_failed_asks_to_retry() {
        let outcome = classify_failure(Some(BiometryErrorCode::AuthFailed), None);
        assert_eq!(
            outcome,
            AuthenticationOutcome::Denied {
                kind: DenialKind::AuthFailed,
                reason: AUTH_FAILED.into(),
            }
        );
    }

    #[test]
    fn lockout_mentions_locked() {
        let outcome = classify_failure(Some(BiometryErrorCode::Lockout), None);
        assert!(matches!(
            outcome,
            AuthenticationOutcome::Denied {
                kind: DenialKind::LockedOut,
                ..
            }
        ));
        assert!(outcome.message().unwrap().contains("locked"));
    }

    #[test]
    fn other_recognized_code_is_denied_with_provider_message() {
        let outcome = classify_failure(Some(BiometryErrorCode::SystemCancel), Some("Interrupted by system"));
        assert_eq!(
            outcome,
            AuthenticationOutcome::Denied {
                kind: DenialKind::Other,
                reason: "Interrupted by system".into(),
            }
        );

        let outcome = classify_failure(Some(BiometryErrorCode::UserFallback), None);
        assert_eq!(outcome.message(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn every_code_has_a_failure_outcome_with_message() {
        for code in BiometryErrorCode::all() {
            let outcome = classify_failure(Some(code), None);
            assert!(matches!(outcome, AuthenticationOutcome::Denied { .. }));
            assert!(outcome.message().is_some());
        }
    }

    #[test]
    fn unrecognized_code_is_error_with_verbatim_message() {
        let outcome = classify_failure(None, Some("Sensor returned 0x7f"));
        assert_eq!(
            outcome,
            AuthenticationOutcome::Error {
                message: "Sensor returned 0x7f".into(),
            }
        );
    }

    #[test]
    fn unrecognized_code_without_message_uses_fallback() {
        assert_eq!(
            classify_failure(None, None).message(),
            Some(GENERIC_FAILURE)
        );
        assert_eq!(
            classify_failure(None, Some("")).message(),
            Some(GENERIC_FAILURE)
        );
    }

    #[test]
    fn fault_keeps_message_or_uses_fallback() {
        assert_eq!(classify_fault(Some("bridge crashed")).message(), Some("bridge crashed"));
        assert_eq!(classify_fault(None).message(), Some(UNEXPECTED_ERROR));
    }
}
