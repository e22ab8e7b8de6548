use serde::Serialize;

/// Why the device could not run a biometric challenge at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnavailableKind {
    NotEnrolled,
    NotSupported,
    PasscodeNotSet,
    Other,
}

/// Why a completed challenge did not authenticate the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DenialKind {
    UserCancelled,
    AuthFailed,
    LockedOut,
    Other,
}

/// Result of a single authentication attempt.
///
/// Every variant except `Authenticated` carries a message suitable for
/// direct display to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum AuthenticationOutcome {
    Authenticated,
    Unavailable { kind: UnavailableKind, reason: String },
    Denied { kind: DenialKind, reason: String },
    Error { message: String },
}

impl AuthenticationOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// The user-facing reason, or `None` when authenticated.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Authenticated => None,
            Self::Unavailable { reason, .. } | Self::Denied { reason, .. } => Some(reason),
            Self::Error { message } => Some(message),
        }
    }

    /// Short machine-readable label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Authenticated => "authenticated",
            Self::Unavailable { .. } => "unavailable",
            Self::Denied { .. } => "denied",
            Self::Error { .. } => "error",
        }
    }
}

/// Outcome of one attempt together with the session it left behind.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptSummary {
    #[serde(flatten)]
    pub outcome: AuthenticationOutcome,
    pub is_authenticated: bool,
    pub last_error: Option<String>,
}
