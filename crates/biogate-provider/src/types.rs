use serde::{Deserialize, Serialize};

/// Error codes reported by the platform biometric subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiometryErrorCode {
    NotEnrolled,
    NotSupported,
    PasscodeNotSet,
    UserCancel,
    AuthFailed,
    Lockout,
    AppCancel,
    SystemCancel,
    UserFallback,
    InvalidContext,
    NotInteractive,
    NoDeviceCredential,
}

impl BiometryErrorCode {
    const ALL: [Self; 12] = [
        Self::NotEnrolled,
        Self::NotSupported,
        Self::PasscodeNotSet,
        Self::UserCancel,
        Self::AuthFailed,
        Self::Lockout,
        Self::AppCancel,
        Self::SystemCancel,
        Self::UserFallback,
        Self::InvalidContext,
        Self::NotInteractive,
        Self::NoDeviceCredential,
    ];

    /// All codes, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotEnrolled => "not-enrolled",
            Self::NotSupported => "not-supported",
            Self::PasscodeNotSet => "passcode-not-set",
            Self::UserCancel => "user-cancel",
            Self::AuthFailed => "auth-failed",
            Self::Lockout => "lockout",
            Self::AppCancel => "app-cancel",
            Self::SystemCancel => "system-cancel",
            Self::UserFallback => "user-fallback",
            Self::InvalidContext => "invalid-context",
            Self::NotInteractive => "not-interactive",
            Self::NoDeviceCredential => "no-device-credential",
        }
    }

    /// Parse a wire name. Unknown names are not an error; they mean the
    /// platform sent something this crate does not recognize.
    pub fn from_wire(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().find(|code| code.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for BiometryErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of biometric sensor the device offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiometryType {
    #[default]
    None,
    TouchId,
    FaceId,
    Fingerprint,
    Face,
    Iris,
}

impl BiometryType {
    pub fn from_wire(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "touch-id" => Some(Self::TouchId),
            "face-id" => Some(Self::FaceId),
            "fingerprint" => Some(Self::Fingerprint),
            "face" => Some(Self::Face),
            "iris" => Some(Self::Iris),
            _ => None,
        }
    }
}

/// Snapshot returned by the provider's availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometryAvailability {
    pub is_available: bool,
    pub code: Option<BiometryErrorCode>,
    pub reason: Option<String>,
    #[serde(default)]
    pub biometry_type: BiometryType,
    #[serde(default)]
    pub device_is_secure: bool,
}

impl BiometryAvailability {
    pub fn available(biometry_type: BiometryType) -> Self {
        Self {
            is_available: true,
            code: None,
            reason: None,
            biometry_type,
            device_is_secure: true,
        }
    }

    pub fn unavailable(code: Option<BiometryErrorCode>, reason: Option<String>) -> Self {
        Self {
            is_available: false,
            code,
            reason,
            biometry_type: BiometryType::None,
            device_is_secure: false,
        }
    }
}

/// Parameters for a single biometric challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticateOptions {
    pub prompt: String,
    pub cancel_label: String,
    /// Let the platform fall back to the device passcode.
    pub allow_fallback_credential: bool,
}

impl From<&biogate_core::config::AuthConfig> for AuthenticateOptions {
    fn from(config: &biogate_core::config::AuthConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
            cancel_label: config.cancel_title.clone(),
            allow_fallback_credential: config.allow_device_credential,
        }
    }
}
