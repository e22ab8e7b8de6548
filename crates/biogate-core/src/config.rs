use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Prompt and policy handed to the biometric challenge.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_cancel_title")]
    pub cancel_title: String,
    /// Fall back to the device passcode when biometrics cannot complete.
    #[serde(default = "default_allow_device_credential")]
    pub allow_device_credential: bool,
}

fn default_prompt() -> String {
    "Please authenticate to access the app".into()
}
fn default_cancel_title() -> String {
    "Cancel".into()
}
fn default_allow_device_credential() -> bool {
    true
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            cancel_title: default_cancel_title(),
            allow_device_credential: default_allow_device_credential(),
        }
    }
}

/// Which capability provider backs the controller.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// `"simulated"` or `"native"`.
    #[serde(default = "default_provider_mode")]
    pub mode: String,
    #[serde(default)]
    pub simulated: SimulatedConfig,
}

fn default_provider_mode() -> String {
    "simulated".into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            mode: default_provider_mode(),
            simulated: SimulatedConfig::default(),
        }
    }
}

/// Canned device and result for the simulated provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatedConfig {
    /// `face-id`, `touch-id`, `fingerprint`, `face`, `iris`, or `none`.
    #[serde(default = "default_biometry_type")]
    pub biometry_type: String,
    #[serde(default = "default_true")]
    pub enrolled: bool,
    #[serde(default = "default_true")]
    pub device_secure: bool,
    /// `success`, or the wire name of the error code the challenge fails with.
    #[serde(default = "default_result")]
    pub result: String,
    /// Message attached to a simulated failure.
    #[serde(default)]
    pub message: Option<String>,
}

fn default_biometry_type() -> String {
    "face-id".into()
}
fn default_true() -> bool {
    true
}
fn default_result() -> String {
    "success".into()
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            biometry_type: default_biometry_type(),
            enrolled: true,
            device_secure: true,
            result: default_result(),
            message: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the config: explicit path, then `config/default.toml`, then
    /// built-in defaults (simulated provider, fallback credential allowed).
    pub fn load_or_default(explicit_path: Option<&Path>) -> Self {
        let candidates = explicit_path
            .into_iter()
            .chain(std::iter::once(Path::new(DEFAULT_CONFIG_PATH)).filter(|p| p.exists()));

        for path in candidates {
            match Self::load(path) {
                Ok(cfg) => {
                    tracing::info!(
                        "Loaded {} (provider mode: {})",
                        path.display(),
                        cfg.provider.mode
                    );
                    return cfg;
                }
                Err(e) => tracing::warn!("Ignoring unreadable config {}: {e}", path.display()),
            }
        }

        let cfg = Self::default();
        tracing::info!("No usable config file, using built-in {} provider", cfg.provider.mode);
        cfg
    }
}
