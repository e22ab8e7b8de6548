use std::sync::Arc;

use anyhow::{bail, Result};
use biogate_core::config::AppConfig;
use biogate_provider::{BiometricProvider, SimulatedProvider};

/// Point the config at the simulated provider with a fixed challenge result.
pub fn apply_simulate_override(config: &mut AppConfig, simulate: Option<String>) {
    if let Some(result) = simulate {
        config.provider.mode = "simulated".into();
        config.provider.simulated.result = result;
    }
}

pub fn create_provider(config: &AppConfig) -> Result<Arc<dyn BiometricProvider>> {
    match config.provider.mode.as_str() {
        "simulated" => {
            tracing::info!("Using simulated biometric provider");
            Ok(Arc::new(SimulatedProvider::from_config(&config.provider.simulated)))
        }
        "native" => bail!("No native biometric provider is available on this host"),
        other => bail!("Unknown provider mode: {other}"),
    }
}
