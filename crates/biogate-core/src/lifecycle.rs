use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the stderr subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

pub fn log_startup(config: &AppConfig) {
    tracing::info!(
        provider = %config.provider.mode,
        device_credential_fallback = config.auth.allow_device_credential,
        "biogate {} ready",
        env!("CARGO_PKG_VERSION")
    );
}

pub fn log_shutdown() {
    tracing::info!("biogate exiting");
}
