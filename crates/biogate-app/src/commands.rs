use anyhow::Result;
use biogate_auth::{AuthController, Session};
use biogate_core::auth::AttemptSummary;
use biogate_core::config::AppConfig;

use crate::setup::create_provider;

fn create_controller(config: &AppConfig) -> Result<AuthController> {
    let provider = create_provider(config)?;
    Ok(AuthController::new(provider, Session::new(), &config.auth))
}

pub async fn check(config: &AppConfig) -> Result<()> {
    let provider = create_provider(config)?;
    let availability = provider.check_biometry().await?;
    println!("{}", serde_json::to_string_pretty(&availability)?);
    Ok(())
}

pub async fn attempt(config: &AppConfig) -> Result<()> {
    let controller = create_controller(config)?;
    let summary = run_attempt(&controller).await;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

pub async fn cycle(config: &AppConfig) -> Result<()> {
    let controller = create_controller(config)?;

    let summary = run_attempt(&controller).await;
    println!("attempt\t{}", serde_json::to_string(&summary)?);

    controller.sign_out();
    println!(
        "sign-out\t{}",
        serde_json::to_string(&controller.session().snapshot())?
    );
    Ok(())
}

async fn run_attempt(controller: &AuthController) -> AttemptSummary {
    let outcome = controller.attempt().await;
    let state = controller.session().snapshot();
    AttemptSummary {
        outcome,
        is_authenticated: state.is_authenticated,
        last_error: state.last_error,
    }
}
