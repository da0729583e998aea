use std::sync::Arc;

use hourskill_accounts::config::ServiceConfig;
use hourskill_accounts::directory::{Directory, MemoryDirectory};
use hourskill_accounts::onboarding::routes::{AppState, onboarding_routes};
use hourskill_accounts::onboarding::service::OnboardingService;
use hourskill_accounts::password::CredentialHasher;
use hourskill_accounts::token::TokenIssuer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env();

    eprintln!("HourSkill accounts v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://0.0.0.0:{}/api", config.port);

    // The directory is volatile: initialized empty, discarded at exit.
    let directory: Arc<dyn Directory> = Arc::new(MemoryDirectory::new());
    let service = Arc::new(OnboardingService::new(
        directory,
        CredentialHasher::new(config.hashing.clone()),
        TokenIssuer::new(config.jwt_secret.clone()),
    ));

    let app = onboarding_routes(AppState { service });
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Account service started");
    axum::serve(listener, app).await?;

    Ok(())
}
