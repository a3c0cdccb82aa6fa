use anyhow::Result;
use links_site::config::Config;
use links_site::i18n::LanguageResolver;
use links_site::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("links_site=info".parse()?),
        )
        .init();

    info!("Starting links site");

    let config = Config::from_env()?;
    info!(
        default = %config.i18n.default_language,
        fallback = %config.i18n.fallback_language,
        negotiation = ?config.i18n.negotiation,
        "Language settings loaded"
    );

    let resolver = LanguageResolver::new(config.i18n.clone())?;
    server::serve(&config.bind_address(), AppState::new(resolver)).await
}
