use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sublynx_app::config::Config;
use sublynx_app::shell;
use sublynx_app::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sublynx_app=info,sublynx_core=info,sublynx_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = Config::from_env();
    tracing::info!(session_path = %config.session_path().display(), "Loaded configuration");

    // --- State ---
    let mut state = AppState::new(&config);
    if let Some(user) = state.sessions.user() {
        tracing::info!(email = %user.email, "Resuming persisted session");
    }

    shell::run(&mut state).await
}
