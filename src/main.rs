use campdesk::commands::Cli;
use campdesk::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env overrides before anything reads the configuration
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("campdesk=debug")))
            .with_target(false)
            .init();
    }

    Cli::menu().await
}
