/// Playlist Manager - command-line client
use clap::Parser;
use playlist_client::ApiClient;
use playlist_core::HeadlessDocument;
use playlist_manager::{AppConfig, AppError, Cli};
use playlist_store::{FileStore, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playlist_manager=info,playlist_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let api = ApiClient::new(config.client_config())?;
    let storage = FileStore::open(config.storage.state_file.clone())?;
    let mut store = Store::new(api, Box::new(storage), Box::new(HeadlessDocument::new()));
    store.initialize_theme();

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = playlist_manager::run(cli.command, &mut store, &mut stdout).await {
        if let AppError::Client(client) = &err {
            if let Some(payload) = client.payload() {
                tracing::warn!(%payload, "Server rejected the request");
            }
        }
        return Err(err.into());
    }

    Ok(())
}
