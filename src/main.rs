use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use neusatz_site::config::{Cli, Command, Config};
use neusatz_site::feed::PostStore;
use neusatz_site::state::AppState;
use neusatz_site::{routes, sitemap};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let data_dir = Config::data_dir(&cli);
    std::fs::create_dir_all(&data_dir)?;
    tracing::info!("Data directory: {}", data_dir.display());

    let config = Config::load(&cli)?;

    // Load the post snapshot once; restart to pick up a regenerated file.
    let store = PostStore::load(config.posts_path());

    // Batch mode: emit the sitemap and exit.
    if let Some(Command::Sitemap { out }) = cli.command {
        let xml = sitemap::generate(
            &config.site.base_url,
            store.all(),
            chrono::Utc::now().date_naive(),
        );
        match out {
            Some(path) => {
                std::fs::write(&path, xml)?;
                tracing::info!("Sitemap written to {}", path.display());
            }
            None => println!("{xml}"),
        }
        return Ok(());
    }

    let state = AppState::new(config.clone(), store);
    let app = routes::router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
