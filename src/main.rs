use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use cedict_reader::{AppConfig, DictFetcher, FetchError, Loader, dictionary_exists, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("fetch") => {
            let dest = args.next().map(PathBuf::from).unwrap_or(config.dict_dir.clone());
            let path = fetch(config.download_url.clone(), dest).await?;
            println!("Dictionary saved to {}", path.display());
            Ok(())
        }
        Some(other) => {
            anyhow::bail!("Unknown command {other:?}. Usage: cedict-reader [fetch [DIR]]")
        }
        None => serve(config).await,
    }
}

async fn fetch(url: String, dest: PathBuf) -> anyhow::Result<PathBuf> {
    // The blocking client owns its own runtime; keep it off ours.
    let path = tokio::task::spawn_blocking(move || -> Result<PathBuf, FetchError> {
        DictFetcher::with_url(url)?.fetch_latest(&dest)
    })
    .await
    .context("Fetch task panicked")??;
    Ok(path)
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    if !dictionary_exists(&config.dict_dir) && config.auto_fetch {
        log::info!("No dictionary in {}, fetching it", config.dict_dir.display());
        fetch(config.download_url.clone(), config.dict_dir.clone()).await?;
    }

    // Dictionary data loading
    let dict = Loader::new(config.load_policy)
        .load_dir(&config.dict_dir)
        .context("Failed to load dictionary")?;
    let dict = Arc::new(dict);

    let app = handlers::api_router(dict);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
