use std::sync::Arc;

use anyhow::Context;
use punch_server::{ServerConfig, StaticFiles};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let listener = punch_server::bind(&config)
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;

    log::info!("Server running at http://localhost:{}/", config.port);
    let files = Arc::new(StaticFiles::new(&config.root));
    log::info!("Serving {}", files.root().display());
    log::info!("Press Ctrl+C to stop the server");

    tokio::select! {
        result = punch_server::serve(listener, files) => result.context("server stopped")?,
        _ = tokio::signal::ctrl_c() => log::info!("Shutting down"),
    }
    Ok(())
}
