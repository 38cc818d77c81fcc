use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use country_autocomplete::{
    config::Config,
    loader,
    server::{self, AppState},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    let index = loader::load_from_path(&config.words)
        .with_context(|| format!("Load word list {}", config.words.display()))?;
    let state = AppState::new(Arc::new(index));
    let app = server::router(state, config.static_dir.as_deref());

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Listen at {addr}"))?;

    server::serve(listener, app).await
}
