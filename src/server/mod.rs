use std::{path::Path, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use log::info;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::trie::PrefixIndex;

pub mod suggestions;

/// Shared by every request task. The index is never mutated once loaded.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<PrefixIndex>,
}

impl AppState {
    pub fn new(index: Arc<PrefixIndex>) -> Self {
        Self { index }
    }
}

pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let app = Router::new().route("/api/suggestions", get(suggestions::suggestions));

    let app = match static_dir {
        Some(dir) => {
            info!("Serving static files from {}", dir.display());
            app.fallback_service(ServeDir::new(dir))
        }
        None => app,
    };

    app.layer(CorsLayer::permissive()).with_state(state)
}

pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("Read listener address")?;
    info!("Server running at http://{addr}");

    axum::serve(listener, app).await.context("Serve HTTP")
}
