use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::artifact::GameData;
use crate::storage;

/// Serves a previously written artifact; nothing is recomputed here
pub struct ServerService {
    port: u16,
    artifact: PathBuf,
}

impl ServerService {
    pub fn new(port: u16, artifact: PathBuf) -> Self {
        Self { port, artifact }
    }

    pub async fn run(&self) -> Result<()> {
        let data: GameData = storage::load_json(&self.artifact, "game data artifact")?;
        info!(
            "Serving {} tournaments, {} core players",
            data.total_tournaments,
            data.players.len()
        );

        let app = create_router(Arc::new(AppState::new(data)));

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
