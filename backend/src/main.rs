use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::generator::{GeminiClient, PrizeGenerator};

mod config;
mod error;
mod generator;
mod handlers;
mod logging;
mod routes;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn PrizeGenerator>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::setup();

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!("Using model {} at {}", config.gemini.model, config.gemini.base_url);
    let state = AppState {
        generator: Arc::new(GeminiClient::new(config.gemini.clone())),
    };

    let app = routes::create_router(state, &config);

    info!("listening on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
