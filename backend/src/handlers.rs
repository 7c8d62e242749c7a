use axum::extract::{Json, State};
use spin_wheel_core::api::{normalize_generated_texts, GeneratePrizesRequest, GeneratePrizesResponse};
use spin_wheel_core::MIN_PRIZES;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::error::Error;
use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

/// Asks the configured generator for a themed prize list.
pub async fn generate_prizes(
    State(state): State<AppState>,
    Json(request): Json<GeneratePrizesRequest>,
) -> Result<Json<GeneratePrizesResponse>, Error> {
    request.validate()?;

    let theme = request.effective_theme();
    let count = request.clamped_count();
    debug!("Generating {} prizes for theme '{}'", count, theme);

    let raw = state.generator.generate(theme, count).await?;
    let prizes = normalize_generated_texts(raw, count);

    if prizes.len() < MIN_PRIZES {
        warn!("Generator returned only {} usable prizes for theme '{}'", prizes.len(), theme);
        return Err(Error::NotEnoughPrizes(prizes.len()));
    }

    info!("Generated {} prizes for theme '{}'", prizes.len(), theme);
    Ok(Json(GeneratePrizesResponse { prizes }))
}
