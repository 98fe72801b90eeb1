//! Axum route handlers for the Ads API.

use axum::{extract::State, Json};

use crate::ads::generator::generate_ads;
use crate::errors::AppError;
use crate::models::ad::GenerateAdsResponse;
use crate::models::brief::Brief;
use crate::state::AppState;

/// POST /api/generate-ads
///
/// Turns a brief into ad candidates with a single completion call.
/// The list may be shorter than five, or empty.
pub async fn handle_generate_ads(
    State(state): State<AppState>,
    Json(brief): Json<Brief>,
) -> Result<Json<GenerateAdsResponse>, AppError> {
    let ads = generate_ads(state.llm.as_ref(), &brief).await?;
    Ok(Json(GenerateAdsResponse { ads }))
}

/// Any method other than POST on the generation route.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
