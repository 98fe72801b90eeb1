//! Generation pipeline: build prompt → one completion call → parse.

use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::ads::parser::parse_ads;
use crate::ads::prompts::build_prompt;
use crate::errors::AppError;
use crate::llm_client::CompletionService;
use crate::models::ad::AdCandidate;
use crate::models::brief::Brief;

/// Runs the full pipeline for one brief. An empty result is not an error.
pub async fn generate_ads(
    llm: &dyn CompletionService,
    brief: &Brief,
) -> Result<Vec<AdCandidate>, AppError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("generate_ads", %request_id);

    async move {
        if !brief.is_submittable() {
            warn!("Generating from an empty brief");
        }

        let prompt = build_prompt(brief);

        let raw = llm.complete(&prompt).await.map_err(|e| {
            error!("Completion call failed: {e}");
            AppError::Llm(e.to_string())
        })?;

        let ads = parse_ads(&raw);
        if ads.is_empty() {
            warn!("Completion returned no parseable ads");
        } else {
            info!("Generated {} ads", ads.len());
        }

        Ok::<_, AppError>(ads)
    }
    .instrument(span)
    .await
}
