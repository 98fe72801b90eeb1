//! In-memory state of one brief-collecting session: the form, the returned
//! previews and their liked flags. Nothing here is persisted.

use std::path::Path;

use tracing::{error, info};

use crate::collector::client::{AdsApiClient, ClientError};
use crate::collector::export::{render_export, write_export, ExportError};
use crate::collector::CollectorError;
use crate::models::ad::AdCandidate;
use crate::models::brief::{Brief, BriefField};

/// Shown to the user whenever a generation attempt fails, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate ads. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdPreview {
    pub ad: AdCandidate,
    pub liked: bool,
}

#[derive(Debug, Default)]
pub struct AdSession {
    brief: Brief,
    previews: Vec<AdPreview>,
    busy: bool,
    error: Option<String>,
}

impl AdSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brief(&self) -> &Brief {
        &self.brief
    }

    pub fn previews(&self) -> &[AdPreview] {
        &self.previews
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Message from the last failed generation, cleared when a new one starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_field(&mut self, field: BriefField, value: impl Into<String>) {
        self.brief.set_field(field, value);
    }

    /// Reads the whole file into the brief's CSV blob. The content is not parsed.
    pub fn load_csv(&mut self, path: &Path) -> Result<(), CollectorError> {
        let content = std::fs::read_to_string(path).map_err(|source| CollectorError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "Loaded {} bytes of reference copy from {}",
            content.len(),
            path.display()
        );
        self.brief.csv_data = content;
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.brief.is_submittable()
    }

    /// Sends the brief and replaces the previews with fresh, unliked ones.
    ///
    /// On failure the previous previews stay as they were, `error()` holds the
    /// generic retry message and the busy flag is reset.
    pub async fn generate(&mut self, client: &AdsApiClient) -> Result<usize, CollectorError> {
        if !self.is_submittable() {
            return Err(CollectorError::EmptyBrief);
        }

        self.busy = true;
        self.error = None;
        let result = client.generate(&self.brief).await;
        self.busy = false;

        self.apply_generation(result)
    }

    fn apply_generation(
        &mut self,
        result: Result<Vec<AdCandidate>, ClientError>,
    ) -> Result<usize, CollectorError> {
        match result {
            Ok(ads) => {
                self.previews = ads
                    .into_iter()
                    .map(|ad| AdPreview { ad, liked: false })
                    .collect();
                Ok(self.previews.len())
            }
            Err(e) => {
                error!("Error generating ads: {e}");
                self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
                Err(CollectorError::Generation(e))
            }
        }
    }

    /// Writes the current previews (without liked flags) as a JSON array.
    pub fn save_previews(&self, path: &Path) -> Result<(), CollectorError> {
        let ads: Vec<&AdCandidate> = self.previews.iter().map(|p| &p.ad).collect();
        let json =
            serde_json::to_string_pretty(&ads).map_err(|source| CollectorError::PreviewsFormat {
                path: path.to_path_buf(),
                source,
            })?;
        std::fs::write(path, json).map_err(|source| CollectorError::PreviewsIo {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved {} previews to {}", ads.len(), path.display());
        Ok(())
    }

    /// Replaces the previews with ones saved by `save_previews`, all unliked.
    pub fn load_previews(&mut self, path: &Path) -> Result<usize, CollectorError> {
        let content = std::fs::read_to_string(path).map_err(|source| CollectorError::PreviewsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let ads: Vec<AdCandidate> =
            serde_json::from_str(&content).map_err(|source| CollectorError::PreviewsFormat {
                path: path.to_path_buf(),
                source,
            })?;
        self.previews = ads
            .into_iter()
            .map(|ad| AdPreview { ad, liked: false })
            .collect();
        Ok(self.previews.len())
    }

    /// Flips the liked flag of the preview at `index` (0-based) and returns the
    /// new value, or `None` when there is no such preview.
    pub fn toggle_like(&mut self, index: usize) -> Option<bool> {
        let preview = self.previews.get_mut(index)?;
        preview.liked = !preview.liked;
        Some(preview.liked)
    }

    pub fn liked(&self) -> Vec<&AdCandidate> {
        self.previews
            .iter()
            .filter(|p| p.liked)
            .map(|p| &p.ad)
            .collect()
    }

    pub fn render_liked(&self) -> Result<String, ExportError> {
        render_export(&self.liked())
    }

    pub fn export_liked(&self, path: &Path) -> Result<(), ExportError> {
        write_export(path, &self.liked())
    }
}
