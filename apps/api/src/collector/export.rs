//! Plain-text export of liked ads.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::ad::AdCandidate;

pub const DEFAULT_EXPORT_FILE: &str = "selected_headlines.txt";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Please select at least one headline to download.")]
    NothingSelected,

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One block per ad, numbered from 1 over the given (liked) ads only.
pub fn render_export(ads: &[&AdCandidate]) -> Result<String, ExportError> {
    if ads.is_empty() {
        return Err(ExportError::NothingSelected);
    }

    Ok(ads
        .iter()
        .enumerate()
        .map(|(i, ad)| {
            format!(
                "Ad {}:\nHeadline: {}\nPrimary Text: {}\n\n",
                i + 1,
                ad.headline,
                ad.primary_text
            )
        })
        .collect())
}

/// Writes the export to `path`. Nothing is written when `ads` is empty.
pub fn write_export(path: &Path, ads: &[&AdCandidate]) -> Result<(), ExportError> {
    let content = render_export(ads)?;
    std::fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Exported {} ads to {}", ads.len(), path.display());
    Ok(())
}
