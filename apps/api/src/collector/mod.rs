// Brief collector: client-side session state, the API client and file export.

use std::path::PathBuf;

use thiserror::Error;

pub mod client;
pub mod export;
pub mod session;

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("Fill in at least one brief field or load a CSV file")]
    EmptyBrief,

    #[error("Failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to access previews file {path}: {source}")]
    PreviewsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Previews file {path} is not a saved ad list: {source}")]
    PreviewsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Generation failed: {0}")]
    Generation(#[from] client::ClientError),
}
