use serde::{Deserialize, Serialize};

/// One parsed (headline, primary text) pair. Only the response parser builds
/// these on the server, so both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCandidate {
    pub headline: String,
    pub primary_text: String,
}

/// Success body of `POST /api/generate-ads`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateAdsResponse {
    pub ads: Vec<AdCandidate>,
}
