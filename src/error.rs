use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between a fixture file on disk and a clean
/// `Vec<CampaignRecord>`. The aggregation itself is total and cannot fail.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("could not read fixture {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input is not parseable as a JSON sequence of campaign objects.
    #[error("fixture is not a JSON array of campaign records: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record omits a required numeric field. The dashboard JS would
    /// happily zero-default these; the loader fails instead so a broken
    /// fixture never demos as a $0 campaign.
    #[error("campaign `{campaign_id}`: missing required field `{field}`")]
    MissingField {
        campaign_id: String,
        field: &'static str,
    },

    #[error("campaign `{campaign_id}`: `{field}` must be non-negative, got {value}")]
    NegativeValue {
        campaign_id: String,
        field: &'static str,
        value: f64,
    },
}
