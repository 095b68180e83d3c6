use thiserror::Error;

/// Why a structured generation could not be used.
///
/// The service collapses every variant into the task's fallback value; the
/// distinction only matters for logs and tests.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("response is not valid JSON for this task: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response failed validation: {0}")]
    Invalid(String),

    #[error("no API key configured")]
    MissingApiKey,

    #[error("{0}")]
    Other(String),
}

impl GenerateError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }
}
