use thiserror::Error;

/// Failures talking to the text-generation service.
#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("narrative service API key is not configured")]
    MissingApiKey,

    #[error("narrative request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("narrative service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("narrative response malformed: {0}")]
    Malformed(String),
}

/// Any failure inside the request → render → save pipeline.
///
/// Every variant is handled the same way by the trigger: log, reset, no retry.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Narrative(#[from] NarrativeError),

    #[error("PDF rendering failed: {0}")]
    Render(String),

    #[error("report delivery failed: {0}")]
    Delivery(String),
}
