use thiserror::Error;

/// The step of the JSON recovery ladder that last ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractionStage {
    /// Direct parse of the complete completion text.
    Direct,
    /// Relaxed scan for the last balanced `{...}` block.
    Relaxed,
}

impl std::fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionStage::Direct => write!(f, "direct parse"),
            ExtractionStage::Relaxed => write!(f, "relaxed brace extraction"),
        }
    }
}

#[derive(Debug, Error)]
pub enum InferenceError {
    /// The network call itself failed before a response arrived.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Request { status: u16, body: String },
    /// A 2xx payload that no recovery stage could coerce into valid JSON.
    #[error("no JSON recovered from completion (failed at {stage})")]
    MalformedResponse { stage: ExtractionStage },
}
