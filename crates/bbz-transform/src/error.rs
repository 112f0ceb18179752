use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("form state has no {0} section")]
    MissingSection(&'static str),
    #[error("failed to construct {kind}: {message}")]
    Construct {
        kind: &'static str,
        message: String,
    },
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
