use bbz_model::EntityType;
use thiserror::Error;

/// Failure reported by an [`EntityFetcher`](crate::EntityFetcher).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch {entity_type} {bbid}: {reason}")]
    Failed {
        entity_type: EntityType,
        bbid: String,
        reason: String,
    },
}

impl FetchError {
    pub fn failed(entity_type: EntityType, bbid: &str, reason: impl Into<String>) -> Self {
        FetchError::Failed {
            entity_type,
            bbid: bbid.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("contextual entity lookup failed: {0}")]
    Fetch(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, EditorError>;
