use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid row key: {0:?}")]
    InvalidRowKey(String),
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
