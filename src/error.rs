//! Error types for element tree operations

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ElementError {
    #[error("Element not found: {0}")]
    ElementNotFound(Uuid),

    #[error("Tree structure error: {0}")]
    TreeStructure(String),
}

pub type Result<T> = std::result::Result<T, ElementError>;
