use thiserror::Error;
use weft_core_types::WeftError;

#[derive(Debug, Error, Clone)]
pub enum AttributeError {
    /// Whole-type attribute lookup is a distinct error, not an empty result,
    /// so misconfigured callers are caught early instead of masked.
    #[error("type-level attribute lookup is unsupported (requested for {0})")]
    TypeLevelUnsupported(String),
    #[error("invalid name pattern: {0}")]
    InvalidPattern(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<AttributeError> for WeftError {
    fn from(value: AttributeError) -> Self {
        WeftError::new(value.to_string())
    }
}
