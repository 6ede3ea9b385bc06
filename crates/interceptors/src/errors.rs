use thiserror::Error;
use weft_core_types::WeftError;
use weft_intercept::InterceptError;

use crate::event::EventCapability;

/// Setup-time configuration failures. Surfaced at construction, never
/// deferred to call time.
#[derive(Debug, Error, Clone)]
pub enum SetupError {
    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),
    #[error("event kind {kind} does not satisfy the call-event capability (declared {capability:?})")]
    IncompatibleEventKind {
        kind: String,
        capability: EventCapability,
    },
}

impl From<SetupError> for WeftError {
    fn from(value: SetupError) -> Self {
        WeftError::new(value.to_string())
    }
}

impl From<SetupError> for InterceptError {
    fn from(value: SetupError) -> Self {
        InterceptError::Config(value.to_string())
    }
}
