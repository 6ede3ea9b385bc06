use thiserror::Error;
use weft_core_types::{CallSite, WeftError};

/// Errors surfaced by the chain engine and its interceptors.
///
/// Three distinct kinds, matching how they must be handled:
/// configuration errors are raised at setup and never retried; call errors
/// are whatever a live target or interceptor raised, propagated unchanged;
/// the exhausted variant is a usage error the cursor makes detectable.
#[derive(Debug, Error, Clone)]
pub enum InterceptError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("call through {site} failed: {message}")]
    Call { site: CallSite, message: String },
    #[error("continuation for {site} already ran to completion")]
    Exhausted { site: CallSite },
}

impl InterceptError {
    /// Failure raised by the target operation or by an interceptor step.
    pub fn call(site: &CallSite, message: impl Into<String>) -> Self {
        Self::Call {
            site: site.clone(),
            message: message.into(),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<InterceptError> for WeftError {
    fn from(value: InterceptError) -> Self {
        WeftError::new(value.to_string())
    }
}
