#![allow(dead_code)]

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Shared error type for the weft kernel crates.
#[derive(Debug, Error, Clone)]
pub enum WeftError {
    #[error("{message}")]
    Message { message: String },
}

impl WeftError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

/// Identity of one interceptable target operation.
///
/// A call site pairs the target's type name with the operation name and is
/// the key under which attribute metadata is registered. Immutable once
/// created.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CallSite {
    target: String,
    operation: String,
}

impl CallSite {
    pub fn new(target: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            operation: operation.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Fully qualified `target::operation` name used for pattern lookups.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.target, self.operation)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.target, self.operation)
    }
}

/// One opaque metadata value attached to a call site.
///
/// Interceptors match on `kind` and interpret `payload` themselves; payload
/// kinds an interceptor does not understand are ignored, not rejected.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub kind: String,
    pub payload: serde_json::Value,
}

impl Attribute {
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Marker attribute with no payload beyond its kind.
    pub fn marker(kind: impl Into<String>) -> Self {
        Self::new(kind, serde_json::Value::Null)
    }
}

/// Ordered metadata sequence for one call site or pattern.
///
/// Registry lookups always produce one of these; absence of configuration is
/// an empty sequence, never a missing value.
pub type AttributeSet = Vec<Attribute>;

#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EventId(pub String);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
