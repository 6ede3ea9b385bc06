//! Attribute registry: resolves configuration metadata for a call site by
//! exact identity or wildcard name pattern.

pub mod errors;
pub mod exact;
pub mod loader;
pub mod pattern;
pub mod source;
pub mod wildcard;

pub use errors::AttributeError;
pub use exact::ExactAttributeRegistry;
pub use loader::{load_bindings, AttributeBinding, AttributeConfig};
pub use pattern::NamePattern;
pub use source::AttributeSource;
pub use wildcard::{WildcardAttributeRegistry, WildcardRegistryBuilder};

#[cfg(test)]
mod tests;
