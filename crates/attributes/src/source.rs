//! Common resolution seam over both registry variants.

use weft_core_types::{AttributeSet, CallSite};

use crate::errors::AttributeError;
use crate::exact::ExactAttributeRegistry;
use crate::wildcard::WildcardAttributeRegistry;

/// Read side of an attribute registry.
///
/// Both lookups resolve to an attribute sequence, empty when nothing is
/// configured. Type-level (whole-interface) lookup is deliberately not part
/// of the contract: `resolve_type` fails loudly so callers relying on it are
/// caught at setup rather than silently receiving nothing.
pub trait AttributeSource: Send + Sync {
    fn resolve(&self, site: &CallSite) -> AttributeSet;

    fn resolve_name(&self, name: &str) -> AttributeSet;

    fn resolve_type(&self, target: &str) -> Result<AttributeSet, AttributeError> {
        Err(AttributeError::TypeLevelUnsupported(target.to_string()))
    }
}

impl AttributeSource for ExactAttributeRegistry {
    fn resolve(&self, site: &CallSite) -> AttributeSet {
        ExactAttributeRegistry::resolve(self, site)
    }

    fn resolve_name(&self, name: &str) -> AttributeSet {
        ExactAttributeRegistry::resolve_name(self, name)
    }
}

impl AttributeSource for WildcardAttributeRegistry {
    fn resolve(&self, site: &CallSite) -> AttributeSet {
        WildcardAttributeRegistry::resolve(self, site)
    }

    fn resolve_name(&self, name: &str) -> AttributeSet {
        WildcardAttributeRegistry::resolve_name(self, name)
    }
}
