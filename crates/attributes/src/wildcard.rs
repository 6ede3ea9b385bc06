//! Wildcard attribute registry: literal or `*`-pattern entries over
//! qualified call names.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use weft_core_types::{Attribute, AttributeSet, CallSite};

use crate::errors::AttributeError;
use crate::loader::AttributeBinding;
use crate::pattern::NamePattern;

struct WildcardEntry {
    pattern: NamePattern,
    attributes: AttributeSet,
}

#[derive(Default)]
struct WildcardSnapshot {
    literals: HashMap<String, AttributeSet>,
    /// Wildcard entries pre-sorted by precedence: longest literal prefix
    /// first, then greatest total literal length, then insertion order.
    wildcards: Vec<WildcardEntry>,
}

/// Pattern-keyed attribute registry.
///
/// Each entry maps a literal name or a wildcard pattern to one attribute
/// sequence. A single stored value and a stored one-element sequence are
/// indistinguishable after resolution: everything is normalized to a
/// sequence at insert time.
///
/// Precedence is first-match-wins under a fixed order: a literal entry
/// always beats any wildcard; among wildcard matches the longest literal
/// prefix wins, ties go to the pattern with more literal characters overall,
/// and remaining ties to the earliest-registered entry.
pub struct WildcardAttributeRegistry {
    snapshot: ArcSwap<WildcardSnapshot>,
}

impl WildcardAttributeRegistry {
    pub fn empty() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(WildcardSnapshot::default()),
        }
    }

    pub fn builder() -> WildcardRegistryBuilder {
        WildcardRegistryBuilder::default()
    }

    /// Build a registry from already-parsed configuration bindings.
    pub fn from_bindings(bindings: &[AttributeBinding]) -> Result<Self, AttributeError> {
        let mut builder = Self::builder();
        for binding in bindings {
            builder = builder.insert_many(&binding.pattern, binding.attributes.clone())?;
        }
        Ok(builder.build())
    }

    /// Atomically replace the registry contents with a rebuilt snapshot.
    pub fn install(&self, builder: WildcardRegistryBuilder) {
        let snapshot = builder.into_snapshot();
        debug!(
            literals = snapshot.literals.len(),
            wildcards = snapshot.wildcards.len(),
            "installing wildcard attribute snapshot"
        );
        self.snapshot.store(Arc::new(snapshot));
    }

    /// Resolve attributes for a name. The first entry matching under the
    /// documented precedence wins; nothing matching resolves to an empty
    /// sequence.
    pub fn resolve_name(&self, name: &str) -> AttributeSet {
        let snapshot = self.snapshot.load();
        if let Some(attrs) = snapshot.literals.get(name) {
            return attrs.clone();
        }
        snapshot
            .wildcards
            .iter()
            .find(|entry| entry.pattern.matches(name))
            .map(|entry| entry.attributes.clone())
            .unwrap_or_default()
    }

    /// Resolve attributes for a call site via its qualified name.
    pub fn resolve(&self, site: &CallSite) -> AttributeSet {
        self.resolve_name(&site.qualified_name())
    }
}

/// Accumulates pattern entries before they are frozen into a snapshot.
#[derive(Default)]
pub struct WildcardRegistryBuilder {
    entries: Vec<(NamePattern, AttributeSet)>,
}

impl WildcardRegistryBuilder {
    /// Bind a single attribute to a pattern. Stored as a one-element
    /// sequence, indistinguishable from `insert_many` with one value.
    pub fn insert_one(
        self,
        pattern: &str,
        attribute: Attribute,
    ) -> Result<Self, AttributeError> {
        self.insert_many(pattern, vec![attribute])
    }

    /// Bind an attribute sequence to a pattern.
    pub fn insert_many(
        mut self,
        pattern: &str,
        attributes: AttributeSet,
    ) -> Result<Self, AttributeError> {
        let pattern = NamePattern::parse(pattern)?;
        self.entries.push((pattern, attributes));
        Ok(self)
    }

    pub fn build(self) -> WildcardAttributeRegistry {
        let registry = WildcardAttributeRegistry::empty();
        registry.install(self);
        registry
    }

    fn into_snapshot(self) -> WildcardSnapshot {
        let mut literals = HashMap::new();
        let mut wildcards = Vec::new();
        for (pattern, attributes) in self.entries {
            match pattern {
                NamePattern::Literal(name) => {
                    // Last insert for the same literal wins, mirroring a
                    // plain map store.
                    literals.insert(name, attributes);
                }
                wildcard => wildcards.push(WildcardEntry {
                    pattern: wildcard,
                    attributes,
                }),
            }
        }
        // Stable sort keeps insertion order as the final tie-breaker.
        wildcards.sort_by(|a, b| {
            b.pattern
                .prefix_len()
                .cmp(&a.pattern.prefix_len())
                .then(b.pattern.literal_len().cmp(&a.pattern.literal_len()))
        });
        WildcardSnapshot { literals, wildcards }
    }
}
