//! Exact-identity attribute registry.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use weft_core_types::{AttributeSet, CallSite};

#[derive(Default)]
struct ExactSnapshot {
    by_site: HashMap<CallSite, AttributeSet>,
    /// Same entries keyed by qualified name, for name-based resolution.
    by_name: HashMap<String, AttributeSet>,
}

impl ExactSnapshot {
    fn build(entries: HashMap<CallSite, AttributeSet>) -> Self {
        let by_name = entries
            .iter()
            .map(|(site, attrs)| (site.qualified_name(), attrs.clone()))
            .collect();
        Self {
            by_site: entries,
            by_name,
        }
    }
}

/// Direct CallSite-to-AttributeSet mapping; lookup is exact-match only.
///
/// The mapping is read-mostly: it is populated before traffic begins and any
/// reconfiguration replaces the whole snapshot atomically, so in-flight
/// lookups never observe a partial update.
pub struct ExactAttributeRegistry {
    snapshot: ArcSwap<ExactSnapshot>,
}

impl ExactAttributeRegistry {
    pub fn new(entries: HashMap<CallSite, AttributeSet>) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(ExactSnapshot::build(entries)),
        }
    }

    pub fn empty() -> Self {
        Self::new(HashMap::new())
    }

    /// Atomically replace the whole mapping.
    pub fn install(&self, entries: HashMap<CallSite, AttributeSet>) {
        debug!(entries = entries.len(), "installing exact attribute snapshot");
        self.snapshot
            .store(Arc::new(ExactSnapshot::build(entries)));
    }

    /// Resolve attributes for a call site. Unconfigured sites resolve to an
    /// empty set, never an absent value.
    pub fn resolve(&self, site: &CallSite) -> AttributeSet {
        self.snapshot
            .load()
            .by_site
            .get(site)
            .cloned()
            .unwrap_or_default()
    }

    /// Resolve by qualified `target::operation` name.
    pub fn resolve_name(&self, name: &str) -> AttributeSet {
        self.snapshot
            .load()
            .by_name
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().by_site.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ExactAttributeRegistry {
    fn default() -> Self {
        Self::empty()
    }
}
