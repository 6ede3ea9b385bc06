//! Domain-event value and the capability-checked event-kind registry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

use weft_core_types::{CallSite, EventId};

/// Event published after an intercepted call completes.
#[derive(Clone, Debug)]
pub struct CallEvent {
    pub id: EventId,
    pub kind: String,
    pub site: CallSite,
    pub occurred_at: SystemTime,
}

impl CallEvent {
    pub fn new(kind: impl Into<String>, site: CallSite) -> Self {
        Self {
            id: EventId::new(),
            kind: kind.into(),
            site,
            occurred_at: SystemTime::now(),
        }
    }
}

/// What a registered event kind is allowed to describe. The publishing
/// interceptor only accepts `Call` kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventCapability {
    /// Constructed from a completed call's target reference.
    Call,
    /// Process lifecycle notifications; not constructible from a call.
    Lifecycle,
    /// Internal diagnostics; not constructible from a call.
    Diagnostic,
}

/// Builds one event value from the call site that just completed.
pub type EventConstructor = Arc<dyn Fn(&CallSite) -> CallEvent + Send + Sync>;

struct EventKindDef {
    capability: EventCapability,
    constructor: EventConstructor,
}

/// Named event-kind definitions resolved once at interceptor setup.
///
/// The registry replaces late reflective "class name → event type" lookup:
/// a kind is resolved from its configuration string exactly once, its
/// declared capability is checked against what the consumer requires, and
/// the typed constructor is stored thereafter.
#[derive(Default)]
pub struct EventKindRegistry {
    kinds: HashMap<String, EventKindDef>,
}

impl EventKindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        capability: EventCapability,
        constructor: EventConstructor,
    ) {
        self.kinds.insert(
            name.into(),
            EventKindDef {
                capability,
                constructor,
            },
        );
    }

    /// Register a call-event kind with the default constructor, which stamps
    /// the kind name onto a fresh event for the given site.
    pub fn register_call_kind(&mut self, name: &str) {
        let kind = name.to_string();
        self.register(
            name,
            EventCapability::Call,
            Arc::new(move |site| CallEvent::new(kind.clone(), site.clone())),
        );
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<(EventCapability, EventConstructor)> {
        self.kinds
            .get(name)
            .map(|def| (def.capability, def.constructor.clone()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }
}
