//! Event-publication interceptor.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use weft_event_bus::EventBus;
use weft_intercept::{InterceptError, Interceptor, Invocation};

use crate::errors::SetupError;
use crate::event::{CallEvent, EventCapability, EventConstructor, EventKindRegistry};

/// Publishes a domain event after the wrapped call succeeds.
///
/// The event kind is resolved against the registry once, at setup: an
/// unknown kind or one whose declared capability is not [`EventCapability::Call`]
/// fails construction with a configuration error instead of failing every
/// call. Per call, the continuation runs first (exactly once); only a
/// successful result is followed by publication, and publication failures
/// are propagated as-is — delivery semantics are the bus's contract.
pub struct EventPublishInterceptor {
    kind: String,
    constructor: EventConstructor,
    bus: Arc<dyn EventBus<CallEvent>>,
}

impl std::fmt::Debug for EventPublishInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventPublishInterceptor")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl EventPublishInterceptor {
    pub fn new(
        kind: &str,
        registry: &EventKindRegistry,
        bus: Arc<dyn EventBus<CallEvent>>,
    ) -> Result<Self, SetupError> {
        let (capability, constructor) = registry
            .lookup(kind)
            .ok_or_else(|| SetupError::UnknownEventKind(kind.to_string()))?;
        if capability != EventCapability::Call {
            return Err(SetupError::IncompatibleEventKind {
                kind: kind.to_string(),
                capability,
            });
        }
        Ok(Self {
            kind: kind.to_string(),
            constructor,
            bus,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl Interceptor for EventPublishInterceptor {
    fn name(&self) -> &str {
        "event-publish"
    }

    fn intercept(&self, call: &mut Invocation<'_>) -> Result<Value, InterceptError> {
        let value = call.proceed()?;
        let event = (self.constructor)(call.site());
        debug!(call = %call.site(), kind = %self.kind, event = %event.id, "publishing call event");
        self.bus
            .publish(event)
            .map_err(|err| InterceptError::call(call.site(), err.to_string()))?;
        Ok(value)
    }
}
