//! Concrete cross-cutting interceptors:
//! - call tracing with a shared atomic counter
//! - domain-event publication after successful calls
//! - attribute-driven call gating
//!
//! All of them are ordinary chain elements; none is special to the engine.

pub mod errors;
pub mod event;
pub mod gate;
pub mod publish;
pub mod trace;

pub use errors::SetupError;
pub use event::{CallEvent, EventCapability, EventKindRegistry};
pub use gate::{AttributeGateInterceptor, DENY_ATTRIBUTE};
pub use publish::EventPublishInterceptor;
pub use trace::CallTraceInterceptor;
