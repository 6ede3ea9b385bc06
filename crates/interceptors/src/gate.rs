//! Attribute-driven call gate.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use weft_attributes::AttributeSource;
use weft_intercept::{InterceptError, Interceptor, Invocation};

/// Attribute kind that denies a call outright.
pub const DENY_ATTRIBUTE: &str = "deny";

/// Denies a call when its site carries a `deny` attribute; otherwise a
/// passthrough. The generic hook point a real authorization policy would
/// occupy: the decision input comes entirely from registry metadata, the
/// target stays unaware.
pub struct AttributeGateInterceptor {
    source: Arc<dyn AttributeSource>,
}

impl AttributeGateInterceptor {
    pub fn new(source: Arc<dyn AttributeSource>) -> Self {
        Self { source }
    }
}

impl Interceptor for AttributeGateInterceptor {
    fn name(&self) -> &str {
        "attribute-gate"
    }

    fn intercept(&self, call: &mut Invocation<'_>) -> Result<Value, InterceptError> {
        let attributes = self.source.resolve(call.site());
        if let Some(denial) = attributes.iter().find(|attr| attr.kind == DENY_ATTRIBUTE) {
            warn!(call = %call.site(), reason = %denial.payload, "call denied by attribute");
            return Err(InterceptError::call(
                call.site(),
                format!("denied by attribute: {}", denial.payload),
            ));
        }
        call.proceed()
    }
}
