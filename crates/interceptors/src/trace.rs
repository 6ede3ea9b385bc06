//! Debug/counting interceptor.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use weft_intercept::{InterceptError, Interceptor, Invocation};

/// Pure side-effecting passthrough: counts the call, emits a pre-call and a
/// post-call observation, and returns the wrapped result unchanged.
///
/// The counter is shared and incremented atomically, exactly once per call,
/// before proceeding — so the count covers failed calls too and stays exact
/// under concurrent load.
pub struct CallTraceInterceptor {
    calls: Arc<AtomicU64>,
}

impl CallTraceInterceptor {
    pub fn new() -> Self {
        Self::with_counter(Arc::new(AtomicU64::new(0)))
    }

    /// Share an externally owned counter, e.g. between several chains.
    pub fn with_counter(calls: Arc<AtomicU64>) -> Self {
        Self { calls }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.calls)
    }
}

impl Default for CallTraceInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl Interceptor for CallTraceInterceptor {
    fn name(&self) -> &str {
        "call-trace"
    }

    fn intercept(&self, call: &mut Invocation<'_>) -> Result<Value, InterceptError> {
        let seq = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(call = %call.site(), seq, "entering call");
        let result = call.proceed();
        debug!(call = %call.site(), seq, ok = result.is_ok(), "call completed");
        result
    }
}
