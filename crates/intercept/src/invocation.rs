//! Per-call invocation record and the single-use continuation.

use std::sync::Arc;

use serde_json::Value;

use weft_core_types::CallSite;

use crate::error::InterceptError;

/// A unit of cross-cutting behavior wrapped around a target call.
///
/// `intercept` receives the in-flight [`Invocation`] and decides whether to
/// call [`Invocation::proceed`] (at most once), return a substitute result
/// without proceeding, or fail. Implementations must be safe under
/// concurrent calls; any mutable state they hold needs atomic handling.
pub trait Interceptor: Send + Sync {
    fn name(&self) -> &str;

    fn intercept(&self, call: &mut Invocation<'_>) -> Result<Value, InterceptError>;
}

/// The underlying operation the chain eventually executes.
pub type TargetOp<'a> =
    dyn FnMut(&CallSite, &[Value]) -> Result<Value, InterceptError> + 'a;

/// One in-flight call: target identity, arguments, the ordered interceptor
/// list, and the cursor marking the next step.
///
/// Owned exclusively by the call that created it and dropped when the call
/// completes. The cursor is advanced before each step is dispatched
/// (increment-then-call), so "proceed at most once per position" is a
/// property of the structure rather than of interceptor discipline: once the
/// terminal target has run, any further `proceed` reports
/// [`InterceptError::Exhausted`] instead of re-running anything.
pub struct Invocation<'a> {
    site: CallSite,
    args: Vec<Value>,
    steps: Arc<[Arc<dyn Interceptor>]>,
    position: usize,
    target: &'a mut TargetOp<'a>,
}

impl<'a> Invocation<'a> {
    pub(crate) fn new(
        site: CallSite,
        args: Vec<Value>,
        steps: Arc<[Arc<dyn Interceptor>]>,
        target: &'a mut TargetOp<'a>,
    ) -> Self {
        Self {
            site,
            args,
            steps,
            position: 0,
            target,
        }
    }

    pub fn site(&self) -> &CallSite {
        &self.site
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Arguments are part of the mutable per-call record; an interceptor may
    /// rewrite them before proceeding.
    pub fn args_mut(&mut self) -> &mut Vec<Value> {
        &mut self.args
    }

    /// Index of the next step to run; the terminal position equals the
    /// interceptor count.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Run the next chain step and return its result.
    ///
    /// This is the only way forward: the step at the cursor runs, or the
    /// target executes once the cursor is past the last interceptor. Not
    /// calling this at all short-circuits everything deeper.
    pub fn proceed(&mut self) -> Result<Value, InterceptError> {
        let position = self.position;
        if position > self.steps.len() {
            return Err(InterceptError::Exhausted {
                site: self.site.clone(),
            });
        }
        self.position = position + 1;
        match self.steps.get(position).cloned() {
            Some(step) => step.intercept(self),
            None => (self.target)(&self.site, &self.args),
        }
    }
}
