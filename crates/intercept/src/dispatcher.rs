//! Chain assembly and per-call dispatch.

use std::collections::HashSet;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde_json::Value;
use tracing::debug;

use weft_core_types::CallSite;

use crate::error::InterceptError;
use crate::invocation::{Interceptor, Invocation};

/// An ordered, validated interceptor list.
///
/// Ordering is caller-specified and fixed; validation rejects a malformed
/// list (duplicate interceptor names) at setup time.
#[derive(Clone)]
pub struct InterceptorChain {
    steps: Arc<[Arc<dyn Interceptor>]>,
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field(
                "steps",
                &self.steps.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl InterceptorChain {
    pub fn new(steps: Vec<Arc<dyn Interceptor>>) -> Result<Self, InterceptError> {
        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.name().to_string()) {
                return Err(InterceptError::Config(format!(
                    "duplicate interceptor in chain: {}",
                    step.name()
                )));
            }
        }
        Ok(Self {
            steps: steps.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            steps: Vec::new().into(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Drives calls through the configured chain.
///
/// The chain is read-mostly: it is installed before traffic and replaced
/// only by an atomic swap, so a call in flight keeps the chain it started
/// with. The dispatcher itself never catches, retries, or translates
/// failures; cross-cutting error handling is expressed as an interceptor.
pub struct Dispatcher {
    chain: ArcSwap<InterceptorChain>,
}

impl Dispatcher {
    pub fn new(chain: InterceptorChain) -> Self {
        Self {
            chain: ArcSwap::from_pointee(chain),
        }
    }

    /// Dispatcher with no interceptors: a pure passthrough to the target.
    pub fn passthrough() -> Self {
        Self::new(InterceptorChain::empty())
    }

    /// Atomically replace the chain for subsequent calls.
    pub fn install_chain(&self, chain: InterceptorChain) {
        debug!(steps = chain.len(), "installing interceptor chain");
        self.chain.store(Arc::new(chain));
    }

    pub fn chain_len(&self) -> usize {
        self.chain.load().len()
    }

    /// Run one call through the chain.
    ///
    /// Builds a fresh [`Invocation`] with the cursor at the first step and
    /// drives it; the target executes exactly once when the cursor passes
    /// the last interceptor, unless an earlier step short-circuits.
    pub fn dispatch<F>(
        &self,
        site: CallSite,
        args: Vec<Value>,
        mut target: F,
    ) -> Result<Value, InterceptError>
    where
        F: FnMut(&CallSite, &[Value]) -> Result<Value, InterceptError>,
    {
        let chain = self.chain.load_full();
        debug!(call = %site, steps = chain.len(), "dispatching call");
        let mut call = Invocation::new(site, args, chain.steps.clone(), &mut target);
        call.proceed()
    }
}
