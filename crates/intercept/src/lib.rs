//! Interceptor chain engine: one `Invocation` per call, advanced by a
//! single-use cursor, wrapped around an arbitrary target operation.

pub mod dispatcher;
pub mod error;
pub mod invocation;

pub use dispatcher::{Dispatcher, InterceptorChain};
pub use error::InterceptError;
pub use invocation::{Interceptor, Invocation, TargetOp};
