//! Response resolution
//!
//! Maps an incoming argument vector to what the mock should do with it. The
//! resolver only decides; running the real implementation is left to the
//! caller so it can happen outside the mock's lock.

use crate::registry::{BehaviorRegistry, Response};
use crate::value::Value;

/// Outcome of resolving one call
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Return these values
    Values(Vec<Value>),
    /// Invoke the original implementation
    CallReal,
}

/// Select the response for `args`
///
/// The first registered behavior whose pattern matches wins. Unmatched calls
/// fall back to `defaults`; that is a legal outcome, not an error.
#[must_use]
pub fn resolve(registry: &BehaviorRegistry, defaults: &[Value], args: &[Value]) -> Resolution {
    match registry.find(args).map(|behavior| &behavior.response) {
        Some(Response::MockedValues(values)) => Resolution::Values(values.clone()),
        Some(Response::DelegateToReal) => Resolution::CallReal,
        Some(Response::ReturnDefaults) | None => Resolution::Values(defaults.to_vec()),
    }
}
