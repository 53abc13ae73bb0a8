//! mockit argument matchers
//!
//! Predicates usable in place of literal arguments when registering a
//! behavior. Every constructor returns an [`Arg`] ready to go into
//! [`FuncMock::with`](mockit_core::FuncMock::with) or the `args!` macro.
//!
//! # Example
//!
//! ```rust
//! use mockit_core::{args, Value};
//! use mockit_matchers::{any, not_nil};
//!
//! let pattern = args![any(), not_nil()];
//! assert!(pattern[0].accepts(&Value::Nil));
//! assert!(!pattern[1].accepts(&Value::Nil));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use mockit_core::{Arg, ArgumentMatcher, Value, ValueType};
use std::fmt;

/// Accepts every value, nil included
#[must_use]
pub fn any() -> Arg {
    Arg::matching(Any)
}

/// Accepts values deep-equal to `expected`
///
/// Behaves like a literal; useful when composing with [`not`].
#[must_use]
pub fn eq(expected: impl Into<Value>) -> Arg {
    Arg::matching(Equals(expected.into()))
}

/// Accepts every non-nil value
#[must_use]
pub fn not_nil() -> Arg {
    Arg::matching(NotNil)
}

/// Accepts values assignable to `ty`
#[must_use]
pub fn of_type(ty: ValueType) -> Arg {
    Arg::matching(OfType(ty))
}

/// Accepts values `inner` rejects
#[must_use]
pub fn not(inner: Arg) -> Arg {
    Arg::matching(Negate(inner))
}

/// Accepts values for which `predicate` returns true
///
/// `description` names the predicate in failure messages and logs.
#[must_use]
pub fn satisfies<F>(description: impl Into<String>, predicate: F) -> Arg
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arg::matching(Satisfies {
        description: description.into(),
        predicate: Box::new(predicate),
    })
}

/// Matcher behind [`any`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

impl ArgumentMatcher for Any {
    fn matches(&self, _candidate: &Value) -> bool {
        true
    }
}

/// Matcher behind [`eq`]
#[derive(Debug, Clone)]
pub struct Equals(pub Value);

impl ArgumentMatcher for Equals {
    fn matches(&self, candidate: &Value) -> bool {
        &self.0 == candidate
    }
}

/// Matcher behind [`not_nil`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NotNil;

impl ArgumentMatcher for NotNil {
    fn matches(&self, candidate: &Value) -> bool {
        !candidate.is_nil()
    }
}

/// Matcher behind [`of_type`]
#[derive(Debug, Clone)]
pub struct OfType(pub ValueType);

impl ArgumentMatcher for OfType {
    fn matches(&self, candidate: &Value) -> bool {
        self.0.accepts(candidate)
    }
}

/// Matcher behind [`not`]
#[derive(Debug, Clone)]
pub struct Negate(pub Arg);

impl ArgumentMatcher for Negate {
    fn matches(&self, candidate: &Value) -> bool {
        !self.0.accepts(candidate)
    }
}

/// Matcher behind [`satisfies`]
pub struct Satisfies {
    description: String,
    predicate: Box<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl fmt::Debug for Satisfies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Satisfies({})", self.description)
    }
}

impl ArgumentMatcher for Satisfies {
    fn matches(&self, candidate: &Value) -> bool {
        (self.predicate)(candidate)
    }
}
