//! Invocation records
//!
//! An [`Invocation`] is an immutable argument vector. Registered patterns are
//! `Invocation<Arg>` (positions may be matchers); logged calls are
//! `Invocation<Value>` (plain inputs, never outputs).

use crate::matcher::Arg;
use crate::value::{display_values, Value};
use std::fmt;

/// Immutable argument vector
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation<A = Value> {
    args: Vec<A>,
}

/// Registered argument pattern
pub type Pattern = Invocation<Arg>;

impl<A> Invocation<A> {
    /// Snapshot `args`
    #[inline]
    #[must_use]
    pub fn new(args: Vec<A>) -> Self {
        Self { args }
    }

    /// Positions, in order
    #[inline]
    #[must_use]
    pub fn args(&self) -> &[A] {
        &self.args
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check for a zero-arity invocation
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl Invocation<Arg> {
    /// Check every position of `args` against this pattern
    ///
    /// Vectors of a different length never match.
    #[must_use]
    pub fn matches(&self, args: &[Value]) -> bool {
        self.args.len() == args.len()
            && self
                .args
                .iter()
                .zip(args)
                .all(|(pattern, actual)| pattern.accepts(actual))
    }
}

impl Invocation<Value> {
    /// Literal, nil-safe comparison with `args`
    #[inline]
    #[must_use]
    pub fn same_args(&self, args: &[Value]) -> bool {
        self.args.as_slice() == args
    }
}

impl From<&[Value]> for Invocation<Value> {
    fn from(args: &[Value]) -> Self {
        Self::new(args.to_vec())
    }
}

impl fmt::Display for Invocation<Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_values(&self.args))
    }
}

impl fmt::Display for Invocation<Arg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
