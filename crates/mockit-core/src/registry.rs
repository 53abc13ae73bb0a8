//! Behavior registry
//!
//! Provides [`BehaviorRegistry`], the ordered list of `(pattern, response)`
//! pairs a mock consults on every call. Entries are only ever appended and
//! never reordered; insertion order is the tie-break when several patterns
//! match the same call.

use crate::record::Pattern;
use crate::value::Value;

/// What a matched pattern produces
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Return these values (already validated against the signature)
    MockedValues(Vec<Value>),
    /// Invoke the original implementation with the call's arguments
    DelegateToReal,
    /// Return the zero value of every result type
    ReturnDefaults,
}

impl Response {
    /// Short name, for diagnostics
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MockedValues(_) => "mocked values",
            Self::DelegateToReal => "real method",
            Self::ReturnDefaults => "defaults",
        }
    }
}

/// One committed registration
#[derive(Debug, Clone)]
pub struct Behavior {
    /// Argument pattern
    pub pattern: Pattern,
    /// Response produced on match
    pub response: Response,
}

/// Ordered registry of behaviors
#[derive(Debug, Default, Clone)]
pub struct BehaviorRegistry {
    entries: Vec<Behavior>,
}

impl BehaviorRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a behavior, returning its index
    pub fn push(&mut self, pattern: Pattern, response: Response) -> usize {
        self.entries.push(Behavior { pattern, response });
        self.entries.len() - 1
    }

    /// First behavior, in registration order, whose pattern matches `args`
    #[must_use]
    pub fn find(&self, args: &[Value]) -> Option<&Behavior> {
        self.entries
            .iter()
            .find(|behavior| behavior.pattern.matches(args))
    }

    /// Get behavior by index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Behavior> {
        self.entries.get(index)
    }

    /// Get number of registered behaviors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Behavior> {
        self.entries.iter()
    }
}
