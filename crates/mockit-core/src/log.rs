//! Call log
//!
//! Append-only history of the argument vectors a mock observed. Entries are
//! never mutated or removed; verification only reads them.

use crate::record::Invocation;
use crate::value::Value;

/// Append-only list of observed calls
#[derive(Debug, Default, Clone)]
pub struct CallLog {
    entries: Vec<Invocation>,
}

impl CallLog {
    /// Create empty log
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a call, returning its sequence number
    pub fn append(&mut self, args: &[Value]) -> usize {
        self.entries.push(Invocation::from(args));
        self.entries.len() - 1
    }

    /// Check whether `args` was observed at least once
    #[inline]
    #[must_use]
    pub fn contains(&self, args: &[Value]) -> bool {
        self.position(args).is_some()
    }

    /// Sequence number of the first call with exactly `args`
    #[must_use]
    pub fn position(&self, args: &[Value]) -> Option<usize> {
        self.entries.iter().position(|call| call.same_args(args))
    }

    /// How many times `args` was observed
    #[must_use]
    pub fn count(&self, args: &[Value]) -> usize {
        self.entries.iter().filter(|call| call.same_args(args)).count()
    }

    /// Observed calls in order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Invocation] {
        &self.entries
    }

    /// Number of observed calls
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was observed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render up to `limit` calls for a failure message
    ///
    /// An empty log says so; a zero `limit` lists nothing.
    #[must_use]
    pub fn summary(&self, limit: usize) -> String {
        if self.entries.is_empty() {
            return ", no calls were recorded".to_string();
        }
        let shown: Vec<String> = self
            .entries
            .iter()
            .take(limit)
            .map(ToString::to_string)
            .collect();
        if shown.is_empty() {
            return String::new();
        }
        let mut out = format!("; observed calls: {}", shown.join(", "));
        if self.entries.len() > limit {
            out.push_str(&format!(" (+{} more)", self.entries.len() - limit));
        }
        out
    }
}
