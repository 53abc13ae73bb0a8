//! Callable signatures
//!
//! A [`Signature`] is captured once from the target when a mock is built and
//! every registration is validated against it.

use crate::error::{Arity, MockError};
use crate::value::{Value, ValueType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered parameter and result types of a callable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    params: Vec<ValueType>,
    results: Vec<ValueType>,
}

impl Signature {
    /// Create signature from parameter and result types
    #[inline]
    #[must_use]
    pub fn new(params: Vec<ValueType>, results: Vec<ValueType>) -> Self {
        Self { params, results }
    }

    /// Parameter types
    #[inline]
    #[must_use]
    pub fn params(&self) -> &[ValueType] {
        &self.params
    }

    /// Result types
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[ValueType] {
        &self.results
    }

    /// Number of parameters
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Number of results
    #[inline]
    #[must_use]
    pub fn result_arity(&self) -> usize {
        self.results.len()
    }

    /// Zero value for every result type, in order
    #[must_use]
    pub fn zero_results(&self) -> Vec<Value> {
        self.results.iter().map(ValueType::zero).collect()
    }

    /// Check an argument count against the parameter arity
    ///
    /// # Errors
    /// Returns [`MockError::ArityMismatch`] when the counts differ.
    pub fn check_arguments(&self, count: usize) -> Result<(), MockError> {
        if count == self.arity() {
            Ok(())
        } else {
            Err(MockError::ArityMismatch {
                position: Arity::Arguments,
                expected: self.arity(),
                got: count,
            })
        }
    }

    /// Check a result vector against the result types
    ///
    /// Both the count and the assignability of every position are checked;
    /// the first offending position is reported.
    ///
    /// # Errors
    /// Returns [`MockError::ArityMismatch`] or [`MockError::TypeMismatch`].
    pub fn check_results(&self, values: &[Value]) -> Result<(), MockError> {
        if values.len() != self.result_arity() {
            return Err(MockError::ArityMismatch {
                position: Arity::Results,
                expected: self.result_arity(),
                got: values.len(),
            });
        }

        for (index, (ty, value)) in self.results.iter().zip(values).enumerate() {
            if !ty.accepts(value) {
                return Err(MockError::TypeMismatch {
                    index,
                    expected: ty.clone(),
                    got: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, ty) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str(")")?;
        match self.results.as_slice() {
            [] => Ok(()),
            [single] => write!(f, " {single}"),
            many => {
                f.write_str(" (")?;
                for (i, ty) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str(")")
            }
        }
    }
}
