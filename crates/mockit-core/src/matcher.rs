//! Pattern positions
//!
//! Each position of a registered pattern is an [`Arg`]: either a literal
//! compared by deep equality, or an [`ArgumentMatcher`] whose predicate is
//! asked instead.

use crate::func::FuncRef;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Predicate accepted in place of a literal argument
pub trait ArgumentMatcher: fmt::Debug + Send + Sync {
    /// Check whether `candidate` satisfies this matcher
    fn matches(&self, candidate: &Value) -> bool;
}

/// One position of a registered pattern
#[derive(Debug, Clone)]
pub enum Arg {
    /// Matches a deep-equal argument; `Nil` matches only `Nil`
    Literal(Value),
    /// Matches whatever the predicate accepts
    Matcher(Arc<dyn ArgumentMatcher>),
}

impl Arg {
    /// Wrap a matcher
    #[inline]
    #[must_use]
    pub fn matching(matcher: impl ArgumentMatcher + 'static) -> Self {
        Self::Matcher(Arc::new(matcher))
    }

    /// Check `candidate` against this position
    #[must_use]
    pub fn accepts(&self, candidate: &Value) -> bool {
        match self {
            Self::Literal(expected) => expected == candidate,
            Self::Matcher(matcher) => matcher.matches(candidate),
        }
    }

    /// Check for [`Arg::Matcher`]
    #[inline]
    #[must_use]
    pub fn is_matcher(&self) -> bool {
        matches!(self, Self::Matcher(_))
    }

    /// Literal value, if this position is one
    #[must_use]
    pub fn literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Matcher(_) => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Matcher(matcher) => write!(f, "{matcher:?}"),
        }
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Literal(v)
    }
}

impl From<Arc<dyn ArgumentMatcher>> for Arg {
    fn from(v: Arc<dyn ArgumentMatcher>) -> Self {
        Arg::Matcher(v)
    }
}

macro_rules! literal_arg {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Arg::Literal(Value::from(v))
                }
            }
        )+
    };
}

literal_arg!(bool, i32, i64, u32, u64, usize, f64, char, String, &str, FuncRef);

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        Arg::Literal(v.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Arg {
    fn from(v: Vec<T>) -> Self {
        Arg::Literal(v.into())
    }
}

/// Build a `Vec<Arg>` from literals and matchers
///
/// ```rust
/// use mockit_core::{args, Arg, NIL};
///
/// let pattern = args!["arg", NIL];
/// assert!(matches!(pattern[1], Arg::Literal(mockit_core::Value::Nil)));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}
