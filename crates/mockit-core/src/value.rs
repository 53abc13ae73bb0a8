//! Dynamic values
//!
//! Arguments and results cross the interception point as [`Value`]s, and a
//! target's parameter/result shapes are described by [`ValueType`]s. This is
//! what stands in for runtime reflection: every check the engine performs
//! (arity, assignability, zero values, deep equality) is expressed over these
//! two enums.

use crate::func::FuncRef;
use crate::signature::Signature;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The absent value
pub const NIL: Value = Value::Nil;

/// Runtime type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Accepts any value, nil included
    Any,
    /// Boolean
    Bool,
    /// Signed integer
    Int,
    /// Unsigned integer
    Uint,
    /// Floating point number
    Float,
    /// Single character
    Char,
    /// UTF-8 string
    String,
    /// An error; nil means "no error"
    Error,
    /// List with elements of one type
    List(Box<ValueType>),
    /// Map from key type to value type
    Map(Box<ValueType>, Box<ValueType>),
    /// Either nil or a value of the inner type
    Option(Box<ValueType>),
    /// Named record with ordered, typed fields
    Record {
        /// Record type name
        name: String,
        /// Field names and types, in declaration order
        fields: Vec<(String, ValueType)>,
    },
    /// A callable with the given signature
    Func(Box<Signature>),
}

impl ValueType {
    /// List of `elem`
    #[inline]
    #[must_use]
    pub fn list(elem: ValueType) -> Self {
        Self::List(Box::new(elem))
    }

    /// Map from `key` to `value`
    #[inline]
    #[must_use]
    pub fn map(key: ValueType, value: ValueType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Optional `inner`
    #[inline]
    #[must_use]
    pub fn option(inner: ValueType) -> Self {
        Self::Option(Box::new(inner))
    }

    /// Callable with `signature`
    #[inline]
    #[must_use]
    pub fn func(signature: Signature) -> Self {
        Self::Func(Box::new(signature))
    }

    /// Whether [`Value::Nil`] is a legal value of this type
    #[must_use]
    pub fn is_nilable(&self) -> bool {
        matches!(
            self,
            Self::Any | Self::Error | Self::List(_) | Self::Map(..) | Self::Option(_) | Self::Func(_)
        )
    }

    /// Zero value of this type
    ///
    /// Nilable types zero to [`Value::Nil`]; records zero field by field.
    #[must_use]
    pub fn zero(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::Int => Value::Int(0),
            Self::Uint => Value::Uint(0),
            Self::Float => Value::Float(0.0),
            Self::Char => Value::Char('\0'),
            Self::String => Value::String(String::new()),
            Self::Record { name, fields } => Value::Record {
                name: name.clone(),
                fields: fields
                    .iter()
                    .map(|(field, ty)| (field.clone(), ty.zero()))
                    .collect(),
            },
            Self::Any
            | Self::Error
            | Self::List(_)
            | Self::Map(..)
            | Self::Option(_)
            | Self::Func(_) => Value::Nil,
        }
    }

    /// Check whether `value` may be stored in a slot of this type
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        if let Self::Any = self {
            return true;
        }
        if value.is_nil() {
            return self.is_nilable();
        }

        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Uint, Value::Uint(_))
            | (Self::Float, Value::Float(_))
            | (Self::Char, Value::Char(_))
            | (Self::String, Value::String(_))
            | (Self::Error, Value::Error(_)) => true,
            (Self::List(elem), Value::List(items)) => items.iter().all(|item| elem.accepts(item)),
            (Self::Map(key_ty, value_ty), Value::Map(entries)) => entries
                .iter()
                .all(|(k, v)| key_ty.accepts(k) && value_ty.accepts(v)),
            (Self::Option(inner), v) => inner.accepts(v),
            (
                Self::Record { name, fields },
                Value::Record {
                    name: value_name,
                    fields: value_fields,
                },
            ) => {
                name == value_name
                    && fields.len() == value_fields.len()
                    && fields
                        .iter()
                        .zip(value_fields)
                        .all(|((field, ty), (value_field, v))| field == value_field && ty.accepts(v))
            }
            (Self::Func(signature), Value::Func(func)) => func.signature() == signature.as_ref(),
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Uint => f.write_str("uint"),
            Self::Float => f.write_str("float"),
            Self::Char => f.write_str("char"),
            Self::String => f.write_str("string"),
            Self::Error => f.write_str("error"),
            Self::List(elem) => write!(f, "[]{elem}"),
            Self::Map(key, value) => write!(f, "map[{key}]{value}"),
            Self::Option(inner) => write!(f, "?{inner}"),
            Self::Record { name, .. } => f.write_str(name),
            Self::Func(signature) => write!(f, "func{signature}"),
        }
    }
}

/// A runtime value crossing the interception point
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value: nil pointer, nil error, nil slice, no callback
    #[default]
    Nil,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    Uint(u64),
    /// Floating point number
    Float(f64),
    /// Single character
    Char(char),
    /// UTF-8 string
    String(String),
    /// A non-nil error carrying its message
    Error(String),
    /// Ordered elements
    List(Vec<Value>),
    /// Map entries in insertion order
    Map(Vec<(Value, Value)>),
    Record {
        /// Record type name
        name: String,
        /// Field values in declaration order
        fields: Vec<(String, Value)>,
    },
    /// A callable value
    Func(FuncRef),
}

impl Value {
    /// Check for [`Value::Nil`]
    #[inline]
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Build an error value
    #[inline]
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Borrow the string payload, if any
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the callable payload, if any
    #[must_use]
    pub fn as_func(&self) -> Option<&FuncRef> {
        match self {
            Self::Func(func) => Some(func),
            _ => None,
        }
    }

    /// Short name of the value's kind, for diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::String(_) => "string",
            Self::Error(_) => "error",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record { .. } => "record",
            Self::Func(_) => "func",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Char(c) => write!(f, "{c:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Error(message) => write!(f, "error({message:?})"),
            Self::List(items) => {
                f.write_str("[")?;
                write_joined(f, items.iter())?;
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Self::Record { name, fields } => {
                write!(f, "{name} {{")?;
                for (i, (field, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {field}: {v}")?;
                }
                f.write_str(" }")
            }
            Self::Func(func) => write!(f, "func {}", func.name()),
        }
    }
}

/// Render an argument or result vector as `(a, b, c)`
#[must_use]
pub fn display_values(values: &[Value]) -> String {
    struct Joined<'a>(&'a [Value]);

    impl fmt::Display for Joined<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("(")?;
            write_joined(f, self.0.iter())?;
            f.write_str(")")
        }
    }

    Joined(values).to_string()
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, value) in values.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

// ============================================================================
// From implementations
// ============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint(u64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Uint(v as u64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<FuncRef> for Value {
    fn from(v: FuncRef) -> Self {
        Value::Func(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// FromValue - typed extraction of results
// ============================================================================

/// Conversion failure when extracting a typed value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {got}")]
pub struct ConversionError {
    /// Expected kind
    pub expected: &'static str,
    /// Rendered value that was found instead
    pub got: String,
}

/// Extract a Rust value from a [`Value`]
pub trait FromValue: Sized {
    /// Convert, failing on a kind mismatch
    ///
    /// # Errors
    /// Returns [`ConversionError`] when `value` has a different kind.
    fn from_value(value: Value) -> Result<Self, ConversionError>;
}

macro_rules! impl_from_value {
    ($ty:ty, $variant:ident, $expected:literal) => {
        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, ConversionError> {
                match value {
                    Value::$variant(x) => Ok(x),
                    other => Err(ConversionError {
                        expected: $expected,
                        got: other.to_string(),
                    }),
                }
            }
        }
    };
}

impl_from_value!(bool, Bool, "bool");
impl_from_value!(i64, Int, "int");
impl_from_value!(u64, Uint, "uint");
impl_from_value!(f64, Float, "float");
impl_from_value!(char, Char, "char");
impl_from_value!(String, String, "string");

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Nil => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Nil => Ok(Vec::new()),
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ConversionError {
                expected: "list",
                got: other.to_string(),
            }),
        }
    }
}

/// Build a `Vec<Value>` from heterogeneous expressions
///
/// ```rust
/// use mockit_core::{values, Value, NIL};
///
/// let v = values!["arg", 3, NIL];
/// assert_eq!(v, vec![Value::from("arg"), Value::Int(3), Value::Nil]);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> ValueType {
        ValueType::Record {
            name: "Point".to_string(),
            fields: vec![
                ("x".to_string(), ValueType::Int),
                ("label".to_string(), ValueType::String),
            ],
        }
    }

    #[test]
    fn zero_values_of_scalars() {
        assert_eq!(ValueType::Bool.zero(), Value::Bool(false));
        assert_eq!(ValueType::Int.zero(), Value::Int(0));
        assert_eq!(ValueType::Uint.zero(), Value::Uint(0));
        assert_eq!(ValueType::Float.zero(), Value::Float(0.0));
        assert_eq!(ValueType::Char.zero(), Value::Char('\0'));
        assert_eq!(ValueType::String.zero(), Value::from(""));
    }

    #[test]
    fn zero_values_of_nilable_types_are_nil() {
        for ty in [
            ValueType::Any,
            ValueType::Error,
            ValueType::list(ValueType::Int),
            ValueType::map(ValueType::String, ValueType::Int),
            ValueType::option(ValueType::String),
            ValueType::func(Signature::new(vec![], vec![])),
        ] {
            assert!(ty.is_nilable());
            assert_eq!(ty.zero(), Value::Nil, "zero of {ty}");
        }
    }

    #[test]
    fn zero_record_is_zeroed_field_by_field() {
        let zero = point().zero();
        assert_eq!(
            zero,
            Value::Record {
                name: "Point".to_string(),
                fields: vec![
                    ("x".to_string(), Value::Int(0)),
                    ("label".to_string(), Value::from("")),
                ],
            }
        );
        assert!(point().accepts(&zero));
    }

    #[test]
    fn nil_only_assignable_to_nilable_types() {
        assert!(ValueType::Error.accepts(&NIL));
        assert!(ValueType::option(ValueType::Int).accepts(&NIL));
        assert!(!ValueType::String.accepts(&NIL));
        assert!(!ValueType::Int.accepts(&NIL));
        assert!(!point().accepts(&NIL));
    }

    #[test]
    fn scalar_assignability_requires_same_kind() {
        assert!(ValueType::String.accepts(&Value::from("out")));
        assert!(!ValueType::String.accepts(&Value::from(100)));
        assert!(!ValueType::Int.accepts(&Value::from(1u64)));
        assert!(ValueType::Any.accepts(&Value::from(1.5)));
    }

    #[test]
    fn compound_assignability_checks_elements() {
        let strings = ValueType::list(ValueType::String);
        assert!(strings.accepts(&Value::from(vec!["a", "b"])));
        assert!(strings.accepts(&Value::List(vec![])));
        assert!(!strings.accepts(&Value::List(vec![Value::from("a"), Value::from(1)])));

        let counts = ValueType::map(ValueType::String, ValueType::Int);
        assert!(counts.accepts(&Value::Map(vec![(Value::from("a"), Value::from(1))])));
        assert!(!counts.accepts(&Value::Map(vec![(Value::from(1), Value::from(1))])));

        let maybe = ValueType::option(ValueType::Int);
        assert!(maybe.accepts(&Value::from(Some(4))));
        assert!(!maybe.accepts(&Value::from("4")));
    }

    #[test]
    fn record_assignability_checks_name_and_fields() {
        let ok = Value::Record {
            name: "Point".to_string(),
            fields: vec![
                ("x".to_string(), Value::Int(3)),
                ("label".to_string(), Value::from("p")),
            ],
        };
        let wrong_name = Value::Record {
            name: "Vector".to_string(),
            fields: vec![
                ("x".to_string(), Value::Int(3)),
                ("label".to_string(), Value::from("p")),
            ],
        };
        assert!(point().accepts(&ok));
        assert!(!point().accepts(&wrong_name));
    }

    #[test]
    fn nil_equals_only_nil() {
        assert_eq!(Value::Nil, NIL);
        assert_ne!(Value::Nil, Value::from(""));
        assert_ne!(Value::Nil, Value::List(vec![]));
        assert_ne!(Value::from(0), Value::Nil);
    }

    #[test]
    fn option_conversion_maps_none_to_nil() {
        assert_eq!(Value::from(None::<&str>), Value::Nil);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn from_value_extracts_typed_results() {
        assert_eq!(String::from_value(Value::from("out")), Ok("out".to_string()));
        assert_eq!(Option::<String>::from_value(NIL), Ok(None));
        assert_eq!(
            Vec::<i64>::from_value(Value::from(vec![1, 2])),
            Ok(vec![1, 2])
        );
        let err = i64::from_value(Value::from("nope")).unwrap_err();
        assert_eq!(err.expected, "int");
    }

    #[test]
    fn display_renders_compact_values() {
        assert_eq!(
            display_values(&values!["arg", 3, NIL, Value::error("boom")]),
            r#"("arg", 3, nil, error("boom"))"#
        );
        assert_eq!(ValueType::list(ValueType::String).to_string(), "[]string");
        assert_eq!(
            ValueType::map(ValueType::String, ValueType::option(ValueType::Int)).to_string(),
            "map[string]?int"
        );
    }
}
