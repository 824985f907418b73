//! Dynamic value representation.
//!
//! This module provides the [`Value`] enum, the closed set of kinds the serializer
//! accepts, and [`Number`], which keeps integers and floats apart the way Lua 5.3+
//! does.
//!
//! ## Core Types
//!
//! - [`Value`]: nil, boolean, number, byte string, table, or an opaque host kind
//! - [`Number`]: a 64-bit integer or a double (which may be NaN or infinite)
//! - [`OpaqueKind`]: functions, userdata and threads, which have no literal form
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_luat::{lua, Table, Value};
//!
//! let nil = Value::Nil;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let bytes = Value::from(vec![0xffu8, 0x00]);
//!
//! let table = lua!({ "name" => "Alice", "age" => 30 });
//! assert!(table.is_table());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_luat::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from(42);
//! assert_eq!(i64::try_from(value).unwrap(), 42);
//! ```

use crate::{Error, Table};
use std::fmt;

/// A dynamically-typed value.
///
/// # Examples
///
/// ```rust
/// use serde_luat::{Number, Value};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::from("hello");
///
/// assert!(Value::Nil.is_nil());
/// assert!(num.is_number());
/// assert_eq!(text.type_name(), "string");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Number(Number),
    /// Raw bytes; not required to be UTF-8
    String(Vec<u8>),
    Table(Table),
    /// A host value with no literal form
    Opaque(OpaqueKind),
}

/// Host kinds that exist in a Lua state but cannot be written as literals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpaqueKind {
    Function,
    Userdata,
    Thread,
}

impl OpaqueKind {
    /// Returns the Lua type name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OpaqueKind::Function => "function",
            OpaqueKind::Userdata => "userdata",
            OpaqueKind::Thread => "thread",
        }
    }
}

impl fmt::Display for OpaqueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric value: a 64-bit integer or a double.
///
/// `Display` renders the literal form used by the serializer: NaN and the
/// infinities become `(0/0)`, `(1/0)` and `(-1/0)`, integral floats in the `i64`
/// range drop their fractional part, and other floats use the shortest
/// representation that reads back to the same double.
///
/// # Examples
///
/// ```rust
/// use serde_luat::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(5.0).to_string(), "5");
/// assert_eq!(Number::Float(5.5).to_string(), "5.5");
/// assert_eq!(Number::Float(f64::NAN).to_string(), "(0/0)");
/// assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "(-1/0)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

// 2^63; `i64::MAX as f64` rounds up to this value.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it has no fractional part and fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luat::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Float(1e19).as_i64(), None);
    /// assert_eq!(Number::Float(f64::INFINITY).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::Float(f) => {
                if f.fract() == 0.0 && f >= -I64_UPPER_BOUND && f < I64_UPPER_BOUND {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_nan() => f.write_str("(0/0)"),
            Number::Float(fl) if fl.is_infinite() => {
                f.write_str(if fl > 0.0 { "(1/0)" } else { "(-1/0)" })
            }
            Number::Float(fl) => match self.as_i64() {
                Some(i) => write!(f, "{}", i),
                // Debug switches to exponent notation for very large and small
                // magnitudes, which Lua reads back unchanged.
                None => write!(f, "{:?}", fl),
            },
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// Returns the Lua type name of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luat::{OpaqueKind, Value};
    ///
    /// assert_eq!(Value::Nil.type_name(), "nil");
    /// assert_eq!(Value::from(1.5).type_name(), "number");
    /// assert_eq!(Value::Opaque(OpaqueKind::Thread).type_name(), "thread");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Table(_) => "table",
            Value::Opaque(kind) => kind.as_str(),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// Returns the raw bytes of a string value.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a string value as `&str` if its bytes are valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luat::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(vec![0xffu8]).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|s| std::str::from_utf8(s).ok())
    }

    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| Error::custom(format!("expected integer, found {:?}", value)))
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| Error::custom(format!("expected number, found {:?}", value)))
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::custom(format!("expected boolean, found {:?}", value)))
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(Error::custom(format!(
                "expected string, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        let bytes = Vec::<u8>::try_from(value)?;
        String::from_utf8(bytes).map_err(Error::custom)
    }
}

impl TryFrom<Value> for Table {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Table(t) => Ok(t),
            _ => Err(Error::custom(format!(
                "expected table, found {}",
                value.type_name()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::Integer(i64::from(value)))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::Integer(i64::from(value)))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(i64::from(value)))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::Integer(i64::from(value)))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Integer(i64::from(value)))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(i64::from(value)))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::String(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::String(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Table(Table::from_sequence(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::Number(Number::Integer(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = Value::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        assert!(i64::try_from(Value::from("test")).is_err());
    }

    #[test]
    fn test_tryfrom_string() {
        let result = String::try_from(Value::from("hello")).unwrap();
        assert_eq!(result, "hello");

        assert!(String::try_from(Value::from(vec![0xffu8])).is_err());
        assert!(String::try_from(Value::from(42)).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::String(b"test".to_vec()));
        assert_eq!(Value::from(None::<i32>), Value::Nil);
        assert_eq!(Value::from(Some(1)), Value::from(1));
    }

    #[test]
    fn test_from_vec_builds_sequence() {
        let value = Value::from(vec![Value::from(1), Value::from(2)]);
        let table = value.as_table().unwrap();
        assert_eq!(table.sequence_len(), 2);
        assert_eq!(table.get(2), Value::from(2));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Integer(-7).to_string(), "-7");
        assert_eq!(Number::Float(-0.0).to_string(), "0");
        assert_eq!(Number::Float(0.1).to_string(), "0.1");
        assert_eq!(Number::Float(1e300).to_string(), "1e300");
        assert_eq!(Number::Float(1.5e-10).to_string(), "1.5e-10");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "(1/0)");
        assert_eq!(
            Number::Float(-9_223_372_036_854_775_808.0).to_string(),
            "-9223372036854775808"
        );
        assert_eq!(
            Number::Float(9_223_372_036_854_775_808.0).to_string(),
            "9.223372036854776e18"
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(true).type_name(), "boolean");
        assert_eq!(Value::Table(Table::new()).type_name(), "table");
        assert_eq!(Value::Opaque(OpaqueKind::Userdata).type_name(), "userdata");
    }
}
