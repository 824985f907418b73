//! Shared, identity-carrying tables.
//!
//! A [`Table`] is the single composite structure of the value model: it is both a
//! sequence (values at keys `1, 2, … n`) and a map from arbitrary [`Key`]s. Storage
//! is an [`IndexMap`] so entries iterate in insertion order, which keeps the
//! serialized form of an unmodified table byte-identical across calls.
//!
//! Tables are reference-counted handles. Cloning a `Table` shares it, equality is
//! identity, and a table may contain itself:
//!
//! ```rust
//! use serde_luat::{to_string_minified, Table, Value};
//!
//! let table = Table::new();
//! table.set("self", table.clone());
//! table.push(1);
//!
//! assert_eq!(to_string_minified(&Value::Table(table)).unwrap(), "{1,[\"self\"]=nil}");
//! ```

use crate::{Error, Number, Result, Value};
use indexmap::IndexMap;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

type Entries = IndexMap<Key, Value>;

/// A table key: any value except nil, NaN and tables.
///
/// Floats holding an integral value in the `i64` range are normalized to
/// [`Key::Integer`], so `2.0` and `2` address the same slot.
///
/// # Examples
///
/// ```rust
/// use serde_luat::{Key, Value};
/// use std::convert::TryFrom;
///
/// assert_eq!(Key::try_from(2.0).unwrap(), Key::Integer(2));
/// assert!(Key::try_from(f64::NAN).is_err());
/// assert!(Key::try_from(Value::Nil).is_err());
/// ```
#[derive(Clone, Debug)]
pub enum Key {
    Bool(bool),
    Integer(i64),
    /// Non-integral or out-of-range float, never NaN
    Float(f64),
    String(Vec<u8>),
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Bool(a), Key::Bool(b)) => a == b,
            (Key::Integer(a), Key::Integer(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => a.to_bits() == b.to_bits(),
            (Key::String(a), Key::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Key::Bool(b) => b.hash(state),
            Key::Integer(i) => i.hash(state),
            Key::Float(f) => f.to_bits().hash(state),
            Key::String(s) => s.hash(state),
        }
    }
}

impl Key {
    /// Returns the key as a string slice if it is valid UTF-8 text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => std::str::from_utf8(s).ok(),
            _ => None,
        }
    }

    /// Returns the integer value of an integer key.
    #[inline]
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Key::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Integer(i64::from(value))
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Integer(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Integer(i64::from(value))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::String(value.as_bytes().to_vec())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::String(value.into_bytes())
    }
}

impl From<&[u8]> for Key {
    fn from(value: &[u8]) -> Self {
        Key::String(value.to_vec())
    }
}

impl From<Vec<u8>> for Key {
    fn from(value: Vec<u8>) -> Self {
        Key::String(value)
    }
}

impl TryFrom<Number> for Key {
    type Error = Error;

    fn try_from(value: Number) -> Result<Self> {
        match value {
            Number::Integer(i) => Ok(Key::Integer(i)),
            Number::Float(f) if f.is_nan() => Err(Error::invalid_key("table index is NaN")),
            Number::Float(f) => Ok(match value.as_i64() {
                Some(i) => Key::Integer(i),
                None => Key::Float(f),
            }),
        }
    }
}

impl TryFrom<f64> for Key {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Key::try_from(Number::Float(value))
    }
}

impl TryFrom<Value> for Key {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Nil => Err(Error::invalid_key("table index is nil")),
            Value::Bool(b) => Ok(Key::Bool(b)),
            Value::Number(n) => Key::try_from(n),
            Value::String(s) => Ok(Key::String(s)),
            Value::Table(_) => Err(Error::invalid_key("tables cannot be used as keys")),
            Value::Opaque(kind) => Err(Error::invalid_key(&format!(
                "{} values cannot be used as keys",
                kind
            ))),
        }
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Bool(b) => Value::Bool(b),
            Key::Integer(i) => Value::Number(Number::Integer(i)),
            Key::Float(f) => Value::Number(Number::Float(f)),
            Key::String(s) => Value::String(s),
        }
    }
}

/// Opaque identity of a table, derived from its heap address.
///
/// Two distinct tables with identical contents have different ids; clones of one
/// handle share an id. An id is only meaningful while the table is alive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(usize);

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table: {:#x}", self.0)
    }
}

/// A shared Lua-style table.
///
/// # Examples
///
/// ```rust
/// use serde_luat::{Table, Value};
///
/// let table = Table::new();
/// table.push("a");
/// table.push("b");
/// table.set("x", true);
///
/// assert_eq!(table.sequence_len(), 2);
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get(1).as_str(), Some("a"));
///
/// // Assigning nil removes the entry
/// table.set("x", Value::Nil);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Table(Rc<RefCell<Entries>>);

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Table(Rc::new(RefCell::new(IndexMap::with_capacity(capacity))))
    }

    /// Builds a table holding `values` at keys `1, 2, …`.
    ///
    /// A nil element leaves a hole at its position, as it would in a Lua
    /// constructor.
    pub fn from_sequence<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let iter = values.into_iter();
        let table = Table::with_capacity(iter.size_hint().0);
        for (index, value) in (1i64..).zip(iter) {
            table.set(index, value);
        }
        table
    }

    /// Returns the identity of this table.
    #[must_use]
    pub fn id(&self) -> TableId {
        TableId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    /// Returns `true` if both handles refer to the same table.
    #[must_use]
    pub fn ptr_eq(&self, other: &Table) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the value stored under `key`, or [`Value::Nil`] if absent.
    pub fn get(&self, key: impl Into<Key>) -> Value {
        self.0
            .borrow()
            .get(&key.into())
            .cloned()
            .unwrap_or_default()
    }

    /// Stores `value` under `key`. Storing nil removes the key.
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut entries = self.0.borrow_mut();
        if value.is_nil() {
            entries.shift_remove(&key);
        } else {
            entries.insert(key, value);
        }
    }

    /// Stores `value` under an arbitrary value key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is nil, NaN, a table, or an opaque value.
    pub fn try_set(&self, key: Value, value: impl Into<Value>) -> Result<()> {
        self.set(Key::try_from(key)?, value);
        Ok(())
    }

    /// Appends `value` after the current sequence prefix.
    pub fn push(&self, value: impl Into<Value>) {
        let next = self.sequence_len() + 1;
        self.set(next, value);
    }

    /// Removes `key`, returning its previous value or nil.
    pub fn remove(&self, key: impl Into<Key>) -> Value {
        self.0
            .borrow_mut()
            .shift_remove(&key.into())
            .unwrap_or_default()
    }

    /// Returns `true` if the table holds a value under `key`.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.0.borrow().contains_key(&key.into())
    }

    /// Length of the sequence prefix: the largest `n` such that keys `1..=n` are
    /// all present.
    #[must_use]
    pub fn sequence_len(&self) -> i64 {
        sequence_len(&self.0.borrow())
    }

    /// Total number of entries, sequence and keyed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Snapshot of all entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub(crate) fn borrow(&self) -> Ref<'_, Entries> {
        self.0.borrow()
    }
}

pub(crate) fn sequence_len(entries: &Entries) -> i64 {
    let mut n = 0;
    while entries.contains_key(&Key::Integer(n + 1)) {
        n += 1;
    }
    n
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// Contents are not printed: a table may contain itself.
impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Table");
        debug.field("id", &self.id());
        if let Ok(entries) = self.0.try_borrow() {
            debug.field("len", &entries.len());
        }
        debug.finish()
    }
}

impl<V: Into<Value>> FromIterator<V> for Table {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Table::from_sequence(iter)
    }
}
