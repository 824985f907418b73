//! # serde_luat
//!
//! Serialize dynamic values, and anything implementing Serde's `Serialize`, into
//! Lua table constructor literals.
//!
//! ## What is produced?
//!
//! Output is a Lua expression that evaluates back to the value:
//!
//! ```text
//! {
//!   "a",
//!   "b",
//!   ["name"] = "Alice",
//!   ["ratio"] = 0.5,
//!   ["missing"] = (0/0)
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Mixed tables**: the sequence prefix is written positionally, remaining
//!   entries as `[key] = value`
//! - **Cycle safe**: a table reached again while it is still being written is
//!   emitted as `nil`
//! - **Depth bounded**: nesting beyond `max_depth` (200 by default) is an error
//! - **Byte exact strings**: any byte sequence is escaped into an ASCII literal
//! - **Deterministic**: keyed entries follow insertion order
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_luat::{lua, to_string, to_string_minified};
//!
//! let value = lua!({ 1 => "a", 2 => "b", "x" => true });
//! assert_eq!(to_string_minified(&value).unwrap(), r#"{"a","b",["x"]=true}"#);
//!
//! let pretty = to_string(&value).unwrap();
//! assert!(pretty.starts_with("{\n  \"a\","));
//! ```
//!
//! ### From Rust types
//!
//! ```rust
//! use serde::Serialize;
//! use serde_luat::{to_string_from, SerializeOptions};
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let user = User {
//!     id: 7,
//!     name: "Alice".to_string(),
//!     tags: vec!["admin".to_string()],
//! };
//!
//! let lua = to_string_from(&user, &SerializeOptions::minified()).unwrap();
//! assert_eq!(lua, r#"{["id"]=7,["name"]="Alice",["tags"]={"admin"}}"#);
//! ```
//!
//! ### Cycles
//!
//! ```rust
//! use serde_luat::{to_string_minified, Table, Value};
//!
//! let node = Table::new();
//! node.set("next", node.clone());
//! assert_eq!(to_string_minified(&Value::Table(node)).unwrap(), r#"{["next"]=nil}"#);
//! ```
//!
//! ## Concurrency
//!
//! [`Table`] is reference counted without atomics, so values cannot cross threads
//! and cannot be mutated while a walk is in progress. A caller-supplied
//! [`SeenSet`] is borrowed mutably for the duration of a call.

pub mod error;
pub mod escape;
pub mod macros;
pub mod options;
pub mod seen;
pub mod ser;
pub mod sink;
pub mod table;
pub mod value;

pub use error::{Error, Result};
pub use options::{SerializeOptions, DEFAULT_MAX_DEPTH};
pub use seen::SeenSet;
pub use ser::{Serializer, ValueSerializer};
pub use table::{Key, Table, TableId};
pub use value::{Number, OpaqueKind, Value};

use serde::Serialize;
use std::io;

/// Serialize a value to a pretty-printed literal.
///
/// # Examples
///
/// ```rust
/// use serde_luat::{to_string, Value};
///
/// assert_eq!(to_string(&Value::from(5)).unwrap(), "5");
/// assert_eq!(to_string(&Value::from("x")).unwrap(), "\"x\"");
/// ```
///
/// # Errors
///
/// Returns an error if a table is nested beyond the default depth or the value
/// holds a function, userdata or thread.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &Value) -> Result<String> {
    to_string_with_options(value, &SerializeOptions::default())
}

/// Serialize a value to a literal without newlines or indentation.
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_minified(value: &Value) -> Result<String> {
    to_string_with_options(value, &SerializeOptions::minified())
}

/// Serialize a value with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_luat::{lua, to_string_with_options, SerializeOptions};
///
/// let options = SerializeOptions::minified().with_max_depth(2);
/// assert_eq!(to_string_with_options(&lua!([[1]]), &options).unwrap(), "{{1}}");
/// assert!(to_string_with_options(&lua!([[[1]]]), &options).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the options are invalid, a table is nested too deep, or
/// the value holds an unsupported kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(value: &Value, options: &SerializeOptions) -> Result<String> {
    let mut seen = SeenSet::new();
    to_string_with_seen(value, options, &mut seen)
}

/// Serialize a value, tracking open tables in a caller-supplied set.
///
/// Tables already marked in `seen` are written as `nil`. On return, success or
/// failure, `seen` holds exactly the marks it held before the call.
///
/// # Errors
///
/// See [`to_string_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_seen(
    value: &Value,
    options: &SerializeOptions,
    seen: &mut SeenSet,
) -> Result<String> {
    let mut serializer = Serializer::new(options.clone(), seen)?;
    serializer.serialize(value)?;
    serializer.into_inner()
}

/// Serialize only the body of a table, without the enclosing braces.
///
/// Items are written at indentation level 1 so the result can be spliced into
/// an enclosing constructor.
///
/// # Examples
///
/// ```rust
/// use serde_luat::{contents_to_string, Table};
///
/// let table = Table::from_sequence(vec![1, 2]);
/// assert_eq!(contents_to_string(&table).unwrap(), "\n  1,\n  2\n");
/// ```
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn contents_to_string(table: &Table) -> Result<String> {
    contents_to_string_with_options(table, &SerializeOptions::default())
}

/// Serialize only the body of a table with custom options.
///
/// # Errors
///
/// See [`to_string_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn contents_to_string_with_options(table: &Table, options: &SerializeOptions) -> Result<String> {
    let mut seen = SeenSet::new();
    contents_to_string_with_seen(table, options, &mut seen)
}

/// Serialize only the body of a table, tracking open tables in `seen`.
///
/// The body is written even if `table` is already marked in `seen`, and such a
/// mark is still present afterwards.
///
/// # Errors
///
/// See [`to_string_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn contents_to_string_with_seen(
    table: &Table,
    options: &SerializeOptions,
    seen: &mut SeenSet,
) -> Result<String> {
    let mut serializer = Serializer::new(options.clone(), seen)?;
    serializer.serialize_contents(table)?;
    serializer.into_inner()
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_luat::to_value;
///
/// let value = to_value(&vec![1, 2, 3]).unwrap();
/// assert_eq!(value.as_table().map(|t| t.sequence_len()), Some(3));
/// ```
///
/// # Errors
///
/// Returns an error if a map key cannot be a table key (nil, NaN or a table).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Convert any `T: Serialize` to a literal in one step.
///
/// # Errors
///
/// See [`to_value`] and [`to_string_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_from<T>(value: &T, options: &SerializeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(&to_value(value)?, options)
}

/// Serialize a value to a writer as a pretty-printed literal.
///
/// # Examples
///
/// ```rust
/// use serde_luat::{to_writer, Value};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Value::from(true)).unwrap();
/// assert_eq!(buffer, b"true");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
/// Nothing is written when serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, &SerializeOptions::default())
}

/// Serialize a value to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, value: &Value, options: &SerializeOptions) -> Result<()>
where
    W: io::Write,
{
    let literal = to_string_with_options(value, options)?;
    writer
        .write_all(literal.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let lua = to_string_from(&user, &SerializeOptions::minified()).unwrap();
        assert_eq!(
            lua,
            r#"{["id"]=123,["name"]="Alice",["active"]=true,["tags"]={"admin","user"}}"#
        );
    }

    #[test]
    fn test_pretty_printing() {
        let user = User {
            id: 1,
            name: "Bo".to_string(),
            active: false,
            tags: vec![],
        };

        let lua = to_string_from(&user, &SerializeOptions::new()).unwrap();
        assert_eq!(
            lua,
            "{\n  [\"id\"] = 1,\n  [\"name\"] = \"Bo\",\n  [\"active\"] = false,\n  [\"tags\"] = {}\n}"
        );
    }

    #[test]
    fn test_contents_matches_wrapped_minified() {
        let table = Table::from_sequence(vec![1, 2]);
        let options = SerializeOptions::minified();
        let whole = to_string_with_options(&Value::Table(table.clone()), &options).unwrap();
        let body = contents_to_string_with_options(&table, &options).unwrap();
        assert_eq!(format!("{{{}}}", body), whole);
    }

    #[test]
    fn test_invalid_max_depth() {
        let options = SerializeOptions::new().with_max_depth(0);
        assert!(matches!(
            to_string_with_options(&Value::Nil, &options),
            Err(Error::InvalidOption { .. })
        ));
        assert!(matches!(
            contents_to_string_with_options(&Table::new(), &options),
            Err(Error::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_writer_untouched_on_error() {
        let mut buffer = Vec::new();
        let value = Value::Opaque(OpaqueKind::Thread);
        assert!(to_writer(&mut buffer, &value).is_err());
        assert!(buffer.is_empty());
    }
}
