//! Lua literal serialization.
//!
//! This module provides the [`Serializer`], which walks a [`Value`] depth-first and
//! writes it as a Lua table constructor, and [`ValueSerializer`], which turns any
//! `T: Serialize` into a [`Value`].
//!
//! ## Overview
//!
//! - **Sequence first**: values at keys `1..=n` are written positionally, the
//!   remaining entries follow as `[key] = value` in insertion order
//! - **Cycles**: a table met again while still open is written as `nil`
//! - **Depth**: entering a table at `max_depth` aborts the whole call
//! - **Pretty or minified**: two-space indentation and spaces around `=`, or none
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_luat::{lua, to_string, to_string_minified};
//!
//! let value = lua!({ 1 => "a", 2 => "b", "x" => true });
//!
//! assert_eq!(to_string_minified(&value).unwrap(), r#"{"a","b",["x"]=true}"#);
//! assert_eq!(
//!     to_string(&value).unwrap(),
//!     "{\n  \"a\",\n  \"b\",\n  [\"x\"] = true\n}"
//! );
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_luat::{lua, SeenSet, SerializeOptions, Serializer};
//!
//! let mut seen = SeenSet::new();
//! let mut serializer = Serializer::new(SerializeOptions::minified(), &mut seen).unwrap();
//! serializer.serialize(&lua!([1, 2, 3])).unwrap();
//!
//! assert_eq!(serializer.into_inner().unwrap(), "{1,2,3}");
//! ```

use crate::escape::write_quoted;
use crate::sink::Sink;
use crate::table::{sequence_len, Key};
use crate::{to_value, Error, Number, Result, SeenSet, SerializeOptions, Table, Value};
use serde::{ser, Serialize};
use std::fmt::Write;

/// The Lua literal serializer.
///
/// A serializer that returned an error holds partial output and should be
/// dropped. The seen set it borrowed is left exactly as it was before the call.
pub struct Serializer<'s> {
    output: Sink,
    options: SerializeOptions,
    seen: &'s mut SeenSet,
}

impl<'s> Serializer<'s> {
    /// Creates a serializer writing with `options` and tracking cycles in `seen`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if the options are out of range.
    pub fn new(options: SerializeOptions, seen: &'s mut SeenSet) -> Result<Self> {
        options.validate()?;
        Ok(Serializer {
            output: Sink::with_capacity(256),
            options,
            seen,
        })
    }

    /// Returns the literal written so far.
    ///
    /// # Errors
    ///
    /// Fails only if the buffer is not UTF-8, which the serializer never produces.
    pub fn into_inner(self) -> Result<String> {
        self.output.flatten()
    }

    /// Writes `value` as a single literal at level 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthExceeded`] or [`Error::UnsupportedType`].
    pub fn serialize(&mut self, value: &Value) -> Result<()> {
        self.write_value(value, 0)
    }

    /// Writes the body of `table` without the enclosing braces, at level 1.
    ///
    /// The output can be spliced into an enclosing constructor. The body is
    /// written even when `table` is already open in the seen set; a mark the
    /// caller placed is left in place afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthExceeded`] or [`Error::UnsupportedType`].
    pub fn serialize_contents(&mut self, table: &Table) -> Result<()> {
        let entered = self.seen.enter(table);
        let result = self.write_body(table, 1);
        if entered {
            self.seen.leave(table.id());
        }
        result
    }

    fn write_value(&mut self, value: &Value, level: usize) -> Result<()> {
        match value {
            Value::Nil => self.output.push_str("nil"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(n)?,
            Value::String(s) => write_quoted(&mut self.output, s),
            Value::Table(t) => return self.write_table(t, level),
            Value::Opaque(kind) => {
                log::debug!("aborting serialization at unsupported {} value", kind);
                return Err(Error::unsupported_type(kind.as_str()));
            }
        }
        Ok(())
    }

    fn write_key(&mut self, key: &Key) -> Result<()> {
        match key {
            Key::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Key::Integer(i) => self.write_number(&Number::Integer(*i))?,
            Key::Float(f) => self.write_number(&Number::Float(*f))?,
            Key::String(s) => write_quoted(&mut self.output, s),
        }
        Ok(())
    }

    fn write_number(&mut self, n: &Number) -> Result<()> {
        write!(self.output, "{}", n).map_err(Error::custom)
    }

    fn write_table(&mut self, table: &Table, level: usize) -> Result<()> {
        if level >= self.options.max_depth {
            log::debug!(
                "table at level {} exceeds max depth {}",
                level,
                self.options.max_depth
            );
            return Err(Error::depth_exceeded(self.options.max_depth));
        }

        let id = table.id();
        if !self.seen.enter(table) {
            log::trace!("cycle through {}, writing nil", id);
            self.output.push_str("nil");
            return Ok(());
        }

        self.output.push_byte(b'{');
        let result = self.write_body(table, level + 1);
        self.seen.leave(id);
        result?;
        self.output.push_byte(b'}');
        Ok(())
    }

    /// Writes the items of `table` with each item on its own line at `level`
    /// indents, and the closing line at `level - 1`.
    fn write_body(&mut self, table: &Table, level: usize) -> Result<()> {
        let entries = table.borrow();
        let maxi = sequence_len(&entries);

        for i in 1..=maxi {
            self.write_line_break(level);
            if let Some(item) = entries.get(&Key::Integer(i)) {
                self.write_value(item, level)?;
            }
            if i < maxi {
                self.output.push_byte(b',');
            }
        }

        let mut first_keyed = maxi == 0;
        let mut has_keyed = false;
        for (key, value) in entries.iter() {
            if matches!(key, Key::Integer(i) if (1..=maxi).contains(i)) {
                continue;
            }
            if !first_keyed {
                self.output.push_byte(b',');
            }
            self.write_line_break(level);
            self.output.push_byte(b'[');
            self.write_key(key)?;
            self.output.push_byte(b']');
            self.output.push_str(self.options.separator());
            self.output.push_byte(b'=');
            self.output.push_str(self.options.separator());
            self.write_value(value, level)?;
            first_keyed = false;
            has_keyed = true;
        }

        if maxi > 0 || has_keyed {
            self.write_line_break(level.saturating_sub(1));
        }
        Ok(())
    }

    fn write_line_break(&mut self, level: usize) {
        if self.options.minify {
            return;
        }
        self.output.push_str(self.options.newline());
        for _ in 0..level {
            self.output.push_str(self.options.indent());
        }
    }
}

/// Serializer producing a [`Value`] from any `T: Serialize`.
///
/// | Rust | Value |
/// |---|---|
/// | `()`, `None`, unit structs | nil |
/// | integers, floats | number (`u64` above `i64::MAX` becomes a float) |
/// | `str`, `char`, bytes | string |
/// | sequences, tuples | table with keys `1..=n` |
/// | maps, structs | table with keyed entries |
/// | unit variant | string holding the variant name |
/// | other variants | `{ [variant] = payload }` |
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    table: Table,
    current_key: Option<Key>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    table: Table,
}

fn wrap_variant(variant: &'static str, payload: Value) -> Value {
    let table = Table::with_capacity(1);
    table.set(variant, payload);
    Value::Table(table)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Number(Number::Integer(i))),
            Err(_) => Ok(Value::Number(Number::Float(v as f64))),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::from(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(wrap_variant(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            table: Table::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            table: Table::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::from(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(Key::try_from(to_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.table.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Table(self.table))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.table.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Table(self.table))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.table.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::Table(self.table)))
    }
}
