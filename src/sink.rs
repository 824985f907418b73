//! Append-only output buffer.

use crate::{Error, Result};
use std::fmt;

/// Append-only buffer the serializer writes literal fragments into.
///
/// Fragments are concatenated in emission order; there is no random access and
/// nothing already appended can be changed. Raw appends are crate-private and
/// only ever ASCII; outside callers write through [`fmt::Write`], which only
/// accepts `&str`. [`Sink::flatten`] therefore always yields valid UTF-8.
#[derive(Debug, Default)]
pub struct Sink {
    buf: Vec<u8>,
}

impl Sink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Sink {
            buf: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push_str(&mut self, fragment: &str) {
        self.buf.extend_from_slice(fragment.as_bytes());
    }

    #[inline]
    pub(crate) fn push_byte(&mut self, byte: u8) {
        debug_assert!(byte.is_ascii());
        self.buf.push(byte);
    }

    /// Appends a run of verbatim bytes. Callers only pass printable ASCII.
    #[inline]
    pub(crate) fn push_bytes(&mut self, run: &[u8]) {
        debug_assert!(run.iter().all(|b| (0x20..0x7f).contains(b)));
        self.buf.extend_from_slice(run);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the sink and returns everything appended, in order.
    ///
    /// # Errors
    ///
    /// Returns an error only if non-UTF-8 bytes were appended, which neither
    /// the crate-private appends nor [`fmt::Write`] can do.
    pub fn flatten(self) -> Result<String> {
        String::from_utf8(self.buf).map_err(Error::custom)
    }
}

impl fmt::Write for Sink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
