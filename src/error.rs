//! Error types for Lua literal serialization.
//!
//! Every failure aborts the whole call: the serializer either produces a complete
//! literal or returns one of these errors, never partial output.
//!
//! ## Error Categories
//!
//! - **Depth**: a table was entered at or beyond the configured maximum depth
//! - **Unsupported kinds**: functions, userdata and threads have no literal form
//! - **Options**: a [`SerializeOptions`](crate::SerializeOptions) field is out of range
//! - **Keys**: nil, NaN and tables cannot be used as table keys
//! - **I/O**: writing the finished literal to a writer failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_luat::{to_string, Error, OpaqueKind, Value};
//!
//! let err = to_string(&Value::Opaque(OpaqueKind::Function)).unwrap_err();
//! assert_eq!(err.to_string(), "cannot serialize function");
//! assert!(matches!(err, Error::UnsupportedType(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while building or serializing values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A table was nested deeper than the configured bound
    #[error("maximum serialization depth ({max_depth}) exceeded")]
    DepthExceeded { max_depth: usize },

    /// The value has no literal representation
    #[error("cannot serialize {0}")]
    UnsupportedType(String),

    /// A serialization option is out of range
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: String, reason: String },

    /// A value cannot be used as a table key
    #[error("invalid table key: {0}")]
    InvalidKey(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a depth error for the given bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luat::Error;
    ///
    /// let err = Error::depth_exceeded(200);
    /// assert_eq!(err.to_string(), "maximum serialization depth (200) exceeded");
    /// ```
    pub fn depth_exceeded(max_depth: usize) -> Self {
        Error::DepthExceeded { max_depth }
    }

    /// Creates an unsupported type error naming the offending kind.
    pub fn unsupported_type(kind: &str) -> Self {
        Error::UnsupportedType(kind.to_string())
    }

    /// Creates an invalid option error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luat::Error;
    ///
    /// let err = Error::invalid_option("max_depth", "must be at least 1");
    /// assert!(err.to_string().contains("max_depth"));
    /// ```
    pub fn invalid_option(name: &str, reason: &str) -> Self {
        Error::InvalidOption {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid key error.
    pub fn invalid_key(reason: &str) -> Self {
        Error::InvalidKey(reason.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
