//! Configuration options for Lua literal serialization.
//!
//! ## Examples
//!
//! ```rust
//! use serde_luat::{lua, to_string_with_options, SerializeOptions};
//!
//! let value = lua!([1, 2, 3]);
//!
//! let options = SerializeOptions::minified();
//! assert_eq!(to_string_with_options(&value, &options).unwrap(), "{1,2,3}");
//!
//! let options = SerializeOptions::new().with_max_depth(1);
//! assert!(to_string_with_options(&lua!([[1]]), &options).is_err());
//! ```

use crate::{Error, Result};

/// Default bound on table nesting.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Indentation emitted per level in pretty mode.
pub(crate) const INDENT: &str = "  ";

/// Configuration options for Lua literal serialization.
///
/// # Examples
///
/// ```rust
/// use serde_luat::SerializeOptions;
///
/// // Pretty output, depth bound of 200
/// let options = SerializeOptions::new();
/// assert!(!options.minify);
/// assert_eq!(options.max_depth, 200);
///
/// // Minified output with a tighter bound
/// let options = SerializeOptions::minified().with_max_depth(16);
/// assert!(options.minify);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    pub minify: bool,
    pub max_depth: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            minify: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SerializeOptions {
    /// Creates default options (pretty output, depth bound of 200).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for minified output with no newlines or indentation.
    #[must_use]
    pub fn minified() -> Self {
        SerializeOptions {
            minify: true,
            ..Default::default()
        }
    }

    /// Switches between minified and pretty output.
    #[must_use]
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Sets the maximum table nesting depth.
    ///
    /// A value of `n` allows exactly `n` nested tables. Zero is rejected when the
    /// options are used.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks that every option is in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] when `max_depth` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luat::SerializeOptions;
    ///
    /// assert!(SerializeOptions::new().validate().is_ok());
    /// assert!(SerializeOptions::new().with_max_depth(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.max_depth < 1 {
            return Err(Error::invalid_option("max_depth", "must be at least 1"));
        }
        Ok(())
    }

    pub(crate) fn newline(&self) -> &'static str {
        if self.minify {
            ""
        } else {
            "\n"
        }
    }

    pub(crate) fn indent(&self) -> &'static str {
        if self.minify {
            ""
        } else {
            INDENT
        }
    }

    /// Padding around `=` in keyed entries.
    pub(crate) fn separator(&self) -> &'static str {
        if self.minify {
            ""
        } else {
            " "
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SerializeOptions::default();
        assert!(!options.minify);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.newline(), "\n");
        assert_eq!(options.indent(), "  ");
        assert_eq!(options.separator(), " ");
    }

    #[test]
    fn test_minified_elides_whitespace() {
        let options = SerializeOptions::minified();
        assert_eq!(options.newline(), "");
        assert_eq!(options.indent(), "");
        assert_eq!(options.separator(), "");
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = SerializeOptions::new()
            .with_max_depth(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOption { ref name, .. } if name == "max_depth"));
    }
}
