//! Error types for exotic wrappers.
//!
//! Every failure in an operator chain is reported as an [`ExoticError`].
//! Errors raised by a wrapped callable travel back through
//! [`Exotic::apply`](crate::Exotic::apply) untouched, so a caller can match
//! on exactly the variant the callable produced.

use crate::value::Value;

/// Convenience alias for results produced by wrappers and callables.
pub type ExoticResult<T> = Result<T, ExoticError>;

/// Represents errors that can occur while building or applying a wrapper.
///
/// # Examples
///
/// ```rust
/// use exotic::{ExoticError, Value};
///
/// let error = ExoticError::NotIterable { value: Value::from(7) };
/// assert_eq!(format!("{error}"), "value of type int is not iterable: 7");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ExoticError {
    /// A value that is not a function was used where a callable is required.
    NotCallable {
        /// The offending value.
        value: Value,
    },
    /// A value marked for spreading could not be iterated.
    NotIterable {
        /// The offending value.
        value: Value,
    },
    /// A callable received the wrong number of arguments.
    Arity {
        /// The number of arguments the callable accepts.
        expected: usize,
        /// The number of arguments it was given.
        found: usize,
    },
    /// A value had a different kind than the one required.
    Type {
        /// The name of the required kind.
        expected: &'static str,
        /// The value that was supplied instead.
        found: Value,
    },
    /// A free-form error raised by a user callable.
    Raised(String),
}

impl ExoticError {
    /// Creates a [`ExoticError::Raised`] from any message.
    ///
    /// ```rust
    /// use exotic::ExoticError;
    ///
    /// let error = ExoticError::raised("division by zero");
    /// assert_eq!(error.to_string(), "division by zero");
    /// ```
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised(message.into())
    }
}

impl std::fmt::Display for ExoticError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotCallable { value } => write!(
                formatter,
                "value of type {} is not callable: {}",
                value.type_name(),
                value.repr()
            ),
            Self::NotIterable { value } => write!(
                formatter,
                "value of type {} is not iterable: {}",
                value.type_name(),
                value.repr()
            ),
            Self::Arity { expected, found } => write!(
                formatter,
                "expected {expected} argument(s), found {found}"
            ),
            Self::Type { expected, found } => write!(
                formatter,
                "expected {expected}, found {}: {}",
                found.type_name(),
                found.repr()
            ),
            Self::Raised(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for ExoticError {}
