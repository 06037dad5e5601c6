//! Dynamic values passed between wrapped callables.
//!
//! A wrapped callable receives its arguments as a slice of [`Value`]s, which
//! lets a single wrapper type carry callables of any arity. Values are cheap
//! to clone: strings and lists share their storage through [`Rc`], and
//! functions are shared [`Exotic`] wrappers.

use std::fmt;
use std::rc::Rc;

use crate::error::{ExoticError, ExoticResult};
use crate::wrapper::Exotic;

/// An opaque dynamic value.
///
/// # Examples
///
/// ```rust
/// use exotic::Value;
///
/// let list = Value::from(vec![1, 2, 3]);
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// assert_eq!(Value::from("text").type_name(), "str");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The empty value.
    #[default]
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// An immutable ordered sequence of values.
    List(Rc<[Value]>),
    /// A callable wrapper.
    Function(Exotic),
}

impl Value {
    /// Returns the name of this value's kind, as used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Function(_) => "function",
        }
    }

    /// Returns a displayable form that quotes strings.
    ///
    /// ```rust
    /// use exotic::Value;
    ///
    /// assert_eq!(Value::from("1").repr().to_string(), "'1'");
    /// assert_eq!(Value::from("1").to_string(), "1");
    /// ```
    pub const fn repr(&self) -> Repr<'_> {
        Repr(self)
    }

    /// Expands this value into the positional arguments it spreads into.
    ///
    /// Lists yield their elements and strings yield one string per
    /// character. A function is called with no arguments and its result is
    /// spread instead, so a fully bound wrapper can stand in for the
    /// sequence it produces.
    ///
    /// # Errors
    ///
    /// Returns [`ExoticError::NotIterable`] if the value (or the result of
    /// calling it) cannot be iterated, or whatever error the called
    /// function raised.
    ///
    /// ```rust
    /// use exotic::{ExoticError, Value};
    ///
    /// assert_eq!(
    ///     Value::from("ab").spread(),
    ///     Ok(vec![Value::from("a"), Value::from("b")])
    /// );
    /// assert!(matches!(
    ///     Value::from(1).spread(),
    ///     Err(ExoticError::NotIterable { .. })
    /// ));
    /// ```
    pub fn spread(self) -> ExoticResult<Vec<Self>> {
        match self {
            Self::Function(thunk) => thunk.call()?.elements(),
            other => other.elements(),
        }
    }

    fn elements(self) -> ExoticResult<Vec<Self>> {
        match self {
            Self::List(items) => Ok(items.to_vec()),
            Self::Str(text) => Ok(text
                .chars()
                .map(|character| Self::Str(character.to_string().into()))
                .collect()),
            value => Err(ExoticError::NotIterable { value }),
        }
    }
}

/// Display adapter that renders strings quoted, as they appear inside lists.
#[derive(Debug, Clone, Copy)]
pub struct Repr<'a>(&'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Str(text) => write!(formatter, "'{text}'"),
            other => write!(formatter, "{other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(formatter, "()"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
            Self::Str(text) => write!(formatter, "{text}"),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{}", item.repr())?;
                }
                write!(formatter, "]")
            }
            Self::Function(_) => write!(formatter, "<function>"),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl From<$integer> for Value {
                fn from(value: $integer) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Str(value.to_string().into())
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<Exotic> for Value {
    fn from(function: Exotic) -> Self {
        Self::Function(function)
    }
}

impl From<&Exotic> for Value {
    fn from(function: &Exotic) -> Self {
        Self::Function(function.clone())
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::List(iterable.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_try_from_value {
    ($target:ty, $expected:literal, $pattern:pat => $extract:expr) => {
        impl TryFrom<Value> for $target {
            type Error = ExoticError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    $pattern => Ok($extract),
                    found => Err(ExoticError::Type {
                        expected: $expected,
                        found,
                    }),
                }
            }
        }
    };
}

impl_try_from_value!(bool, "bool", Value::Bool(value) => value);
impl_try_from_value!(i64, "int", Value::Int(value) => value);
impl_try_from_value!(String, "str", Value::Str(text) => text.to_string());
impl_try_from_value!(Vec<Value>, "list", Value::List(items) => items.to_vec());

impl TryFrom<Value> for f64 {
    type Error = ExoticError;

    /// Accepts integers as well, widening them.
    #[allow(clippy::cast_precision_loss)]
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(value) => Ok(value),
            Value::Int(value) => Ok(value as Self),
            found => Err(ExoticError::Type {
                expected: "float",
                found,
            }),
        }
    }
}
