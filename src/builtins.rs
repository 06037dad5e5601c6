//! Ready-made wrappers and helpers for writing callables.
//!
//! - [`identity`]: returns its single argument unchanged
//! - [`constant`]: a zero-argument wrapper returning a fixed value
//! - [`apply`]: calls its first argument with the remaining ones
//! - [`arity`]: checks the argument count inside a callable

use crate::error::{ExoticError, ExoticResult};
use crate::value::Value;
use crate::wrapper::Exotic;

/// Borrows exactly `N` arguments as an array.
///
/// # Errors
///
/// Returns [`ExoticError::Arity`] if `arguments` does not hold exactly `N`
/// values.
///
/// # Examples
///
/// ```rust
/// use exotic::{ExoticError, Value, arity};
///
/// let arguments = [Value::from(1), Value::from(2)];
/// let [first, second] = arity::<2>(&arguments).unwrap();
/// assert_eq!((first, second), (&Value::from(1), &Value::from(2)));
///
/// assert_eq!(
///     arity::<3>(&arguments),
///     Err(ExoticError::Arity { expected: 3, found: 2 })
/// );
/// ```
pub fn arity<const N: usize>(arguments: &[Value]) -> ExoticResult<&[Value; N]> {
    arguments.try_into().map_err(|_| ExoticError::Arity {
        expected: N,
        found: arguments.len(),
    })
}

/// A wrapper that returns its single argument.
///
/// The unit element of composition: `identity().compose(f)` and
/// `f.compose(identity())` both behave like `f`.
///
/// ```rust
/// use exotic::{Value, builtins::identity};
///
/// assert_eq!(identity().apply("same"), Ok(Value::from("same")));
/// ```
pub fn identity() -> Exotic {
    Exotic::new(|arguments| {
        let [value] = arity::<1>(arguments)?;
        Ok(value.clone())
    })
}

/// A zero-argument wrapper that always returns `value`.
///
/// This is what `f >> x` binds: the value travels as a function and is
/// only produced when the chain is applied.
///
/// ```rust
/// use exotic::{Value, builtins::constant};
///
/// let five = constant(5);
/// assert_eq!(five.call(), Ok(Value::from(5)));
/// assert!(five.apply(1).is_err());
/// ```
pub fn constant(value: impl Into<Value>) -> Exotic {
    let value = value.into();
    Exotic::new(move |arguments| {
        arity::<0>(arguments)?;
        Ok(value.clone())
    })
}

/// A wrapper that calls its first argument with the rest.
///
/// Useful when functions are themselves passed around as values.
///
/// ```rust
/// use exotic::{Value, builtins::{apply, identity}};
///
/// let result = apply().bind(identity()).apply(7);
/// assert_eq!(result, Ok(Value::from(7)));
/// ```
pub fn apply() -> Exotic {
    Exotic::new(|arguments| {
        let (function, rest) = arguments.split_first().ok_or(ExoticError::Arity {
            expected: 1,
            found: 0,
        })?;
        Exotic::try_from(function.clone())?.invoke(rest.iter().cloned())
    })
}
