//! The exotic wrapper: curry, compose and apply callables.
//!
//! An [`Exotic`] is an immutable expression. Binding an argument or
//! composing with another wrapper builds a new wrapper and leaves the
//! original untouched, so any intermediate expression can be reused. Only
//! [`Exotic::apply`] and [`Exotic::call`] run the wrapped callable.
//!
//! # Laws
//!
//! - **Application**: `exotic(f).apply(x) == f([x])`
//! - **Currying**: `exotic(f).bind(a).apply(b) == f([a, b])`
//! - **Composition**: `exotic(f).compose(exotic(g)).apply(x) == f([g([x])])`
//! - **Spreading**: `exotic(f).unpack().apply([a, b]) == f([a, b])`

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::builtins::constant;
use crate::error::{ExoticError, ExoticResult};
use crate::value::Value;

/// Number of arguments assembled on the stack before spilling to the heap.
const INLINE_ARGUMENTS: usize = 8;

type Callable = Rc<dyn Fn(&[Value]) -> ExoticResult<Value>>;

/// A callable wrapped for curried, composed application.
///
/// The wrapper holds the callable, the arguments bound so far and an
/// optional outer wrapper that receives the callable's result.
///
/// # Examples
///
/// ```rust
/// use exotic::{Value, exotic};
///
/// let add = exotic(|arguments: &[Value]| {
///     let [left, right] = exotic::arity::<2>(arguments)?;
///     Ok(Value::from(i64::try_from(left.clone())? + i64::try_from(right.clone())?))
/// });
///
/// let add_five = add.bind(5);
/// assert_eq!(add_five.apply(3), Ok(Value::from(8)));
/// // `add` is still usable on its own
/// assert_eq!(add.bind(1).apply(1), Ok(Value::from(2)));
/// ```
#[derive(Clone)]
#[must_use]
pub struct Exotic {
    function: Callable,
    bound: Rc<[Value]>,
    outer: Option<Rc<Exotic>>,
}

/// Wraps a callable. Shorthand for [`Exotic::new`].
pub fn exotic<F>(function: F) -> Exotic
where
    F: Fn(&[Value]) -> ExoticResult<Value> + 'static,
{
    Exotic::new(function)
}

impl Exotic {
    /// Wraps a callable with no bound arguments.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> ExoticResult<Value> + 'static,
    {
        Self {
            function: Rc::new(function),
            bound: Rc::from([]),
            outer: None,
        }
    }

    /// Returns the arguments bound so far, in binding order.
    pub fn bound(&self) -> &[Value] {
        &self.bound
    }

    /// Returns `true` if this wrapper feeds its result into another.
    pub const fn is_composed(&self) -> bool {
        self.outer.is_some()
    }

    /// Binds one more positional argument without calling the function.
    ///
    /// After a composition the argument goes to the callable that runs
    /// first, as in `exotic(list).compose(map).bind(int)`.
    pub fn bind(&self, value: impl Into<Value>) -> Self {
        self.extend(std::iter::once(value.into()))
    }

    /// Binds a zero-argument function that returns `value`.
    ///
    /// Behind a [`Unpack`] mark the constant is spread when the chain is
    /// applied, not when it is bound.
    pub fn bind_constant(&self, value: impl Into<Value>) -> Self {
        self.bind(constant(value))
    }

    /// Marks the next bound or applied value for spreading.
    ///
    /// ```rust
    /// use exotic::{Value, exotic};
    ///
    /// let count = exotic(|arguments: &[Value]| Ok(Value::from(arguments.len() as i64)));
    /// assert_eq!(count.apply(vec![1, 2, 3]), Ok(Value::from(1)));
    /// assert_eq!(count.unpack().apply(vec![1, 2, 3]), Ok(Value::from(3)));
    /// ```
    pub fn unpack(&self) -> Unpack {
        Unpack(self.clone())
    }

    /// Composes two wrappers: `inner` runs first and its result becomes
    /// the last argument of `self`.
    ///
    /// ```rust
    /// use exotic::{Value, exotic};
    ///
    /// let double = exotic(|arguments: &[Value]| Ok(Value::from(i64::try_from(arguments[0].clone())? * 2)));
    /// let increment = exotic(|arguments: &[Value]| Ok(Value::from(i64::try_from(arguments[0].clone())? + 1)));
    ///
    /// // double(increment(4))
    /// assert_eq!(double.compose(&increment).apply(4), Ok(Value::from(10)));
    /// ```
    pub fn compose(&self, inner: impl Into<Self>) -> Self {
        let inner = inner.into();
        let outer = match &inner.outer {
            None => self.clone(),
            Some(middle) => self.compose(Self::clone(middle)),
        };
        Self {
            function: inner.function,
            bound: inner.bound,
            outer: Some(Rc::new(outer)),
        }
    }

    /// Composes with a plain callable that runs first.
    pub fn compose_fn<F>(&self, inner: F) -> Self
    where
        F: Fn(&[Value]) -> ExoticResult<Value> + 'static,
    {
        self.compose(Self::new(inner))
    }

    /// Named alias of [`Exotic::compose`]: `a.then(b)` applies `b` first
    /// and feeds its result to `a`.
    pub fn then(&self, inner: impl Into<Self>) -> Self {
        self.compose(inner)
    }

    /// Binds `value` as the final argument and calls the function.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped callable (or any callable in
    /// the composition chain) raised, unchanged.
    pub fn apply(&self, value: impl Into<Value>) -> ExoticResult<Value> {
        self.invoke(std::iter::once(value.into()))
    }

    /// Calls the function with the bound arguments only.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped callable raised, unchanged.
    pub fn call(&self) -> ExoticResult<Value> {
        self.invoke(std::iter::empty())
    }

    pub(crate) fn extend(&self, values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            function: Rc::clone(&self.function),
            bound: self.bound.iter().cloned().chain(values).collect(),
            outer: self.outer.clone(),
        }
    }

    /// Returns a wrapper that calls `thunk` at apply time and spreads its
    /// result in front of any later arguments.
    pub(crate) fn spread_later(&self, thunk: Self) -> Self {
        let target = self.clone();
        Self::new(move |rest| {
            let elements = Value::Function(thunk.clone()).spread()?;
            target.invoke(elements.into_iter().chain(rest.iter().cloned()))
        })
    }

    pub(crate) fn invoke(&self, extra: impl IntoIterator<Item = Value>) -> ExoticResult<Value> {
        let arguments: SmallVec<[Value; INLINE_ARGUMENTS]> =
            self.bound.iter().cloned().chain(extra).collect();
        let result = (self.function)(&arguments)?;
        match &self.outer {
            Some(outer) => outer.apply(result),
            None => Ok(result),
        }
    }
}

impl fmt::Debug for Exotic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Exotic")
            .field("bound", &self.bound)
            .field("outer", &self.outer)
            .finish_non_exhaustive()
    }
}

/// Two wrappers are equal when they share the same callable allocation and
/// have the same bound arguments and composition chain.
impl PartialEq for Exotic {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.function, &other.function)
            && self.bound == other.bound
            && self.outer == other.outer
    }
}

impl From<&Exotic> for Exotic {
    fn from(function: &Exotic) -> Self {
        function.clone()
    }
}

impl TryFrom<Value> for Exotic {
    type Error = ExoticError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Function(function) => Ok(function),
            value => Err(ExoticError::NotCallable { value }),
        }
    }
}

/// A wrapper whose next bound or applied value is spread into separate
/// positional arguments.
///
/// Produced by [`Exotic::unpack`]. Binding through an `Unpack` yields a
/// plain [`Exotic`] again, so the flag covers exactly one step.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Unpack(Exotic);

impl Unpack {
    /// Already marked; returns the same wrapper.
    pub fn unpack(self) -> Self {
        self
    }

    /// Discards the spread mark.
    pub fn into_inner(self) -> Exotic {
        self.0
    }

    /// Spreads `value` into bound arguments.
    ///
    /// A function value is not called here: it runs when the chain is
    /// applied and its result is spread then.
    ///
    /// # Errors
    ///
    /// Returns [`ExoticError::NotIterable`] if `value` cannot be spread.
    pub fn bind(&self, value: impl Into<Value>) -> ExoticResult<Exotic> {
        match value.into() {
            Value::Function(thunk) => Ok(self.0.spread_later(thunk)),
            value => Ok(self.0.extend(value.spread()?)),
        }
    }

    /// Like [`Unpack::bind`], but a value that cannot be spread is reported
    /// by apply instead of here.
    pub fn bind_deferred(&self, value: impl Into<Value>) -> Exotic {
        match value.into() {
            Value::Function(thunk) => self.0.spread_later(thunk),
            value => self.0.spread_later(constant(value)),
        }
    }

    /// Binds a constant whose value is spread when the chain is applied.
    pub fn bind_constant(&self, value: impl Into<Value>) -> Exotic {
        self.0.spread_later(constant(value))
    }

    /// Binds every item of a statically iterable collection.
    pub fn bind_all<I>(&self, values: I) -> Exotic
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.0.extend(values.into_iter().map(Into::into))
    }

    /// Spreads `value` as the final arguments and calls the function.
    ///
    /// # Errors
    ///
    /// Returns [`ExoticError::NotIterable`] if `value` cannot be spread,
    /// otherwise whatever error the callable raised.
    pub fn apply(&self, value: impl Into<Value>) -> ExoticResult<Value> {
        let elements = value.into().spread()?;
        self.0.invoke(elements)
    }
}

static_assertions::assert_impl_all!(Exotic: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(Exotic: Send, Sync);
