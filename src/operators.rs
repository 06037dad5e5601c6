//! Operator overloads for wrappers.
//!
//! | Operator | Meaning                                        |
//! |----------|------------------------------------------------|
//! | `f * x`  | [`Exotic::bind`]                               |
//! | `f << x` | [`Exotic::bind`] with lower precedence         |
//! | `f >> x` | [`Exotic::bind_constant`]: binds `x` as a thunk |
//! | `f % g`  | [`Exotic::compose`]: `g` runs first            |
//! | `f \| x` | [`Exotic::apply`]                              |
//! | `f \| Call` | [`Exotic::call`]                            |
//!
//! `%` shares precedence with `*`, so `list % map * int % split` reads as
//! `((list % map) * int) % split`.
//!
//! The same operators work on [`Unpack`]. Collections are spread item by
//! item when bound. Any other operand is spread when the chain is applied,
//! so `*`, `<<` and `>>` never fail and a value that cannot be spread is
//! reported by `|`.
//!
//! # Examples
//!
//! ```rust
//! use exotic::{Call, Value, exotic};
//!
//! let join = exotic(|arguments: &[Value]| {
//!     let words: Vec<String> = arguments.iter().map(ToString::to_string).collect();
//!     Ok(Value::from(words.join("-")))
//! });
//!
//! assert_eq!(join.clone() * "a" * "b" | "c", Ok(Value::from("a-b-c")));
//! assert_eq!(join.clone() * "solo" | Call, Ok(Value::from("solo")));
//! assert_eq!(join.unpack() | vec![1, 2, 3], Ok(Value::from("1-2-3")));
//! assert_eq!(join.unpack() >> "xy" | Call, Ok(Value::from("x-y")));
//! ```

use std::ops::{BitOr, Mul, Rem, Shl, Shr};

use crate::error::ExoticResult;
use crate::value::Value;
use crate::wrapper::{Exotic, Unpack};

/// Operand for `|` that calls a wrapper with its bound arguments only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call;

macro_rules! operator {
    (
        [$($generics:tt)*] [$($bounds:tt)*]
        $trait:ident::$method:ident($lhs:ty, $rhs:ty) -> $output:ty,
        |$left:ident, $right:ident| $body:expr
    ) => {
        impl<$($generics)*> $trait<$rhs> for $lhs
        where
            $($bounds)*
        {
            type Output = $output;

            fn $method(self, $right: $rhs) -> $output {
                let $left = self;
                $body
            }
        }
    };
}

// Integers are only accepted as `i64` so that bare literals infer.
macro_rules! impl_operand {
    ($($operand:ty),+ $(,)?) => {
        $(
            operator!([] [] Mul::mul(Exotic, $operand) -> Exotic, |wrapper, value| wrapper.bind(value));
            operator!([] [] Mul::mul(&Exotic, $operand) -> Exotic, |wrapper, value| wrapper.bind(value));
            operator!([] [] Shl::shl(Exotic, $operand) -> Exotic, |wrapper, value| wrapper.bind(value));
            operator!([] [] Shl::shl(&Exotic, $operand) -> Exotic, |wrapper, value| wrapper.bind(value));
            operator!([] [] Shr::shr(Exotic, $operand) -> Exotic, |wrapper, value| wrapper.bind_constant(value));
            operator!([] [] Shr::shr(&Exotic, $operand) -> Exotic, |wrapper, value| wrapper.bind_constant(value));
            operator!([] [] BitOr::bitor(Exotic, $operand) -> ExoticResult<Value>, |wrapper, value| wrapper.apply(value));
            operator!([] [] BitOr::bitor(&Exotic, $operand) -> ExoticResult<Value>, |wrapper, value| wrapper.apply(value));

            operator!([] [] Mul::mul(Unpack, $operand) -> Exotic, |wrapper, value| wrapper.bind_deferred(value));
            operator!([] [] Mul::mul(&Unpack, $operand) -> Exotic, |wrapper, value| wrapper.bind_deferred(value));
            operator!([] [] Shl::shl(Unpack, $operand) -> Exotic, |wrapper, value| wrapper.bind_deferred(value));
            operator!([] [] Shl::shl(&Unpack, $operand) -> Exotic, |wrapper, value| wrapper.bind_deferred(value));
            operator!([] [] Shr::shr(Unpack, $operand) -> Exotic, |wrapper, value| wrapper.bind_constant(value));
            operator!([] [] Shr::shr(&Unpack, $operand) -> Exotic, |wrapper, value| wrapper.bind_constant(value));
            operator!([] [] BitOr::bitor(Unpack, $operand) -> ExoticResult<Value>, |wrapper, value| wrapper.apply(value));
            operator!([] [] BitOr::bitor(&Unpack, $operand) -> ExoticResult<Value>, |wrapper, value| wrapper.apply(value));
        )+
    };
}

impl_operand!(Value, Exotic, &Exotic, bool, i64, f64, char, &str, String);

// Collections bind whole on a plain wrapper and item by item on an `Unpack`.
macro_rules! impl_collection_operand {
    ($($collection:ty => [$($generics:tt)*]),+ $(,)?) => {
        $(
            operator!([$($generics)*] [T: Into<Value>] Mul::mul(Exotic, $collection) -> Exotic, |wrapper, values| wrapper.bind(values));
            operator!([$($generics)*] [T: Into<Value>] Mul::mul(&Exotic, $collection) -> Exotic, |wrapper, values| wrapper.bind(values));
            operator!([$($generics)*] [T: Into<Value>] Shl::shl(Exotic, $collection) -> Exotic, |wrapper, values| wrapper.bind(values));
            operator!([$($generics)*] [T: Into<Value>] Shl::shl(&Exotic, $collection) -> Exotic, |wrapper, values| wrapper.bind(values));
            operator!([$($generics)*] [T: Into<Value>] Shr::shr(Exotic, $collection) -> Exotic, |wrapper, values| wrapper.bind_constant(values));
            operator!([$($generics)*] [T: Into<Value>] Shr::shr(&Exotic, $collection) -> Exotic, |wrapper, values| wrapper.bind_constant(values));
            operator!([$($generics)*] [T: Into<Value>] BitOr::bitor(Exotic, $collection) -> ExoticResult<Value>, |wrapper, values| wrapper.apply(values));
            operator!([$($generics)*] [T: Into<Value>] BitOr::bitor(&Exotic, $collection) -> ExoticResult<Value>, |wrapper, values| wrapper.apply(values));

            operator!([$($generics)*] [T: Into<Value>] Mul::mul(Unpack, $collection) -> Exotic, |wrapper, values| wrapper.bind_all(values));
            operator!([$($generics)*] [T: Into<Value>] Mul::mul(&Unpack, $collection) -> Exotic, |wrapper, values| wrapper.bind_all(values));
            operator!([$($generics)*] [T: Into<Value>] Shl::shl(Unpack, $collection) -> Exotic, |wrapper, values| wrapper.bind_all(values));
            operator!([$($generics)*] [T: Into<Value>] Shl::shl(&Unpack, $collection) -> Exotic, |wrapper, values| wrapper.bind_all(values));
            operator!([$($generics)*] [T: Into<Value>] Shr::shr(Unpack, $collection) -> Exotic, |wrapper, values| wrapper.bind_constant(values));
            operator!([$($generics)*] [T: Into<Value>] Shr::shr(&Unpack, $collection) -> Exotic, |wrapper, values| wrapper.bind_constant(values));
            operator!([$($generics)*] [T: Into<Value>] BitOr::bitor(Unpack, $collection) -> ExoticResult<Value>, |wrapper, values| wrapper.bind_all(values).call());
            operator!([$($generics)*] [T: Into<Value>] BitOr::bitor(&Unpack, $collection) -> ExoticResult<Value>, |wrapper, values| wrapper.bind_all(values).call());
        )+
    };
}

impl_collection_operand!(Vec<T> => [T], [T; N] => [T, const N: usize]);

operator!([] [] BitOr::bitor(Exotic, Call) -> ExoticResult<Value>, |wrapper, _call| wrapper.call());
operator!([] [] BitOr::bitor(&Exotic, Call) -> ExoticResult<Value>, |wrapper, _call| wrapper.call());
operator!([R] [R: Into<Exotic>] Rem::rem(Exotic, R) -> Exotic, |outer, inner| outer.compose(inner));
operator!([R] [R: Into<Exotic>] Rem::rem(&Exotic, R) -> Exotic, |outer, inner| outer.compose(inner));
