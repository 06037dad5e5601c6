//! # exotic
//!
//! Curry, compose and apply callables with operator overloading.
//!
//! ## Overview
//!
//! An [`Exotic`] wraps a callable over dynamic [`Value`]s and builds
//! expressions on top of it without running it:
//!
//! - **Bind**: `f * x` (or [`Exotic::bind`]) fixes the next positional argument
//! - **Compose**: `f % g` (or [`Exotic::compose`]) feeds `g`'s result into `f`
//! - **Apply**: `f | x` (or [`Exotic::apply`]) supplies the last argument and calls
//! - **Unpack**: [`Exotic::unpack`] spreads the next value into separate arguments
//!
//! Every step returns a new wrapper, so intermediate expressions can be
//! reused. Errors raised by a wrapped callable come back from apply
//! exactly as the callable produced them.
//!
//! ## Feature Flags
//!
//! - `operators`: `*`, `<<`, `>>`, `%` and `|` overloads (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use exotic::prelude::*;
//!
//! let split = exotic(|arguments: &[Value]| {
//!     let [text] = arity::<1>(arguments)?;
//!     let text = String::try_from(text.clone())?;
//!     Ok(text.split_whitespace().collect())
//! });
//!
//! let words = split.apply("1 2 3").unwrap();
//! assert_eq!(words.to_string(), "['1', '2', '3']");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use exotic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builtins::{arity, constant, identity};
    pub use crate::error::{ExoticError, ExoticResult};
    pub use crate::wrapper::{Exotic, Unpack, exotic};
    pub use crate::value::Value;

    #[cfg(feature = "operators")]
    pub use crate::operators::Call;
}

pub mod builtins;
mod error;
mod wrapper;
#[cfg(feature = "operators")]
mod operators;
mod value;

pub use builtins::arity;
pub use error::{ExoticError, ExoticResult};
pub use wrapper::{Exotic, Unpack, exotic};
#[cfg(feature = "operators")]
pub use operators::Call;
pub use value::{Repr, Value};
