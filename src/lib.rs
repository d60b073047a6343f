//! # expected
//!
//! A success-or-failure value with a combinator library for composing,
//! transforming and unwrapping it, and a bridge that captures panics as
//! failures.
//!
//! ## Overview
//!
//! - **[`Expected`]**: exactly one of `Success(T)` or `Failure(E)`
//! - **Constructors**: [`construct::expect`] and friends build an `Expected`
//!   from an `Option`, treating only `None` as absent
//! - **Panic capture**: [`fault::catch`] turns a panicking computation into a
//!   `Failure(Fault)`
//! - **Type classes**: `Functor`, `Applicative`, `Monad`, `Bifunctor` and
//!   `Foldable` instances
//!
//! ## Error Channels
//!
//! A `Failure` is an ordinary return value. Breaking the API contract, such
//! as calling [`Expected::unwrap`] on a `Failure`, panics with an
//! [`error::InvalidStateError`] or [`error::MisuseError`] message instead.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and their `Expected` instances (default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use expected::prelude::*;
//!
//! fn lookup(id: u32) -> Expected<&'static str, String> {
//!     let users = [(1, "alice"), (2, "bob")];
//!     let found = users.iter().find(|(key, _)| *key == id).map(|(_, name)| *name);
//!     expect(found, format!("no user with id {id}"))
//! }
//!
//! let greeting = lookup(2).map(|name| format!("hello, {name}"));
//! assert_eq!(greeting.unwrap(), "hello, bob");
//!
//! let missing = lookup(3).map_or_else(|error| error, |name| name.to_string());
//! assert_eq!(missing, "no user with id 3");
//!
//! let trapped = catch(|| -> u32 { panic!("boom") });
//! assert_eq!(trapped.unwrap_failure().message(), "boom");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use expected::prelude::*;
/// ```
pub mod prelude {
    pub use crate::construct::{ExpectValue, expect, expect_or_default, expect_strict, try_expect};
    pub use crate::error::{InvalidStateError, MisuseError, Variant};
    pub use crate::fault::{Fault, catch, catch_unchecked};
    pub use crate::result::Expected;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod construct;
pub mod error;
pub mod fault;
pub mod result;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use result::Expected;
