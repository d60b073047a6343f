//! Type class instances for [`Expected`](crate::Expected).
//!
//! The inherent combinators on `Expected` cover everyday use. The traits in
//! this module expose the same operations through the usual functional
//! abstractions so that the algebraic laws can be stated (and checked)
//! generically:
//!
//! - [`Functor`]: mapping over the success value
//! - [`Applicative`]: lifting values and combining independent computations
//! - [`Monad`]: sequencing dependent computations
//! - [`MonadError`]: throwing failures and recovering from them
//! - [`Bifunctor`]: mapping over the failure and success sides together
//! - [`Foldable`]: treating a `Success` as one element and a `Failure` as none
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types, so [`TypeConstructor`] uses a generic
//! associated type to name "the same constructor applied to another type".
//! For `Expected<T, E>` that is `Expected<B, E>`: the failure type is fixed
//! and only the success type varies.
//!
//! # Examples
//!
//! ```rust
//! use expected::Expected;
//! use expected::typeclass::{Applicative, Functor, Monad};
//!
//! let width: Expected<u32, String> = Expected::Success(3);
//! let height: Expected<u32, String> = Expected::Success(4);
//!
//! let area = width.map2(height, |w, h| w * h);
//! assert_eq!(area, Expected::Success(12));
//!
//! let labelled = area.fmap(|a| format!("{a} m2"));
//! assert_eq!(labelled, Expected::Success("12 m2".to_string()));
//!
//! let checked = Expected::<u32, String>::Success(0)
//!     .flat_map(|a| if a == 0 { Expected::Failure("empty".to_string()) } else { Expected::Success(a) });
//! assert_eq!(checked, Expected::Failure("empty".to_string()));
//! ```

mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monad_error;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monad_error::MonadError;
