//! Numeric invariants of physical parameters.
//!
//! A thickness is strictly positive, a porosity lies in `[0, 1]`, a Bruggeman
//! exponent is never negative. Each invariant is a zero-sized marker
//! implementing [`Constraint`], so validation code can name the invariant it
//! enforces:
//!
//! ```
//! use batpint_core::constraint::{Constraint, ConstraintError, StrictlyPositive, UnitInterval};
//!
//! assert!(StrictlyPositive::check(&55e-6).is_ok());
//! assert_eq!(UnitInterval::check(&1.2), Err(ConstraintError::AboveMaximum));
//! ```
//!
//! `NaN` never satisfies a constraint.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// An invariant a value of type `T` may or may not satisfy.
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how `value` fails.
    fn check(value: &T) -> Result<(), ConstraintError>;

    /// Whether `value` satisfies the invariant.
    fn holds(value: &T) -> bool {
        Self::check(value).is_ok()
    }
}

/// How a value fails a [`Constraint`].
///
/// The messages complete a sentence starting with the value's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("is negative")]
    Negative,
    #[error("is zero")]
    Zero,
    #[error("is not a number")]
    NotANumber,
    #[error("is below the lower bound")]
    BelowMinimum,
    #[error("is above the upper bound")]
    AboveMaximum,
}
