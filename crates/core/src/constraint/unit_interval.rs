use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constraint, ConstraintError};

/// Types that have a notion of the bounds `0` and `1`.
///
/// Implemented for `f32`, `f64`, and `uom::si::f64::Ratio`.
pub trait UnitBounds: PartialOrd + Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f32 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }

    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Within the closed interval `[0, 1]`.
///
/// Volume fractions, porosities and transference numbers are checked this way.
///
/// ```
/// use batpint_core::constraint::{Constraint, UnitInterval};
/// use uom::si::{f64::Ratio, ratio::ratio};
///
/// assert!(UnitInterval::holds(&Ratio::new::<ratio>(0.39)));
/// assert!(!UnitInterval::holds(&1.01));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnitInterval;

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if *value < T::zero() {
            Err(ConstraintError::BelowMinimum)
        } else if *value > T::one() {
            Err(ConstraintError::AboveMaximum)
        } else if *value >= T::zero() {
            Ok(())
        } else {
            Err(ConstraintError::NotANumber)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(UnitInterval::holds(&0.0));
        assert!(UnitInterval::holds(&1.0));
        assert!(UnitInterval::holds(&0.5_f32));
    }

    #[test]
    fn reports_which_bound_is_crossed() {
        assert_eq!(UnitInterval::check(&-0.1), Err(ConstraintError::BelowMinimum));
        assert_eq!(UnitInterval::check(&1.1), Err(ConstraintError::AboveMaximum));
        assert_eq!(
            UnitInterval::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn ratios() {
        assert!(UnitInterval::holds(&Ratio::new::<ratio>(0.56)));
        assert_eq!(
            UnitInterval::check(&Ratio::new::<ratio>(1.5)),
            Err(ConstraintError::AboveMaximum)
        );
    }
}
