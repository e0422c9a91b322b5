use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Zero or greater.
///
/// Bruggeman exponents and applied current magnitudes are checked this way.
#[derive(Debug, Clone, Copy)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use uom::si::{f64::Length, length::micrometer};

    use super::*;

    #[test]
    fn integers() {
        assert!(NonNegative::holds(&0));
        assert!(NonNegative::holds(&7_u32));
        assert_eq!(NonNegative::check(&-3), Err(ConstraintError::Negative));
    }

    #[test]
    fn floats() {
        assert!(NonNegative::holds(&0.0));
        assert!(NonNegative::holds(&-0.0));
        assert_eq!(NonNegative::check(&-1e-12), Err(ConstraintError::Negative));
        assert_eq!(
            NonNegative::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn lengths() {
        let thickness = Length::new::<micrometer>(55.0);
        assert!(NonNegative::holds(&thickness));
        assert!(!NonNegative::holds(&-thickness));
    }
}
