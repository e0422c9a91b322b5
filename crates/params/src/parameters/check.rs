use batpint_core::constraint::{Constraint, NonNegative, StrictlyPositive, UnitBounds, UnitInterval};
use num_traits::Zero;

use super::ParameterError;

/// Collects constraint checks for one parameter group.
pub(super) struct Checker {
    group: &'static str,
}

impl Checker {
    pub(super) fn new(group: &'static str) -> Self {
        Self { group }
    }

    fn check<T, C: Constraint<T>>(
        &self,
        field: &'static str,
        value: &T,
    ) -> Result<(), ParameterError> {
        C::check(value).map_err(|reason| ParameterError::Invalid {
            group: self.group,
            field,
            reason,
        })
    }

    pub(super) fn positive<T: PartialOrd + Zero>(
        &self,
        field: &'static str,
        value: T,
    ) -> Result<(), ParameterError> {
        self.check::<T, StrictlyPositive>(field, &value)
    }

    pub(super) fn non_negative<T: PartialOrd + Zero>(
        &self,
        field: &'static str,
        value: T,
    ) -> Result<(), ParameterError> {
        self.check::<T, NonNegative>(field, &value)
    }

    pub(super) fn fraction<T: UnitBounds>(
        &self,
        field: &'static str,
        value: T,
    ) -> Result<(), ParameterError> {
        self.check::<T, UnitInterval>(field, &value)
    }

    pub(super) fn at_most<T: PartialOrd>(
        &self,
        field: &'static str,
        value: T,
        limit: &'static str,
        bound: T,
    ) -> Result<(), ParameterError> {
        if value <= bound {
            Ok(())
        } else {
            Err(ParameterError::Exceeds {
                group: self.group,
                field,
                limit,
            })
        }
    }

    pub(super) fn below<T: PartialOrd>(
        &self,
        field: &'static str,
        value: T,
        limit: &'static str,
        bound: T,
    ) -> Result<(), ParameterError> {
        if value < bound {
            Ok(())
        } else {
            Err(ParameterError::Exceeds {
                group: self.group,
                field,
                limit,
            })
        }
    }

    pub(super) fn volume_fractions(&self, fractions: &[f64]) -> Result<(), ParameterError> {
        let sum: f64 = fractions.iter().sum();
        if sum <= 1.0 {
            Ok(())
        } else {
            Err(ParameterError::Overfilled {
                group: self.group,
                sum,
            })
        }
    }
}
