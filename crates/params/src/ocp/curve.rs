use batpint_core::Component;
use ndarray::Array1;
use ninterp::{
    prelude::{Interp1DOwned, Interpolator},
    strategy::enums::Strategy1DEnum,
};
use tracing::debug;
use uom::si::{electric_potential::volt, f64::ElectricPotential};

use super::{Extrapolate, OcpError, OcpTable};

/// A piecewise-linear open-circuit potential curve.
///
/// Evaluates the voltage of an electrode as a function of its state of
/// charge. Tabulated points are reproduced exactly; between them the curve is
/// linear, and outside them it follows the configured [`Extrapolate`] policy.
pub struct OcpCurve {
    table: OcpTable,
    interp: Interp1DOwned<f64, Strategy1DEnum>,
    extrapolate: Extrapolate,
}

impl OcpCurve {
    /// Builds an interpolating curve over a table.
    ///
    /// # Errors
    ///
    /// Returns [`OcpError::Validation`] if the interpolator rejects the table.
    pub fn new(table: OcpTable, extrapolate: Extrapolate) -> Result<Self, OcpError> {
        let interp = Interp1DOwned::new(
            Array1::from(table.x().to_vec()),
            Array1::from(table.y().to_vec()),
            ninterp::strategy::Linear.into(),
            extrapolate.into(),
        )?;

        Ok(Self {
            table,
            interp,
            extrapolate,
        })
    }

    /// Evaluates the open-circuit potential at a state of charge.
    ///
    /// # Errors
    ///
    /// Returns [`OcpError::NotANumber`] for a `NaN` state of charge, whatever
    /// the policy, and [`OcpError::Interpolation`] if `sto` lies outside the
    /// table and the policy is [`Extrapolate::Error`].
    pub fn potential(&self, sto: f64) -> Result<ElectricPotential, OcpError> {
        if sto.is_nan() {
            return Err(OcpError::NotANumber);
        }

        if let Some(knot) = self.table.knot_value(sto) {
            return Ok(ElectricPotential::new::<volt>(knot));
        }

        if !self.contains(sto) {
            debug!(
                curve = self.name(),
                sto,
                policy = %self.extrapolate,
                "state of charge outside tabulated range"
            );
        }

        let value = self.interp.interpolate(&[sto])?;
        Ok(ElectricPotential::new::<volt>(value))
    }

    /// Returns `true` if `sto` lies within the tabulated range.
    #[must_use]
    pub fn contains(&self, sto: f64) -> bool {
        let (min, max) = self.table.domain();
        (min..=max).contains(&sto)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.table.name()
    }

    #[must_use]
    pub fn table(&self) -> &OcpTable {
        &self.table
    }

    #[must_use]
    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }
}

impl std::fmt::Debug for OcpCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcpCurve")
            .field("name", &self.table.name())
            .field("points", &self.table.len())
            .field("extrapolate", &self.extrapolate)
            .finish_non_exhaustive()
    }
}

impl Component for OcpCurve {
    type Input = f64;
    type Output = ElectricPotential;
    type Error = OcpError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.potential(input)
    }
}
