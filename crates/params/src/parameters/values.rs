use uom::si::f64::{
    ElectricCurrentDensity, ElectricPotential, MolarConcentration, ThermodynamicTemperature,
};

use crate::{
    kinetics::{InsertionInput, MetalInput},
    ocp::{OcpCurves, OcpError},
};

use super::{CellVariant, ElectrodeParameters, ParameterError, ParameterSet};

/// A validated parameter set bound to its OCP curves.
///
/// This is the view a solver reads: the scalar groups of the set plus the
/// functions of state it evaluates while integrating. Both the set and the
/// curves are borrowed, so one loaded pair can back many concurrent runs.
#[derive(Debug, Clone, Copy)]
pub struct ParameterValues<'a> {
    set: &'a ParameterSet,
    curves: &'a OcpCurves,
    variant: CellVariant,
}

impl<'a> ParameterValues<'a> {
    /// Validates `set` for `variant` and binds it to `curves`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the set is not valid for the variant.
    pub fn new(
        set: &'a ParameterSet,
        curves: &'a OcpCurves,
        variant: CellVariant,
    ) -> Result<Self, ParameterError> {
        set.validate(variant)?;
        Ok(Self {
            set,
            curves,
            variant,
        })
    }

    #[must_use]
    pub fn set(&self) -> &'a ParameterSet {
        self.set
    }

    #[must_use]
    pub fn curves(&self) -> &'a OcpCurves {
        self.curves
    }

    #[must_use]
    pub fn variant(&self) -> CellVariant {
        self.variant
    }

    #[must_use]
    pub fn positive(&self) -> &'a ElectrodeParameters {
        &self.set.positive
    }

    /// The negative insertion electrode, `None` for a half cell.
    #[must_use]
    pub fn negative(&self) -> Option<&'a ElectrodeParameters> {
        match self.variant {
            CellVariant::Full => self.set.negative.as_ref(),
            CellVariant::Half => None,
        }
    }

    /// Positive electrode open-circuit potential at stoichiometry `sto`.
    ///
    /// # Errors
    ///
    /// Returns an [`OcpError`] if the curve cannot be evaluated at `sto`.
    pub fn positive_ocp(&self, sto: f64) -> Result<ElectricPotential, OcpError> {
        self.curves.cathode_ocp(sto)
    }

    /// Negative electrode open-circuit potential at stoichiometry `sto`.
    ///
    /// `None` for a half cell, whose counter electrode is lithium metal.
    ///
    /// # Errors
    ///
    /// Returns an [`OcpError`] if the curve cannot be evaluated at `sto`.
    pub fn negative_ocp(&self, sto: f64) -> Result<Option<ElectricPotential>, OcpError> {
        match self.variant {
            CellVariant::Full => self.curves.anode_ocp(sto).map(Some),
            CellVariant::Half => Ok(None),
        }
    }

    #[must_use]
    pub fn positive_exchange_current_density(
        &self,
        electrolyte: MolarConcentration,
        surface: MolarConcentration,
        temperature: ThermodynamicTemperature,
    ) -> ElectricCurrentDensity {
        insertion(&self.set.positive, electrolyte, surface, temperature)
    }

    /// `None` for a half cell.
    #[must_use]
    pub fn negative_exchange_current_density(
        &self,
        electrolyte: MolarConcentration,
        surface: MolarConcentration,
        temperature: ThermodynamicTemperature,
    ) -> Option<ElectricCurrentDensity> {
        self.negative()
            .map(|electrode| insertion(electrode, electrolyte, surface, temperature))
    }

    /// `None` for a full cell.
    #[must_use]
    pub fn metal_exchange_current_density(
        &self,
        electrolyte: MolarConcentration,
        metal: MolarConcentration,
        temperature: ThermodynamicTemperature,
    ) -> Option<ElectricCurrentDensity> {
        if !self.variant.is_half_cell() {
            return None;
        }
        self.set.lithium_metal.as_ref().map(|lithium| {
            lithium.kinetics.exchange_current_density(&MetalInput {
                electrolyte,
                metal,
                temperature,
            })
        })
    }
}

fn insertion(
    electrode: &ElectrodeParameters,
    electrolyte: MolarConcentration,
    surface: MolarConcentration,
    temperature: ThermodynamicTemperature,
) -> ElectricCurrentDensity {
    electrode
        .kinetics
        .exchange_current_density(&InsertionInput {
            electrolyte,
            surface,
            maximum: electrode.maximum_concentration,
            temperature,
        })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        electric_current_density::ampere_per_square_meter, electric_potential::volt,
        molar_concentration::mole_per_cubic_meter, thermodynamic_temperature::kelvin,
    };

    use crate::{
        kinetics::{anode_exchange_current_density, cathode_exchange_current_density},
        ocp::Extrapolate,
    };

    use super::*;

    fn molar(value: f64) -> MolarConcentration {
        MolarConcentration::new::<mole_per_cubic_meter>(value)
    }

    fn temperature() -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(298.15)
    }

    fn curves() -> OcpCurves {
        OcpCurves::load_bundled(Extrapolate::Enable).unwrap()
    }

    #[test]
    fn full_cell_binds_both_insertion_electrodes() {
        let set = ParameterSet::javid();
        let curves = curves();
        let values = ParameterValues::new(&set, &curves, CellVariant::Full).unwrap();

        let positive = values.positive_exchange_current_density(
            molar(1000.0),
            molar(20_000.0),
            temperature(),
        );
        let expected = cathode_exchange_current_density(
            molar(1000.0),
            molar(20_000.0),
            molar(49_200.0),
            temperature(),
        );
        assert_relative_eq!(
            positive.get::<ampere_per_square_meter>(),
            expected.get::<ampere_per_square_meter>()
        );

        let negative = values
            .negative_exchange_current_density(molar(1000.0), molar(15_000.0), temperature())
            .unwrap();
        let expected = anode_exchange_current_density(
            molar(1000.0),
            molar(15_000.0),
            molar(30_000.0),
            temperature(),
        );
        assert_relative_eq!(
            negative.get::<ampere_per_square_meter>(),
            expected.get::<ampere_per_square_meter>()
        );

        assert!(
            values
                .metal_exchange_current_density(molar(1000.0), molar(0.0), temperature())
                .is_none()
        );
        assert!(values.negative_ocp(0.5).unwrap().is_some());
    }

    #[test]
    fn half_cell_binds_lithium_metal() {
        let set = ParameterSet::javid_half_cell();
        let curves = curves();
        let values = ParameterValues::new(&set, &curves, CellVariant::Half).unwrap();

        let metal = values
            .metal_exchange_current_density(molar(1000.0), molar(0.0), temperature())
            .unwrap();
        assert_relative_eq!(metal.get::<ampere_per_square_meter>(), 100.0);

        assert!(values.negative().is_none());
        assert!(
            values
                .negative_exchange_current_density(molar(1000.0), molar(1.0), temperature())
                .is_none()
        );
        assert_eq!(values.negative_ocp(0.5).unwrap(), None);
    }

    #[test]
    fn positive_ocp_follows_cathode_curve() {
        let set = ParameterSet::javid();
        let curves = curves();
        let values = ParameterValues::new(&set, &curves, CellVariant::Full).unwrap();

        for sto in [0.0, 0.3, 0.75, 1.0] {
            assert_eq!(
                values.positive_ocp(sto).unwrap().get::<volt>(),
                curves.cathode_ocp(sto).unwrap().get::<volt>()
            );
        }
    }

    #[test]
    fn invalid_set_is_not_bound() {
        let set = ParameterSet::javid_half_cell();
        let curves = curves();

        let err = ParameterValues::new(&set, &curves, CellVariant::Full).unwrap_err();
        assert!(matches!(err, ParameterError::Missing { .. }));
    }
}
