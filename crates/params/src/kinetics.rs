//! Exchange-current-density correlations.
//!
//! Two correlations are provided, both following a square-root dependence on
//! the electrolyte concentration referenced to
//! [`REFERENCE_ELECTROLYTE_CONCENTRATION`]:
//!
//! - [`MetalKinetics`] for a lithium metal counter electrode
//! - [`InsertionKinetics`] for an insertion electrode, with the kinetic rate
//!   fixed at construction ([`InsertionKinetics::cathode`] and
//!   [`InsertionKinetics::anode`] are the two rates in use)
//!
//! The electrolyte concentration passed in is the through-thickness average of
//! the electrolyte field. That reduction belongs to the solver, which applies
//! it before calling in.
//!
//! Inputs are not validated. Negative concentrations yield `NaN`, which the
//! solver reports through its own error channel.

use std::convert::Infallible;

use batpint_core::Component;
use serde::{Deserialize, Serialize};
use uom::si::{
    electric_current_density::ampere_per_square_meter,
    f64::{ElectricCurrentDensity, MolarConcentration, ThermodynamicTemperature},
    molar_concentration::mole_per_cubic_meter,
};

/// Reference electrolyte concentration of both correlations, in mol/m³.
pub const REFERENCE_ELECTROLYTE_CONCENTRATION: f64 = 1000.0;

/// Exchange current density of lithium metal at the reference concentration, in A/m².
pub const METAL_REFERENCE_CURRENT_DENSITY: f64 = 100.0;

/// Kinetic rate of the positive insertion electrode, in A/m².
pub const CATHODE_KINETIC_RATE: f64 = 0.75;

/// Kinetic rate of the negative insertion electrode, in A/m².
pub const ANODE_KINETIC_RATE: f64 = 0.2;

/// Input to [`MetalKinetics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalInput {
    /// Through-thickness average of the electrolyte concentration.
    pub electrolyte: MolarConcentration,
    /// Lithium concentration in the metal. Not used by the correlation.
    pub metal: MolarConcentration,
    /// Not used by the correlation.
    pub temperature: ThermodynamicTemperature,
}

/// Exchange-current density of a lithium metal electrode.
///
/// `i0 = m_ref * c_e^0.5` with `m_ref = i_ref / c_e_ref^0.5`, where `i_ref` is
/// the exchange current density at the reference electrolyte concentration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetalKinetics {
    pub reference_current_density: ElectricCurrentDensity,
}

impl MetalKinetics {
    #[must_use]
    pub fn new(reference_current_density: ElectricCurrentDensity) -> Self {
        Self {
            reference_current_density,
        }
    }

    /// Evaluates the exchange current density.
    #[must_use]
    pub fn exchange_current_density(&self, input: &MetalInput) -> ElectricCurrentDensity {
        let c_e = input.electrolyte.get::<mole_per_cubic_meter>();
        let i_ref = self
            .reference_current_density
            .get::<ampere_per_square_meter>();

        let m_ref = i_ref / REFERENCE_ELECTROLYTE_CONCENTRATION.sqrt();

        ElectricCurrentDensity::new::<ampere_per_square_meter>(m_ref * c_e.sqrt())
    }
}

impl Default for MetalKinetics {
    fn default() -> Self {
        Self::new(ElectricCurrentDensity::new::<ampere_per_square_meter>(
            METAL_REFERENCE_CURRENT_DENSITY,
        ))
    }
}

impl Component for MetalKinetics {
    type Input = MetalInput;
    type Output = ElectricCurrentDensity;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.exchange_current_density(&input))
    }
}

/// Input to [`InsertionKinetics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionInput {
    /// Through-thickness average of the electrolyte concentration.
    pub electrolyte: MolarConcentration,
    /// Lithium concentration at the particle surface.
    pub surface: MolarConcentration,
    /// Maximum lithium concentration in the active material.
    pub maximum: MolarConcentration,
    /// Not used by the correlation.
    pub temperature: ThermodynamicTemperature,
}

/// Exchange-current density of an insertion electrode.
///
/// `i0 = m_ref * c_e^0.5 * c_s^0.5 * (c_s_max - c_s)^0.5` with
/// `m_ref = 2 k / (c_s_max * c_e_ref^0.5)`, where `k` is the kinetic rate.
///
/// The result is exactly zero for a fully depleted (`c_s = 0`) or saturated
/// (`c_s = c_s_max`) surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsertionKinetics {
    pub rate: ElectricCurrentDensity,
}

impl InsertionKinetics {
    #[must_use]
    pub fn new(rate: ElectricCurrentDensity) -> Self {
        Self { rate }
    }

    /// Kinetics of the positive electrode, `k = 0.75 A/m²`.
    #[must_use]
    pub fn cathode() -> Self {
        Self::new(ElectricCurrentDensity::new::<ampere_per_square_meter>(
            CATHODE_KINETIC_RATE,
        ))
    }

    /// Kinetics of the negative electrode, `k = 0.2 A/m²`.
    #[must_use]
    pub fn anode() -> Self {
        Self::new(ElectricCurrentDensity::new::<ampere_per_square_meter>(
            ANODE_KINETIC_RATE,
        ))
    }

    /// Evaluates the exchange current density.
    #[must_use]
    pub fn exchange_current_density(&self, input: &InsertionInput) -> ElectricCurrentDensity {
        let c_e = input.electrolyte.get::<mole_per_cubic_meter>();
        let c_s = input.surface.get::<mole_per_cubic_meter>();
        let c_max = input.maximum.get::<mole_per_cubic_meter>();
        let k = self.rate.get::<ampere_per_square_meter>();

        let m_ref = 2.0 * k / (c_max * REFERENCE_ELECTROLYTE_CONCENTRATION.sqrt());

        ElectricCurrentDensity::new::<ampere_per_square_meter>(
            m_ref * c_e.sqrt() * c_s.sqrt() * (c_max - c_s).sqrt(),
        )
    }
}

impl Component for InsertionKinetics {
    type Input = InsertionInput;
    type Output = ElectricCurrentDensity;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.exchange_current_density(&input))
    }
}

/// Exchange-current density of the positive electrode.
#[must_use]
pub fn cathode_exchange_current_density(
    c_e: MolarConcentration,
    c_s_surf: MolarConcentration,
    c_s_max: MolarConcentration,
    temperature: ThermodynamicTemperature,
) -> ElectricCurrentDensity {
    InsertionKinetics::cathode().exchange_current_density(&InsertionInput {
        electrolyte: c_e,
        surface: c_s_surf,
        maximum: c_s_max,
        temperature,
    })
}

/// Exchange-current density of the negative electrode.
#[must_use]
pub fn anode_exchange_current_density(
    c_e: MolarConcentration,
    c_s_surf: MolarConcentration,
    c_s_max: MolarConcentration,
    temperature: ThermodynamicTemperature,
) -> ElectricCurrentDensity {
    InsertionKinetics::anode().exchange_current_density(&InsertionInput {
        electrolyte: c_e,
        surface: c_s_surf,
        maximum: c_s_max,
        temperature,
    })
}

/// Exchange-current density of a lithium metal electrode.
#[must_use]
pub fn lithium_metal_exchange_current_density(
    c_e: MolarConcentration,
    c_li: MolarConcentration,
    temperature: ThermodynamicTemperature,
) -> ElectricCurrentDensity {
    MetalKinetics::default().exchange_current_density(&MetalInput {
        electrolyte: c_e,
        metal: c_li,
        temperature,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::kelvin;

    use super::*;

    fn molar(value: f64) -> MolarConcentration {
        MolarConcentration::new::<mole_per_cubic_meter>(value)
    }

    fn room_temperature() -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(298.15)
    }

    fn amps_per_m2(i0: ElectricCurrentDensity) -> f64 {
        i0.get::<ampere_per_square_meter>()
    }

    #[test]
    fn insertion_matches_closed_form() {
        let c_s_max = 49_200.0;
        let c_s = 0.25 * c_s_max;
        let c_e = 1000.0;

        let i0 = cathode_exchange_current_density(
            molar(c_e),
            molar(c_s),
            molar(c_s_max),
            room_temperature(),
        );

        let m_ref = 2.0 * 0.75 / (c_s_max * 1000.0_f64.powf(0.5));
        let expected = m_ref * c_e.powf(0.5) * c_s.powf(0.5) * (c_s_max - c_s).powf(0.5);

        assert_relative_eq!(amps_per_m2(i0), expected, max_relative = 1e-9);
    }

    #[test]
    fn insertion_is_zero_at_depletion_and_saturation() {
        for c_s_max in [30_000.0, 49_200.0] {
            for kinetics in [InsertionKinetics::cathode(), InsertionKinetics::anode()] {
                for c_s in [0.0, c_s_max] {
                    let i0 = kinetics.exchange_current_density(&InsertionInput {
                        electrolyte: molar(1000.0),
                        surface: molar(c_s),
                        maximum: molar(c_s_max),
                        temperature: room_temperature(),
                    });
                    assert_eq!(amps_per_m2(i0), 0.0, "c_s = {c_s}, c_s_max = {c_s_max}");
                }
            }
        }
    }

    #[test]
    fn insertion_rates_scale_linearly() {
        let args = (molar(800.0), molar(15_000.0), molar(30_000.0));
        let cathode = cathode_exchange_current_density(args.0, args.1, args.2, room_temperature());
        let anode = anode_exchange_current_density(args.0, args.1, args.2, room_temperature());

        assert_relative_eq!(
            amps_per_m2(cathode) / amps_per_m2(anode),
            CATHODE_KINETIC_RATE / ANODE_KINETIC_RATE,
            max_relative = 1e-12
        );
    }

    #[test]
    fn metal_at_reference_concentration_returns_reference_density() {
        let i0 = lithium_metal_exchange_current_density(
            molar(REFERENCE_ELECTROLYTE_CONCENTRATION),
            molar(0.0),
            room_temperature(),
        );
        assert_relative_eq!(amps_per_m2(i0), METAL_REFERENCE_CURRENT_DENSITY);
    }

    #[test]
    fn metal_is_monotonic_in_electrolyte_concentration() {
        let kinetics = MetalKinetics::default();
        let mut previous = f64::NEG_INFINITY;

        for step in 0..=200 {
            let c_e = f64::from(step) * 12.5;
            let i0 = kinetics
                .call(MetalInput {
                    electrolyte: molar(c_e),
                    metal: molar(0.0),
                    temperature: room_temperature(),
                })
                .unwrap();
            let value = amps_per_m2(i0);

            assert!(value >= previous, "decreased at c_e = {c_e}");
            previous = value;
        }
    }

    #[test]
    fn metal_at_zero_concentration_is_zero() {
        let i0 = lithium_metal_exchange_current_density(molar(0.0), molar(0.0), room_temperature());
        assert_eq!(amps_per_m2(i0), 0.0);
    }

    #[test]
    fn component_call_matches_method() {
        let input = InsertionInput {
            electrolyte: molar(1200.0),
            surface: molar(10_000.0),
            maximum: molar(30_000.0),
            temperature: room_temperature(),
        };
        let kinetics = InsertionKinetics::anode();

        assert_eq!(
            kinetics.call(input).unwrap(),
            kinetics.exchange_current_density(&input)
        );
    }
}
