use serde::{Deserialize, Serialize};
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    electric_charge::ampere_hour,
    electric_current::ampere,
    electric_current_density::ampere_per_square_meter,
    electric_potential::volt,
    electrical_conductivity::siemens_per_meter,
    f64::{
        DiffusionCoefficient, ElectricCharge, ElectricCurrent, ElectricPotential,
        ElectricalConductivity, Length, MolarConcentration, Ratio, ThermodynamicTemperature,
    },
    length::meter,
    molar_concentration::mole_per_cubic_meter,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::kinetics::{InsertionKinetics, MetalKinetics};

use super::{ParameterError, check::Checker};

/// Physical constants, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Faraday constant, C/mol.
    pub faraday_constant: f64,
    /// Ideal gas constant, J/(mol·K).
    pub gas_constant: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            faraday_constant: 96_485.0,
            gas_constant: 8.314_462_618,
        }
    }
}

impl PhysicalConstants {
    pub(super) fn validate(&self) -> Result<(), ParameterError> {
        let check = Checker::new("constants");
        check.positive("faraday_constant", self.faraday_constant)?;
        check.positive("gas_constant", self.gas_constant)
    }
}

/// Cell-level geometry, rating and operating limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellParameters {
    pub electrode_height: Length,
    pub electrode_width: Length,
    pub nominal_capacity: ElectricCharge,
    /// Magnitude of the applied current when the protocol does not prescribe
    /// one. The step direction carries the sign.
    pub current: ElectricCurrent,
    pub lower_cutoff: ElectricPotential,
    pub upper_cutoff: ElectricPotential,
    /// Open-circuit voltage at 0 % state of charge.
    pub ocv_at_empty: ElectricPotential,
    /// Open-circuit voltage at 100 % state of charge.
    pub ocv_at_full: ElectricPotential,
    pub electrodes_in_parallel: u32,
    pub cells_in_series: u32,
}

impl CellParameters {
    pub(super) fn validate(&self) -> Result<(), ParameterError> {
        let check = Checker::new("cell");
        check.positive("electrode_height", self.electrode_height.get::<meter>())?;
        check.positive("electrode_width", self.electrode_width.get::<meter>())?;
        check.positive("nominal_capacity", self.nominal_capacity.get::<ampere_hour>())?;
        check.non_negative("current", self.current.get::<ampere>())?;
        check.positive("lower_cutoff", self.lower_cutoff.get::<volt>())?;
        check.below(
            "lower_cutoff",
            self.lower_cutoff.get::<volt>(),
            "upper_cutoff",
            self.upper_cutoff.get::<volt>(),
        )?;
        check.positive("ocv_at_empty", self.ocv_at_empty.get::<volt>())?;
        check.positive("ocv_at_full", self.ocv_at_full.get::<volt>())?;
        check.positive("electrodes_in_parallel", self.electrodes_in_parallel)?;
        check.positive("cells_in_series", self.cells_in_series)
    }
}

/// Reference, ambient and initial temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalParameters {
    pub reference_temperature: ThermodynamicTemperature,
    pub ambient_temperature: ThermodynamicTemperature,
    pub initial_temperature: ThermodynamicTemperature,
}

impl ThermalParameters {
    /// All three temperatures set to the same value.
    #[must_use]
    pub fn isothermal(temperature: ThermodynamicTemperature) -> Self {
        Self {
            reference_temperature: temperature,
            ambient_temperature: temperature,
            initial_temperature: temperature,
        }
    }

    pub(super) fn validate(&self) -> Result<(), ParameterError> {
        let check = Checker::new("thermal");
        check.positive(
            "reference_temperature",
            self.reference_temperature.get::<kelvin>(),
        )?;
        check.positive(
            "ambient_temperature",
            self.ambient_temperature.get::<kelvin>(),
        )?;
        check.positive(
            "initial_temperature",
            self.initial_temperature.get::<kelvin>(),
        )
    }
}

/// Geometry, transport and kinetics of an insertion electrode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectrodeParameters {
    pub thickness: Length,
    pub particle_radius: Length,
    pub active_material_fraction: Ratio,
    pub porosity: Ratio,
    pub conductivity: ElectricalConductivity,
    pub particle_diffusivity: DiffusionCoefficient,
    pub bruggeman_electrode: f64,
    pub bruggeman_electrolyte: f64,
    pub initial_concentration: MolarConcentration,
    pub maximum_concentration: MolarConcentration,
    pub kinetics: InsertionKinetics,
    /// Entropic change of the open-circuit potential, V/K.
    #[serde(default)]
    pub ocp_entropic_change: f64,
}

impl ElectrodeParameters {
    /// Initial stoichiometry, the initial over the maximum concentration.
    #[must_use]
    pub fn initial_stoichiometry(&self) -> f64 {
        self.initial_concentration.get::<mole_per_cubic_meter>()
            / self.maximum_concentration.get::<mole_per_cubic_meter>()
    }

    pub(super) fn validate(&self, group: &'static str) -> Result<(), ParameterError> {
        let check = Checker::new(group);
        let active = self.active_material_fraction.get::<ratio>();
        let porosity = self.porosity.get::<ratio>();
        let c_init = self.initial_concentration.get::<mole_per_cubic_meter>();
        let c_max = self.maximum_concentration.get::<mole_per_cubic_meter>();

        check.positive("thickness", self.thickness.get::<meter>())?;
        check.positive("particle_radius", self.particle_radius.get::<meter>())?;
        check.fraction("active_material_fraction", active)?;
        check.fraction("porosity", porosity)?;
        check.volume_fractions(&[active, porosity])?;
        check.positive("conductivity", self.conductivity.get::<siemens_per_meter>())?;
        check.positive(
            "particle_diffusivity",
            self.particle_diffusivity.get::<square_meter_per_second>(),
        )?;
        check.non_negative("bruggeman_electrode", self.bruggeman_electrode)?;
        check.non_negative("bruggeman_electrolyte", self.bruggeman_electrolyte)?;
        check.positive("maximum_concentration", c_max)?;
        check.non_negative("initial_concentration", c_init)?;
        check.at_most(
            "initial_concentration",
            c_init,
            "maximum_concentration",
            c_max,
        )?;
        check.non_negative(
            "kinetics.rate",
            self.kinetics.rate.get::<ampere_per_square_meter>(),
        )
    }
}

/// Geometry and transport of the separator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparatorParameters {
    pub thickness: Length,
    pub porosity: Ratio,
    pub bruggeman_electrolyte: f64,
    pub bruggeman_electrode: f64,
}

impl SeparatorParameters {
    pub(super) fn validate(&self) -> Result<(), ParameterError> {
        let check = Checker::new("separator");
        check.positive("thickness", self.thickness.get::<meter>())?;
        check.fraction("porosity", self.porosity.get::<ratio>())?;
        check.non_negative("bruggeman_electrolyte", self.bruggeman_electrolyte)?;
        check.non_negative("bruggeman_electrode", self.bruggeman_electrode)
    }
}

/// Transport properties and initial state of the electrolyte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectrolyteParameters {
    pub diffusivity: DiffusionCoefficient,
    pub conductivity: ElectricalConductivity,
    pub transference_number: Ratio,
    pub initial_concentration: MolarConcentration,
    pub thermodynamic_factor: f64,
}

impl ElectrolyteParameters {
    pub(super) fn validate(&self) -> Result<(), ParameterError> {
        let check = Checker::new("electrolyte");
        check.positive(
            "diffusivity",
            self.diffusivity.get::<square_meter_per_second>(),
        )?;
        check.positive("conductivity", self.conductivity.get::<siemens_per_meter>())?;
        check.fraction(
            "transference_number",
            self.transference_number.get::<ratio>(),
        )?;
        check.positive(
            "initial_concentration",
            self.initial_concentration.get::<mole_per_cubic_meter>(),
        )?;
        check.positive("thermodynamic_factor", self.thermodynamic_factor)
    }
}

/// Lithium metal counter electrode of a half cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LithiumMetalParameters {
    pub kinetics: MetalKinetics,
    /// Partial molar volume of lithium metal, m³/mol.
    pub partial_molar_volume: f64,
}

impl LithiumMetalParameters {
    pub(super) fn validate(&self) -> Result<(), ParameterError> {
        let check = Checker::new("lithium_metal");
        check.non_negative(
            "kinetics.reference_current_density",
            self.kinetics
                .reference_current_density
                .get::<ampere_per_square_meter>(),
        )?;
        check.positive("partial_molar_volume", self.partial_molar_volume)
    }
}
