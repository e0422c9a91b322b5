use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    electric_charge::ampere_hour,
    electric_current::ampere,
    electric_potential::volt,
    electrical_conductivity::siemens_per_meter,
    f64::{
        DiffusionCoefficient, ElectricCharge, ElectricCurrent, ElectricPotential,
        ElectricalConductivity, Length, MolarConcentration, Ratio, ThermodynamicTemperature,
    },
    length::{meter, micrometer},
    molar_concentration::mole_per_cubic_meter,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::kinetics::{InsertionKinetics, MetalKinetics};

use super::{
    CellParameters, ElectrodeParameters, ElectrolyteParameters, LithiumMetalParameters,
    ParameterSet, PhysicalConstants, SeparatorParameters, ThermalParameters,
};

/// Nominal capacity of the Javid cell, in A·h.
const NOMINAL_CAPACITY_AH: f64 = 29.2425;

/// Maximum lithium concentration of the positive electrode, in mol/m³.
const POSITIVE_MAX_CONCENTRATION: f64 = 49_200.0;

fn micrometers(value: f64) -> Length {
    Length::new::<micrometer>(value)
}

fn molar(value: f64) -> MolarConcentration {
    MolarConcentration::new::<mole_per_cubic_meter>(value)
}

fn diffusivity(value: f64) -> DiffusionCoefficient {
    DiffusionCoefficient::new::<square_meter_per_second>(value)
}

fn conductivity(value: f64) -> ElectricalConductivity {
    ElectricalConductivity::new::<siemens_per_meter>(value)
}

pub(super) fn full_cell() -> ParameterSet {
    ParameterSet {
        constants: PhysicalConstants::default(),
        cell: CellParameters {
            electrode_height: Length::new::<meter>(1.0),
            electrode_width: Length::new::<meter>(1.0),
            nominal_capacity: ElectricCharge::new::<ampere_hour>(NOMINAL_CAPACITY_AH),
            current: ElectricCurrent::new::<ampere>(NOMINAL_CAPACITY_AH),
            lower_cutoff: ElectricPotential::new::<volt>(3.0),
            upper_cutoff: ElectricPotential::new::<volt>(4.259),
            ocv_at_empty: ElectricPotential::new::<volt>(4.259),
            ocv_at_full: ElectricPotential::new::<volt>(3.5696),
            electrodes_in_parallel: 1,
            cells_in_series: 1,
        },
        thermal: ThermalParameters::isothermal(ThermodynamicTemperature::new::<kelvin>(298.15)),
        positive: ElectrodeParameters {
            thickness: micrometers(55.0),
            particle_radius: micrometers(8.0),
            active_material_fraction: Ratio::new::<ratio>(0.56),
            porosity: Ratio::new::<ratio>(0.39),
            conductivity: conductivity(9.2),
            particle_diffusivity: diffusivity(4e-14),
            bruggeman_electrode: 1.5,
            bruggeman_electrolyte: 1.5,
            initial_concentration: molar(0.222 * POSITIVE_MAX_CONCENTRATION),
            maximum_concentration: molar(POSITIVE_MAX_CONCENTRATION),
            kinetics: InsertionKinetics::cathode(),
            ocp_entropic_change: 0.0,
        },
        negative: Some(ElectrodeParameters {
            thickness: micrometers(80.0),
            particle_radius: micrometers(12.0),
            active_material_fraction: Ratio::new::<ratio>(0.53),
            porosity: Ratio::new::<ratio>(0.42),
            conductivity: conductivity(100.0),
            particle_diffusivity: diffusivity(1.5e-13),
            bruggeman_electrode: 1.5,
            bruggeman_electrolyte: 1.5,
            initial_concentration: molar(26_332.5),
            maximum_concentration: molar(30_000.0),
            kinetics: InsertionKinetics::anode(),
            ocp_entropic_change: 0.0,
        }),
        separator: SeparatorParameters {
            thickness: micrometers(15.0),
            porosity: Ratio::new::<ratio>(0.7),
            bruggeman_electrolyte: 1.5,
            bruggeman_electrode: 1.5,
        },
        electrolyte: ElectrolyteParameters {
            diffusivity: diffusivity(1.95e-10),
            conductivity: conductivity(0.927),
            transference_number: Ratio::new::<ratio>(0.47),
            initial_concentration: molar(1000.0),
            thermodynamic_factor: 3.0,
        },
        lithium_metal: Some(LithiumMetalParameters {
            kinetics: MetalKinetics::default(),
            partial_molar_volume: 1.0,
        }),
    }
}

pub(super) fn half_cell() -> ParameterSet {
    ParameterSet {
        negative: None,
        ..full_cell()
    }
}
