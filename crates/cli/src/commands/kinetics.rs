//! Evaluates the exchange current densities of the reference cell.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use batpint_params::{CellVariant, OcpCurves, ParameterValues};
use batpint_sim::RunConfig;
use clap::Args;
use uom::si::{
    electric_current_density::ampere_per_square_meter,
    f64::{MolarConcentration, ThermodynamicTemperature},
    molar_concentration::mole_per_cubic_meter,
    thermodynamic_temperature::kelvin,
};

#[derive(Args)]
pub struct KineticsArgs {
    /// Averaged electrolyte concentration [mol/m³]
    #[arg(long)]
    pub ce: f64,

    /// Particle surface stoichiometry of both electrodes
    #[arg(long)]
    pub sto: f64,

    /// Temperature [K]
    #[arg(short, long, default_value_t = 298.15)]
    pub temperature: f64,

    /// Parameter set (TOML); defaults to the reference cell
    #[arg(short, long)]
    pub params: Option<PathBuf>,
}

pub fn execute(args: KineticsArgs) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&args.sto),
        "stoichiometry {} is outside [0, 1]",
        args.sto
    );

    let set = super::parameter_set(args.params.as_deref(), &RunConfig::default())?;
    let curves = OcpCurves::load_bundled(Default::default())?;
    let electrolyte = MolarConcentration::new::<mole_per_cubic_meter>(args.ce);
    let temperature = ThermodynamicTemperature::new::<kelvin>(args.temperature);

    println!(
        "c_e = {} mol/m³, sto = {}, T = {} K",
        args.ce, args.sto, args.temperature
    );

    let mut variants = Vec::new();
    if set.negative.is_some() {
        variants.push(CellVariant::Full);
    }
    if set.lithium_metal.is_some() {
        variants.push(CellVariant::Half);
    }

    for variant in variants {
        let values = ParameterValues::new(&set, &curves, variant)?;
        println!("{variant}:");

        let positive = values.positive();
        let i0 = values.positive_exchange_current_density(
            electrolyte,
            positive.maximum_concentration * args.sto,
            temperature,
        );
        println!("  positive:      {:.6e} A/m²", i0.get::<ampere_per_square_meter>());

        if let Some(negative) = values.negative() {
            let surface = negative.maximum_concentration * args.sto;
            if let Some(i0) =
                values.negative_exchange_current_density(electrolyte, surface, temperature)
            {
                println!("  negative:      {:.6e} A/m²", i0.get::<ampere_per_square_meter>());
            }
        }

        let metal = MolarConcentration::new::<mole_per_cubic_meter>(0.0);
        if let Some(i0) = values.metal_exchange_current_density(electrolyte, metal, temperature) {
            println!("  lithium metal: {:.6e} A/m²", i0.get::<ampere_per_square_meter>());
        }
    }

    Ok(())
}
