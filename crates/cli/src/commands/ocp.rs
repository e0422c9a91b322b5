//! Evaluates the open-circuit potential curves.

use std::path::PathBuf;

use anyhow::{Context, Result};
use batpint_params::{Extrapolate, OcpCurve, OcpCurves};
use batpint_sim::{Figure, Series};
use clap::Args;
use uom::si::electric_potential::volt;

/// Samples drawn per curve by `--plot`.
const PLOT_SAMPLES: usize = 200;

#[derive(Args)]
pub struct OcpArgs {
    /// Directory holding OCV_cat.csv and OCV_an.csv; defaults to the bundled tables
    #[arg(long)]
    pub ocv_dir: Option<PathBuf>,

    /// Behaviour outside the table: enable, clamp, error or fill=<volts>
    #[arg(short, long, default_value_t = Extrapolate::Enable)]
    pub extrapolate: Extrapolate,

    /// Show both curves in a window
    #[arg(long)]
    pub plot: bool,

    /// States of charge to evaluate
    pub sto: Vec<f64>,
}

pub fn execute(args: OcpArgs) -> Result<()> {
    let curves = match &args.ocv_dir {
        Some(dir) => OcpCurves::load(dir, args.extrapolate),
        None => OcpCurves::load_bundled(args.extrapolate),
    }
    .context("failed to load OCV tables")?;

    if !args.sto.is_empty() {
        println!("{:>10} {:>14} {:>14}", "sto", "cathode [V]", "anode [V]");
    }
    for &sto in &args.sto {
        let cathode = curves.cathode_ocp(sto)?.get::<volt>();
        let anode = curves.anode_ocp(sto)?.get::<volt>();
        println!("{sto:>10.4} {cathode:>14.6} {anode:>14.6}");
    }

    if args.plot {
        let figure = Figure::new("open-circuit potential", "State of charge [-]", "OCP [V]")
            .with_series(sample(curves.cathode())?)
            .with_series(sample(curves.anode())?);
        batpint_plot::show(&[figure], "batpint ocp")
            .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"))?;
    }

    Ok(())
}

/// Samples a curve evenly across its tabulated range.
fn sample(curve: &OcpCurve) -> Result<Series> {
    let (min, max) = curve.table().domain();
    let points = (0..=PLOT_SAMPLES)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let sto = min + (max - min) * i as f64 / PLOT_SAMPLES as f64;
            Ok([sto, curve.potential(sto)?.get::<volt>()])
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Series::new(curve.name(), points))
}
