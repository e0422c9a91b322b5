//! Validates everything a run reads before it starts.

use std::path::PathBuf;

use anyhow::{Result, bail};
use batpint_params::{OcpCurves, ParameterValues};
use clap::Args;
use tracing::{error, info};
use uom::si::electric_potential::volt;

#[derive(Args)]
pub struct CheckArgs {
    /// Parameter set (TOML); defaults to the reference cell
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Run configuration (TOML); defaults to a full-cell CCCV run
    #[arg(short, long)]
    pub run: Option<PathBuf>,

    /// Directory holding OCV_cat.csv and OCV_an.csv
    #[arg(long)]
    pub ocv_dir: Option<PathBuf>,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let config = super::run_config(args.run.as_deref())?;
    let set = super::parameter_set(args.params.as_deref(), &config)?;
    let dir = super::ocv_dir(args.ocv_dir.as_deref(), &config);

    let mut errors = Vec::new();

    let curves = match OcpCurves::load(&dir, config.extrapolation) {
        Ok(curves) => Some(curves),
        Err(err) => {
            errors.push(format!("OCV tables in {}: {err}", dir.display()));
            None
        }
    };

    if let Err(err) = set.validate(config.variant) {
        errors.push(format!("parameters: {err}"));
    }
    if let Err(err) = config.model_options().validate() {
        errors.push(format!("model: {err}"));
    }
    let experiment = match config.experiment() {
        Ok(experiment) => Some(experiment),
        Err(err) => {
            errors.push(format!("experiment: {err}"));
            None
        }
    };

    if !errors.is_empty() {
        for message in &errors {
            error!("{message}");
        }
        bail!("{} problem(s) found", errors.len());
    }

    if let (Some(curves), Some(experiment)) = (curves, experiment) {
        let values = ParameterValues::new(&set, &curves, config.variant)?;
        let sto = values.positive().initial_stoichiometry();
        info!(
            label = %config.label(),
            cycles = experiment.cycles().len(),
            steps = experiment.step_count(),
            "configuration is valid"
        );
        println!("{}: ok", config.label());
        println!("  cycles:              {}", experiment.cycles().len());
        println!("  initial positive sto: {sto:.4}");
        println!(
            "  positive OCP there:   {:.4} V",
            values.positive_ocp(sto)?.get::<volt>()
        );
    }

    Ok(())
}
