//! Prints the experiment a protocol runs.

use std::path::PathBuf;

use anyhow::Result;
use batpint_sim::Protocol;
use clap::Args;
use uom::si::electric_potential::volt;

#[derive(Args)]
pub struct ProtocolArgs {
    /// Protocol name (GITT or CCCV)
    pub name: String,

    /// Run configuration (TOML) whose protocol options are used
    #[arg(short, long)]
    pub run: Option<PathBuf>,
}

pub fn execute(args: ProtocolArgs) -> Result<()> {
    let protocol: Protocol = args.name.parse()?;
    let config = super::run_config(args.run.as_deref())?;
    let experiment = protocol.experiment(&config.gitt, &config.cccv)?;

    println!("{protocol}: {} cycles", experiment.cycles().len());
    for (index, cycle) in experiment.cycles().iter().enumerate() {
        if index > 0 && experiment.cycles()[index - 1] == *cycle {
            continue;
        }
        println!("  cycle {}:", index + 1);
        for step in cycle.steps() {
            println!("    {step}");
        }
    }
    if let Some(termination) = experiment.termination() {
        println!("  terminate at {} V", termination.get::<volt>());
    }

    Ok(())
}
