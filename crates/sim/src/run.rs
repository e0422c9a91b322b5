//! One simulation from configuration to figures.
//!
//! [`run`] validates the parameters and model options, builds the protocol's
//! experiment, hands everything to a [`Simulator`] and turns its [`Solution`]
//! into two figures:
//!
//! - voltage against discharge capacity over the whole run
//! - voltage against time for the first and last cycles, each shifted to
//!   start at zero

use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use batpint_params::{
    CellVariant, ConfigError, Extrapolate, OcpCurves, OcpError, ParameterError, ParameterSet,
    ParameterValues, load_toml, parse_toml,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    experiment::{CccvOptions, Experiment, ExperimentError, GittOptions, Protocol},
    figure::{Figure, Series},
    model::{Discretization, ModelError, ModelOptions, SolverMode},
    simulator::Simulator,
    solution::Solution,
};

/// Title of the voltage against capacity figure.
pub const CAPACITY_FIGURE: &str = "voltage vs capacity";

/// Title of the first and last cycle figure.
pub const CYCLES_FIGURE: &str = "first and last cycle";

/// Everything that selects a run, apart from the parameter values.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration: a full-cell CCCV run on the default mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub variant: CellVariant,
    pub protocol: Protocol,
    pub gitt: GittOptions,
    pub cccv: CccvOptions,
    pub discretization: Discretization,
    pub solver: SolverMode,
    /// Behaviour of the OCP curves outside their tabulated range.
    pub extrapolation: Extrapolate,
    /// Directory holding the OCV tables. The bundled tables are used if unset.
    pub ocv_dir: Option<PathBuf>,
}

impl RunConfig {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text does not describe a run.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        parse_toml(text)
    }

    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_toml(path)
    }

    /// The run label, such as `CCCV (FC)` or `GITT (HC)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.protocol, self.variant.abbreviation())
    }

    /// # Errors
    ///
    /// Returns an [`ExperimentError`] if the protocol options ask for zero
    /// cycles.
    pub fn experiment(&self) -> Result<Experiment, ExperimentError> {
        self.protocol.experiment(&self.gitt, &self.cccv)
    }

    #[must_use]
    pub fn model_options(&self) -> ModelOptions {
        ModelOptions {
            variant: self.variant,
            discretization: self.discretization,
            solver: self.solver,
        }
    }

    /// Loads the OCP curves from [`RunConfig::ocv_dir`], or the bundled tables.
    ///
    /// # Errors
    ///
    /// Returns an [`OcpError`] if a table is missing or malformed.
    pub fn load_curves(&self) -> Result<OcpCurves, OcpError> {
        match &self.ocv_dir {
            Some(dir) => OcpCurves::load(dir, self.extrapolation),
            None => OcpCurves::load_bundled(self.extrapolation),
        }
    }
}

/// Errors raised by [`run`].
#[derive(Debug, Error)]
pub enum RunError<E> {
    #[error("invalid parameters")]
    Parameters(#[from] ParameterError),

    #[error("invalid model options")]
    Model(#[from] ModelError),

    #[error("invalid experiment")]
    Experiment(#[from] ExperimentError),

    #[error("simulation failed")]
    Simulation(#[source] E),
}

/// The outcome of a run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub label: String,
    pub solution: Solution,
    /// Wall-clock time spent in the simulator.
    pub solve_time: Duration,
    pub figures: Vec<Figure>,
}

/// Runs one simulation.
///
/// The simulator is only called once the parameters, the model options and
/// the experiment have all been validated.
///
/// # Errors
///
/// Returns a [`RunError`] if validation fails or the simulator fails.
pub fn run<S: Simulator>(
    simulator: &S,
    config: &RunConfig,
    parameters: &ParameterSet,
    curves: &OcpCurves,
) -> Result<RunOutput, RunError<S::Error>> {
    let label = config.label();
    let options = config.model_options();
    options.validate()?;
    let values = ParameterValues::new(parameters, curves, config.variant)?;
    let experiment = config.experiment()?;

    info!(
        %label,
        cycles = experiment.cycles().len(),
        steps = experiment.step_count(),
        solver = %options.solver,
        "starting simulation"
    );

    let start = Instant::now();
    let solution = simulator
        .simulate(&options, &values, &experiment)
        .map_err(RunError::Simulation)?;
    let solve_time = start.elapsed();

    info!(
        %label,
        solve_time = ?solve_time,
        cycles = solution.cycles().len(),
        "simulation finished"
    );

    let figures = figures(&label, &solution);
    Ok(RunOutput {
        label,
        solution,
        solve_time,
        figures,
    })
}

/// Builds the capacity figure and the first and last cycle figure.
#[must_use]
pub fn figures(label: &str, solution: &Solution) -> Vec<Figure> {
    let capacity = Figure::new(CAPACITY_FIGURE, "Capacity [A.h]", "Voltage [V]").with_series(
        Series::new(label, solution.trajectory().voltage_vs_capacity()),
    );

    let mut cycles = Figure::new(CYCLES_FIGURE, "Time [h]", "Voltage [V]");
    for index in first_and_last(solution.cycles().len()) {
        debug!(cycle = index + 1, "plotting cycle");
        cycles = cycles.with_series(Series::new(
            format!("{label} - C{}", index + 1),
            solution.cycles()[index].voltage_vs_elapsed_time(),
        ));
    }

    vec![capacity, cycles]
}

/// Indices of the first and last of `count` cycles, without repeats.
fn first_and_last(count: usize) -> Vec<usize> {
    match count {
        0 => Vec::new(),
        1 => vec![0],
        n => vec![0, n - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_protocol_and_variant() {
        let mut config = RunConfig::default();
        assert_eq!(config.label(), "CCCV (FC)");

        config.protocol = Protocol::Gitt;
        config.variant = CellVariant::Half;
        assert_eq!(config.label(), "GITT (HC)");
    }

    #[test]
    fn selects_first_and_last_cycles() {
        assert!(first_and_last(0).is_empty());
        assert_eq!(first_and_last(1), [0]);
        assert_eq!(first_and_last(2), [0, 1]);
        assert_eq!(first_and_last(100), [0, 99]);
    }

    #[test]
    fn empty_document_is_default_config() {
        let config = RunConfig::from_toml_str("").unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn reads_partial_config() {
        let text = r#"
            variant = "half"
            protocol = "gitt"
            solver = "fast-with-events"
            extrapolation = "clamp"

            [gitt]
            cycles = 4

            [discretization]
            r_p = 20
        "#;
        let config = RunConfig::from_toml_str(text).unwrap();

        assert_eq!(config.variant, CellVariant::Half);
        assert_eq!(config.protocol, Protocol::Gitt);
        assert_eq!(config.solver, SolverMode::FastWithEvents);
        assert_eq!(config.extrapolation, Extrapolate::Clamp);
        assert_eq!(config.gitt.cycles, 4);
        assert_eq!(config.discretization.r_p, 20);
        assert_eq!(config.discretization.x_s, 30);
        assert_eq!(config.experiment().unwrap().cycles().len(), 4);
    }

    #[test]
    fn unknown_protocol_fails_to_load() {
        let err = RunConfig::from_toml_str("protocol = \"hppc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(&path, "protocol = \"CCCV\"\n[cccv]\ncycles = 2\n").unwrap();

        let config = RunConfig::from_path(&path).unwrap();
        assert_eq!(config.cccv.cycles, 2);
    }

    #[test]
    fn model_options_mirror_config() {
        let config = RunConfig {
            variant: CellVariant::Half,
            solver: SolverMode::Fast,
            ..RunConfig::default()
        };
        let options = config.model_options();

        assert_eq!(options.variant, CellVariant::Half);
        assert_eq!(options.solver, SolverMode::Fast);
        assert_eq!(options.discretization, Discretization::default());
    }
}
