pub mod check;
pub mod kinetics;
pub mod ocp;
pub mod protocol;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use batpint_params::ParameterSet;
use batpint_sim::RunConfig;

/// Reads a run configuration, or the defaults when no file is given.
fn run_config(path: Option<&Path>) -> Result<RunConfig> {
    match path {
        Some(path) => RunConfig::from_path(path)
            .with_context(|| format!("failed to load run configuration {}", path.display())),
        None => Ok(RunConfig::default()),
    }
}

/// Reads a parameter set, or the reference cell matching `config`.
fn parameter_set(path: Option<&Path>, config: &RunConfig) -> Result<ParameterSet> {
    match path {
        Some(path) => ParameterSet::from_path(path)
            .with_context(|| format!("failed to load parameters {}", path.display())),
        None if config.variant.is_half_cell() => Ok(ParameterSet::javid_half_cell()),
        None => Ok(ParameterSet::javid()),
    }
}

/// Where the OCV tables are read from.
fn ocv_dir(explicit: Option<&Path>, config: &RunConfig) -> PathBuf {
    explicit
        .or(config.ocv_dir.as_deref())
        .map_or_else(batpint_params::ocp::bundled_dir, Path::to_path_buf)
}
