//! Electrochemical parameters for lithium-ion cell simulations.
//!
//! This crate supplies everything the external solver reads as parameters:
//!
//! - [`kinetics`]: exchange-current-density correlations
//! - [`ocp`]: open-circuit potentials interpolated from tabulated data
//! - [`parameters`]: the typed parameter record and the bound view a solver
//!   consumes
//!
//! Numerical solving is not performed here.

mod config;

pub mod kinetics;
pub mod ocp;
pub mod parameters;

pub use config::{ConfigError, load_toml, parse_toml};
pub use ocp::{Extrapolate, OcpCurve, OcpCurves, OcpError, OcpTable};
pub use parameters::{CellVariant, ParameterError, ParameterSet, ParameterValues};
