//! Cycling experiments and the run procedure for cell simulations.
//!
//! The numerical solver is not part of this crate. It is reached through the
//! [`Simulator`] trait, which receives the model options, the bound
//! [`ParameterValues`](batpint_params::ParameterValues) and an [`Experiment`],
//! and returns a [`Solution`]. [`run`] drives one simulation from a
//! [`RunConfig`] and turns the solution into [`Figure`]s.

pub mod experiment;
pub mod figure;
pub mod model;
pub mod run;
pub mod simulator;
pub mod solution;

pub use experiment::{
    CccvOptions, Cycle, Experiment, ExperimentError, GittOptions, Protocol, ProtocolError, Step,
};
pub use figure::{Figure, Series};
pub use model::{Discretization, ModelError, ModelOptions, SolverMode};
pub use run::{RunConfig, RunError, RunOutput, run};
pub use simulator::Simulator;
pub use solution::{Solution, Trajectory, TrajectoryError};
