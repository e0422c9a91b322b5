//! Cycling experiments.
//!
//! An [`Experiment`] is what the simulator runs: an ordered list of
//! [`Cycle`]s, each an ordered list of [`Step`]s, with an optional voltage at
//! which the whole experiment stops. Named [`Protocol`]s build the standard
//! experiments.

mod protocol;
mod step;

use batpint_core::constraint::ConstraintError;
use thiserror::Error;
use uom::si::f64::ElectricPotential;

pub use protocol::{CccvOptions, GittOptions, Protocol, ProtocolError};
pub use step::{Current, Limit, Step};

/// Errors raised while building an experiment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperimentError {
    #[error("cannot parse step `{0}`")]
    InvalidStep(String),

    #[error("invalid value `{value}` in step `{step}`")]
    InvalidValue { step: String, value: String },

    #[error("experiment has no cycles")]
    Empty,

    #[error("cycle has no steps")]
    EmptyCycle,

    #[error("protocol option `{field}` {reason}")]
    InvalidOption {
        field: &'static str,
        reason: ConstraintError,
    },
}

/// A non-empty sequence of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    steps: Vec<Step>,
}

impl Cycle {
    /// Parses each directive into a [`Step`].
    ///
    /// # Errors
    ///
    /// Returns the first parse error, or [`ExperimentError::EmptyCycle`] if no
    /// directives are given.
    pub fn parse<'s>(
        directives: impl IntoIterator<Item = &'s str>,
    ) -> Result<Self, ExperimentError> {
        let steps = directives
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Step>, _>>()?;
        Self::new(steps).ok_or(ExperimentError::EmptyCycle)
    }

    /// Returns `None` if `steps` is empty.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Option<Self> {
        (!steps.is_empty()).then_some(Self { steps })
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// An ordered list of cycles with an optional termination voltage.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    cycles: Vec<Cycle>,
    termination: Option<ElectricPotential>,
}

impl Experiment {
    /// Creates an experiment from explicit cycles.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::Empty`] if there are no cycles.
    pub fn new(cycles: Vec<Cycle>) -> Result<Self, ExperimentError> {
        if cycles.is_empty() {
            return Err(ExperimentError::Empty);
        }
        Ok(Self {
            cycles,
            termination: None,
        })
    }

    /// Repeats one cycle `count` times.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::Empty`] if `count` is zero.
    pub fn repeated(cycle: &Cycle, count: usize) -> Result<Self, ExperimentError> {
        Self::new(vec![cycle.clone(); count])
    }

    /// Stops the experiment once the terminal voltage reaches `voltage`.
    #[must_use]
    pub fn with_termination(mut self, voltage: ElectricPotential) -> Self {
        self.termination = Some(voltage);
        self
    }

    #[must_use]
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    #[must_use]
    pub fn termination(&self) -> Option<ElectricPotential> {
        self.termination
    }

    /// Total number of steps across all cycles.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.cycles.iter().map(|cycle| cycle.steps.len()).sum()
    }

    /// Iterates over every step in order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.cycles.iter().flat_map(|cycle| cycle.steps.iter())
    }
}
