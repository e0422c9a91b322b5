//! Options handed to the simulator alongside the parameters.

use std::{fmt, str::FromStr};

use batpint_core::constraint::{Constraint, ConstraintError, StrictlyPositive};
use batpint_params::CellVariant;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors in the model options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("discretization `{field}` {reason}")]
    Discretization {
        field: &'static str,
        reason: ConstraintError,
    },

    #[error("unknown solver mode `{0}`")]
    UnknownSolverMode(String),
}

/// Mesh point counts of the spatial discretization.
///
/// `x_*` count points through the negative electrode, separator and positive
/// electrode; `r_*` count radial points in the particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discretization {
    pub x_n: usize,
    pub x_s: usize,
    pub x_p: usize,
    pub r_n: usize,
    pub r_p: usize,
}

impl Default for Discretization {
    fn default() -> Self {
        Self {
            x_n: 3,
            x_s: 30,
            x_p: 30,
            r_n: 3,
            r_p: 100,
        }
    }
}

impl Discretization {
    /// Checks that every count is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Discretization`] naming the first zero count.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (field, count) in [
            ("x_n", self.x_n),
            ("x_s", self.x_s),
            ("x_p", self.x_p),
            ("r_n", self.r_n),
            ("r_p", self.r_p),
        ] {
            StrictlyPositive::check(&count)
                .map_err(|reason| ModelError::Discretization { field, reason })?;
        }
        Ok(())
    }
}

/// How the solver treats step-ending events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverMode {
    /// Integrate in short windows and stop exactly at each event.
    #[default]
    Safe,
    /// Integrate without event detection.
    Fast,
    /// Integrate without windows, detecting events after each solve.
    FastWithEvents,
}

impl SolverMode {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Fast => "fast",
            Self::FastWithEvents => "fast with events",
        }
    }
}

impl fmt::Display for SolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        [Self::Safe, Self::Fast, Self::FastWithEvents]
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| ModelError::UnknownSolverMode(s.to_owned()))
    }
}

/// Everything that selects and configures the model, apart from parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOptions {
    pub variant: CellVariant,
    pub discretization: Discretization,
    pub solver: SolverMode,
}

impl ModelOptions {
    /// # Errors
    ///
    /// See [`Discretization::validate`].
    pub fn validate(&self) -> Result<(), ModelError> {
        self.discretization.validate()
    }
}
