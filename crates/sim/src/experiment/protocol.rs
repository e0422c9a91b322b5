use std::{fmt, str::FromStr};

use batpint_core::constraint::{Constraint, StrictlyPositive};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Time},
    time::{hour, minute},
};

use super::{Current, Cycle, Experiment, ExperimentError, Limit, Step};

/// Error returned when a protocol name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("protocol `{0}` is not implemented")]
    NotImplemented(String),
}

/// A named cycling protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Protocol {
    /// Galvanostatic intermittent titration: short pulses separated by long rests.
    Gitt,
    /// Constant-current discharge and charge cycling.
    #[default]
    Cccv,
}

impl Protocol {
    /// Every implemented protocol.
    pub const ALL: [Self; 2] = [Self::Gitt, Self::Cccv];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Gitt => "GITT",
            Self::Cccv => "CCCV",
        }
    }

    /// Builds the experiment this protocol runs.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::InvalidOption`] if a rate, duration or
    /// voltage is not strictly positive, or [`ExperimentError::Empty`] if the
    /// options ask for zero cycles.
    pub fn experiment(
        self,
        gitt: &GittOptions,
        cccv: &CccvOptions,
    ) -> Result<Experiment, ExperimentError> {
        match self {
            Self::Gitt => gitt.experiment(),
            Self::Cccv => cccv.experiment(),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Protocol {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|protocol| protocol.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProtocolError::NotImplemented(s.to_owned()))
    }
}

impl TryFrom<String> for Protocol {
    type Error = ProtocolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Protocol> for String {
    fn from(protocol: Protocol) -> Self {
        protocol.name().to_owned()
    }
}

/// Settings of the [`Protocol::Gitt`] experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GittOptions {
    pub cycles: usize,
    /// Pulse current as a C-rate.
    pub pulse_rate: f64,
    pub pulse_duration: Time,
    pub rest_duration: Time,
    pub termination: ElectricPotential,
}

impl Default for GittOptions {
    fn default() -> Self {
        Self {
            cycles: 50,
            pulse_rate: 0.05,
            pulse_duration: Time::new::<minute>(10.0),
            rest_duration: Time::new::<hour>(2.0),
            termination: ElectricPotential::new::<volt>(2.5),
        }
    }
}

impl GittOptions {
    /// Checks that every rate, duration and voltage is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::InvalidOption`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        positive("pulse_rate", &self.pulse_rate)?;
        positive("pulse_duration", &self.pulse_duration)?;
        positive("rest_duration", &self.rest_duration)?;
        positive("termination", &self.termination)
    }

    /// One pulse then one rest, repeated, stopping at the termination voltage.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::InvalidOption`] if the options fail
    /// [`validate`](Self::validate), or [`ExperimentError::Empty`] if `cycles`
    /// is zero.
    pub fn experiment(&self) -> Result<Experiment, ExperimentError> {
        self.validate()?;
        let cycle = cycle(vec![
            Step::Discharge {
                current: Current::CRate(self.pulse_rate),
                limit: Limit::Duration(self.pulse_duration),
            },
            Step::Rest {
                duration: self.rest_duration,
            },
        ]);
        Ok(Experiment::repeated(&cycle, self.cycles)?.with_termination(self.termination))
    }
}

/// Settings of the [`Protocol::Cccv`] experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CccvOptions {
    pub cycles: usize,
    /// Discharge current as a C-rate.
    pub discharge_rate: f64,
    pub discharge_cutoff: ElectricPotential,
    pub discharge_rest: Time,
    /// Charge current as a C-rate.
    pub charge_rate: f64,
    pub charge_cutoff: ElectricPotential,
    pub charge_rest: Time,
}

impl Default for CccvOptions {
    fn default() -> Self {
        Self {
            cycles: 100,
            discharge_rate: 2.0,
            discharge_cutoff: ElectricPotential::new::<volt>(3.5),
            discharge_rest: Time::new::<minute>(5.0),
            charge_rate: 0.1,
            charge_cutoff: ElectricPotential::new::<volt>(4.2),
            charge_rest: Time::new::<minute>(10.0),
        }
    }
}

impl CccvOptions {
    /// Checks that every rate, duration and voltage is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::InvalidOption`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        positive("discharge_rate", &self.discharge_rate)?;
        positive("discharge_cutoff", &self.discharge_cutoff)?;
        positive("discharge_rest", &self.discharge_rest)?;
        positive("charge_rate", &self.charge_rate)?;
        positive("charge_cutoff", &self.charge_cutoff)?;
        positive("charge_rest", &self.charge_rest)
    }

    /// Discharge, rest, charge, rest, repeated.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::InvalidOption`] if the options fail
    /// [`validate`](Self::validate), or [`ExperimentError::Empty`] if `cycles`
    /// is zero.
    pub fn experiment(&self) -> Result<Experiment, ExperimentError> {
        self.validate()?;
        let cycle = cycle(vec![
            Step::Discharge {
                current: Current::CRate(self.discharge_rate),
                limit: Limit::Voltage(self.discharge_cutoff),
            },
            Step::Rest {
                duration: self.discharge_rest,
            },
            Step::Charge {
                current: Current::CRate(self.charge_rate),
                limit: Limit::Voltage(self.charge_cutoff),
            },
            Step::Rest {
                duration: self.charge_rest,
            },
        ]);
        Experiment::repeated(&cycle, self.cycles)
    }
}

fn cycle(steps: Vec<Step>) -> Cycle {
    Cycle { steps }
}

fn positive<T>(field: &'static str, value: &T) -> Result<(), ExperimentError>
where
    StrictlyPositive: Constraint<T>,
{
    StrictlyPositive::check(value)
        .map_err(|reason| ExperimentError::InvalidOption { field, reason })
}
