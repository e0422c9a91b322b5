//! Simulation output.

use thiserror::Error;
use uom::si::{
    electric_charge::ampere_hour,
    electric_potential::volt,
    f64::{ElectricCharge, ElectricPotential, Time},
    time::hour,
};

/// Errors raised when assembling a [`Trajectory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    #[error("series lengths differ: {time} times, {voltage} voltages, {capacity} capacities")]
    LengthMismatch {
        time: usize,
        voltage: usize,
        capacity: usize,
    },

    #[error("time decreases at sample {index}")]
    TimeDecreasing { index: usize },
}

/// Terminal voltage and discharge capacity sampled over time.
///
/// All three series have the same length and time never decreases. Repeated
/// times are allowed, since a solver reports both sides of a step boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    time: Vec<Time>,
    voltage: Vec<ElectricPotential>,
    discharge_capacity: Vec<ElectricCharge>,
}

impl Trajectory {
    /// # Errors
    ///
    /// Returns a [`TrajectoryError`] if the series differ in length or time
    /// decreases.
    pub fn new(
        time: Vec<Time>,
        voltage: Vec<ElectricPotential>,
        discharge_capacity: Vec<ElectricCharge>,
    ) -> Result<Self, TrajectoryError> {
        if time.len() != voltage.len() || time.len() != discharge_capacity.len() {
            return Err(TrajectoryError::LengthMismatch {
                time: time.len(),
                voltage: voltage.len(),
                capacity: discharge_capacity.len(),
            });
        }

        if let Some(index) = time.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(TrajectoryError::TimeDecreasing { index: index + 1 });
        }

        Ok(Self {
            time,
            voltage,
            discharge_capacity,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    #[must_use]
    pub fn time(&self) -> &[Time] {
        &self.time
    }

    #[must_use]
    pub fn voltage(&self) -> &[ElectricPotential] {
        &self.voltage
    }

    #[must_use]
    pub fn discharge_capacity(&self) -> &[ElectricCharge] {
        &self.discharge_capacity
    }

    /// `(discharge capacity [A·h], voltage [V])` pairs.
    #[must_use]
    pub fn voltage_vs_capacity(&self) -> Vec<[f64; 2]> {
        self.discharge_capacity
            .iter()
            .zip(&self.voltage)
            .map(|(q, v)| [q.get::<ampere_hour>(), v.get::<volt>()])
            .collect()
    }

    /// `(time [h], voltage [V])` pairs, with time shifted to start at zero.
    #[must_use]
    pub fn voltage_vs_elapsed_time(&self) -> Vec<[f64; 2]> {
        let Some(&start) = self.time.first() else {
            return Vec::new();
        };
        self.time
            .iter()
            .zip(&self.voltage)
            .map(|(&t, v)| [(t - start).get::<hour>(), v.get::<volt>()])
            .collect()
    }
}

/// The result of a simulation: the whole trajectory plus one per cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    trajectory: Trajectory,
    cycles: Vec<Trajectory>,
}

impl Solution {
    #[must_use]
    pub fn new(trajectory: Trajectory, cycles: Vec<Trajectory>) -> Self {
        Self { trajectory, cycles }
    }

    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Completed cycles, in order. A terminated experiment may have fewer
    /// cycles than it asked for.
    #[must_use]
    pub fn cycles(&self) -> &[Trajectory] {
        &self.cycles
    }

    #[must_use]
    pub fn cycle(&self, index: usize) -> Option<&Trajectory> {
        self.cycles.get(index)
    }
}
