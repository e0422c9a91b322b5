use batpint_params::ParameterValues;

use crate::{experiment::Experiment, model::ModelOptions, solution::Solution};

/// A numerical solver for the cell model.
///
/// Implementations integrate the model selected by [`ModelOptions`] under the
/// given [`Experiment`], reading every parameter and function of state from
/// [`ParameterValues`]. The values are borrowed for the duration of the call
/// and may be shared with other simulations running concurrently.
pub trait Simulator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs the experiment to completion or termination.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot be built or integrated.
    fn simulate(
        &self,
        options: &ModelOptions,
        parameters: &ParameterValues<'_>,
        experiment: &Experiment,
    ) -> Result<Solution, Self::Error>;
}

impl<S: Simulator + ?Sized> Simulator for &S {
    type Error = S::Error;

    fn simulate(
        &self,
        options: &ModelOptions,
        parameters: &ParameterValues<'_>,
        experiment: &Experiment,
    ) -> Result<Solution, Self::Error> {
        (**self).simulate(options, parameters, experiment)
    }
}
