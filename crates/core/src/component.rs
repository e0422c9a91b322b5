/// A deterministic callable with a typed input and output.
///
/// Parameter functions (exchange current densities, open-circuit potentials)
/// are handed to the external solver as components, which evaluates them at
/// every nonlinear iteration. Implementations must be pure: the same input
/// always produces the same output, and no state is mutated by a call.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use batpint_core::Component;
///
/// struct Square;
///
/// impl Component for Square {
///     type Input = f64;
///     type Output = f64;
///     type Error = Infallible;
///
///     fn call(&self, input: f64) -> Result<f64, Self::Error> {
///         Ok(input * input)
///     }
/// }
///
/// assert_eq!(Square.call(3.0).unwrap(), 9.0);
/// ```
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}

/// Components are commonly shared by reference between solver callbacks.
impl<C: Component + ?Sized> Component for &C {
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct Offset(f64);

    impl Component for Offset {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: f64) -> Result<f64, Self::Error> {
            Ok(input + self.0)
        }
    }

    fn evaluate_twice<C: Component<Input = f64, Output = f64>>(c: C, x: f64) -> (f64, f64) {
        let first = c.call(x).ok().unwrap_or(f64::NAN);
        let second = c.call(x).ok().unwrap_or(f64::NAN);
        (first, second)
    }

    #[test]
    fn borrowed_component_forwards_calls() {
        let offset = Offset(1.5);
        assert_eq!(evaluate_twice(&offset, 2.0), (3.5, 3.5));
        assert_eq!(offset.call(0.0).unwrap(), 1.5);
    }
}
