use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uom::si::{
    electric_charge::ampere_hour,
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCharge, ElectricCurrent, ElectricPotential, Time},
    time::{hour, minute, second},
};

use super::ExperimentError;

/// Magnitude of an applied current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Current {
    /// Multiple of the nominal capacity per hour, written `2C`.
    CRate(f64),
    /// Absolute current, written `1.5A`.
    Amperes(f64),
}

impl Current {
    /// The absolute current for a cell of the given nominal capacity.
    #[must_use]
    pub fn resolve(self, nominal_capacity: ElectricCharge) -> ElectricCurrent {
        match self {
            Self::CRate(rate) => {
                ElectricCurrent::new::<ampere>(rate * nominal_capacity.get::<ampere_hour>())
            }
            Self::Amperes(amps) => ElectricCurrent::new::<ampere>(amps),
        }
    }
}

impl fmt::Display for Current {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CRate(rate) => write!(f, "{rate}C"),
            Self::Amperes(amps) => write!(f, "{amps}A"),
        }
    }
}

/// What ends a constant-current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    /// Run until the terminal voltage reaches this value.
    Voltage(ElectricPotential),
    /// Run for a fixed time.
    Duration(Time),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Voltage(voltage) => write!(f, "until {} V", voltage.get::<volt>()),
            Self::Duration(duration) => write!(f, "for {}", HumanDuration(*duration)),
        }
    }
}

/// One instruction of a cycling experiment.
///
/// Steps are written as short sentences and parse case-insensitively:
///
/// ```
/// use batpint_sim::Step;
///
/// let step: Step = "Discharge at 0.05C for 10 minutes".parse().unwrap();
/// assert_eq!(step.to_string(), "Discharge at 0.05C for 10 minutes");
///
/// let step: Step = "rest for 2 hours".parse().unwrap();
/// assert_eq!(step.to_string(), "Rest for 2 hours");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Step {
    Discharge { current: Current, limit: Limit },
    Charge { current: Current, limit: Limit },
    Rest { duration: Time },
}

impl Step {
    #[must_use]
    pub fn is_rest(&self) -> bool {
        matches!(self, Self::Rest { .. })
    }

    /// The applied current, `None` for a rest.
    #[must_use]
    pub fn current(&self) -> Option<Current> {
        match self {
            Self::Discharge { current, .. } | Self::Charge { current, .. } => Some(*current),
            Self::Rest { .. } => None,
        }
    }

    /// The applied current with discharge positive and charge negative.
    ///
    /// A rest applies zero current.
    #[must_use]
    pub fn signed_current(&self, nominal_capacity: ElectricCharge) -> ElectricCurrent {
        match self {
            Self::Discharge { current, .. } => current.resolve(nominal_capacity),
            Self::Charge { current, .. } => -current.resolve(nominal_capacity),
            Self::Rest { .. } => ElectricCurrent::new::<ampere>(0.0),
        }
    }

    /// What ends the step. A rest always ends after its duration.
    #[must_use]
    pub fn limit(&self) -> Limit {
        match self {
            Self::Discharge { limit, .. } | Self::Charge { limit, .. } => *limit,
            Self::Rest { duration } => Limit::Duration(*duration),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discharge { current, limit } => write!(f, "Discharge at {current} {limit}"),
            Self::Charge { current, limit } => write!(f, "Charge at {current} {limit}"),
            Self::Rest { duration } => write!(f, "Rest for {}", HumanDuration(*duration)),
        }
    }
}

impl FromStr for Step {
    type Err = ExperimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let lower = text.to_ascii_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();

        let invalid_value = |value: &[&str]| ExperimentError::InvalidValue {
            step: text.to_owned(),
            value: value.join(" "),
        };

        match words.as_slice() {
            ["rest", "for", rest @ ..] => {
                let duration = parse_duration(rest).ok_or_else(|| invalid_value(rest))?;
                Ok(Self::Rest { duration })
            }
            [direction @ ("discharge" | "charge"), "at", current, kind, rest @ ..] => {
                let current = parse_current(current).ok_or_else(|| invalid_value(&[*current]))?;
                let limit = match *kind {
                    "until" => parse_voltage(rest).map(Limit::Voltage),
                    "for" => parse_duration(rest).map(Limit::Duration),
                    _ => return Err(ExperimentError::InvalidStep(text.to_owned())),
                }
                .ok_or_else(|| invalid_value(rest))?;

                Ok(if *direction == "discharge" {
                    Self::Discharge { current, limit }
                } else {
                    Self::Charge { current, limit }
                })
            }
            _ => Err(ExperimentError::InvalidStep(text.to_owned())),
        }
    }
}

impl TryFrom<String> for Step {
    type Error = ExperimentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Step> for String {
    fn from(step: Step) -> Self {
        step.to_string()
    }
}

fn positive(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

fn parse_current(token: &str) -> Option<Current> {
    if let Some(rate) = token.strip_suffix('c') {
        positive(rate).map(Current::CRate)
    } else if let Some(amps) = token.strip_suffix('a') {
        positive(amps).map(Current::Amperes)
    } else {
        None
    }
}

/// Accepts `3.5 V` and `3.5V`.
fn parse_voltage(words: &[&str]) -> Option<ElectricPotential> {
    let joined = words.concat();
    let value = joined.strip_suffix('v')?;
    positive(value).map(ElectricPotential::new::<volt>)
}

fn parse_duration(words: &[&str]) -> Option<Time> {
    let [value, unit] = words else {
        return None;
    };
    let value = positive(value)?;

    match *unit {
        "s" | "sec" | "secs" | "second" | "seconds" => Some(Time::new::<second>(value)),
        "min" | "mins" | "minute" | "minutes" => Some(Time::new::<minute>(value)),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(Time::new::<hour>(value)),
        _ => None,
    }
}

/// Writes a duration in the largest unit that divides it evenly.
struct HumanDuration(Time);

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.0.get::<second>();
        let (value, unit) = if seconds % 3600.0 == 0.0 {
            (seconds / 3600.0, "hour")
        } else if seconds % 60.0 == 0.0 {
            (seconds / 60.0, "minute")
        } else {
            (seconds, "second")
        };
        let plural = if value == 1.0 { "" } else { "s" };
        write!(f, "{value} {unit}{plural}")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parses_voltage_limited_discharge() {
        let step: Step = "Discharge at 2C until 3.5 V".parse().unwrap();

        assert_eq!(
            step,
            Step::Discharge {
                current: Current::CRate(2.0),
                limit: Limit::Voltage(ElectricPotential::new::<volt>(3.5)),
            }
        );
    }

    #[test]
    fn parses_timed_charge_in_amperes() {
        let step: Step = "charge at 1.5A for 90 s".parse().unwrap();

        assert_eq!(step.current(), Some(Current::Amperes(1.5)));
        assert_eq!(step.limit(), Limit::Duration(Time::new::<second>(90.0)));
        assert!(!step.is_rest());
    }

    #[test]
    fn accepts_voltage_without_space() {
        let step: Step = "Charge at 0.1C until 4.2V".parse().unwrap();
        assert_eq!(step.to_string(), "Charge at 0.1C until 4.2 V");
    }

    #[test]
    fn protocol_directives_round_trip() {
        for text in [
            "Discharge at 0.05C for 10 minutes",
            "Rest for 2 hours",
            "Discharge at 2C until 3.5 V",
            "Rest for 5 minutes",
            "Charge at 0.1C until 4.2 V",
            "Rest for 10 minutes",
            "Rest for 1 hour",
            "Charge at 3A for 45 seconds",
        ] {
            let step: Step = text.parse().unwrap();
            assert_eq!(step.to_string(), text);
            assert_eq!(step.to_string().parse::<Step>().unwrap(), step);
        }
    }

    #[test]
    fn duration_is_written_in_largest_even_unit() {
        let step: Step = "Rest for 120 minutes".parse().unwrap();
        assert_eq!(step.to_string(), "Rest for 2 hours");

        let step: Step = "Rest for 90 minutes".parse().unwrap();
        assert_eq!(step.to_string(), "Rest for 90 minutes");
    }

    #[test]
    fn rejects_unknown_directive() {
        let err = "Hold at 4.2 V until 50 mA".parse::<Step>().unwrap_err();
        assert!(matches!(err, ExperimentError::InvalidStep(ref step) if step.starts_with("Hold")));
    }

    #[test]
    fn rejects_bad_values() {
        for (text, value) in [
            ("Discharge at fastC until 3 V", "fastc"),
            ("Discharge at 1C until 3 volts", "3 volts"),
            ("Rest for 10 fortnights", "10 fortnights"),
            ("Rest for -5 minutes", "-5 minutes"),
            ("Charge at 0C for 1 hour", "0c"),
        ] {
            match text.parse::<Step>() {
                Err(ExperimentError::InvalidValue { value: found, .. }) => {
                    assert_eq!(found, value, "{text}");
                }
                other => panic!("{text}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn c_rate_resolves_against_nominal_capacity() {
        let nominal = ElectricCharge::new::<ampere_hour>(29.2425);
        let step: Step = "Charge at 0.1C until 4.2 V".parse().unwrap();

        assert_relative_eq!(step.signed_current(nominal).get::<ampere>(), -2.92425);

        let rest: Step = "Rest for 5 minutes".parse().unwrap();
        assert_eq!(rest.signed_current(nominal).get::<ampere>(), 0.0);
    }
}
