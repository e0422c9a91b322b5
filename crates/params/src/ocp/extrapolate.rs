use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::OcpError;

/// Extrapolation policy.
///
/// Controls what happens if a state of charge falls outside the tabulated
/// range of an OCP curve.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolate {
    /// Extend the nearest segment linearly beyond the table limits.
    ///
    /// The result is physically meaningless far from the measured range.
    #[default]
    Enable,
    /// If the point is beyond the table limits, return this voltage instead.
    Fill(f64),
    /// Restrict the point to the table limits, returning the edge voltage.
    Clamp,
    /// Return an error when the point is beyond the table limits.
    Error,
}

impl From<Extrapolate> for ninterp::interpolator::Extrapolate<f64> {
    fn from(value: Extrapolate) -> Self {
        match value {
            Extrapolate::Enable => ninterp::interpolator::Extrapolate::Enable,
            Extrapolate::Fill(val) => ninterp::interpolator::Extrapolate::Fill(val),
            Extrapolate::Clamp => ninterp::interpolator::Extrapolate::Clamp,
            Extrapolate::Error => ninterp::interpolator::Extrapolate::Error,
        }
    }
}

/// Parses `enable`, `clamp`, `error`, or `fill=<volts>`.
impl FromStr for Extrapolate {
    type Err = OcpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let policy = s.trim().to_ascii_lowercase();
        match policy.as_str() {
            "enable" | "linear" => Ok(Self::Enable),
            "clamp" => Ok(Self::Clamp),
            "error" => Ok(Self::Error),
            _ => policy
                .strip_prefix("fill=")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .map(Self::Fill)
                .ok_or_else(|| OcpError::InvalidPolicy(s.to_owned())),
        }
    }
}

impl fmt::Display for Extrapolate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enable => f.write_str("enable"),
            Self::Fill(v) => write!(f, "fill={v}"),
            Self::Clamp => f.write_str("clamp"),
            Self::Error => f.write_str("error"),
        }
    }
}
