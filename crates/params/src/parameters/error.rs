use batpint_core::constraint::ConstraintError;
use thiserror::Error;

use super::CellVariant;

/// Errors reported when validating a [`ParameterSet`](super::ParameterSet).
///
/// Field names are reported as `group.field`, matching the TOML layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("`{group}.{field}` {reason}")]
    Invalid {
        group: &'static str,
        field: &'static str,
        reason: ConstraintError,
    },

    #[error("`{group}` parameters are required for a {variant}")]
    Missing {
        group: &'static str,
        variant: CellVariant,
    },

    #[error("`{group}.{field}` must not exceed `{group}.{limit}`")]
    Exceeds {
        group: &'static str,
        field: &'static str,
        limit: &'static str,
    },

    #[error("`{group}` volume fractions sum to {sum}, which exceeds 1")]
    Overfilled { group: &'static str, sum: f64 },
}
