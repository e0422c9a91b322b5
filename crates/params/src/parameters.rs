//! The typed parameter record of a cell simulation.
//!
//! A [`ParameterSet`] groups every scalar the solver reads, one struct per
//! physical component, and serializes to TOML with quantities in SI base
//! units. [`ParameterSet::javid`] provides the reference cell.
//!
//! Validation is explicit. A set loaded from disk is only known to be usable
//! once [`ParameterSet::validate`] has accepted it for a [`CellVariant`], which
//! [`ParameterValues::new`] does before binding the set to its OCP curves.

mod check;
mod error;
mod groups;
mod javid;
mod values;

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{self, ConfigError};

pub use error::ParameterError;
pub use groups::{
    CellParameters, ElectrodeParameters, ElectrolyteParameters, LithiumMetalParameters,
    PhysicalConstants, SeparatorParameters, ThermalParameters,
};
pub use values::ParameterValues;

/// Which counter electrode the cell is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellVariant {
    /// Insertion electrodes on both sides.
    #[default]
    Full,
    /// A positive insertion electrode against lithium metal.
    Half,
}

impl CellVariant {
    /// Short form used in run labels.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Full => "FC",
            Self::Half => "HC",
        }
    }

    #[must_use]
    pub fn is_half_cell(self) -> bool {
        matches!(self, Self::Half)
    }
}

impl fmt::Display for CellVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full cell"),
            Self::Half => f.write_str("half cell"),
        }
    }
}

/// Every parameter the solver reads, grouped by component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default)]
    pub constants: PhysicalConstants,
    pub cell: CellParameters,
    pub thermal: ThermalParameters,
    pub positive: ElectrodeParameters,
    /// Required for a full cell, ignored for a half cell.
    #[serde(default)]
    pub negative: Option<ElectrodeParameters>,
    pub separator: SeparatorParameters,
    pub electrolyte: ElectrolyteParameters,
    /// Required for a half cell, ignored for a full cell.
    #[serde(default)]
    pub lithium_metal: Option<LithiumMetalParameters>,
}

impl ParameterSet {
    /// The reference full cell.
    ///
    /// Also carries lithium metal parameters, so it validates for both
    /// variants.
    #[must_use]
    pub fn javid() -> Self {
        javid::full_cell()
    }

    /// The reference cell with its negative electrode replaced by lithium metal.
    #[must_use]
    pub fn javid_half_cell() -> Self {
        javid::half_cell()
    }

    /// Parses a parameter set from TOML text.
    ///
    /// The set is not validated.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text does not describe a parameter set.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        config::parse_toml(text)
    }

    /// Reads a parameter set from a TOML file.
    ///
    /// The set is not validated.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        config::load_toml(path)
    }

    /// Checks that the set describes a physically meaningful cell of the given
    /// variant.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found, naming the offending field.
    pub fn validate(&self, variant: CellVariant) -> Result<(), ParameterError> {
        self.constants.validate()?;
        self.cell.validate()?;
        self.thermal.validate()?;
        self.positive.validate("positive")?;
        self.separator.validate()?;
        self.electrolyte.validate()?;

        match variant {
            CellVariant::Full => self
                .negative
                .as_ref()
                .ok_or(ParameterError::Missing {
                    group: "negative",
                    variant,
                })?
                .validate("negative")?,
            CellVariant::Half => self
                .lithium_metal
                .as_ref()
                .ok_or(ParameterError::Missing {
                    group: "lithium_metal",
                    variant,
                })?
                .validate()?,
        }

        debug!(%variant, "parameter set validated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use batpint_core::constraint::ConstraintError;
    use uom::si::{
        electric_charge::ampere_hour,
        electric_current::ampere,
        electric_potential::volt,
        f64::{ElectricCurrent, ElectricPotential},
        length::micrometer,
        molar_concentration::mole_per_cubic_meter,
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    };

    use super::*;

    #[test]
    fn javid_validates_for_both_variants() {
        let set = ParameterSet::javid();
        set.validate(CellVariant::Full).unwrap();
        set.validate(CellVariant::Half).unwrap();
        ParameterSet::javid_half_cell()
            .validate(CellVariant::Half)
            .unwrap();
    }

    #[test]
    fn javid_matches_reference_table() {
        let set = ParameterSet::javid();

        assert_relative_eq!(set.cell.nominal_capacity.get::<ampere_hour>(), 29.2425);
        assert_relative_eq!(set.cell.lower_cutoff.get::<volt>(), 3.0);
        assert_relative_eq!(set.cell.upper_cutoff.get::<volt>(), 4.259);
        assert_relative_eq!(set.thermal.ambient_temperature.get::<kelvin>(), 298.15);
        assert_relative_eq!(set.positive.thickness.get::<micrometer>(), 55.0);
        assert_relative_eq!(set.positive.initial_stoichiometry(), 0.222);
        assert_relative_eq!(
            set.positive.maximum_concentration.get::<mole_per_cubic_meter>(),
            49_200.0
        );
        assert_relative_eq!(set.separator.porosity.get::<ratio>(), 0.7);
        assert_relative_eq!(set.electrolyte.transference_number.get::<ratio>(), 0.47);

        let negative = set.negative.unwrap();
        assert_relative_eq!(negative.thickness.get::<micrometer>(), 80.0);
        assert_relative_eq!(negative.initial_stoichiometry(), 0.87775);
    }

    #[test]
    fn half_cell_requires_lithium_metal() {
        let mut set = ParameterSet::javid_half_cell();
        set.lithium_metal = None;

        assert_eq!(
            set.validate(CellVariant::Half),
            Err(ParameterError::Missing {
                group: "lithium_metal",
                variant: CellVariant::Half,
            })
        );
    }

    #[test]
    fn full_cell_requires_negative_electrode() {
        let err = ParameterSet::javid_half_cell()
            .validate(CellVariant::Full)
            .unwrap_err();
        assert!(matches!(
            err,
            ParameterError::Missing {
                group: "negative",
                ..
            }
        ));
    }

    #[test]
    fn rejects_concentration_above_maximum() {
        let mut set = ParameterSet::javid();
        set.positive.initial_concentration = set.positive.maximum_concentration * 1.01;

        assert_eq!(
            set.validate(CellVariant::Full),
            Err(ParameterError::Exceeds {
                group: "positive",
                field: "initial_concentration",
                limit: "maximum_concentration",
            })
        );
    }

    #[test]
    fn rejects_inverted_cutoffs() {
        let mut set = ParameterSet::javid();
        set.cell.lower_cutoff = ElectricPotential::new::<volt>(4.3);

        let err = set.validate(CellVariant::Full).unwrap_err();
        assert!(matches!(
            err,
            ParameterError::Exceeds {
                group: "cell",
                field: "lower_cutoff",
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_current() {
        let mut set = ParameterSet::javid();
        set.cell.current = ElectricCurrent::new::<ampere>(-1.0);

        assert_eq!(
            set.validate(CellVariant::Full),
            Err(ParameterError::Invalid {
                group: "cell",
                field: "current",
                reason: ConstraintError::Negative,
            })
        );
    }

    #[test]
    fn rejects_porosity_outside_unit_interval() {
        let mut set = ParameterSet::javid();
        set.separator.porosity = uom::si::f64::Ratio::new::<ratio>(1.2);

        assert_eq!(
            set.validate(CellVariant::Full),
            Err(ParameterError::Invalid {
                group: "separator",
                field: "porosity",
                reason: ConstraintError::AboveMaximum,
            })
        );
    }

    #[test]
    fn rejects_overfilled_electrode() {
        let mut set = ParameterSet::javid();
        set.positive.porosity = uom::si::f64::Ratio::new::<ratio>(0.5);

        let err = set.validate(CellVariant::Full).unwrap_err();
        assert!(matches!(
            err,
            ParameterError::Overfilled {
                group: "positive",
                ..
            }
        ));
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn negative_electrode_ignored_for_half_cell() {
        let mut set = ParameterSet::javid();
        if let Some(negative) = set.negative.as_mut() {
            negative.thickness = negative.thickness * -1.0;
        }

        set.validate(CellVariant::Half).unwrap();
        assert!(set.validate(CellVariant::Full).is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let set = ParameterSet::javid();
        let text = toml::to_string(&set).unwrap();
        let parsed = ParameterSet::from_toml_str(&text).unwrap();

        assert_eq!(parsed, set);
    }

    #[test]
    fn variant_labels() {
        assert_eq!(CellVariant::Full.abbreviation(), "FC");
        assert_eq!(CellVariant::Half.abbreviation(), "HC");
        assert_eq!(CellVariant::Half.to_string(), "half cell");
        assert!(CellVariant::Half.is_half_cell());
        assert_eq!(CellVariant::default(), CellVariant::Full);
    }
}
