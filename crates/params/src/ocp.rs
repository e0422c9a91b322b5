//! Open-circuit potentials interpolated from tabulated data.
//!
//! Each electrode's open-circuit potential is measured as a curve of voltage
//! against state of charge and stored as a two-column text table. Tables are
//! loaded once into an [`OcpCurves`] value that the run setup owns and lends
//! out by reference; it is immutable after loading and safe to share between
//! threads.

mod curve;
mod error;
mod extrapolate;
mod table;

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use uom::si::f64::ElectricPotential;

pub use curve::OcpCurve;
pub use error::OcpError;
pub use extrapolate::Extrapolate;
pub use table::OcpTable;

/// File name of the positive electrode table.
pub const CATHODE_FILE: &str = "OCV_cat.csv";

/// File name of the negative electrode table.
pub const ANODE_FILE: &str = "OCV_an.csv";

/// Directory of the OCV tables shipped with this crate.
#[must_use]
pub fn bundled_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("ocv")
}

/// The open-circuit potential curves of both electrodes.
#[derive(Debug)]
pub struct OcpCurves {
    cathode: OcpCurve,
    anode: OcpCurve,
}

impl OcpCurves {
    #[must_use]
    pub fn new(cathode: OcpCurve, anode: OcpCurve) -> Self {
        Self { cathode, anode }
    }

    /// Loads [`CATHODE_FILE`] and [`ANODE_FILE`] from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an [`OcpError`] if either table is missing or malformed.
    pub fn load(dir: impl AsRef<Path>, extrapolate: Extrapolate) -> Result<Self, OcpError> {
        let dir = dir.as_ref();
        let cathode = load_curve(&dir.join(CATHODE_FILE), extrapolate)?;
        let anode = load_curve(&dir.join(ANODE_FILE), extrapolate)?;
        Ok(Self::new(cathode, anode))
    }

    /// Loads the tables shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns an [`OcpError`] if the installed data files are missing or
    /// malformed.
    pub fn load_bundled(extrapolate: Extrapolate) -> Result<Self, OcpError> {
        Self::load(bundled_dir(), extrapolate)
    }

    /// Positive electrode open-circuit potential.
    ///
    /// # Errors
    ///
    /// See [`OcpCurve::potential`].
    pub fn cathode_ocp(&self, sto: f64) -> Result<ElectricPotential, OcpError> {
        self.cathode.potential(sto)
    }

    /// Negative electrode open-circuit potential.
    ///
    /// # Errors
    ///
    /// See [`OcpCurve::potential`].
    pub fn anode_ocp(&self, sto: f64) -> Result<ElectricPotential, OcpError> {
        self.anode.potential(sto)
    }

    #[must_use]
    pub fn cathode(&self) -> &OcpCurve {
        &self.cathode
    }

    #[must_use]
    pub fn anode(&self) -> &OcpCurve {
        &self.anode
    }
}

fn load_curve(path: &Path, extrapolate: Extrapolate) -> Result<OcpCurve, OcpError> {
    let table = OcpTable::from_path(path)?;
    let (min, max) = table.domain();

    info!(
        path = %path.display(),
        points = table.len(),
        min,
        max,
        "loaded OCP table"
    );
    if min < 0.0 || max > 1.0 {
        warn!(
            table = table.name(),
            min, max, "OCP table extends beyond the unit state-of-charge interval"
        );
    }

    OcpCurve::new(table, extrapolate)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use uom::si::electric_potential::volt;

    use super::*;

    fn write_tables(dir: &Path, cathode: &str, anode: &str) {
        fs::write(dir.join(CATHODE_FILE), cathode).unwrap();
        fs::write(dir.join(ANODE_FILE), anode).unwrap();
    }

    #[test]
    fn loads_both_curves_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(
            dir.path(),
            "sto,V\n0,4.3\n0.5,3.9\n1,3.5\n",
            "0 1.5\n1 0.05\n",
        );

        let curves = OcpCurves::load(dir.path(), Extrapolate::Enable).unwrap();
        assert_eq!(curves.cathode().name(), "OCV_cat");
        assert_eq!(curves.anode().name(), "OCV_an");
        approx::assert_relative_eq!(
            curves.cathode_ocp(0.25).unwrap().get::<volt>(),
            4.1,
            epsilon = 1e-12
        );
        assert_eq!(curves.anode_ocp(1.0).unwrap().get::<volt>(), 0.05);
    }

    #[test]
    fn missing_table_fails_before_any_evaluation() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CATHODE_FILE), "0,4.3\n1,3.5\n").unwrap();

        let err = OcpCurves::load(dir.path(), Extrapolate::Enable).unwrap_err();
        match err {
            OcpError::Io { path, .. } => assert!(path.ends_with(ANODE_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path(), "0,4.3\n", "0 1.5\n1 0.05\n");

        let err = OcpCurves::load(dir.path(), Extrapolate::Enable).unwrap_err();
        assert!(matches!(err, OcpError::TooFewPoints { found: 1 }));
    }

    #[test]
    fn bundled_tables_cover_unit_interval() {
        let curves = OcpCurves::load_bundled(Extrapolate::Error).unwrap();

        for curve in [curves.cathode(), curves.anode()] {
            assert_eq!(curve.table().domain(), (0.0, 1.0), "{}", curve.name());
        }
        assert!(curves.cathode_ocp(0.5).unwrap() > curves.anode_ocp(0.5).unwrap());
    }

    #[test]
    fn curves_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OcpCurves>();
    }
}
