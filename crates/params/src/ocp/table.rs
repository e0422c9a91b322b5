use std::{fs, path::Path};

use super::OcpError;

/// A tabulated open-circuit potential curve.
///
/// Holds `(state of charge, voltage)` pairs with strictly increasing state of
/// charge. At least two points are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct OcpTable {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl OcpTable {
    /// Creates a table from `(state of charge, voltage)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an [`OcpError`] if fewer than two points are given, a value is
    /// not finite, or the state of charge is not strictly increasing.
    pub fn new(
        name: impl Into<String>,
        points: impl IntoIterator<Item = (f64, f64)>,
    ) -> Result<Self, OcpError> {
        let rows = points
            .into_iter()
            .enumerate()
            .map(|(index, (x, y))| (index + 1, x, y))
            .collect();
        Self::from_rows(name.into(), rows)
    }

    /// Parses a table from delimited text.
    ///
    /// Each data row holds two numbers separated by a comma and/or whitespace.
    /// Blank lines and anything after a `#` are ignored. The first row may be a
    /// header, provided none of its fields is numeric.
    ///
    /// # Errors
    ///
    /// Returns [`OcpError::Malformed`] for rows that cannot be read, and the
    /// errors of [`OcpTable::new`] for invalid data.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, OcpError> {
        let mut rows = Vec::new();
        let mut header_allowed = true;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            match parse_row(content) {
                Some((x, y)) => rows.push((line, x, y)),
                None if header_allowed && is_header(content) => {}
                None => {
                    return Err(OcpError::Malformed {
                        line,
                        content: content.to_owned(),
                    });
                }
            }
            header_allowed = false;
        }

        Self::from_rows(name.into(), rows)
    }

    /// Reads a table from a file, named after the file stem.
    ///
    /// # Errors
    ///
    /// Returns [`OcpError::Io`] if the file cannot be read, and the errors of
    /// [`OcpTable::parse`] otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OcpError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| OcpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::parse(name, &text)
    }

    fn from_rows(name: String, rows: Vec<(usize, f64, f64)>) -> Result<Self, OcpError> {
        if rows.len() < 2 {
            return Err(OcpError::TooFewPoints { found: rows.len() });
        }

        if let Some(&(line, _, _)) = rows
            .iter()
            .find(|(_, x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(OcpError::NonFinite { line });
        }

        if let Some(pair) = rows.windows(2).find(|pair| pair[1].1 <= pair[0].1) {
            return Err(OcpError::NotIncreasing {
                line: pair[1].0,
                previous: pair[0].1,
                x: pair[1].1,
            });
        }

        let (x, y) = rows.into_iter().map(|(_, x, y)| (x, y)).unzip();
        Ok(Self { name, x, y })
    }

    /// The table name, usually the stem of the file it was read from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tabulated states of charge, strictly increasing.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Tabulated voltages, in volts.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`; a valid table has at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over the `(state of charge, voltage)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// The tabulated state-of-charge range `(min, max)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Returns the tabulated voltage if `x` is exactly a knot.
    #[must_use]
    pub fn knot_value(&self, x: f64) -> Option<f64> {
        self.x
            .binary_search_by(|knot| knot.total_cmp(&x))
            .ok()
            .map(|index| self.y[index])
    }
}

fn fields(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
}

fn parse_row(content: &str) -> Option<(f64, f64)> {
    let mut values = fields(content).map(str::parse::<f64>);
    match (values.next(), values.next(), values.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Some((x, y)),
        _ => None,
    }
}

fn is_header(content: &str) -> bool {
    fields(content).all(|field| field.parse::<f64>().is_err())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_comma_separated_with_header() {
        let table = OcpTable::parse("cat", "sto,OCV [V]\n0,4.3\n0.5,3.9\n1,3.5\n").unwrap();

        assert_eq!(table.name(), "cat");
        assert_eq!(table.x(), &[0.0, 0.5, 1.0]);
        assert_eq!(table.y(), &[4.3, 3.9, 3.5]);
        assert_eq!(table.domain(), (0.0, 1.0));
    }

    #[test]
    fn parses_whitespace_separated_with_comments() {
        let text = "# anode OCV\n\n0.0   1.5\n0.5\t0.12  # plateau\n1.0 0.05\n";
        let table = OcpTable::parse("an", text).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.points().nth(1), Some((0.5, 0.12)));
    }

    #[test]
    fn rejects_non_numeric_data_rows() {
        let err = OcpTable::parse("bad", "0,4.3\n0.5,abc\n1,3.5").unwrap_err();
        assert!(matches!(err, OcpError::Malformed { line: 2, .. }), "{err}");
    }

    #[test]
    fn header_only_allowed_on_first_row() {
        let err = OcpTable::parse("bad", "0,4.3\nsto,ocv\n1,3.5").unwrap_err();
        assert!(matches!(err, OcpError::Malformed { line: 2, .. }));
    }

    #[test]
    fn rejects_partially_numeric_header() {
        let err = OcpTable::parse("bad", "0.1,abc\n0,4.3\n1,3.5").unwrap_err();
        assert!(matches!(err, OcpError::Malformed { line: 1, .. }));
    }

    #[test]
    fn rejects_extra_columns() {
        let err = OcpTable::parse("bad", "0,4.3,1\n1,3.5,1").unwrap_err();
        assert!(matches!(err, OcpError::Malformed { line: 1, .. }));
    }

    #[test]
    fn requires_two_points() {
        let err = OcpTable::parse("short", "sto,ocv\n0.5,3.9\n").unwrap_err();
        assert!(matches!(err, OcpError::TooFewPoints { found: 1 }));

        let err = OcpTable::new("empty", []).unwrap_err();
        assert!(matches!(err, OcpError::TooFewPoints { found: 0 }));
    }

    #[test]
    fn rejects_non_increasing_state_of_charge() {
        let err = OcpTable::parse("dup", "0,4.3\n0.5,3.9\n0.5,3.8\n").unwrap_err();
        assert!(matches!(err, OcpError::NotIncreasing { line: 3, .. }));

        let err = OcpTable::new("rev", [(1.0, 3.5), (0.0, 4.3)]).unwrap_err();
        assert!(matches!(err, OcpError::NotIncreasing { line: 2, .. }));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = OcpTable::parse("nan", "0,4.3\n0.5,NaN\n1,3.5").unwrap_err();
        assert!(matches!(err, OcpError::NonFinite { line: 2 }));
    }

    #[test]
    fn reads_file_named_after_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("OCV_cat.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "0,4.3\n1,3.5").unwrap();

        let table = OcpTable::from_path(&path).unwrap();
        assert_eq!(table.name(), "OCV_cat");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = OcpTable::from_path(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, OcpError::Io { .. }));
    }

    #[test]
    fn knot_lookup_is_exact() {
        let table = OcpTable::new("t", [(0.0, 4.3), (0.5, 3.9), (1.0, 3.5)]).unwrap();
        assert_eq!(table.knot_value(0.5), Some(3.9));
        assert_eq!(table.knot_value(0.25), None);
    }
}
