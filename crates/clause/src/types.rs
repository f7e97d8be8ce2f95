use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Axis recognized by the lattice builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Axis {
    Rows,
    Columns,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Rows, Axis::Columns];

    /// Canonical (uppercased) key of this axis in an [`AxisSpec`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Rows => "ROWS",
            Axis::Columns => "COLUMNS",
        }
    }

    /// Case-insensitive lookup; `None` for names the builder does not know
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered grouping fields per axis, as declared by an axis clause.
///
/// `ROWS` and `COLUMNS` are always present. Other axis names encountered in a
/// clause are kept verbatim but play no part in lattice construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisSpec {
    axes: BTreeMap<String, Vec<String>>,
}

impl AxisSpec {
    pub fn new() -> Self {
        let axes = Axis::ALL
            .into_iter()
            .map(|axis| (axis.as_str().to_string(), Vec::new()))
            .collect();
        Self { axes }
    }

    /// Builder: replace the row fields
    #[must_use]
    pub fn with_rows<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.axes.insert(
            Axis::Rows.as_str().to_string(),
            fields.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Builder: replace the column fields
    #[must_use]
    pub fn with_columns<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.axes.insert(
            Axis::Columns.as_str().to_string(),
            fields.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn rows(&self) -> &[String] {
        self.fields(Axis::Rows)
    }

    pub fn columns(&self) -> &[String] {
        self.fields(Axis::Columns)
    }

    pub fn fields(&self, axis: Axis) -> &[String] {
        self.get(axis.as_str()).unwrap_or(&[])
    }

    /// Fields of any axis by its uppercased name
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.axes.get(name).map(Vec::as_slice)
    }

    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    /// Axes other than `ROWS` / `COLUMNS`
    pub fn extra_axes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.axes
            .iter()
            .filter(|(name, _)| Axis::from_name(name).is_none())
            .map(|(name, fields)| (name.as_str(), fields.as_slice()))
    }

    /// True when neither rows nor columns carry a field
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty() && self.columns().is_empty()
    }

    pub(crate) fn ensure_axis(&mut self, name: &str) {
        self.axes.entry(name.to_string()).or_default();
    }

    pub(crate) fn push_field(&mut self, name: &str, field: String) {
        self.axes.entry(name.to_string()).or_default().push(field);
    }
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spec_has_both_axes() {
        let spec = AxisSpec::new();
        let names: Vec<_> = spec.axis_names().collect();
        assert_eq!(names, vec!["COLUMNS", "ROWS"]);
        assert!(spec.is_empty());
    }

    #[test]
    fn axis_lookup_is_case_insensitive() {
        assert_eq!(Axis::from_name("rows"), Some(Axis::Rows));
        assert_eq!(Axis::from_name("Columns"), Some(Axis::Columns));
        assert_eq!(Axis::from_name("pages"), None);
    }

    #[test]
    fn builders_keep_order_and_duplicates() {
        let spec = AxisSpec::new()
            .with_rows(["Anio", "Mes", "Anio"])
            .with_columns(["Categoria"]);
        assert_eq!(spec.rows(), ["Anio", "Mes", "Anio"]);
        assert_eq!(spec.columns(), ["Categoria"]);
        assert!(!spec.is_empty());
    }

    #[test]
    fn extra_axes_exclude_recognized_ones() {
        let mut spec = AxisSpec::new();
        spec.push_field("PAGES", "Region".to_string());
        let extra: Vec<_> = spec.extra_axes().collect();
        assert_eq!(extra, vec![("PAGES", &["Region".to_string()][..])]);
    }

    #[test]
    fn serializes_as_plain_map() {
        let spec = AxisSpec::new().with_rows(["Anio"]);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["ROWS"][0], "Anio");
        assert_eq!(json["COLUMNS"].as_array().unwrap().len(), 0);
    }
}
