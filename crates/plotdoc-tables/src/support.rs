//! Support-matrix construction.

use plotdoc_backend::{Backend, Support};

use crate::html::RenderedTable;

/// Capability query used to classify one (value, backend) pair.
///
/// The variant is selected by the caller: series types use the full
/// three-state classification, every other dimension collapses to
/// membership in the backend's supported set and never yields
/// [`Support::Recipe`].
pub enum Classifier<'a> {
    /// Membership test against a per-backend supported set.
    TwoState(&'a dyn Fn(&dyn Backend) -> Vec<&'static str>),
    /// Full native/recipe/unsupported classification.
    ThreeState(&'a dyn Fn(&dyn Backend, &str) -> Support),
}

impl Classifier<'_> {
    fn classify(&self, backend: &dyn Backend, value: &str) -> Support {
        match self {
            Classifier::TwoState(supported) => {
                if supported(backend).contains(&value) {
                    Support::Native
                } else {
                    Support::Unsupported
                }
            }
            Classifier::ThreeState(classify) => classify(backend, value),
        }
    }
}

/// Dense (value x backend) support classification.
///
/// Rows are the sorted, deduplicated input values; columns are the sorted,
/// deduplicated backend names. Every cell is defined.
#[derive(Debug, Clone)]
pub struct SupportMatrix {
    rows: Vec<String>,
    cols: Vec<String>,
    cells: Vec<Support>,
}

impl SupportMatrix {
    /// Sorted row keys (values).
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Sorted column keys (backend names).
    #[must_use]
    pub fn cols(&self) -> &[String] {
        &self.cols
    }

    /// Cell by position. Panics on out-of-range indices.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Support {
        self.cells[row * self.cols.len() + col]
    }

    /// Cell by key, or `None` if either key is absent.
    #[must_use]
    pub fn get(&self, value: &str, backend: &str) -> Option<Support> {
        let row = self.rows.iter().position(|r| r == value)?;
        let col = self.cols.iter().position(|c| c == backend)?;
        Some(self.cell(row, col))
    }

    /// Flatten into display strings for HTML rendering. The first column
    /// holds the row key under the given header label.
    #[must_use]
    pub fn to_table(&self, label: &str) -> RenderedTable {
        let mut columns = Vec::with_capacity(self.cols.len() + 1);
        columns.push(label.to_owned());
        columns.extend(self.cols.iter().cloned());
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(row_index, value)| {
                let mut row = Vec::with_capacity(self.cols.len() + 1);
                row.push(value.clone());
                for col_index in 0..self.cols.len() {
                    row.push(self.cell(row_index, col_index).as_str().to_owned());
                }
                row
            })
            .collect();
        RenderedTable { columns, rows }
    }
}

/// Classify every (value, backend) pair.
///
/// Values and backend names are sorted and deduplicated; deprecated
/// backends are expected to be excluded by the caller (the registry's
/// `active_backends` already does). Absent values simply classify as
/// unsupported; there are no error conditions.
#[must_use]
pub fn build_support_matrix(
    values: &[&str],
    backends: &[Box<dyn Backend>],
    classifier: &Classifier<'_>,
) -> SupportMatrix {
    let mut rows: Vec<String> = values.iter().map(|v| (*v).to_owned()).collect();
    rows.sort_unstable();
    rows.dedup();

    let mut by_name: Vec<(&str, &dyn Backend)> = Vec::with_capacity(backends.len());
    for backend in backends {
        if !by_name.iter().any(|(name, _)| *name == backend.name()) {
            by_name.push((backend.name(), backend.as_ref()));
        }
    }
    by_name.sort_unstable_by_key(|(name, _)| *name);
    let cols: Vec<String> = by_name.iter().map(|(name, _)| (*name).to_owned()).collect();

    let mut cells = Vec::with_capacity(rows.len() * cols.len());
    for value in &rows {
        for (_, backend) in &by_name {
            cells.push(classifier.classify(*backend, value));
        }
    }

    SupportMatrix { rows, cols, cells }
}
