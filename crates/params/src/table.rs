use crate::error::ParamsError;
use crate::record::Parameter;
use crate::scanner::LineScanner;
use std::fs;
use std::path::Path;
use std::slice;
use tracing::debug;

/// Growable sequence of [`Parameter`] records with name-based lookup.
///
/// Loading a file leaves the table sorted by name in ascending byte-wise
/// order, the precondition for [`binary_search`](Self::binary_search).
/// Records added later via [`push`](Self::push) invalidate that order
/// until [`sort_by_name`](Self::sort_by_name) runs again.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterTable {
    records: Vec<Parameter>,
}

impl ParameterTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and parses a parameter file, returning a sorted table.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Read`] when the file cannot be read; no
    /// partial record set exists in that case.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ParamsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_str_input(&contents))
    }

    /// Parses parameter records from in-memory text, returning a sorted
    /// table.
    ///
    /// Malformed, blank, and comment lines are discarded silently; this
    /// operation cannot fail.
    #[must_use]
    pub fn from_str_input(input: &str) -> Self {
        let mut table = Self::new();
        let mut scanner = LineScanner::new();
        let mut lines = 0_usize;

        for line in input.lines() {
            lines += 1;
            if let Some(record) = scanner.scan_line(line) {
                table.records.push(record);
            }
        }

        debug!(
            "parsed {} records from {} lines ({} discarded)",
            table.len(),
            lines,
            lines - table.len()
        );

        table.sort_by_name();
        table
    }

    /// Appends a record to the end of the table.
    ///
    /// Appending breaks the sorted-by-name invariant; call
    /// [`sort_by_name`](Self::sort_by_name) before using
    /// [`binary_search`](Self::binary_search) again.
    pub fn push(&mut self, record: Parameter) {
        self.records.push(record);
    }

    /// Sorts the records by name in ascending byte-wise order.
    ///
    /// The sort is stable, so re-sorting an already sorted table leaves
    /// the order unchanged.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Parameter> {
        self.records.get(index)
    }

    /// Returns the records as a slice, in current table order.
    #[must_use]
    pub fn records(&self) -> &[Parameter] {
        &self.records
    }

    /// Iterates over the records in current table order.
    pub fn iter(&self) -> slice::Iter<'_, Parameter> {
        self.records.iter()
    }

    /// Scans the table front to back for the first record named `name`.
    ///
    /// Works on any table order; `None` when the table is empty or no
    /// record matches.
    #[must_use]
    pub fn linear_search(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }

    /// Locates a record named `name` by interval halving.
    ///
    /// Requires the table to be sorted by name; a table that has been
    /// pushed to since the last [`sort_by_name`](Self::sort_by_name)
    /// yields unspecified results. `None` for an empty table or an
    /// unmatched name.
    #[must_use]
    pub fn binary_search(&self, name: &str) -> Option<usize> {
        self.records
            .binary_search_by(|record| record.name().cmp(name))
            .ok()
    }

    /// Looks up the value for `name` via binary search.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.binary_search(name)
            .and_then(|index| self.records.get(index))
            .map(Parameter::value)
    }
}

impl<'a> IntoIterator for &'a ParameterTable {
    type Item = &'a Parameter;
    type IntoIter = slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
