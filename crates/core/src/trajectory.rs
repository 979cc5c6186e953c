use std::fmt;

/// The ordered record of a solver's iterates.
///
/// Each record is a fixed-arity row of `C` values whose meaning is given by
/// the column labels, for example `["x", "f_x"]` for the secant method.
/// Records appear in the order the solver accepted them and are never
/// modified once pushed.
///
/// A solver creates a fresh trajectory for every invocation and hands it back
/// to the caller with its solution, so separate calls never share records.
///
/// The [`Display`](fmt::Display) impl renders the records as a table with a
/// leading row index:
///
/// ```
/// use nlroots_core::Trajectory;
///
/// let mut trajectory = Trajectory::new(["x", "f_x"]);
/// trajectory.push([1.0, -5.0]);
/// trajectory.push([2.0, 14.0]);
///
/// let table = trajectory.to_string();
/// assert!(table.lines().next().unwrap().contains("f_x"));
/// assert_eq!(table.lines().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const C: usize> {
    columns: [&'static str; C],
    records: Vec<[f64; C]>,
}

impl<const C: usize> Trajectory<C> {
    /// Creates an empty trajectory with the given column labels.
    #[must_use]
    pub fn new(columns: [&'static str; C]) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    /// Appends one record.
    pub fn push(&mut self, record: [f64; C]) {
        self.records.push(record);
    }

    /// Returns the column labels.
    #[must_use]
    pub fn columns(&self) -> &[&'static str; C] {
        &self.columns
    }

    /// Returns all records in chronological order.
    #[must_use]
    pub fn records(&self) -> &[[f64; C]] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[f64; C]> {
        self.records.get(index)
    }

    /// Returns the first record, if any.
    #[must_use]
    pub fn first(&self) -> Option<&[f64; C]> {
        self.records.first()
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&[f64; C]> {
        self.records.last()
    }

    /// Iterates over the records in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, [f64; C]> {
        self.records.iter()
    }

    /// Iterates over the values of one column, looked up by label.
    ///
    /// Returns `None` if no column has that label.
    pub fn column(&self, label: &str) -> Option<impl Iterator<Item = f64> + '_> {
        let index = self.columns.iter().position(|c| *c == label)?;
        Some(self.records.iter().map(move |record| record[index]))
    }
}

impl<'a, const C: usize> IntoIterator for &'a Trajectory<C> {
    type Item = &'a [f64; C];
    type IntoIter = std::slice::Iter<'a, [f64; C]>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Digits after the decimal point when no precision is requested.
const DEFAULT_PRECISION: usize = 10;

impl<const C: usize> fmt::Display for Trajectory<C> {
    /// Formats the records as a right-aligned table.
    ///
    /// The formatter precision, if given (`{:.4}`), sets the number of
    /// decimal places; otherwise ten are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);

        let cells: Vec<[String; C]> = self
            .records
            .iter()
            .map(|record| (*record).map(|value| format!("{value:.precision$}")))
            .collect();

        let index_width = self.records.len().saturating_sub(1).to_string().len();
        let widths: [usize; C] = std::array::from_fn(|col| {
            cells
                .iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(self.columns[col].len()))
                .max()
                .unwrap_or_default()
        });

        write!(f, "{:index_width$}", "")?;
        for (label, width) in self.columns.iter().zip(widths) {
            write!(f, "  {label:>width$}")?;
        }

        for (index, row) in cells.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{index:>index_width$}")?;
            for (cell, width) in row.iter().zip(widths) {
                write!(f, "  {cell:>width$}")?;
            }
        }

        Ok(())
    }
}
