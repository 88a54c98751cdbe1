//! # Row builder
//!
//! Assembling a sparse matrix one row at a time. Rows are validated when they are pushed, so that
//! sealing the builder can't fail.
use itertools::repeat_n;
use log::debug;

use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::SparseTuple;
use crate::data::number_types::traits::NonZero;
use crate::error::SparseError;

/// Accumulates the rows of a sparse matrix with a fixed number of columns.
#[derive(Debug, Clone)]
pub struct Builder<F> {
    nr_columns: usize,

    row_start: Vec<usize>,
    column_index: Vec<usize>,
    values: Vec<F>,
}

impl<F: NonZero> Builder<F> {
    /// Start a matrix without rows.
    pub fn new(nr_columns: usize) -> Self {
        Self {
            nr_columns,

            row_start: vec![0],
            column_index: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// # Arguments
    ///
    /// * `entries`: (column, value) tuples, with strictly increasing columns. Values that are zero
    /// are skipped.
    ///
    /// # Errors
    ///
    /// If a column is out of bounds or columns are not strictly increasing. The row is not added
    /// in that case and the builder is unchanged.
    pub fn push_row<I: IntoIterator<Item=SparseTuple<F>>>(&mut self, entries: I) -> Result<(), SparseError> {
        let row = self.nr_rows();
        let start = self.values.len();

        let mut previous = None;
        for (column, value) in entries {
            let check = if column >= self.nr_columns {
                Err(SparseError::ColumnOutOfBounds { row, column, nr_columns: self.nr_columns })
            } else {
                match previous {
                    Some(previous) if previous >= column => {
                        Err(SparseError::ColumnOrder { row, previous, column })
                    },
                    _ => Ok(()),
                }
            };
            if let Err(error) = check {
                debug!("Discarding row {}: {}", row, error);
                self.column_index.truncate(start);
                self.values.truncate(start);
                return Err(error);
            }

            // Zero values take part in the ordering check
            previous = Some(column);
            if value.is_not_zero() {
                self.column_index.push(column);
                self.values.push(value);
            }
        }

        self.row_start.push(self.values.len());
        Ok(())
    }

    /// Append `count` rows without nonzero values.
    pub fn push_empty_rows(&mut self, count: usize) {
        let end = self.values.len();
        self.row_start.extend(repeat_n(end, count));
    }

    /// Number of rows pushed so far.
    pub fn nr_rows(&self) -> usize {
        self.row_start.len() - 1
    }

    /// Seal the rows into an immutable matrix.
    #[must_use]
    pub fn build(self) -> SparseMatrix<F> {
        let nr_rows = self.nr_rows();
        SparseMatrix::from_parts_unchecked(
            nr_rows,
            self.nr_columns,
            self.row_start,
            self.column_index,
            self.values,
        )
    }
}
