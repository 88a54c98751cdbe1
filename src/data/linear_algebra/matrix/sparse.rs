//! # Sparse matrix
//!
//! Compressed row storage: three flat arrays instead of a full dense buffer.
//!
//! * `row_start`, of length `nr_rows + 1`, holds for each row the index of its first nonzero in
//! the other two arrays. The last entry is the total number of nonzeros.
//! * `column_index` holds the column of each nonzero, strictly increasing within a row.
//! * `values` holds the nonzero values, parallel to `column_index`. No value is zero.
//!
//! Because zeros are never stored and columns are ordered, each dense matrix has exactly one
//! encoding. Comparing the arrays is therefore the same as comparing the dense matrices.
//!
//! A matrix is never changed after construction. Use the `Builder` to assemble one row by row.
use std::fmt;
use std::fmt::Display;
use std::ops::Range;

use itertools::{Itertools, repeat_n};
use log::{debug, trace};

use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
use crate::data::linear_algebra::SparseTuple;
use crate::data::number_types::traits::{Element, NonZero};
use crate::error::SparseError;

/// A sparse matrix in compressed row storage. Indices start at `0`.
///
/// Equality is structural: shapes and all three arrays are compared element by element.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    row_start: Vec<usize>,
    column_index: Vec<usize>,
    values: Vec<F>,

    nr_rows: usize,
    nr_columns: usize,
}

impl<F> Sparse<F> {
    /// Create a matrix without any nonzero values.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows, may be zero.
    /// * `nr_columns`: Number of columns, may be zero.
    ///
    /// # Return value
    ///
    /// A matrix with `nr_rows + 1` row starts, all zero.
    #[must_use]
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            row_start: vec![0; nr_rows + 1],
            column_index: Vec::new(),
            values: Vec::new(),

            nr_rows,
            nr_columns,
        }
    }

    /// Wrap arrays that are known to satisfy all invariants.
    pub(super) fn from_parts_unchecked(
        nr_rows: usize,
        nr_columns: usize,
        row_start: Vec<usize>,
        column_index: Vec<usize>,
        values: Vec<F>,
    ) -> Self
    where
        F: NonZero,
    {
        let matrix = Self { row_start, column_index, values, nr_rows, nr_columns };
        debug_assert_eq!(matrix.check_invariants(), Ok(()));

        matrix
    }

    /// Create a matrix from raw compressed row storage arrays.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows.
    /// * `nr_columns`: Number of columns.
    /// * `row_start`: Start of each row in the other two arrays, followed by the number of
    /// nonzeros.
    /// * `column_index`: Column of each nonzero, strictly increasing within each row.
    /// * `values`: The nonzero values.
    ///
    /// # Errors
    ///
    /// The first invariant that the arrays violate. No matrix is created in that case.
    pub fn try_from_raw_parts(
        nr_rows: usize,
        nr_columns: usize,
        row_start: Vec<usize>,
        column_index: Vec<usize>,
        values: Vec<F>,
    ) -> Result<Self, SparseError>
    where
        F: NonZero,
    {
        let matrix = Self { row_start, column_index, values, nr_rows, nr_columns };
        match matrix.check_invariants() {
            Ok(()) => Ok(matrix),
            Err(error) => {
                debug!("Rejecting raw sparse matrix parts: {}", error);
                Err(error)
            },
        }
    }

    /// Take the matrix apart.
    ///
    /// # Return value
    ///
    /// Tuple of the row starts, column indices and values, in that order.
    pub fn into_raw_parts(self) -> (Vec<usize>, Vec<usize>, Vec<F>) {
        (self.row_start, self.column_index, self.values)
    }

    fn check_invariants(&self) -> Result<(), SparseError>
    where
        F: NonZero,
    {
        // Also rejects a row count that leaves no room for the closing row start
        if self.row_start.len().checked_sub(1) != Some(self.nr_rows) {
            return Err(SparseError::RowStartLength { len: self.row_start.len(), nr_rows: self.nr_rows });
        }
        if self.row_start[0] != 0 {
            return Err(SparseError::RowStartOrigin(self.row_start[0]));
        }
        if let Some((row, (&current, &next))) = self.row_start.iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (current, next))| current > next) {
            return Err(SparseError::RowStartDecreasing { row, current, next });
        }
        let end = self.row_start[self.nr_rows];
        if self.column_index.len() != end || self.values.len() != end {
            return Err(SparseError::LengthMismatch {
                end,
                column_indices: self.column_index.len(),
                values: self.values.len(),
            });
        }

        for row in 0..self.nr_rows {
            let range = self.row_range(row);
            let columns = &self.column_index[range.clone()];
            if let Some(&column) = columns.iter().find(|&&column| column >= self.nr_columns) {
                return Err(SparseError::ColumnOutOfBounds { row, column, nr_columns: self.nr_columns });
            }
            if let Some((&previous, &column)) = columns.iter().tuple_windows().find(|(previous, column)| previous >= column) {
                return Err(SparseError::ColumnOrder { row, previous, column });
            }
            if let Some(column) = columns.iter()
                .zip(&self.values[range])
                .find(|(_, value)| !value.is_not_zero())
                .map(|(&column, _)| column) {
                return Err(SparseError::StoredZero { row, column });
            }
        }

        Ok(())
    }

    fn row_range(&self, row: usize) -> Range<usize> {
        debug_assert!(row < self.nr_rows);

        self.row_start[row]..self.row_start[row + 1]
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Row starts, `nr_rows + 1` values.
    pub fn row_start(&self) -> &[usize] {
        &self.row_start
    }

    /// Column of each stored value.
    pub fn column_index(&self) -> &[usize] {
        &self.column_index
    }

    /// The stored values, none of which is zero.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Number of stored values.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Whether no value is stored, that is, whether this is a zero matrix.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the (`column`, `value`) tuples of row `i`, ordered by column.
    pub fn row(&self, i: usize) -> impl Iterator<Item=SparseTuple<&F>> + Clone {
        assert!(i < self.nr_rows, "row {} out of bounds for {} rows", i, self.nr_rows);

        let range = self.row_range(i);
        self.column_index[range.clone()].iter().copied().zip(&self.values[range])
    }

    /// Iterate over all (`row`, `column`, `value`) triples in row-major order.
    pub fn iter(&self) -> impl Iterator<Item=(usize, usize, &F)> {
        (0..self.nr_rows)
            .flat_map(move |row| self.row(row).map(move |(column, value)| (row, column, value)))
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// # Return value
    ///
    /// `None` if the value is zero and thus not stored.
    pub fn get(&self, row: usize, column: usize) -> Option<&F> {
        assert!(row < self.nr_rows, "row {} out of bounds for {} rows", row, self.nr_rows);
        debug_assert!(column < self.nr_columns);

        let range = self.row_range(row);
        self.column_index[range.clone()]
            .binary_search(&column)
            .ok()
            .map(|index| &self.values[range.start + index])
    }
}

impl<F: Element> Sparse<F> {
    /// Compress a dense matrix.
    ///
    /// The dense matrix is scanned row by row, each row from the first to the last column. Every
    /// value that is not exactly zero is stored; no tolerance is applied.
    #[must_use]
    pub fn from_dense(dense: &DenseMatrix<F>) -> Self {
        let nr_rows = dense.nr_rows();
        let nr_columns = dense.nr_columns();

        let mut row_start = Vec::with_capacity(nr_rows + 1);
        let mut column_index = Vec::new();
        let mut values = Vec::new();
        for row in 0..nr_rows {
            row_start.push(values.len());
            for column in 0..nr_columns {
                let value = &dense[(row, column)];
                if value.is_not_zero() {
                    column_index.push(column);
                    values.push(value.clone());
                }
            }
        }
        row_start.push(values.len());

        debug!("Compressed {}x{} dense matrix into {} nonzeros", nr_rows, nr_columns, values.len());
        Self::from_parts_unchecked(nr_rows, nr_columns, row_start, column_index, values)
    }

    /// Create a (possibly rectangular) identity matrix.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows.
    /// * `nr_columns`: Number of columns.
    ///
    /// # Return value
    ///
    /// A matrix with a one at (`i`, `i`) for all `i` below `k = min(nr_rows, nr_columns)`. Row `i`
    /// starts at `min(i, k)`: the rows after the first `k` are empty.
    #[must_use]
    pub fn eye(nr_rows: usize, nr_columns: usize) -> Self {
        let k = nr_rows.min(nr_columns);
        trace!("Creating {}x{} sparse identity with {} ones", nr_rows, nr_columns, k);

        Self::from_parts_unchecked(
            nr_rows,
            nr_columns,
            (0..=k).chain(repeat_n(k, nr_rows - k)).collect(),
            (0..k).collect(),
            repeat_n(F::one(), k).collect(),
        )
    }

    /// Expand into a dense matrix.
    ///
    /// Values that are not stored are zero in the result.
    #[must_use]
    pub fn to_dense(&self) -> DenseMatrix<F> {
        trace!("Expanding {}x{} sparse matrix with {} nonzeros", self.nr_rows, self.nr_columns, self.nnz());

        let mut dense = DenseMatrix::zeros(self.nr_rows, self.nr_columns);
        for (row, column, value) in self.iter() {
            dense.set_value(row, column, value.clone());
        }

        dense
    }
}

/// Expand a sparse matrix into a dense matrix.
#[must_use]
pub fn full<F: Element>(matrix: &Sparse<F>) -> DenseMatrix<F> {
    matrix.to_dense()
}

impl<F> Default for Sparse<F> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<F: Element> Matrix<F> for Sparse<F> {
    fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self::new(nr_rows, nr_columns)
    }

    fn identity(nr_rows: usize, nr_columns: usize) -> Self {
        Self::eye(nr_rows, nr_columns)
    }

    fn get_value(&self, row: usize, column: usize) -> F {
        self.get(row, column).cloned().unwrap_or_else(F::zero)
    }

    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn size(&self) -> usize {
        self.nnz()
    }
}

impl<F: Element> From<&DenseMatrix<F>> for Sparse<F> {
    fn from(dense: &DenseMatrix<F>) -> Self {
        Self::from_dense(dense)
    }
}

impl<F: Element> From<DenseMatrix<F>> for Sparse<F> {
    fn from(dense: DenseMatrix<F>) -> Self {
        Self::from_dense(&dense)
    }
}

impl<F: Element> From<&Sparse<F>> for DenseMatrix<F> {
    fn from(sparse: &Sparse<F>) -> Self {
        sparse.to_dense()
    }
}

impl<F: Display> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}x{}, {} nonzeros", self.nr_rows, self.nr_columns, self.values.len())?;
        for row in 0..self.nr_rows {
            for (column, value) in self.row(row) {
                writeln!(f, "({}, {}) {}", row, column, value)?;
            }
        }
        Ok(())
    }
}
