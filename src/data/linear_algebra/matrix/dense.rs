//! # Dense matrix
//!
//! Wrapping a `Vec` in column-major order, such that it can be indexed both by a linear index and
//! by a (row, column) pair. Dimensions are fixed at creation.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Element;
use crate::error::SparseError;

/// Stores every value, including the zeros.
///
/// Value (`row`, `column`) lives at linear index `row + column * nr_rows`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> Dense<F> {
    /// Create a `DenseMatrix` from values in column-major order.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows of the matrix.
    /// * `nr_columns`: Number of columns of the matrix.
    /// * `data`: All values, the first column first.
    ///
    /// # Errors
    ///
    /// If the number of values is not exactly `nr_rows * nr_columns`.
    pub fn from_column_major(
        nr_rows: usize,
        nr_columns: usize,
        data: Vec<F>,
    ) -> Result<Self, SparseError> {
        if nr_rows.checked_mul(nr_columns) != Some(data.len()) {
            return Err(SparseError::DenseLength { len: data.len(), nr_rows, nr_columns });
        }

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a `DenseMatrix` from a collection of rows.
    ///
    /// An empty collection results in a 0 x 0 matrix.
    ///
    /// # Errors
    ///
    /// If not all rows have the same length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, SparseError> {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, values)| values.len() != nr_columns) {
            return Err(SparseError::RaggedRows { row, len: values.len(), expected: nr_columns });
        }

        let mut columns = (0..nr_columns)
            .map(|_| Vec::with_capacity(nr_rows))
            .collect::<Vec<_>>();
        for values in rows {
            for (column, value) in values.into_iter().enumerate() {
                columns[column].push(value);
            }
        }

        Ok(Self {
            data: columns.into_iter().flatten().collect(),
            nr_rows,
            nr_columns,
        })
    }

    fn linear_index(&self, row: usize, column: usize) -> usize {
        // A row index that is too large could still land inside of the data
        assert!(row < self.nr_rows, "row {} out of bounds for {} rows", row, self.nr_rows);
        debug_assert!(column < self.nr_columns);

        row + column * self.nr_rows
    }

    /// Set the value at coordinate (`row`, `column`) to `value`.
    pub fn set_value(&mut self, row: usize, column: usize, value: F) {
        let index = self.linear_index(row, column);
        self.data[index] = value;
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> &[F] {
        debug_assert!(j < self.nr_columns);

        &self.data[j * self.nr_rows..(j + 1) * self.nr_rows]
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> impl Iterator<Item=&F> + Clone {
        debug_assert!(i < self.nr_rows);

        self.data.iter().skip(i).step_by(self.nr_rows.max(1)).take(self.nr_columns)
    }

    /// Iterate over all values in column-major order.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Number of values represented, the product of the dimensions.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether one of the dimensions is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the data of this matrix in column-major order.
    pub fn into_data(self) -> Vec<F> {
        self.data
    }
}

impl<F: Element> Matrix<F> for Dense<F> {
    fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![F::zero(); nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    fn identity(nr_rows: usize, nr_columns: usize) -> Self {
        let mut matrix = Self::zeros(nr_rows, nr_columns);
        for i in 0..nr_rows.min(nr_columns) {
            matrix.set_value(i, i, F::one());
        }

        matrix
    }

    fn get_value(&self, row: usize, column: usize) -> F {
        self[(row, column)].clone()
    }

    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn size(&self) -> usize {
        self.data.len()
    }
}

impl<F> Index<usize> for Dense<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.data.len());

        &self.data[index]
    }
}

impl<F> IndexMut<usize> for Dense<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.data.len());

        &mut self.data[index]
    }
}

impl<F> Index<(usize, usize)> for Dense<F> {
    type Output = F;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.data[self.linear_index(row, column)]
    }
}

impl<F> IndexMut<(usize, usize)> for Dense<F> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        let index = self.linear_index(row, column);
        &mut self.data[index]
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.data.iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(0);

        for row in 0..self.nr_rows {
            for column in 0..self.nr_columns {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self[(row, column)].to_string(), width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
