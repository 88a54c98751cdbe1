//! # Matrix implementations
//!
//! The `Matrix` trait defines a set of operations available for all matrix types defined in this
//! module. The dense matrix stores every value, the sparse matrix only those values that are not
//! zero, in compressed row storage.
use std::fmt::{Debug, Display};

pub use builder::Builder;
pub use dense::Dense as DenseMatrix;
pub use sparse::full;
pub use sparse::Sparse as SparseMatrix;

mod builder;
mod dense;
mod sparse;

/// Defines basic ways to create or read a matrix, regardless of back-end.
pub trait Matrix<F>: PartialEq + Display + Debug {
    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    ///
    /// Either dimension may be zero.
    fn zeros(nr_rows: usize, nr_columns: usize) -> Self;
    /// Create a (possibly rectangular) identity matrix.
    ///
    /// Entry (`i`, `i`) is one for all `i` smaller than both `nr_rows` and `nr_columns`, all other
    /// entries are zero.
    fn identity(nr_rows: usize, nr_columns: usize) -> Self;
    /// Get the value at coordinate (`row`, `column`).
    ///
    /// Values that are not stored are zero.
    fn get_value(&self, row: usize, column: usize) -> F;
    /// Get the number of rows in this matrix.
    fn nr_rows(&self) -> usize;
    /// Get the number of columns in this matrix.
    fn nr_columns(&self) -> usize;
    /// Get the number of values stored in this matrix.
    fn size(&self) -> usize;
}
