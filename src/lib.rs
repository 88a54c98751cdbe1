//! # Compressed row storage sparse matrices
//!
//! Two-dimensional matrices of which most entries are zero, stored as three flat arrays: the start
//! of each row, the column of each nonzero and the nonzero values. Matrices can be created empty,
//! as a (rectangular) identity or by compressing a dense matrix, and expanded back into a dense
//! matrix without loss.
//!
//! ```
//! use tensor_sparse::{DenseMatrix, SparseMatrix};
//!
//! let dense = DenseMatrix::from_rows(vec![
//!     vec![1f64, 0f64, 4f64],
//!     vec![2f64, 3f64, 0f64],
//! ]).unwrap();
//! let sparse = SparseMatrix::from(&dense);
//!
//! assert_eq!(sparse.row_start(), &[0, 2, 4]);
//! assert_eq!(sparse.column_index(), &[0, 2, 0, 1]);
//! assert_eq!(sparse.values(), &[1f64, 4f64, 2f64, 3f64]);
//! assert_eq!(sparse.to_dense(), dense);
//! ```
#![warn(missing_docs)]

pub mod data;
pub mod error;

pub use data::linear_algebra::matrix::{Builder, DenseMatrix, full, Matrix, SparseMatrix};
pub use data::number_types::traits::{Element, NonZero};
pub use error::SparseError;
