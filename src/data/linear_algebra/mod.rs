//! # Linear algebra primitives
//!
//! Two-dimensional matrices, represented in either a dense or a sparse format.

pub mod matrix;

/// A (column, value) pair of a row in a sparse matrix.
pub type SparseTuple<F> = (usize, F);
