//! Generators of random dense matrices.
use num_complex::Complex64;
use proptest::prelude::*;

use tensor_sparse::DenseMatrix;

/// Largest number of rows or columns generated.
pub const MAX_DIMENSION: usize = 7;

/// A real value that is exactly zero about half of the time.
fn real_value() -> impl Strategy<Value=f64> + Clone {
    prop_oneof![
        2 => Just(0f64),
        1 => (-9i32..=9).prop_map(f64::from),
        1 => -1e3..1e3f64,
    ]
}

/// A complex value that is exactly zero about a third of the time.
fn complex_value() -> impl Strategy<Value=Complex64> + Clone {
    prop_oneof![
        1 => Just(Complex64::new(0f64, 0f64)),
        2 => (real_value(), real_value()).prop_map(|(re, im)| Complex64::new(re, im)),
    ]
}

/// Any shape, including those with zero rows or zero columns.
pub fn shape() -> impl Strategy<Value=(usize, usize)> {
    (0..=MAX_DIMENSION, 0..=MAX_DIMENSION)
}

fn dense<F: Clone + std::fmt::Debug>(
    value: impl Strategy<Value=F> + Clone,
) -> impl Strategy<Value=DenseMatrix<F>> {
    shape().prop_flat_map(move |(nr_rows, nr_columns)| {
        prop::collection::vec(value.clone(), nr_rows * nr_columns)
            .prop_map(move |data| DenseMatrix::from_column_major(nr_rows, nr_columns, data).unwrap())
    })
}

pub fn real_dense() -> impl Strategy<Value=DenseMatrix<f64>> {
    dense(real_value())
}

pub fn complex_dense() -> impl Strategy<Value=DenseMatrix<Complex64>> {
    dense(complex_value())
}
