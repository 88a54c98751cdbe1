//! Compressing dense matrices and expanding them again.
use proptest::prelude::*;

use tensor_sparse::{DenseMatrix, Element, full, Matrix, NonZero, SparseMatrix};

use crate::strategy::{complex_dense, real_dense, shape};

fn round_trip<F: Element>(dense: &DenseMatrix<F>) -> Result<(), TestCaseError> {
    let sparse = SparseMatrix::from(dense);
    prop_assert_eq!(&full(&sparse), dense);
    // Compressing again gives the same encoding
    prop_assert_eq!(SparseMatrix::from(&full(&sparse)), sparse);

    Ok(())
}

fn canonical_encoding<F: Element>(dense: &DenseMatrix<F>) -> Result<(), TestCaseError> {
    let sparse = SparseMatrix::from(dense);
    let nr_nonzero = dense.iter().filter(|value| value.is_not_zero()).count();

    prop_assert_eq!(sparse.column_index().len(), nr_nonzero);
    prop_assert_eq!(sparse.values().len(), nr_nonzero);
    prop_assert_eq!(sparse.nnz(), nr_nonzero);
    prop_assert!(sparse.values().iter().all(|value| value.is_not_zero()));

    prop_assert_eq!(sparse.row_start().len(), dense.nr_rows() + 1);
    prop_assert_eq!(sparse.row_start()[0], 0);
    prop_assert_eq!(sparse.row_start()[dense.nr_rows()], nr_nonzero);
    prop_assert!(sparse.row_start().windows(2).all(|pair| pair[0] <= pair[1]));

    Ok(())
}

fn row_ordering<F: Element>(dense: &DenseMatrix<F>) -> Result<(), TestCaseError> {
    let sparse = SparseMatrix::from(dense);

    for row in 0..sparse.nr_rows() {
        let columns = sparse.row(row).map(|(column, _)| column).collect::<Vec<_>>();
        prop_assert!(columns.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(columns.iter().all(|&column| column < dense.nr_columns()));
        for (column, value) in sparse.row(row) {
            prop_assert_eq!(value, &dense[(row, column)]);
        }
    }

    Ok(())
}

fn structural_equality<F: Element>(dense: &DenseMatrix<F>) -> Result<(), TestCaseError> {
    let sparse = SparseMatrix::from(dense);
    let (row_start, column_index, values) = sparse.clone().into_raw_parts();
    let rebuilt = SparseMatrix::try_from_raw_parts(
        dense.nr_rows(),
        dense.nr_columns(),
        row_start,
        column_index,
        values,
    );
    prop_assert_eq!(rebuilt, Ok(sparse));

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn real_round_trip(dense in real_dense()) {
        round_trip(&dense)?;
    }

    #[test]
    fn complex_round_trip(dense in complex_dense()) {
        round_trip(&dense)?;
    }

    #[test]
    fn real_canonical_encoding(dense in real_dense()) {
        canonical_encoding(&dense)?;
    }

    #[test]
    fn complex_canonical_encoding(dense in complex_dense()) {
        canonical_encoding(&dense)?;
    }

    #[test]
    fn real_row_ordering(dense in real_dense()) {
        row_ordering(&dense)?;
    }

    #[test]
    fn complex_row_ordering(dense in complex_dense()) {
        row_ordering(&dense)?;
    }

    #[test]
    fn real_structural_equality(dense in real_dense()) {
        structural_equality(&dense)?;
    }

    #[test]
    fn zero_matrices((nr_rows, nr_columns) in shape()) {
        let sparse = SparseMatrix::<f64>::new(nr_rows, nr_columns);
        let zeros = vec![0; nr_rows + 1];

        prop_assert_eq!(sparse.nnz(), 0);
        prop_assert!(sparse.is_empty());
        prop_assert_eq!(sparse.row_start(), zeros.as_slice());
        prop_assert_eq!(full(&sparse), DenseMatrix::zeros(nr_rows, nr_columns));
        prop_assert_eq!(SparseMatrix::from(&DenseMatrix::<f64>::zeros(nr_rows, nr_columns)), sparse);
    }
}
