//! The two ways of creating an identity matrix agree.
use num_complex::Complex64;
use proptest::prelude::*;

use tensor_sparse::{DenseMatrix, Element, full, Matrix, SparseMatrix};

use crate::strategy::shape;

fn identity_consistency<F: Element>(nr_rows: usize, nr_columns: usize) -> Result<(), TestCaseError> {
    let dense = DenseMatrix::<F>::identity(nr_rows, nr_columns);
    let sparse = SparseMatrix::<F>::eye(nr_rows, nr_columns);

    prop_assert_eq!(SparseMatrix::from(&dense), sparse.clone());
    prop_assert_eq!(full(&sparse), dense);

    Ok(())
}

proptest! {
    #[test]
    fn real_identity_consistency((nr_rows, nr_columns) in shape()) {
        identity_consistency::<f64>(nr_rows, nr_columns)?;
    }

    #[test]
    fn complex_identity_consistency((nr_rows, nr_columns) in shape()) {
        identity_consistency::<Complex64>(nr_rows, nr_columns)?;
    }

    #[test]
    fn identity_row_start((nr_rows, nr_columns) in shape()) {
        let k = nr_rows.min(nr_columns);
        let sparse = SparseMatrix::<f64>::eye(nr_rows, nr_columns);
        let diagonal = (0..k).collect::<Vec<_>>();

        prop_assert_eq!(sparse.row_start().len(), nr_rows + 1);
        for i in 0..=nr_rows {
            prop_assert_eq!(sparse.row_start()[i], i.min(k));
        }
        prop_assert_eq!(sparse.column_index(), diagonal.as_slice());
        prop_assert!(sparse.values().iter().all(|&value| value == 1f64));
    }
}
