//! # Errors
//!
//! All operations that only see data produced by this crate are total. Data coming from the
//! outside, like raw index arrays or nested rows, can be malformed; that is reported here, before
//! any matrix is created.
use thiserror::Error;

/// A violated precondition on externally provided matrix data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    /// The row start array doesn't have one entry more than there are rows.
    #[error("row start has length {len}, expected one more than the {nr_rows} rows")]
    RowStartLength {
        /// Length of the row start array.
        len: usize,
        /// Number of rows of the matrix.
        nr_rows: usize,
    },
    /// The row start array doesn't begin at zero.
    #[error("row start must begin at 0, found {0}")]
    RowStartOrigin(usize),
    /// A row would end before it starts.
    #[error("row start decreases at row {row}: {current} > {next}")]
    RowStartDecreasing {
        /// Row of which the start exceeds the start of the next row.
        row: usize,
        /// Start of that row.
        current: usize,
        /// Start of the next row.
        next: usize,
    },
    /// The last row start, the column indices and the values don't agree on the number of
    /// nonzeros.
    #[error("row start ends at {end}, but {column_indices} column indices and {values} values are stored")]
    LengthMismatch {
        /// Last entry of the row start array.
        end: usize,
        /// Number of column indices.
        column_indices: usize,
        /// Number of values.
        values: usize,
    },
    /// A column index doesn't fit the shape of the matrix.
    #[error("column {column} in row {row} is out of bounds for {nr_columns} columns")]
    ColumnOutOfBounds {
        /// Row containing the column index.
        row: usize,
        /// The offending column index.
        column: usize,
        /// Number of columns of the matrix.
        nr_columns: usize,
    },
    /// Within a row, column indices must be strictly increasing.
    #[error("columns in row {row} are not strictly increasing: {previous} followed by {column}")]
    ColumnOrder {
        /// Row containing the columns.
        row: usize,
        /// Column preceding the offending one.
        previous: usize,
        /// Column that is not larger than its predecessor.
        column: usize,
    },
    /// A zero value is stored explicitly.
    #[error("explicit zero stored at row {row}, column {column}")]
    StoredZero {
        /// Row of the zero.
        row: usize,
        /// Column of the zero.
        column: usize,
    },
    /// Rows of a nested dense representation have different lengths.
    #[error("dense row {row} has {len} values, expected {expected}")]
    RaggedRows {
        /// Index of the first row of deviating length.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
    /// Flat dense data that can't fill the requested shape.
    #[error("{len} values can't fill a {nr_rows}x{nr_columns} dense matrix")]
    DenseLength {
        /// Number of values provided.
        len: usize,
        /// Requested number of rows.
        nr_rows: usize,
        /// Requested number of columns.
        nr_columns: usize,
    },
}
