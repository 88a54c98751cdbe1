//! # Storing of matrices in memory
//!
//! This module provides the data structures used to represent matrices in memory, and the
//! requirements on the values they hold.

pub mod linear_algebra;
pub mod number_types;
