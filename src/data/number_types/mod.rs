//! # Number types
//!
//! Traits for the scalar values stored in matrices.
pub mod traits;
