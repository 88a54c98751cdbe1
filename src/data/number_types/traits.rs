//! # Traits
//!
//! The element types that can be stored in a matrix. Both real and complex scalars are used by the
//! tensor library; everything in this crate is written once, generic over the `Element` trait.
//!
//! Zero testing is exact. A value that is zero only up to rounding is not zero, and will be
//! stored in a sparse structure.
use std::fmt::{Debug, Display};

use num_traits::{One, Zero};

/// Element of a dense or sparse matrix.
///
/// Automatically implemented for all types satisfying the trait's bounds, such as `f64` and
/// `Complex<f64>`.
pub trait Element:
    Zero + // Additive identity, never stored in a sparse structure
    One + // Multiplicative identity, placed on the diagonal of an identity matrix
    PartialEq + // Exact comparison
    Clone +
    Display +
    Debug +
{
}
impl<T: Zero + One + PartialEq + Clone + Display + Debug> Element for T {
}

/// Exact test against the additive identity.
pub trait NonZero {
    /// Whether this value differs from zero.
    ///
    /// No tolerance is applied: only a value that compares equal to zero is zero.
    fn is_not_zero(&self) -> bool;
}
impl<T: Zero> NonZero for T {
    fn is_not_zero(&self) -> bool {
        !self.is_zero()
    }
}

/// Helper macro for tests.
///
/// Creates a value of the element type `F` that is in scope from a literal.
#[macro_export]
macro_rules! F {
    ($value:expr) => {
        {
            F::from($value as f64)
        }
    };
}
