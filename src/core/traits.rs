//! Core arithmetic trait for adjugate.

use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Sub};

/// Scalar types a [`Matrix`](crate::matrix::Matrix) can hold.
///
/// The matrix engine computes exclusively through these bounds: the four
/// binary operations by value, equality, and the additive/multiplicative
/// identities from `num_traits`. Monomorphization resolves every operation
/// at compile time, so there is no per-call dispatch cost however often the
/// recursive determinant invokes them.
///
/// Machine integers and floats qualify out of the box, as do
/// `num_bigint::BigInt`, `num_complex::Complex`, `num_rational::Ratio`, and
/// `rust_decimal::Decimal` through their `num-traits` implementations.
/// Nothing is implemented by hand; the blanket impl picks up any qualifying
/// type.
pub trait Element:
    Clone
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> Element for T where
    T: Clone
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}
