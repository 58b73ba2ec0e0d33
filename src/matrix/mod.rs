//! Matrix module: the dense generic container and its algebra.

pub mod dense;
pub use dense::Matrix;
pub mod ops;
pub mod linalg;
