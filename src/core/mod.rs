//! Core module: the arithmetic seam the matrix engine computes through.

pub mod traits;
pub use traits::Element;
