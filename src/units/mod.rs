//! Physical units and quantities: SI exponent vectors, a unit catalog,
//! dimensioned values, physical constants, and a symbolic parser/formatter
//! for unit expressions like `m*kg/s^2`.
//!
//! This subsystem is independent of the matrix engine; nothing here touches
//! [`Matrix`](crate::matrix::Matrix).

pub mod exponents;
pub use exponents::UnitExponents;
pub mod unit;
pub use unit::Unit;
pub mod si;
pub mod quantity;
pub use quantity::Quantity;
pub mod parser;
pub use parser::UnitParser;
pub mod constants;
