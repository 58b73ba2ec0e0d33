//! Units of measure: a symbol, SI exponents, and a conversion factor.

use crate::units::exponents::UnitExponents;
use std::borrow::Cow;
use std::fmt;
use std::ops::{Div, Mul};

/// A unit of measure.
///
/// The conversion factor is how many of this unit make up one SI unit of the
/// same dimension, so meters carry 1.0 and feet 3.28084. Multiplying or
/// dividing units composes derived units, combining symbols, exponents, and
/// factors.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    symbol: Cow<'static, str>,
    exponents: UnitExponents,
    factor: f64,
}

impl Unit {
    /// A named unit. `factor` is units-per-SI-unit.
    pub const fn new(symbol: &'static str, exponents: UnitExponents, factor: f64) -> Self {
        Unit {
            symbol: Cow::Borrowed(symbol),
            exponents,
            factor,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn exponents(&self) -> UnitExponents {
        self.exponents
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        Unit {
            symbol: Cow::Owned(format!("{}*{}", self.symbol, rhs.symbol)),
            exponents: self.exponents * rhs.exponents,
            factor: self.factor * rhs.factor,
        }
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        Unit {
            symbol: Cow::Owned(format!("{}/{}", self.symbol, rhs.symbol)),
            exponents: self.exponents / rhs.exponents,
            factor: self.factor / rhs.factor,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::si;

    #[test]
    fn composition_combines_exponents_and_factors() {
        let newton_by_hand =
            si::KILOGRAM * (si::METER / (si::SECOND * si::SECOND));
        assert_eq!(newton_by_hand.exponents(), si::NEWTON.exponents());
        assert_eq!(newton_by_hand.factor(), 1.0);
    }

    #[test]
    fn composed_symbol_is_readable() {
        let u = si::METER / si::SECOND;
        assert_eq!(u.symbol(), "m/s");
        assert_eq!(u.to_string(), "m/s");
    }
}
