//! Dimensioned scalar values.

use crate::error::UnitError;
use crate::units::exponents::UnitExponents;
use crate::units::unit::Unit;
use std::fmt;
use std::ops::{Div, Mul};

/// A physical quantity: a value normalized to SI base units at construction,
/// plus the exponent vector of those units.
///
/// Two quantities are equal when both the normalized value and the exponent
/// vector agree, so `75 N` equals `75 m*kg/s^2` regardless of the unit it
/// was constructed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity {
    si_value: f64,
    exponents: UnitExponents,
}

impl Quantity {
    /// `value` measured in `unit`.
    pub fn new(value: f64, unit: &Unit) -> Self {
        Quantity {
            si_value: value / unit.factor(),
            exponents: unit.exponents(),
        }
    }

    /// A quantity already expressed in SI base units.
    pub const fn from_si(si_value: f64, exponents: UnitExponents) -> Self {
        Quantity {
            si_value,
            exponents,
        }
    }

    /// The value in SI base units.
    pub fn si_value(&self) -> f64 {
        self.si_value
    }

    pub fn exponents(&self) -> UnitExponents {
        self.exponents
    }

    /// The value expressed in `unit`.
    ///
    /// # Errors
    /// [`UnitError::IncompatibleUnits`] if `unit` has different dimensions.
    pub fn value_in(&self, unit: &Unit) -> Result<f64, UnitError> {
        if self.exponents != unit.exponents() {
            return Err(UnitError::IncompatibleUnits {
                from: self.exponents.to_string(),
                to: unit.symbol().to_string(),
            });
        }
        Ok(self.si_value * unit.factor())
    }

    /// Render the value with `unit`'s symbol, e.g. `"75 N"`.
    ///
    /// # Errors
    /// [`UnitError::IncompatibleUnits`] if `unit` has different dimensions.
    pub fn format_in(&self, unit: &Unit) -> Result<String, UnitError> {
        Ok(format!("{} {unit}", self.value_in(unit)?))
    }

    /// The reciprocal, with every dimension exponent negated.
    pub fn recip(&self) -> Quantity {
        Quantity {
            si_value: 1.0 / self.si_value,
            exponents: self.exponents.recip(),
        }
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity {
            si_value: self.si_value * rhs.si_value,
            exponents: self.exponents * rhs.exponents,
        }
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity {
            si_value: self.si_value / rhs.si_value,
            exponents: self.exponents / rhs.exponents,
        }
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity {
            si_value: self.si_value * rhs,
            exponents: self.exponents,
        }
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity {
            si_value: self.si_value / rhs,
            exponents: self.exponents,
        }
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        self * rhs.recip()
    }
}

impl fmt::Display for Quantity {
    /// SI value followed by the exponent rendering, e.g. `75 m*kg/s^2`; a
    /// dimensionless quantity renders as the bare value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponents.is_dimensionless() {
            write!(f, "{}", self.si_value)
        } else {
            write!(f, "{} {}", self.si_value, self.exponents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::si;
    use approx::assert_abs_diff_eq;

    #[test]
    fn display_base_units() {
        assert_eq!(Quantity::new(2.0, &si::METER).to_string(), "2 m");
        assert_eq!(Quantity::new(2.0, &si::KILOGRAM).to_string(), "2 kg");
        assert_eq!(Quantity::new(2.0, &si::SECOND).to_string(), "2 s");
        assert_eq!(Quantity::new(2.0, &si::AMPERE).to_string(), "2 A");
        assert_eq!(Quantity::new(2.0, &si::KELVIN).to_string(), "2 K");
        assert_eq!(Quantity::new(2.0, &si::MOLE).to_string(), "2 mol");
        assert_eq!(Quantity::new(2.0, &si::CANDELA).to_string(), "2 cd");
    }

    #[test]
    fn converts_between_compatible_units() {
        let q = Quantity::new(2.0, &si::KILOMETER);
        assert_abs_diff_eq!(q.value_in(&si::METER).unwrap(), 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_incompatible_units() {
        let q = Quantity::new(1.0, &si::METER);
        assert!(matches!(
            q.value_in(&si::KILOGRAM),
            Err(UnitError::IncompatibleUnits { .. })
        ));
        assert!(q.format_in(&si::KILOGRAM).is_err());
    }

    #[test]
    fn force_from_mass_and_acceleration() {
        let accel = Quantity::new(15.0, &(si::METER / (si::SECOND * si::SECOND)));
        let mass = Quantity::new(5.0, &si::KILOGRAM);
        let force = mass * accel;
        assert_eq!(force.to_string(), "75 m*kg/s^2");
        assert_eq!(force, Quantity::new(75.0, &si::NEWTON));
        assert_eq!(force.value_in(&si::NEWTON).unwrap(), 75.0);
        assert_eq!(force.format_in(&si::NEWTON).unwrap(), "75 N");
    }

    #[test]
    fn recip_negates_exponents() {
        let period = Quantity::new(0.5, &si::SECOND);
        let freq = period.recip();
        assert_eq!(freq.si_value(), 2.0);
        assert_eq!(freq.value_in(&si::HERTZ).unwrap(), 2.0);
    }

    #[test]
    fn scalar_multiplication_keeps_dimensions() {
        let d = Quantity::new(3.0, &si::METER);
        assert_eq!(2.0 * d, Quantity::new(6.0, &si::METER));
        assert_eq!(d * 2.0, Quantity::new(6.0, &si::METER));
        assert_eq!(d / 2.0, Quantity::new(1.5, &si::METER));
    }
}
