//! SI base-dimension exponent vectors.
//!
//! The seven base dimensions follow https://physics.nist.gov/cuu/Units/units.html.

use crate::units::parser::render_terms;
use std::fmt;
use std::ops::{Div, Mul};

/// Exponents of the seven SI base dimensions; force, for example, is
/// `length^1 * mass^1 * time^-2`.
///
/// Multiplying two vectors adds exponents, dividing subtracts them. Stored
/// as `i8`; real-world unit expressions stay far inside that range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnitExponents {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub electric_current: i8,
    pub temperature: i8,
    pub amount_of_substance: i8,
    pub luminous_intensity: i8,
}

impl UnitExponents {
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        electric_current: i8,
        temperature: i8,
        amount_of_substance: i8,
        luminous_intensity: i8,
    ) -> Self {
        UnitExponents {
            length,
            mass,
            time,
            electric_current,
            temperature,
            amount_of_substance,
            luminous_intensity,
        }
    }

    /// All exponents zero: a dimensionless value.
    pub const fn dimensionless() -> Self {
        UnitExponents::new(0, 0, 0, 0, 0, 0, 0)
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == UnitExponents::dimensionless()
    }

    /// Every exponent negated: the dimensions of a reciprocal.
    pub fn recip(&self) -> Self {
        UnitExponents::new(
            -self.length,
            -self.mass,
            -self.time,
            -self.electric_current,
            -self.temperature,
            -self.amount_of_substance,
            -self.luminous_intensity,
        )
    }

    // Base symbols in canonical SI order.
    fn terms(&self) -> [(i8, &'static str); 7] {
        [
            (self.length, "m"),
            (self.mass, "kg"),
            (self.time, "s"),
            (self.electric_current, "A"),
            (self.temperature, "K"),
            (self.amount_of_substance, "mol"),
            (self.luminous_intensity, "cd"),
        ]
    }
}

impl Mul for UnitExponents {
    type Output = UnitExponents;

    fn mul(self, rhs: UnitExponents) -> UnitExponents {
        UnitExponents::new(
            self.length + rhs.length,
            self.mass + rhs.mass,
            self.time + rhs.time,
            self.electric_current + rhs.electric_current,
            self.temperature + rhs.temperature,
            self.amount_of_substance + rhs.amount_of_substance,
            self.luminous_intensity + rhs.luminous_intensity,
        )
    }
}

impl Div for UnitExponents {
    type Output = UnitExponents;

    fn div(self, rhs: UnitExponents) -> UnitExponents {
        self * rhs.recip()
    }
}

impl fmt::Display for UnitExponents {
    /// Renders in the normalized `m*kg/s^2` form; dimensionless renders as
    /// the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<(String, i32)> = self
            .terms()
            .iter()
            .filter(|(e, _)| *e != 0)
            .map(|&(e, s)| (s.to_string(), e as i32))
            .collect();
        write!(f, "{}", render_terms(&terms))
    }
}
