//! Catalog of common units: the SI base units, a handful of named derived
//! units, and a few prefixed and imperial units with their conversion
//! factors.

use crate::units::exponents::UnitExponents;
use crate::units::unit::Unit;

// SI base units
pub const METER: Unit = Unit::new("m", UnitExponents::new(1, 0, 0, 0, 0, 0, 0), 1.0);
pub const KILOGRAM: Unit = Unit::new("kg", UnitExponents::new(0, 1, 0, 0, 0, 0, 0), 1.0);
pub const SECOND: Unit = Unit::new("s", UnitExponents::new(0, 0, 1, 0, 0, 0, 0), 1.0);
pub const AMPERE: Unit = Unit::new("A", UnitExponents::new(0, 0, 0, 1, 0, 0, 0), 1.0);
pub const KELVIN: Unit = Unit::new("K", UnitExponents::new(0, 0, 0, 0, 1, 0, 0), 1.0);
pub const MOLE: Unit = Unit::new("mol", UnitExponents::new(0, 0, 0, 0, 0, 1, 0), 1.0);
pub const CANDELA: Unit = Unit::new("cd", UnitExponents::new(0, 0, 0, 0, 0, 0, 1), 1.0);

// SI named derived units
pub const HERTZ: Unit = Unit::new("Hz", UnitExponents::new(0, 0, -1, 0, 0, 0, 0), 1.0);
pub const NEWTON: Unit = Unit::new("N", UnitExponents::new(1, 1, -2, 0, 0, 0, 0), 1.0);
pub const PASCAL: Unit = Unit::new("Pa", UnitExponents::new(-1, 1, -2, 0, 0, 0, 0), 1.0);
pub const JOULE: Unit = Unit::new("J", UnitExponents::new(2, 1, -2, 0, 0, 0, 0), 1.0);
pub const WATT: Unit = Unit::new("W", UnitExponents::new(2, 1, -3, 0, 0, 0, 0), 1.0);
pub const COULOMB: Unit = Unit::new("C", UnitExponents::new(0, 0, 1, 1, 0, 0, 0), 1.0);
pub const VOLT: Unit = Unit::new("V", UnitExponents::new(2, 1, -3, -1, 0, 0, 0), 1.0);
pub const OHM: Unit = Unit::new("ohm", UnitExponents::new(2, 1, -3, -2, 0, 0, 0), 1.0);

// SI prefixed units
pub const KILOMETER: Unit = Unit::new("km", UnitExponents::new(1, 0, 0, 0, 0, 0, 0), 0.001);
pub const GRAM: Unit = Unit::new("g", UnitExponents::new(0, 1, 0, 0, 0, 0, 0), 1000.0);

// Imperial units
pub const FOOT: Unit = Unit::new("ft", UnitExponents::new(1, 0, 0, 0, 0, 0, 0), 3.28084);
pub const INCH: Unit = Unit::new("in", UnitExponents::new(1, 0, 0, 0, 0, 0, 0), 39.3701);
