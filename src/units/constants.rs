//! Physical constants as dimensioned [`Quantity`] values.
//!
//! Values follow the CODATA table at
//! https://en.wikipedia.org/wiki/Physical_constant#Table_of_physical_constants.

use crate::units::quantity::Quantity;
use crate::units::si;

// Universal constants

pub fn impedance_of_free_space() -> Quantity {
    Quantity::new(376.730313461, &si::OHM)
}

pub fn gravitational_constant() -> Quantity {
    Quantity::new(
        6.67408e-11,
        &(si::METER * si::METER * si::METER / (si::KILOGRAM * si::SECOND * si::SECOND)),
    )
}

pub fn planck_constant() -> Quantity {
    Quantity::new(6.626070040e-34, &(si::JOULE * si::SECOND))
}

pub fn planck_constant_reduced() -> Quantity {
    Quantity::new(1.054571800e-34, &(si::JOULE * si::SECOND))
}

pub fn speed_of_light_in_vacuum() -> Quantity {
    Quantity::new(299792458.0, &(si::METER / si::SECOND))
}

// Physico-chemical constants

pub fn avogadro_constant() -> Quantity {
    Quantity::from_si(6.022140857e23, si::MOLE.exponents().recip())
}

pub fn boltzmann_constant() -> Quantity {
    Quantity::new(1.38064852e-23, &(si::JOULE / si::KELVIN))
}

pub fn gas_constant() -> Quantity {
    Quantity::new(8.3144598, &(si::JOULE / (si::MOLE * si::KELVIN)))
}

// Planck units, https://en.wikipedia.org/wiki/Planck_units#Derived_units

pub fn planck_length() -> Quantity {
    Quantity::new(1.616229e-35, &si::METER)
}

pub fn planck_mass() -> Quantity {
    Quantity::new(2.176470e-8, &si::KILOGRAM)
}

pub fn planck_time() -> Quantity {
    Quantity::new(5.39116e-44, &si::SECOND)
}

pub fn planck_charge() -> Quantity {
    Quantity::new(1.875545956e-18, &si::COULOMB)
}

pub fn planck_temperature() -> Quantity {
    Quantity::new(1.416808e32, &si::KELVIN)
}

pub fn planck_force() -> Quantity {
    Quantity::new(1.21027e44, &si::NEWTON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn speed_of_light_converts_to_km_per_s() {
        let c = speed_of_light_in_vacuum();
        let km_per_s = si::KILOMETER / si::SECOND;
        assert_abs_diff_eq!(c.value_in(&km_per_s).unwrap(), 299792.458, epsilon = 1e-6);
    }

    #[test]
    fn gas_constant_is_boltzmann_times_avogadro() {
        let r = boltzmann_constant() * avogadro_constant();
        assert_eq!(r.exponents(), gas_constant().exponents());
        let rel = (r.si_value() - gas_constant().si_value()).abs() / gas_constant().si_value();
        assert!(rel < 1e-6, "relative error {rel}");
    }
}
