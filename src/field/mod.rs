//! Prime field arithmetic over arbitrary-precision integers
//!
//! All share coordinates, polynomial coefficients and secrets are elements of
//! the integers modulo a fixed prime `p`. Elements are held as [`BigUint`] in
//! the range `[0, p)`; signed intermediates (differences, Bezout coefficients)
//! use [`BigInt`] and are brought back with [`PrimeField::reduce`], which uses
//! Euclidean (floor) modulo and never returns a negative representative.
//!
//! There is no rounding mode or precision setting anywhere: every operation is
//! exact integer arithmetic.

mod inverse;

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::One;

use crate::error::ShareError;

pub use inverse::mod_inverse;

/// Exponents `e` for which `2^e - 1` is a known Mersenne prime
pub const MERSENNE_EXPONENTS: &[u32] = &[
    2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127, 521, 607, 1279, 2203, 2281, 3217, 4253, 4423,
    9689, 9941, 11213, 19937, 21701, 23209,
];

/// Exponent of the default field prime `2^3217 - 1`
pub const DEFAULT_MERSENNE_EXPONENT: u32 = 3217;

/// A prime field `Z/pZ`
///
/// The modulus is fixed at construction and never mutated. Primality of a
/// modulus passed to [`PrimeField::new`] is not verified; a composite modulus
/// shows up later as [`ShareError::NotCoprime`] when an inverse is requested.
#[derive(Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    signed_modulus: BigInt,
}

impl PrimeField {
    /// Creates a field with the given modulus
    ///
    /// # Errors
    /// Returns [`ShareError::ModulusTooSmall`] if the modulus is 0 or 1
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigUint;
    /// use primeshare::field::PrimeField;
    ///
    /// let field = PrimeField::new(BigUint::from(1613u32)).unwrap();
    /// assert_eq!(field.modulus(), &BigUint::from(1613u32));
    ///
    /// assert!(PrimeField::new(BigUint::from(1u32)).is_err());
    /// ```
    pub fn new(modulus: BigUint) -> Result<Self, ShareError> {
        if modulus < BigUint::from(2u32) {
            return Err(ShareError::ModulusTooSmall);
        }
        let signed_modulus = BigInt::from_biguint(Sign::Plus, modulus.clone());
        Ok(Self {
            modulus,
            signed_modulus,
        })
    }

    /// Creates the field over the Mersenne prime `2^exponent - 1`
    ///
    /// # Errors
    /// Returns [`ShareError::UnknownMersenneExponent`] if `2^exponent - 1` is
    /// not listed in [`MERSENNE_EXPONENTS`]
    pub fn mersenne(exponent: u32) -> Result<Self, ShareError> {
        if !MERSENNE_EXPONENTS.contains(&exponent) {
            return Err(ShareError::UnknownMersenneExponent(exponent));
        }
        let modulus = (BigUint::one() << exponent as usize) - 1u32;
        Self::new(modulus)
    }

    /// The field over `2^3217 - 1`
    #[must_use]
    pub fn m3217() -> Self {
        let modulus = (BigUint::one() << DEFAULT_MERSENNE_EXPONENT as usize) - 1u32;
        let signed_modulus = BigInt::from_biguint(Sign::Plus, modulus.clone());
        Self {
            modulus,
            signed_modulus,
        }
    }

    /// Gets the modulus `p`
    #[must_use]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Number of bits in the modulus
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Whether `value` is already a canonical element, i.e. `value < p`
    #[must_use]
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// Reduces a signed integer into `[0, p)`
    #[must_use]
    pub fn reduce(&self, value: &BigInt) -> BigUint {
        // mod_floor with a positive modulus always lands in [0, p)
        let (_, magnitude) = value.mod_floor(&self.signed_modulus).into_parts();
        magnitude
    }

    /// Reduces an unsigned integer into `[0, p)`
    #[must_use]
    pub fn reduce_unsigned(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    #[must_use]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// Computes `a - b mod p`
    #[must_use]
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let difference = BigInt::from_biguint(Sign::Plus, a.clone())
            - BigInt::from_biguint(Sign::Plus, b.clone());
        self.reduce(&difference)
    }

    #[must_use]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// Computes the multiplicative inverse of `a`
    ///
    /// # Errors
    /// Returns [`ShareError::NoInverse`] if `a` is congruent to zero, or
    /// [`ShareError::NotCoprime`] if the modulus turns out not to be prime
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint, ShareError> {
        mod_inverse(a, &self.modulus)
    }
}

impl Default for PrimeField {
    fn default() -> Self {
        Self::m3217()
    }
}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimeField")
            .field("bits", &self.bits())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field() -> PrimeField {
        PrimeField::new(BigUint::from(1613u32)).unwrap()
    }

    #[test]
    fn test_modulus_too_small() {
        assert_eq!(
            PrimeField::new(BigUint::from(0u32)),
            Err(ShareError::ModulusTooSmall)
        );
        assert_eq!(
            PrimeField::new(BigUint::from(1u32)),
            Err(ShareError::ModulusTooSmall)
        );
        assert!(PrimeField::new(BigUint::from(2u32)).is_ok());
    }

    #[test]
    fn test_mersenne_fields() {
        let field = PrimeField::mersenne(127).unwrap();
        assert_eq!(field.modulus(), &BigUint::from(u128::MAX >> 1));
        assert_eq!(field.bits(), 127);

        assert_eq!(PrimeField::mersenne(3217).unwrap(), PrimeField::m3217());
        assert_eq!(PrimeField::default().bits(), 3217);
    }

    #[test]
    fn test_unknown_mersenne_exponent() {
        assert_eq!(
            PrimeField::mersenne(11),
            Err(ShareError::UnknownMersenneExponent(11))
        );
    }

    #[test]
    fn test_reduce_negative_is_non_negative() {
        let field = small_field();
        assert_eq!(field.reduce(&BigInt::from(-1)), BigUint::from(1612u32));
        assert_eq!(field.reduce(&BigInt::from(-1613)), BigUint::from(0u32));
        assert_eq!(field.reduce(&BigInt::from(-1614)), BigUint::from(1612u32));
        assert_eq!(field.reduce(&BigInt::from(3226)), BigUint::from(0u32));
    }

    #[test]
    fn test_sub_wraps() {
        let field = small_field();
        let a = BigUint::from(3u32);
        let b = BigUint::from(10u32);
        assert_eq!(field.sub(&a, &b), BigUint::from(1606u32));
        assert_eq!(field.sub(&b, &a), BigUint::from(7u32));
    }

    #[test]
    fn test_add_and_mul_reduce() {
        let field = small_field();
        let a = BigUint::from(1600u32);
        let b = BigUint::from(20u32);
        assert_eq!(field.add(&a, &b), BigUint::from(7u32));
        assert_eq!(field.mul(&a, &b), BigUint::from(32000u32 % 1613));
    }

    #[test]
    fn test_large_products_are_exact() {
        let field = PrimeField::m3217();
        let p_minus_one = field.modulus() - 1u32;
        // (p - 1)^2 = p^2 - 2p + 1 which is 1 mod p
        assert_eq!(field.mul(&p_minus_one, &p_minus_one), BigUint::one());
        assert_eq!(field.add(&p_minus_one, &BigUint::one()), BigUint::from(0u32));
    }

    #[test]
    fn test_contains() {
        let field = small_field();
        assert!(field.contains(&BigUint::from(1612u32)));
        assert!(!field.contains(&BigUint::from(1613u32)));
    }

    #[test]
    fn test_debug_hides_modulus_digits() {
        assert_eq!(
            format!("{:?}", PrimeField::m3217()),
            "PrimeField { bits: 3217 }"
        );
    }
}
