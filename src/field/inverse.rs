//! Modular inverse by the iterative extended Euclidean algorithm

use std::mem;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::ShareError;

/// Computes `b` such that `a * b mod modulus == 1`
///
/// `a` is reduced modulo `modulus` first, so any representative of the class
/// is accepted. The result is normalized into `[0, modulus)`.
///
/// # Errors
/// - [`ShareError::ModulusTooSmall`] if `modulus < 2`
/// - [`ShareError::NoInverse`] if `a` is congruent to zero
/// - [`ShareError::NotCoprime`] if `gcd(a, modulus) != 1`, which can only
///   happen for a composite modulus
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use primeshare::field::mod_inverse;
///
/// let inverse = mod_inverse(&BigUint::from(3u32), &BigUint::from(7u32)).unwrap();
/// assert_eq!(inverse, BigUint::from(5u32));
/// ```
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint, ShareError> {
    if modulus < &BigUint::from(2u32) {
        return Err(ShareError::ModulusTooSmall);
    }

    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let a = BigInt::from_biguint(Sign::Plus, a % modulus);
    if a.is_zero() {
        return Err(ShareError::NoInverse);
    }

    // Invariant: remainder == coefficient * a (mod m), likewise for the previous pair
    let (mut previous_remainder, mut remainder) = (m.clone(), a);
    let (mut previous_coefficient, mut coefficient) = (BigInt::zero(), BigInt::one());

    while !remainder.is_zero() {
        let (quotient, next_remainder) = previous_remainder.div_mod_floor(&remainder);
        previous_remainder = mem::replace(&mut remainder, next_remainder);

        let next_coefficient = &previous_coefficient - &quotient * &coefficient;
        previous_coefficient = mem::replace(&mut coefficient, next_coefficient);
    }

    if !previous_remainder.is_one() {
        let (_, gcd) = previous_remainder.into_parts();
        return Err(ShareError::NotCoprime { gcd });
    }

    let (_, inverse) = previous_coefficient.mod_floor(&m).into_parts();
    Ok(inverse)
}
