//! Random polynomials over a prime field
//!
//! A split builds one polynomial `f(x) = a0 + a1*x + ... + a(k-1)*x^(k-1)`
//! with `a0` set to the secret and every other coefficient drawn uniformly
//! from `[0, p - 1]`. The polynomial lives only for the duration of the split.

use std::fmt;

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use crate::error::ShareError;
use crate::field::PrimeField;

/// Polynomial with coefficients in a prime field, lowest degree first
///
/// `Debug` only reports the degree; coefficients include the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Samples a polynomial of the given degree with `secret` as constant term
    ///
    /// Draws exactly `degree` coefficients from `rng`. The generator is supplied
    /// by the caller so that tests can use a seeded one and production code an
    /// OS-backed one.
    ///
    /// # Errors
    /// Returns [`ShareError::SecretTooLarge`] if `secret >= p`
    pub fn random<R>(
        secret: &BigUint,
        degree: usize,
        field: &PrimeField,
        rng: &mut R,
    ) -> Result<Self, ShareError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if !field.contains(secret) {
            return Err(ShareError::SecretTooLarge);
        }

        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(secret.clone());
        coefficients.extend((0..degree).map(|_| rng.gen_biguint_below(field.modulus())));

        Ok(Self { coefficients })
    }

    /// Builds a polynomial from explicit coefficients, lowest degree first
    ///
    /// # Errors
    /// Returns [`ShareError::EmptyPolynomial`] for an empty list, or
    /// [`ShareError::CoefficientOutOfRange`] for the first coefficient `>= p`
    pub fn from_coefficients(
        coefficients: Vec<BigUint>,
        field: &PrimeField,
    ) -> Result<Self, ShareError> {
        if coefficients.is_empty() {
            return Err(ShareError::EmptyPolynomial);
        }
        if let Some(index) = coefficients.iter().position(|c| !field.contains(c)) {
            return Err(ShareError::CoefficientOutOfRange(index));
        }
        Ok(Self { coefficients })
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates `f(x) mod p` using Horner's rule
    ///
    /// The accumulator is reduced after every step, so intermediates stay
    /// below `p^2`.
    #[must_use]
    pub fn evaluate(&self, x: &BigUint, field: &PrimeField) -> BigUint {
        let x = field.reduce_unsigned(x);
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, coefficient| {
                field.add(&field.mul(&acc, &x), coefficient)
            })
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}
