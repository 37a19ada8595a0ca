//! Splitting a secret into shares and joining shares back into the secret
//!
//! # Overview
//!
//! [`split`] samples one random polynomial of degree `k - 1` whose constant
//! term is the secret and evaluates it at `x = 1..=n`. [`join`] recovers the
//! constant term by Lagrange interpolation at `x = 0`.
//!
//! # Insufficient shares
//!
//! `join` does not know the threshold the shares were created with. Given
//! fewer than `k` shares it still interpolates the unique lower-degree
//! polynomial through those points and returns its value at zero. That value
//! is an arbitrary field element, not the secret, and no error is raised.
//! This is what keeps fewer than `k` shares from revealing anything; callers
//! that need to detect short input must record `k` alongside the shares (see
//! [`crate::codec`]).
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigUint;
//! use primeshare::domain::SplitConfig;
//! use primeshare::field::PrimeField;
//! use primeshare::sharing::{join, split};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let field = PrimeField::m3217();
//! let secret = BigUint::from(0xabc_u32);
//! let config = SplitConfig::from_counts(10, 3)?;
//!
//! let shares = split(&secret, config, &field, &mut rand::rngs::OsRng)?;
//! assert_eq!(shares.len(), 10);
//!
//! assert_eq!(join(&shares[..3], &field)?, secret);
//! assert_eq!(join(&shares[4..9], &field)?, secret);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::SplitConfig;
use crate::error::ShareError;
use crate::field::PrimeField;
use crate::polynomial::Polynomial;

/// A single share `(x, f(x))`
///
/// Serializes as `{"x": "<decimal>", "y": "0x<hex>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    #[serde(with = "crate::codec::decimal")]
    x: BigUint,
    #[serde(with = "crate::codec::hex")]
    y: BigUint,
}

impl Share {
    #[must_use]
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// The x-coordinate identifying this share
    #[must_use]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// The polynomial value at [`Share::x`]
    #[must_use]
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

/// Splits `secret` into `n` shares, any `k` of which recover it
///
/// Shares get x-coordinates `1..=n` in order. Every call samples a fresh
/// polynomial from `rng`, so two splits of the same secret produce unrelated
/// shares.
///
/// # Errors
/// - [`ShareError::SecretTooLarge`] if `secret >= p`
/// - [`ShareError::ShareCountExceedsModulus`] if `n >= p`
pub fn split<R>(
    secret: &BigUint,
    config: SplitConfig,
    field: &PrimeField,
    rng: &mut R,
) -> Result<Vec<Share>, ShareError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if !field.contains(secret) {
        return Err(ShareError::SecretTooLarge);
    }

    let share_count = *config.share_count();
    if !field.contains(&BigUint::from(share_count)) {
        return Err(ShareError::ShareCountExceedsModulus(share_count));
    }

    let threshold = config.threshold();
    let polynomial = Polynomial::random(secret, threshold.degree(), field, rng)?;

    let shares = (1..=share_count)
        .map(|x| {
            let x = BigUint::from(x);
            let y = polynomial.evaluate(&x, field);
            Share::new(x, y)
        })
        .collect();

    debug!(
        threshold = *threshold,
        share_count,
        field_bits = field.bits(),
        "split secret"
    );

    Ok(shares)
}

/// Recovers the constant term of the polynomial through `shares`
///
/// The result is invariant under reordering of `shares`. See the module
/// documentation for what happens with fewer shares than the threshold.
///
/// # Errors
/// - [`ShareError::NoShares`] if `shares` is empty
/// - [`ShareError::ZeroShareIndex`] if an x-coordinate is `0 mod p`
/// - [`ShareError::DuplicateShareIndex`] if two x-coordinates agree mod `p`
/// - [`ShareError::NotCoprime`] if the modulus is not prime
pub fn join(shares: &[Share], field: &PrimeField) -> Result<BigUint, ShareError> {
    if shares.is_empty() {
        return Err(ShareError::NoShares);
    }

    let xs: Vec<BigUint> = shares
        .iter()
        .map(|share| field.reduce_unsigned(&share.x))
        .collect();

    let mut seen = HashSet::with_capacity(xs.len());
    for x in &xs {
        if x.is_zero() {
            return Err(ShareError::ZeroShareIndex);
        }
        if !seen.insert(x) {
            return Err(ShareError::DuplicateShareIndex(x.clone()));
        }
    }

    debug!(
        share_count = shares.len(),
        field_bits = field.bits(),
        "joining shares"
    );

    shares
        .iter()
        .enumerate()
        .try_fold(BigUint::zero(), |secret, (j, share)| {
            let basis = lagrange_basis_at_zero(&xs, j, field)?;
            Ok(field.add(&secret, &field.mul(&share.y, &basis)))
        })
}

/// Lagrange basis polynomial `l_j` evaluated at zero
///
/// `l_j(0) = prod(x_i) / prod(x_i - x_j)` over all `i != j`. The differences
/// are reduced into `[0, p)` before the denominator is inverted.
fn lagrange_basis_at_zero(
    xs: &[BigUint],
    j: usize,
    field: &PrimeField,
) -> Result<BigUint, ShareError> {
    let x_j = &xs[j];

    let (numerator, denominator) = xs
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != j)
        .fold(
            (BigUint::one(), BigUint::one()),
            |(numerator, denominator), (_, x_i)| {
                (
                    field.mul(&numerator, x_i),
                    field.mul(&denominator, &field.sub(x_i, x_j)),
                )
            },
        );

    Ok(field.mul(&numerator, &field.inverse(&denominator)?))
}
