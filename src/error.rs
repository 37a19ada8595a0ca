//! Error types for field arithmetic, splitting and joining

use num_bigint::BigUint;
use thiserror::Error;

/// Broad classification of a [`ShareError`]
///
/// Range errors come from out-of-bounds inputs (secret, threshold, share count,
/// modulus). Domain errors come from inputs that are in range but have no
/// well-defined result (duplicate share coordinates, non-invertible values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Range,
    Domain,
}

/// Errors returned by the secret sharing core
///
/// Supplying fewer shares than the original threshold is deliberately absent:
/// `join` has no knowledge of the threshold, so such input yields some field
/// element that is not the secret rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("secret must be smaller than the field modulus")]
    SecretTooLarge,

    #[error("threshold must be at least 1")]
    ZeroThreshold,

    #[error("share count must be at least 1")]
    ZeroShareCount,

    #[error("threshold {threshold} cannot exceed share count {share_count}")]
    ThresholdExceedsShareCount { threshold: u32, share_count: u32 },

    #[error("share count {0} must be smaller than the field modulus")]
    ShareCountExceedsModulus(u32),

    #[error("field modulus must be at least 2")]
    ModulusTooSmall,

    #[error("2^{0} - 1 is not a known Mersenne prime")]
    UnknownMersenneExponent(u32),

    #[error("polynomial must have at least one coefficient")]
    EmptyPolynomial,

    #[error("coefficient {0} is not a field element")]
    CoefficientOutOfRange(usize),

    #[error("no shares provided")]
    NoShares,

    #[error("share x-coordinate must be nonzero modulo the field")]
    ZeroShareIndex,

    #[error("duplicate share x-coordinate {0}")]
    DuplicateShareIndex(BigUint),

    #[error("value is congruent to zero and has no modular inverse")]
    NoInverse,

    #[error("value is not coprime with the modulus (gcd {gcd})")]
    NotCoprime { gcd: BigUint },
}

impl ShareError {
    /// Returns whether this is a range or a domain failure
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SecretTooLarge
            | Self::ZeroThreshold
            | Self::ZeroShareCount
            | Self::ThresholdExceedsShareCount { .. }
            | Self::ShareCountExceedsModulus(_)
            | Self::ModulusTooSmall
            | Self::UnknownMersenneExponent(_)
            | Self::EmptyPolynomial
            | Self::CoefficientOutOfRange(_) => ErrorKind::Range,
            Self::NoShares
            | Self::ZeroShareIndex
            | Self::DuplicateShareIndex(_)
            | Self::NoInverse
            | Self::NotCoprime { .. } => ErrorKind::Domain,
        }
    }
}
