use anyhow::{Context, Result, anyhow, bail};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::codec;
use crate::domain::SplitConfig;
use crate::field::PrimeField;
use crate::sharing::{self, Share};

/// Parses a secret given as `0x`-prefixed hex or decimal and checks it fits the field
///
/// # Errors
/// Returns an error if the text is not an integer or the value is not smaller than the modulus
pub fn parse_secret(secret_str: &str, field: &PrimeField) -> Result<BigUint> {
    let secret = codec::parse_integer(secret_str).context("Failed to parse secret")?;
    if !field.contains(&secret) {
        bail!(
            "Secret is too large: it must be smaller than the {}-bit field modulus",
            field.bits()
        );
    }
    Ok(secret)
}

/// Split a secret into shares and return them in the `primeshare:` text format
///
/// # Errors
/// Returns an error if the secret cannot be parsed or the split fails
pub fn split_secret<R>(
    secret_str: &str,
    config: SplitConfig,
    field: &PrimeField,
    rng: &mut R,
) -> Result<Vec<String>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let shares = split_to_shares(secret_str, config, field, rng)?;

    Ok(shares
        .iter()
        .map(|share| codec::encode_share(share, config.threshold()).to_string())
        .collect())
}

/// Split a secret and return the raw shares
///
/// # Errors
/// Returns an error if the secret cannot be parsed or the split fails
pub fn split_to_shares<R>(
    secret_str: &str,
    config: SplitConfig,
    field: &PrimeField,
    rng: &mut R,
) -> Result<Vec<Share>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let secret = parse_secret(secret_str, field)?;

    if *config.threshold() == 1 {
        warn!("threshold is 1: every share reveals the secret on its own");
    }

    sharing::split(&secret, config, field, rng).context("Failed to split secret")
}

/// Combine encoded shares to reconstruct the secret
///
/// Returns the secret as `0x`-prefixed lowercase hex.
///
/// # Errors
/// Returns an error if a share fails to parse, the shares disagree on the
/// threshold, fewer shares than the threshold are provided, or joining fails
pub fn combine_shares(share_strings: &[String], field: &PrimeField) -> Result<Zeroizing<String>> {
    if share_strings.is_empty() {
        bail!("No shares provided");
    }

    let mut parsed_shares = Vec::with_capacity(share_strings.len());
    let mut threshold_from_shares = None;

    for (idx, share_str) in share_strings.iter().enumerate() {
        let (threshold, share) = codec::parse_share(share_str)
            .with_context(|| format!("Failed to parse share #{}", idx + 1))?;

        // Validate threshold consistency
        match threshold_from_shares {
            None => {
                threshold_from_shares = Some(threshold);
            }
            Some(t) if t != threshold => {
                bail!(
                    "Share #{} has inconsistent threshold: expected {}, got {}",
                    idx + 1,
                    *t,
                    *threshold
                );
            }
            _ => {}
        }

        parsed_shares.push(share);
    }

    let threshold = threshold_from_shares.ok_or_else(|| anyhow!("No valid shares found"))?;

    // The encoded threshold is the only way to tell a short share set from a complete one
    if parsed_shares.len() < *threshold as usize {
        bail!(
            "Insufficient shares: need at least {}, but only {} provided",
            *threshold,
            parsed_shares.len()
        );
    }

    debug!(threshold = *threshold, "combining encoded shares");

    let secret = sharing::join(&parsed_shares, field).context("Failed to recover secret")?;

    Ok(Zeroizing::new(codec::format_hex(&secret)))
}
