//! Text encoding for shares and secrets
//!
//! # Share format
//!
//! A share is written as a single line of five `:`-separated fields:
//!
//! ```text
//! primeshare:<threshold>:<x decimal>:<y hex>:<crc32 hex>
//! ```
//!
//! - The version tag (`"primeshare"`) identifies the format
//! - The threshold `k` the share was created with, so that a combiner can
//!   report short input instead of silently producing a wrong value
//! - The x-coordinate in decimal and the y-coordinate in lowercase hex
//! - A CRC-32 over the canonical `<threshold>:<x>:<y>` text, catching
//!   transcription errors
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigUint;
//! use primeshare::codec::{encode_share, parse_share};
//! use primeshare::domain::Threshold;
//! use primeshare::sharing::Share;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = Share::new(BigUint::from(2u32), BigUint::from(0xdeadbeef_u32));
//! let threshold = Threshold::new(3)?;
//!
//! let encoded = encode_share(&share, threshold);
//! assert!(encoded.as_str().starts_with("primeshare:3:2:deadbeef:"));
//!
//! let (parsed_threshold, parsed_share) = parse_share(encoded.as_str())?;
//! assert_eq!(parsed_threshold, threshold);
//! assert_eq!(parsed_share, share);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, anyhow, bail};
use crc::{CRC_32_ISO_HDLC, Crc};
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::domain::Threshold;
use crate::sharing::Share;

/// CRC32 algorithm for share integrity checking
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Version tag that identifies the share format
pub const VERSION_TAG: &str = "primeshare";

const FIELD_SEPARATOR: char = ':';

/// An encoded share line
///
/// Wraps the text in `Zeroizing` to ensure secure memory cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedShare(Zeroizing<String>);

impl EncodedShare {
    /// Gets the encoded share as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EncodedShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

/// Canonical text covered by the checksum
fn checksum_payload(threshold: Threshold, share: &Share) -> Zeroizing<String> {
    Zeroizing::new(format!(
        "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
        *threshold,
        share.x().to_str_radix(10),
        share.y().to_str_radix(16)
    ))
}

/// Encodes a share together with the threshold it was created with
#[must_use]
pub fn encode_share(share: &Share, threshold: Threshold) -> EncodedShare {
    let payload = checksum_payload(threshold, share);
    let checksum = CRC32.checksum(payload.as_bytes());
    EncodedShare(Zeroizing::new(format!(
        "{VERSION_TAG}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{checksum:08x}",
        payload.as_str()
    )))
}

/// Parses an encoded share line into its threshold and share
///
/// Surrounding whitespace is ignored and hex digits may be in either case.
///
/// # Errors
/// Returns an error if the line does not have five fields, the version tag is
/// wrong, a number fails to parse, or checksum verification fails
pub fn parse_share(text: &str) -> Result<(Threshold, Share)> {
    let fields: Vec<&str> = text.trim().split(FIELD_SEPARATOR).collect();

    let [tag, threshold, x, y, checksum] = fields.as_slice() else {
        bail!(
            "Invalid share format: expected 5 '{FIELD_SEPARATOR}'-separated fields, got {}",
            fields.len()
        );
    };

    if *tag != VERSION_TAG {
        bail!("Invalid version tag: expected '{VERSION_TAG}', got '{tag}'");
    }

    let threshold: u32 = threshold
        .parse()
        .with_context(|| format!("Invalid threshold field '{threshold}'"))?;
    let threshold = Threshold::new(threshold)?;

    let x = parse_radix(x, 10).context("Invalid x-coordinate field")?;
    let y = parse_radix(y, 16).context("Invalid y-coordinate field")?;
    let share = Share::new(x, y);

    let actual_checksum = u32::from_str_radix(checksum, 16)
        .with_context(|| format!("Invalid checksum field '{checksum}'"))?;
    let expected_checksum = CRC32.checksum(checksum_payload(threshold, &share).as_bytes());

    if expected_checksum != actual_checksum {
        bail!(
            "Checksum verification failed: expected 0x{expected_checksum:08x}, got 0x{actual_checksum:08x}"
        );
    }

    Ok((threshold, share))
}

/// Parses an integer written as `0x`-prefixed hex or plain decimal
///
/// # Errors
/// Returns an error if the text is empty or contains invalid digits
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use primeshare::codec::parse_integer;
///
/// assert_eq!(parse_integer("0xabc").unwrap(), BigUint::from(0xabc_u32));
/// assert_eq!(parse_integer("2748").unwrap(), BigUint::from(2748u32));
/// assert!(parse_integer("0xzz").is_err());
/// ```
pub fn parse_integer(text: &str) -> Result<BigUint> {
    let text = text.trim();
    match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => parse_radix(hex, 16),
        None => parse_radix(text, 10),
    }
}

/// Formats an integer as `0x`-prefixed lowercase hex
#[must_use]
pub fn format_hex(value: &BigUint) -> String {
    format!("0x{}", value.to_str_radix(16))
}

fn parse_radix(digits: &str, radix: u32) -> Result<BigUint> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        bail!("'{digits}' is not a valid base-{radix} integer");
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| anyhow!("'{digits}' is not a valid base-{radix} integer"))
}

/// Serde adapter writing a [`BigUint`] as a decimal string
pub(crate) mod decimal {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_radix(&text, 10).map_err(D::Error::custom)
    }
}

/// Serde adapter writing a [`BigUint`] as a `0x`-prefixed hex string
pub(crate) mod hex {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hex(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        let digits = text
            .strip_prefix("0x")
            .ok_or_else(|| D::Error::custom(format!("expected 0x-prefixed hex, got '{text}'")))?;
        super::parse_radix(digits, 16).map_err(D::Error::custom)
    }
}
