//! WASM bindings for primeshare
//!
//! This module provides JavaScript-friendly bindings for the core split/combine functionality.
//! Shares always use the default `2^3217 - 1` field.

use anyhow::{Context, Result};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::codec;
use crate::commands;
use crate::domain::SplitConfig;
use crate::field::PrimeField;

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of a split operation (for JSON serialization)
#[derive(Serialize, Deserialize)]
pub struct SplitResult {
    /// The generated shares in `primeshare:` text format
    pub shares: Vec<String>,
    /// Number of shares generated
    pub share_count: u32,
    /// Threshold required to reconstruct
    pub threshold: u32,
}

/// Metadata extracted from an encoded share
#[derive(Serialize, Deserialize)]
pub struct ShareMetadata {
    pub threshold: u32,
    pub x: String,
}

fn split_json(secret: &str, shares: u32, threshold: u32) -> Result<String> {
    let config = SplitConfig::from_counts(shares, threshold).context("Invalid configuration")?;

    // On wasm32, OsRng draws from crypto.getRandomValues() through getrandom's "js" feature
    let share_strings =
        commands::split_secret(secret, config, &PrimeField::m3217(), &mut OsRng)
            .context("Split failed")?;

    let result = SplitResult {
        shares: share_strings,
        share_count: shares,
        threshold,
    };

    serde_json::to_string(&result).context("Serialization failed")
}

fn combine(shares: &[String]) -> Result<String> {
    let secret = commands::combine_shares(shares, &PrimeField::m3217()).context("Combine failed")?;
    Ok(secret.as_str().to_string())
}

fn share_metadata_json(share: &str) -> Result<String> {
    let (threshold, share) = codec::parse_share(share).context("Parse failed")?;

    let metadata = ShareMetadata {
        threshold: *threshold,
        x: share.x().to_str_radix(10),
    };

    serde_json::to_string(&metadata).context("Serialization failed")
}

fn to_js_error(error: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{error:#}"))
}

/// Split a secret into threshold shares
///
/// # Arguments
/// * `secret` - The secret as `0x`-prefixed hex or decimal
/// * `shares` - Total number of shares to create
/// * `threshold` - Minimum number of shares needed to reconstruct (1..=shares)
///
/// # Returns
/// JSON string containing the shares and metadata, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = wasm_split("0xabc", 10, 3);
/// const data = JSON.parse(result);
/// console.log(`Created ${data.share_count} shares with threshold ${data.threshold}`);
/// ```
#[wasm_bindgen]
pub fn wasm_split(secret: &str, shares: u32, threshold: u32) -> Result<String, JsValue> {
    split_json(secret, shares, threshold).map_err(to_js_error)
}

/// Combine shares to reconstruct the secret, returned as `0x`-prefixed hex
///
/// # Example (JavaScript)
/// ```javascript
/// const secret = wasm_combine(data.shares.slice(0, 3));
/// ```
#[wasm_bindgen]
pub fn wasm_combine(shares: Vec<String>) -> Result<String, JsValue> {
    combine(&shares).map_err(to_js_error)
}

/// Parse a share to extract its threshold and x-coordinate as JSON
#[wasm_bindgen]
pub fn wasm_parse_share(share: &str) -> Result<String, JsValue> {
    share_metadata_json(share).map_err(to_js_error)
}
