use clap::{Parser, Subcommand};

use crate::domain::Threshold;
use crate::field::DEFAULT_MERSENNE_EXPONENT;

/// Validates that threshold is at least 1
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "primeshare")]
#[command(about = "Split a secret into threshold shares over a large Mersenne prime field")]
pub struct Cli {
    /// Field prime is 2^EXPONENT - 1 (must be a known Mersenne prime exponent)
    #[arg(
        short,
        long,
        global = true,
        env = "PRIMESHARE_EXPONENT",
        default_value_t = DEFAULT_MERSENNE_EXPONENT
    )]
    pub exponent: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret (0x-prefixed hex or decimal) into shares
    Split {
        /// Number of shares to create
        #[arg(short = 'n', long)]
        shares: u32,

        /// Threshold: minimum number of shares needed to reconstruct
        #[arg(short = 'k', long, value_parser = validate_threshold)]
        threshold: Threshold,

        /// Print shares as JSON objects instead of encoded lines
        #[arg(long)]
        json: bool,
    },
    /// Combine shares to reconstruct the original secret
    Combine,
}
