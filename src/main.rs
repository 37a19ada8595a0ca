use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::OsRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use primeshare::cli::{Cli, Commands};
use primeshare::commands::{combine_shares, split_secret, split_to_shares};
use primeshare::domain::{ShareCount, SplitConfig};
use primeshare::field::PrimeField;

/// Read the secret securely from stdin (hidden input when TTY available)
fn read_secret() -> Result<String> {
    // Try to use TTY for secure input
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret (0x-prefixed hex or decimal):");
        rpassword::read_password().context("Failed to read secret from stdin")
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut secret = String::new();
        handle
            .read_line(&mut secret)
            .context("Failed to read secret from stdin")?;
        Ok(secret.trim().to_string())
    }
}

/// Read shares securely from stdin (hidden input when TTY available)
/// User should input shares one per line, followed by an empty line to finish
fn read_shares() -> Result<Vec<String>> {
    let mut shares = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shares (one per line, empty line to finish):");

        loop {
            let share = rpassword::read_password().context("Failed to read share from stdin")?;

            if share.trim().is_empty() {
                break;
            }

            shares.push(share.trim().to_string());
        }
    } else {
        let stdin = io::stdin();
        let handle = stdin.lock();

        for line in handle.lines() {
            let line = line.context("Failed to read line from stdin")?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                break;
            }

            shares.push(trimmed.to_string());
        }
    }

    if shares.is_empty() {
        anyhow::bail!("No shares provided");
    }

    Ok(shares)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let field = PrimeField::mersenne(cli.exponent)
        .with_context(|| format!("Unsupported field exponent {}", cli.exponent))?;
    info!(exponent = cli.exponent, "using field 2^e - 1");

    match cli.command {
        Commands::Split {
            shares,
            threshold,
            json,
        } => {
            let secret = Zeroizing::new(read_secret()?);

            let share_count = ShareCount::new(shares)?;
            let config = SplitConfig::new(threshold, share_count)?;

            if json {
                let shares = split_to_shares(&secret, config, &field, &mut OsRng)?;
                let output =
                    serde_json::to_string_pretty(&shares).context("Failed to serialize shares")?;
                println!("{output}");
            } else {
                for share in split_secret(&secret, config, &field, &mut OsRng)? {
                    println!("{share}");
                }
            }
        }
        Commands::Combine => {
            let shares = read_shares()?;
            let secret = combine_shares(&shares, &field)?;
            println!("{}", secret.as_str());
        }
    }

    Ok(())
}
