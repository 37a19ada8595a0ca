//! Threshold secret sharing over large prime fields
//!
//! A secret below the field prime is split into `n` shares so that any `k` of
//! them reconstruct it exactly and fewer reveal nothing about it.
//!
//! - [`field`] - exact modular arithmetic and modular inverses
//! - [`polynomial`] - random polynomials with the secret as constant term
//! - [`sharing`] - `split` and `join`
//! - [`codec`] and [`commands`] - text encoding and the split/combine workflows

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod field;
pub mod polynomial;
pub mod sharing;
pub mod wasm;

pub use error::{ErrorKind, ShareError};
pub use field::PrimeField;
pub use sharing::{Share, join, split};
