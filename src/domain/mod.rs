//! Validated split parameters
//!
//! - [`Threshold`] - Minimum shares required for reconstruction (k >= 1)
//! - [`ShareCount`] - Total number of shares to create (n >= 1)
//! - [`SplitConfig`] - Validated threshold and share count pair (k <= n)

mod config;
mod share_count;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use threshold::Threshold;
