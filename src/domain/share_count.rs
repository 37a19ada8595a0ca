//! `ShareCount` newtype for threshold secret sharing

use crate::error::ShareError;

/// Number of shares to create (n >= 1)
///
/// Shares are assigned x-coordinates `1..=n`, so `split` additionally
/// requires `n` to be smaller than the field modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareCount(u32);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u32 = 1;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`ShareError::ZeroShareCount`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeshare::domain::ShareCount;
    ///
    /// let count = ShareCount::new(10).unwrap();
    /// assert_eq!(*count, 10);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, ShareError> {
        if value < Self::MIN {
            return Err(ShareError::ZeroShareCount);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
