//! Threshold newtype for threshold secret sharing

use crate::error::ShareError;

/// Reconstruction threshold `k` (k >= 1)
///
/// The split polynomial has degree `k - 1`. A threshold of 1 is accepted:
/// every share then carries the secret on its own, which callers may want to
/// warn about but which is still a valid scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u32);

impl Threshold {
    /// Minimum valid threshold
    pub const MIN: u32 = 1;

    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns [`ShareError::ZeroThreshold`] if the value is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeshare::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    /// assert_eq!(threshold.degree(), 2);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, ShareError> {
        if value < Self::MIN {
            return Err(ShareError::ZeroThreshold);
        }
        Ok(Self(value))
    }

    /// Degree of the polynomial this threshold needs
    #[must_use]
    pub fn degree(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::ops::Deref for Threshold {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
