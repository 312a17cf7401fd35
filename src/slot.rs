//! Slot index with a reserved sentinel.
//!
//! Links in the list and free-list threads in storage are [`Slot`] values.
//! A reserved sentinel (`Slot::NONE`) stands in for "no slot", so a link
//! costs four bytes instead of an `Option`'s eight.

/// Index of a node slot in storage.
///
/// # Example
///
/// ```
/// use seqlist::Slot;
///
/// let slot = Slot::from_usize(5);
/// assert!(slot.is_some());
/// assert!(Slot::NONE.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(u32);

impl Slot {
    /// Sentinel value representing "no slot" / null.
    pub const NONE: Self = Slot(u32::MAX);

    /// Creates a slot from a `usize` index.
    ///
    /// Used by storage backends when assigning sequential indices. The
    /// sentinel index (`u32::MAX`) must never be handed out.
    #[inline]
    pub fn from_usize(val: usize) -> Self {
        debug_assert!(val < u32::MAX as usize);
        Slot(val as u32)
    }

    /// Returns the slot as a `usize`, for indexing into storage.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel() {
        assert!(Slot::NONE.is_none());
        assert!(!Slot::NONE.is_some());
        assert!(Slot::from_usize(0).is_some());
    }

    #[test]
    fn from_usize_roundtrip() {
        for i in [0usize, 1, 100, 1000, u16::MAX as usize] {
            assert_eq!(Slot::from_usize(i).as_usize(), i);
        }
    }
}
