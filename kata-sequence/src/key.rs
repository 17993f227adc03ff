//! Link keys for the node arena.
//!
//! A [`Key`] addresses a node slot in the sequence's slab. The reserved
//! [`Key::NONE`] value stands in for a null forward link, so a node carries a
//! plain integer rather than an `Option`.

/// Integer type usable as a node link.
///
/// `NONE` is the largest value of the type and is never handed out as a
/// slot address. A sequence keyed by `K` can therefore hold at most
/// `K::NONE.as_usize()` nodes.
///
/// # Example
///
/// ```
/// use kata_sequence::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(7), key);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel for "no next node".
    const NONE: Self;

    /// Converts a slab slot into a key.
    fn from_usize(val: usize) -> Self;

    /// Returns the slab slot this key addresses.
    fn as_usize(self) -> usize;

    /// Returns `true` if this is the sentinel.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this addresses a node.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }
}

// u8 and u16 are not keys: `push` has no way to report a full arena.
macro_rules! impl_key {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as $ty
                }

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_key!(u32, u64, usize);
