use core::num::NonZero;

// Narrow the index under test so arena exhaustion is reachable by proptests.
#[cfg(test)]
type RawIndex = u16;
#[cfg(not(test))]
type RawIndex = u32;

/// A stable index into an [`Arena`](super::arena::Arena).
///
/// Stored shifted by one so that `Option<Handle>` has the same size as
/// `Handle` itself; node links are all `Option<Handle>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawIndex>);

impl Handle {
    pub(crate) const MAX: usize = (RawIndex::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        // SAFETY: `index + 1` cannot be zero and cannot overflow.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawIndex).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
