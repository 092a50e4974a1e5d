use core::num::NonZero;

// Narrow handles under test so the arena's capacity limit is reachable.
#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Names a node slot in the tree's [`Arena`](super::arena::Arena).
///
/// Slot `n` is stored as `n + 1`, which lets `Option<Handle>` (the tree root)
/// share the handle's size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// Largest slot a handle can name.
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    /// Returns the handle for `slot`, or `None` once slots outgrow the handle
    /// width.
    #[inline]
    pub(crate) fn new(slot: usize) -> Option<Self> {
        slot.checked_add(1)
            .and_then(|raw| RawHandle::try_from(raw).ok())
            .and_then(NonZero::new)
            .map(Self)
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0.get() as usize - 1
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, RawHandle);

    #[test]
    fn slots_past_max_have_no_handle() {
        assert!(Handle::new(Handle::MAX).is_some());
        assert_eq!(Handle::new(Handle::MAX + 1), None);
        assert_eq!(Handle::new(usize::MAX), None);
    }

    #[test]
    fn slot_zero_is_a_valid_handle() {
        assert_eq!(Handle::new(0).map(Handle::slot), Some(0));
    }

    proptest! {
        #[test]
        fn handle_names_its_slot(slot in 0..=Handle::MAX) {
            prop_assert_eq!(Handle::new(slot).map(Handle::slot), Some(slot));
        }
    }
}
