//! Hole mechanics shared by the sift passes.

use std::mem::ManuallyDrop;
use std::ptr;

/// A hole in a slice: an index whose element has been detached and is owed
/// back to the slice.
///
/// Creating a `Hole` reads the element at `pos` out of the slice; dropping
/// it writes that element into whatever position the hole occupies by then.
/// Relocating the hole costs a single value copy, which is what lets the
/// sift passes spend one copy per tree level instead of a full swap.
///
/// If a comparison panics mid-sift, the drop glue still refills the hole,
/// so the slice is left holding a permutation of its original elements.
/// Heap order is not guaranteed in that case.
pub(crate) struct Hole<'a, T> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Detaches the element at `pos`, leaving a hole there.
    ///
    /// # Safety
    ///
    /// `pos` must be within the slice.
    #[inline]
    pub(crate) unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        let elt = ptr::read(data.get_unchecked(pos));
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    /// Current position of the hole.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The detached element.
    #[inline]
    pub(crate) fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be within the slice and must not equal the hole position.
    #[inline]
    pub(crate) unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        self.data.get_unchecked(index)
    }

    /// Moves the hole to `index`: copies the element there into the current
    /// hole position and makes `index` the new hole.
    ///
    /// # Safety
    ///
    /// `index` must be within the slice and must not equal the hole position.
    #[inline]
    pub(crate) unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        let ptr = self.data.as_mut_ptr();
        ptr::copy_nonoverlapping(ptr.add(index), ptr.add(self.pos), 1);
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // Fill the hole again with the detached element
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}
