//! Slot storage for list nodes.
//!
//! A [`Slots`] implementation is the entire allocator contract the list
//! relies on: acquire a node-sized slot, fail if exhausted. Slots are
//! stable (valid until explicitly removed) and reused by later insertions,
//! so the list's links only ever reference occupied slots.
//!
//! [`FixedSlots`] is the default backend: capacity fixed at construction,
//! insertion fails with [`Full`] once exhausted. With the `slab` feature,
//! [`GrowableSlots`] adapts `slab::Slab` for lists without a fixed bound.

use crate::Slot;

/// Error returned when fixed-capacity storage is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "slot storage is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

/// Slot storage with stable indices.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable slots**: a slot remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be reused by future inserts
/// - The sentinel index ([`Slot::NONE`]) is never handed out
pub trait Slots<T> {
    /// Inserts a value, returning its stable slot.
    ///
    /// # Errors
    ///
    /// Returns `Full(value)` if no slot is available, handing the value
    /// back to the caller.
    fn try_insert(&mut self, value: T) -> Result<Slot, Full<T>>;

    /// Removes and returns the value at `slot`, if occupied.
    fn remove(&mut self, slot: Slot) -> Option<T>;

    /// Returns a reference to the value at `slot`, if occupied.
    fn get(&self, slot: Slot) -> Option<&T>;

    /// Returns a mutable reference to the value at `slot`, if occupied.
    fn get_mut(&mut self, slot: Slot) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is occupied.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// FixedSlots - bounded, entry array with LIFO free list
// =============================================================================

#[derive(Debug)]
enum Entry<T> {
    Occupied(T),
    Vacant { next_free: Slot },
}

/// Fixed-capacity slot storage.
///
/// Entries live in a single array, grown lazily up to the capacity given at
/// construction. Removed slots are threaded onto a LIFO free list and
/// reused before any fresh slot is taken.
///
/// # Example
///
/// ```
/// use seqlist::{FixedSlots, Slots};
///
/// let mut slots: FixedSlots<u64> = FixedSlots::with_capacity(16);
///
/// let slot = slots.try_insert(42).unwrap();
/// assert_eq!(slots.get(slot), Some(&42));
/// assert_eq!(slots.remove(slot), Some(42));
/// ```
#[derive(Debug)]
pub struct FixedSlots<T> {
    entries: Vec<Entry<T>>,
    free_head: Slot,
    len: usize,
    capacity: usize,
}

impl<T> FixedSlots<T> {
    /// Creates storage with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or does not fit the slot index range.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        assert!(
            capacity < Slot::NONE.as_usize(),
            "capacity exceeds the slot index range"
        );

        Self {
            entries: Vec::with_capacity(capacity),
            free_head: Slot::NONE,
            len: 0,
            capacity,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if all slots are occupied.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }
}

impl<T> Slots<T> for FixedSlots<T> {
    fn try_insert(&mut self, value: T) -> Result<Slot, Full<T>> {
        if self.free_head.is_some() {
            let slot = self.free_head;
            let entry = &mut self.entries[slot.as_usize()];
            let Entry::Vacant { next_free } = core::mem::replace(entry, Entry::Occupied(value))
            else {
                unreachable!("free list points at an occupied slot");
            };
            self.free_head = next_free;
            self.len += 1;
            return Ok(slot);
        }

        if self.entries.len() == self.capacity {
            return Err(Full(value));
        }

        let slot = Slot::from_usize(self.entries.len());
        self.entries.push(Entry::Occupied(value));
        self.len += 1;
        Ok(slot)
    }

    fn remove(&mut self, slot: Slot) -> Option<T> {
        let entry = self.entries.get_mut(slot.as_usize())?;
        match entry {
            Entry::Occupied(_) => {
                let next_free = self.free_head;
                let Entry::Occupied(value) =
                    core::mem::replace(entry, Entry::Vacant { next_free })
                else {
                    unreachable!();
                };
                self.free_head = slot;
                self.len -= 1;
                Some(value)
            }
            Entry::Vacant { .. } => None,
        }
    }

    #[inline]
    fn get(&self, slot: Slot) -> Option<&T> {
        match self.entries.get(slot.as_usize())? {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, slot: Slot) -> Option<&mut T> {
        match self.entries.get_mut(slot.as_usize())? {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// GrowableSlots - slab::Slab adapter
// =============================================================================

/// Growable slot storage backed by `slab::Slab`.
///
/// Insertion only fails if the slot index range itself is exhausted, so a
/// list over this backend effectively never reports [`Full`].
#[cfg(feature = "slab")]
#[derive(Debug, Default)]
pub struct GrowableSlots<T>(slab::Slab<T>);

#[cfg(feature = "slab")]
impl<T> GrowableSlots<T> {
    /// Creates empty storage.
    pub fn new() -> Self {
        Self(slab::Slab::new())
    }

    /// Creates empty storage with room for `capacity` slots before the
    /// first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(slab::Slab::with_capacity(capacity))
    }
}

#[cfg(feature = "slab")]
impl<T> Slots<T> for GrowableSlots<T> {
    fn try_insert(&mut self, value: T) -> Result<Slot, Full<T>> {
        let key = self.0.insert(value);
        if key >= Slot::NONE.as_usize() {
            // The sentinel index can never be handed out.
            return Err(Full(self.0.remove(key)));
        }
        Ok(Slot::from_usize(key))
    }

    #[inline]
    fn remove(&mut self, slot: Slot) -> Option<T> {
        self.0.try_remove(slot.as_usize())
    }

    #[inline]
    fn get(&self, slot: Slot) -> Option<&T> {
        self.0.get(slot.as_usize())
    }

    #[inline]
    fn get_mut(&mut self, slot: Slot) -> Option<&mut T> {
        self.0.get_mut(slot.as_usize())
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let slots: FixedSlots<u64> = FixedSlots::with_capacity(16);
        assert!(slots.is_empty());
        assert!(!slots.is_full());
        assert_eq!(slots.len(), 0);
        assert_eq!(slots.capacity(), 16);
    }

    #[test]
    fn insert_get_remove() {
        let mut slots: FixedSlots<u64> = FixedSlots::with_capacity(16);

        let slot = slots.try_insert(42).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots.get(slot), Some(&42));

        assert_eq!(slots.remove(slot), Some(42));
        assert_eq!(slots.get(slot), None);
        assert_eq!(slots.len(), 0);
    }

    #[test]
    fn get_mut() {
        let mut slots: FixedSlots<u64> = FixedSlots::with_capacity(16);

        let slot = slots.try_insert(10).unwrap();
        *slots.get_mut(slot).unwrap() = 20;

        assert_eq!(slots.get(slot), Some(&20));
    }

    #[test]
    fn fill_to_capacity() {
        let mut slots: FixedSlots<u64> = FixedSlots::with_capacity(4);

        let s0 = slots.try_insert(0).unwrap();
        let s1 = slots.try_insert(1).unwrap();
        let s2 = slots.try_insert(2).unwrap();
        let s3 = slots.try_insert(3).unwrap();

        assert!(slots.is_full());

        let err = slots.try_insert(4);
        assert!(err.is_err());
        assert_eq!(err.unwrap_err().into_inner(), 4);

        assert_eq!(slots.get(s0), Some(&0));
        assert_eq!(slots.get(s1), Some(&1));
        assert_eq!(slots.get(s2), Some(&2));
        assert_eq!(slots.get(s3), Some(&3));
    }

    #[test]
    fn slot_reuse_is_lifo() {
        let mut slots: FixedSlots<u64> = FixedSlots::with_capacity(4);

        let s0 = slots.try_insert(0).unwrap();
        let s1 = slots.try_insert(1).unwrap();

        slots.remove(s0);
        slots.remove(s1);

        // Most recently freed slot comes back first
        assert_eq!(slots.try_insert(2).unwrap(), s1);
        assert_eq!(slots.try_insert(3).unwrap(), s0);
    }

    #[test]
    fn double_remove_returns_none() {
        let mut slots: FixedSlots<u64> = FixedSlots::with_capacity(16);

        let slot = slots.try_insert(42).unwrap();
        slots.remove(slot);

        assert_eq!(slots.remove(slot), None);
    }

    #[test]
    fn sentinel_slot_is_absent() {
        let slots: FixedSlots<u64> = FixedSlots::with_capacity(16);
        assert_eq!(slots.get(Slot::NONE), None);
    }

    #[test]
    fn drop_cleans_up() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug)]
        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        {
            let mut slots: FixedSlots<DropCounter> = FixedSlots::with_capacity(8);
            slots.try_insert(DropCounter).unwrap();
            slots.try_insert(DropCounter).unwrap();
            slots.try_insert(DropCounter).unwrap();
        }

        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 3);
    }

    #[cfg(feature = "slab")]
    mod growable {
        use super::*;

        #[test]
        fn insert_get_remove() {
            let mut slots: GrowableSlots<u64> = GrowableSlots::new();

            let slot = slots.try_insert(42).unwrap();
            assert_eq!(slots.get(slot), Some(&42));

            assert_eq!(slots.remove(slot), Some(42));
            assert_eq!(slots.get(slot), None);
        }

        #[test]
        fn slot_reuse() {
            let mut slots: GrowableSlots<u64> = GrowableSlots::new();

            let s1 = slots.try_insert(1).unwrap();
            slots.remove(s1);

            let s2 = slots.try_insert(2).unwrap();
            assert_eq!(s1, s2);
        }
    }
}
