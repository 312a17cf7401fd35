//! Index-addressable linked list.
//!
//! [`SeqList`] chains nodes through slot storage, front to back. Every node
//! caches its own zero-based position; insert and remove keep the cache
//! dense by sweeping the suffix after the splice point. Positional lookups
//! walk the chain comparing the cached position rather than counting hops,
//! so any drift in the cache surfaces immediately as a failed lookup.
//!
//! That is a deliberate trade: every structural edit pays an O(suffix)
//! re-index sweep, and in exchange every lookup is a single forward scan
//! with no separate counting pass.
//!
//! # Example
//!
//! ```
//! use seqlist::SeqList;
//!
//! let mut list: SeqList<&str> = SeqList::with_capacity(8);
//!
//! list.push_back("b").unwrap();
//! list.push_front("a").unwrap();
//! list.push_back("c").unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(0), Some(&"a"));
//! assert_eq!(list.position_of(&"c"), Some(2));
//!
//! assert_eq!(list.remove(1), Some("b"));
//! let order: Vec<&str> = list.iter().copied().collect();
//! assert_eq!(order, vec!["a", "c"]);
//! ```

use crate::Slot;
use crate::storage::{FixedSlots, Full, Slots};

/// A node in the chain.
///
/// This wraps an element with its cached position and forward link. It is
/// public only because it is the element type of the list's slot storage;
/// the fields are an implementation detail.
#[derive(Debug)]
pub struct Node<T> {
    elem: T,
    pos: u32,
    next: Slot,
}

/// Error returned by [`SeqList::insert`].
///
/// Both arms hand the rejected value back, so a failed insert never
/// destroys caller data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError<T> {
    /// The position was outside `0..=len`. Checked before any slot is
    /// requested, so storage is untouched.
    OutOfBounds(T),
    /// Slot storage is exhausted. The list is unchanged.
    Full(T),
}

impl<T> InsertError<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            Self::OutOfBounds(value) | Self::Full(value) => value,
        }
    }
}

impl<T> core::fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds(_) => write!(f, "position out of bounds"),
            Self::Full(_) => write!(f, "slot storage is full"),
        }
    }
}

impl<T: core::fmt::Debug> std::error::Error for InsertError<T> {}

/// A singly-linked list addressed by position.
///
/// The list owns its slot storage and tracks the first and last slot of the
/// chain. Its length is derived from the last node's cached position, which
/// keeps the position cache honest: if a sweep ever went wrong, `len` and
/// every positional lookup would disagree loudly instead of silently.
///
/// # Example
///
/// ```
/// use seqlist::SeqList;
///
/// let mut list: SeqList<u64> = SeqList::with_capacity(100);
///
/// list.push_back(1).unwrap();
/// list.push_back(3).unwrap();
/// list.insert(1, 2).unwrap();
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct SeqList<T, S = FixedSlots<Node<T>>>
where
    S: Slots<Node<T>>,
{
    slots: S,
    first: Slot,
    last: Slot,
    _marker: core::marker::PhantomData<T>,
}

/// Type alias for a list over growable slab storage.
#[cfg(feature = "slab")]
pub type GrowableSeqList<T> = SeqList<T, crate::storage::GrowableSlots<Node<T>>>;

impl<T> SeqList<T> {
    /// Creates an empty list with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or does not fit the slot index range.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new_in(FixedSlots::with_capacity(capacity))
    }

    /// Returns the slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T> Default for SeqList<T> {
    fn default() -> Self {
        Self::with_capacity(16)
    }
}

impl<T, S> SeqList<T, S>
where
    S: Slots<Node<T>>,
{
    /// Creates an empty list over the given storage.
    ///
    /// # Panics
    ///
    /// Panics if the storage already contains values.
    pub fn new_in(slots: S) -> Self {
        assert!(slots.is_empty(), "storage must start empty");
        Self {
            slots,
            first: Slot::NONE,
            last: Slot::NONE,
            _marker: core::marker::PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// Computed from the last node's cached position, not a stored counter.
    #[inline]
    pub fn len(&self) -> usize {
        if self.last.is_none() {
            return 0;
        }
        self.node_ref(self.last).pos as usize + 1
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts `value` at position `at`, shifting every later element one
    /// position right.
    ///
    /// Valid positions are `0..=len`. A failed insert is a no-op and the
    /// error carries the value back to the caller.
    ///
    /// # Errors
    ///
    /// - [`InsertError::OutOfBounds`] if `at > len` (checked before any
    ///   slot is requested)
    /// - [`InsertError::Full`] if storage is exhausted
    pub fn insert(&mut self, at: usize, value: T) -> Result<(), InsertError<T>> {
        let len = self.len();
        if at > len {
            return Err(InsertError::OutOfBounds(value));
        }

        let node = Node {
            elem: value,
            pos: at as u32,
            next: Slot::NONE,
        };
        let slot = match self.slots.try_insert(node) {
            Ok(slot) => slot,
            Err(full) => return Err(InsertError::Full(full.into_inner().elem)),
        };

        if len == 0 {
            self.first = slot;
            self.last = slot;
            return Ok(());
        }

        if at == len {
            let last = self.last;
            self.node_mut(last).next = slot;
            self.last = slot;
            return Ok(());
        }

        if at == 0 {
            let first = self.first;
            self.node_mut(slot).next = first;
            self.first = slot;
        } else {
            // Walk to the node whose successor carries position `at` and
            // splice in front of that successor.
            let mut prev = self.first;
            loop {
                let next = self.node_ref(prev).next;
                if self.node_ref(next).pos as usize == at {
                    self.node_mut(slot).next = next;
                    self.node_mut(prev).next = slot;
                    break;
                }
                prev = next;
            }
        }

        // Shift the suffix right
        let mut cur = self.node_ref(slot).next;
        while cur.is_some() {
            let node = self.node_mut(cur);
            node.pos += 1;
            cur = node.next;
        }

        Ok(())
    }

    /// Inserts `value` at the front of the list.
    ///
    /// # Errors
    ///
    /// Returns `Full(value)` if storage is exhausted.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<(), Full<T>> {
        self.insert(0, value).map_err(|e| Full(e.into_inner()))
    }

    /// Inserts `value` at the back of the list.
    ///
    /// # Errors
    ///
    /// Returns `Full(value)` if storage is exhausted.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), Full<T>> {
        let len = self.len();
        self.insert(len, value).map_err(|e| Full(e.into_inner()))
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the element at position `at`.
    ///
    /// The scan matches each node's cached position rather than counting
    /// hops, so a stale cache cannot satisfy a lookup by accident.
    #[inline]
    pub fn get(&self, at: usize) -> Option<&T> {
        let slot = self.slot_at(at)?;
        Some(&self.node_ref(slot).elem)
    }

    /// Returns a mutable reference to the element at position `at`.
    #[inline]
    pub fn get_mut(&mut self, at: usize) -> Option<&mut T> {
        let slot = self.slot_at(at)?;
        Some(&mut self.node_mut(slot).elem)
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        match self.len() {
            0 => None,
            len => self.get(len - 1),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the position of the first element equal to `probe`.
    ///
    /// Reports the matching node's cached position.
    pub fn position_of(&self, probe: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut cur = self.first;
        while cur.is_some() {
            let node = self.node_ref(cur);
            if node.elem == *probe {
                return Some(node.pos as usize);
            }
            cur = node.next;
        }
        None
    }

    /// Returns `true` if some element equals `probe`.
    #[inline]
    pub fn contains(&self, probe: &T) -> bool
    where
        T: PartialEq,
    {
        self.position_of(probe).is_some()
    }

    // ========================================================================
    // Removal and replacement
    // ========================================================================

    /// Removes and returns the element at position `at`, shifting every
    /// later element one position left.
    ///
    /// Returns `None` (and changes nothing) if `at >= len`.
    pub fn remove(&mut self, at: usize) -> Option<T> {
        if at >= self.len() {
            return None;
        }

        let target = if at == 0 {
            let target = self.first;
            let next = self.node_ref(target).next;
            self.first = next;
            if next.is_none() {
                self.last = Slot::NONE;
            }
            target
        } else {
            // Walk to the node whose successor carries position `at`
            let mut prev = self.first;
            while self.node_ref(self.node_ref(prev).next).pos as usize != at {
                prev = self.node_ref(prev).next;
            }
            let target = self.node_ref(prev).next;
            let after = self.node_ref(target).next;
            self.node_mut(prev).next = after;
            if after.is_none() {
                self.last = prev;
            }
            target
        };

        // Shift the suffix left
        let mut cur = self.node_ref(target).next;
        while cur.is_some() {
            let node = self.node_mut(cur);
            node.pos -= 1;
            cur = node.next;
        }

        self.slots.remove(target).map(|node| node.elem)
    }

    /// Replaces the element at position `at`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `Err(value)` if `at >= len`, handing the new value back.
    pub fn replace(&mut self, at: usize, value: T) -> Result<T, T> {
        let Some(slot) = self.slot_at(at) else {
            return Err(value);
        };
        Ok(core::mem::replace(&mut self.node_mut(slot).elem, value))
    }

    /// Removes every element, front to back, dropping each one.
    pub fn clear(&mut self) {
        while self.remove(0).is_some() {}
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns a cursor over the whole list, front to back.
    ///
    /// Valid on an empty list (immediately exhausted).
    #[inline]
    pub fn iter(&self) -> Cursor<'_, T, S> {
        Cursor {
            list: self,
            current: self.first,
        }
    }

    /// Returns a cursor positioned at `start`.
    ///
    /// Returns `None` if `start` is outside `0..len` — in particular, on an
    /// empty list.
    #[inline]
    pub fn cursor(&self, start: usize) -> Option<Cursor<'_, T, S>> {
        let slot = self.slot_at(start)?;
        Some(Cursor {
            list: self,
            current: slot,
        })
    }

    // ========================================================================
    // Internal
    // ========================================================================

    /// Finds the slot of the node at position `at` by scanning cached
    /// positions.
    fn slot_at(&self, at: usize) -> Option<Slot> {
        if at >= self.len() {
            return None;
        }
        let mut cur = self.first;
        while cur.is_some() {
            let node = self.node_ref(cur);
            if node.pos as usize == at {
                return Some(cur);
            }
            cur = node.next;
        }
        None
    }

    fn node_ref(&self, slot: Slot) -> &Node<T> {
        self.slots.get(slot).expect("list link points at a vacant slot")
    }

    fn node_mut(&mut self, slot: Slot) -> &mut Node<T> {
        self.slots
            .get_mut(slot)
            .expect("list link points at a vacant slot")
    }
}

impl<'a, T, S> IntoIterator for &'a SeqList<T, S>
where
    S: Slots<Node<T>>,
{
    type Item = &'a T;
    type IntoIter = Cursor<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// A forward-only cursor over a [`SeqList`].
///
/// The cursor borrows the list, so structural mutation while it is live is
/// rejected at compile time. `has_next` is true exactly when [`next`] would
/// yield an element — including when the cursor sits on the final one — and
/// a fully exhausted cursor keeps returning `None` safely.
///
/// [`next`]: Iterator::next
///
/// # Example
///
/// ```
/// use seqlist::SeqList;
///
/// let mut list: SeqList<u32> = SeqList::with_capacity(8);
/// for v in [1, 2, 3] {
///     list.push_back(v).unwrap();
/// }
///
/// let mut seen = Vec::new();
/// let mut cursor = list.cursor(0).unwrap();
/// while cursor.has_next() {
///     seen.push(*cursor.next().unwrap());
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// assert_eq!(cursor.next(), None);
/// ```
pub struct Cursor<'a, T, S = FixedSlots<Node<T>>>
where
    S: Slots<Node<T>>,
{
    list: &'a SeqList<T, S>,
    current: Slot,
}

impl<'a, T, S> Cursor<'a, T, S>
where
    S: Slots<Node<T>>,
{
    /// Returns `true` if an element remains to be yielded.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }
}

impl<'a, T, S> Iterator for Cursor<'a, T, S>
where
    S: Slots<Node<T>>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.current.is_none() {
            return None;
        }
        let list = self.list;
        let node = list.node_ref(self.current);
        self.current = node.next;
        Some(&node.elem)
    }
}
