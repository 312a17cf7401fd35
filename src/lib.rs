//! Index-addressable linked list over slot storage.
//!
//! [`SeqList`] is a singly-linked list addressed by *position*: every node
//! carries its own zero-based position, kept dense across inserts and
//! removals. Lookups walk the chain comparing that cached position, so the
//! position cache is load-bearing, not an optimization hint.
//!
//! Nodes live in slot storage with stable indices ([`FixedSlots`] by
//! default), so removal can never leave a dangling link: a freed slot goes
//! back on the storage free list and the chain only ever references
//! occupied slots.
//!
//! # Quick Start
//!
//! ```
//! use seqlist::SeqList;
//!
//! let mut list: SeqList<u32> = SeqList::with_capacity(16);
//!
//! list.push_back(10).unwrap();
//! list.push_back(30).unwrap();
//! list.insert(1, 20).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Some(&20));
//! assert_eq!(list.position_of(&30), Some(2));
//!
//! assert_eq!(list.remove(0), Some(10));
//! assert_eq!(list.front(), Some(&20));
//! ```
//!
//! # Error Signaling
//!
//! Every boundary failure comes back through the return value, and a failed
//! call is a no-op:
//!
//! - absent element / out-of-range position: `None`
//! - fallible insertion: [`InsertError`], carrying the rejected value so it
//!   is never silently dropped
//! - storage exhaustion: [`Full`], likewise carrying the value
//!
//! # Iteration
//!
//! [`SeqList::iter`] walks the whole list; [`SeqList::cursor`] starts a
//! forward-only [`Cursor`] at a chosen position. Cursors borrow the list,
//! so structural mutation while a cursor is live is a compile error rather
//! than undefined behavior.
//!
//! ```
//! use seqlist::SeqList;
//!
//! let mut list: SeqList<u32> = SeqList::with_capacity(8);
//! for v in [1, 2, 3] {
//!     list.push_back(v).unwrap();
//! }
//!
//! let mut cursor = list.cursor(1).unwrap();
//! assert!(cursor.has_next());
//! assert_eq!(cursor.next(), Some(&2));
//! assert_eq!(cursor.next(), Some(&3));
//! assert!(!cursor.has_next());
//! ```
//!
//! # Feature Flags
//!
//! - `slab` - [`GrowableSlots`], a growable storage backend over
//!   `slab::Slab` for lists without a fixed capacity

#![warn(missing_docs)]

pub mod list;
pub mod slot;
pub mod storage;

pub use list::{Cursor, InsertError, Node, SeqList};
pub use slot::Slot;
pub use storage::{FixedSlots, Full, Slots};

#[cfg(feature = "slab")]
pub use list::GrowableSeqList;
#[cfg(feature = "slab")]
pub use storage::GrowableSlots;
