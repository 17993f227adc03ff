//! Indexed singly-linked sequence.
//!
//! A forward-linked chain with list-style positional access on top of stack
//! and queue operations:
//!
//! | Operation | Cost | Out of range |
//! |-----------|------|--------------|
//! | `push` / `unshift` / `shift` | O(1) | - |
//! | `pop` | O(n), walks to the new tail | `None` when empty |
//! | `get` / `set` / `replace` | O(index) | `None` / `false` / `Err` |
//! | `insert` / `try_insert` | O(index) | `false` / `Err` |
//! | `remove` | O(index) | `None` |
//! | `reverse` | O(n) | - |
//!
//! # Storage
//!
//! Nodes are not individually boxed. The sequence owns a [`slab::Slab`] of
//! nodes and links them by slot [`Key`] with a `NONE` sentinel for the end of
//! the chain. Freed slots are reused by later inserts, and nothing about the
//! arena leaks through the API: callers only ever see positions.
//!
//! ```text
//! head ─► [slot 2: a] ─► [slot 0: b] ─► [slot 1: c] ◄─ tail
//!                                             next = NONE
//! ```
//!
//! # Quick Start
//!
//! ```
//! use kata_sequence::Sequence;
//!
//! let mut seq: Sequence<i32> = Sequence::new();
//! seq.push(5);
//! seq.push_many([10, 30]);
//!
//! assert_eq!(seq.pop(), Some(30));
//! assert_eq!(seq.len(), 2);
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![5, 10]);
//! ```
//!
//! # Out-of-range requests
//!
//! Nothing panics on a bad position. Sentinel-returning methods give `None`
//! or `false`; the `try_insert` and `replace` forms return an [`OutOfRange`]
//! holding the value that was not stored:
//!
//! ```
//! use kata_sequence::{OutOfRange, Sequence};
//!
//! let mut seq: Sequence<&str> = Sequence::of(["a"]);
//! let err: OutOfRange<&str> = seq.try_insert(3, "z").unwrap_err();
//! assert_eq!(err.into_inner(), "z");
//! assert_eq!(seq.len(), 1);
//! ```
//!
//! Rejections are reported at `trace` level through the `log` facade.

#![warn(missing_docs)]

mod error;
mod iter;
pub mod key;
mod sequence;

pub use error::OutOfRange;
pub use iter::{IntoIter, Iter};
pub use key::Key;
pub use sequence::Sequence;
