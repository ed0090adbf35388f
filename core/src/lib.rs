//! Sequence abstraction shared by the `rangeview` adaptors.
//!
//! Adaptors in `rangeview` are written against a small positional protocol
//! instead of implementing `Iterator` by hand:
//!
//! - [`Cursor`]: the per-traversal state. It can `read` the element at its
//!   position, move to the `next` position and compare positions (`equal`).
//! - [`Sentinel`]: anything that can tell whether a cursor has reached the end.
//!   Sources with a known length use an end cursor; the rest use
//!   [`BasicSentinel`], which checks for exhaustion.
//! - [`BasicIterator`]: turns a cursor/sentinel pair into a standard iterator.
//!
//! The [`pipe`] module provides the composition plumbing: adaptors with bound
//! trailing arguments ([`BindBack`]) that can be applied to a source with
//! [`Pipe::pipe`] or the `|` operator.
//!
//! # Example
//!
//! ```
//! use rangeview_core::{BasicIterator, BasicSentinel, Cursor, Exhaustible};
//!
//! /// Walks a slice two elements at a time.
//! struct Pairs<'a> {
//!     rest: &'a [u8],
//!     offset: usize,
//!     cache: Option<(u8, u8)>,
//! }
//!
//! impl<'a> Pairs<'a> {
//!     fn new(rest: &'a [u8]) -> Self {
//!         let mut cursor = Pairs { rest, offset: 0, cache: None };
//!         cursor.fill();
//!         cursor
//!     }
//!
//!     fn fill(&mut self) {
//!         self.cache = match self.rest {
//!             [a, b, ..] => Some((*a, *b)),
//!             _ => None,
//!         };
//!     }
//! }
//!
//! impl Cursor for Pairs<'_> {
//!     type Item = (u8, u8);
//!
//!     fn read(&self) -> &(u8, u8) {
//!         self.cache.as_ref().unwrap()
//!     }
//!     fn read_mut(&mut self) -> &mut (u8, u8) {
//!         self.cache.as_mut().unwrap()
//!     }
//!     fn take(&mut self) -> (u8, u8) {
//!         self.cache.take().unwrap()
//!     }
//!     fn next(&mut self) {
//!         self.rest = &self.rest[2..];
//!         self.offset += 1;
//!         self.fill();
//!     }
//!     fn equal(&self, other: &Self) -> bool {
//!         self.offset == other.offset
//!     }
//!     fn is_readable(&self) -> bool {
//!         self.cache.is_some()
//!     }
//! }
//!
//! impl Exhaustible for Pairs<'_> {
//!     fn is_exhausted(&self) -> bool {
//!         self.rest.len() < 2
//!     }
//! }
//!
//! let pairs = BasicIterator::new(Pairs::new(&[1, 2, 3, 4, 5]), BasicSentinel);
//! assert_eq!(pairs.collect::<Vec<_>>(), vec![(1, 2), (3, 4)]);
//! ```

pub mod contract;
pub mod cursor;
pub mod error;
pub mod iterator;
pub mod pipe;

pub use cursor::{BasicSentinel, Cursor, Exhaustible, Sentinel};
pub use error::ContractError;
pub use iterator::BasicIterator;
pub use pipe::{Adaptor, AdaptorFn, All, BindBack, Compose, Pipe, Pipeable, all, bind_back, pipeable};

pub use rangeview_semiregular_box::{EmptyBoxError, SemiregularBox};
