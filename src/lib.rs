//! rangeview - lazy, composable sequence views
//!
//! # Overview
//!
//! A view wraps a source sequence and presents a new sequence without
//! computing anything up front. Elements are produced one at a time, exactly
//! when the caller asks for the next one.
//!
//! - [`transform_maybe`]: maps every element to an `Option` and keeps only the
//!   present results, in one pass.
//! - [`enumerate`]: pairs every element with its index.
//!
//! # Quick Start
//!
//! ```
//! use rangeview::{all, transform_maybe, views};
//!
//! let readings = ["12", "n/a", "7", "", "30"];
//!
//! // Two-argument form.
//! let parsed = transform_maybe(readings, |s: &str| s.parse::<u32>().ok());
//! assert_eq!(parsed.into_iter().collect::<Vec<_>>(), vec![12, 7, 30]);
//!
//! // Curried form, composed with `|`.
//! let indexed: Vec<(usize, u32)> = (all(readings)
//!     | views::transform_maybe(|s: &str| s.parse::<u32>().ok())
//!     | views::enumerate())
//! .into_iter()
//! .collect();
//! assert_eq!(indexed, vec![(0, 12), (1, 7), (2, 30)]);
//! ```
//!
//! # Traversal
//!
//! Views can be walked in three ways:
//!
//! 1. **Read-only** (`iter`, `&view`): walks `&` elements of a source owned
//!    by the view, any number of times. Handle sources such as `&[T]`,
//!    `&Vec<T>` or ranges are walked with `iter_cloned` instead, which starts
//!    from a clone of the handle.
//! 2. **Mutable** (`iter_mut`, `&mut view`): walks `&mut` elements of a
//!    source owned by the view.
//! 3. **Consuming** (`into_iter`): uses the source up. This is the only mode
//!    for single-pass sources.
//!
//! Iteration is lazy to the element: `next` maps only as many source elements
//! as it takes to find the result it returns.
//!
//! The same traversals are available positionally through cursors
//! ([`TransformMaybe::begin`], [`TransformMaybe::end`]) built on
//! [`rangeview_core::Cursor`].
//!
//! # Contract checks
//!
//! Reading or advancing a cursor at the end of its sequence is a programming
//! error. Debug builds check it; enable the `checked` feature to keep the
//! checks in release builds.

pub mod enumerate;
pub mod transform_maybe;
pub mod views;

pub use enumerate::{Enumerate, EnumerateCursor, enumerate};
pub use transform_maybe::{TransformMaybe, TransformMaybeCursor, transform_maybe};

// Re-export the sequence abstraction the views are written against.
pub use rangeview_core::{
    Adaptor, All, BasicIterator, BasicSentinel, ContractError, Cursor, Exhaustible, Pipe,
    Pipeable, SemiregularBox, Sentinel, all,
};
