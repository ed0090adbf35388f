//! A deferred-initialization box for function objects stored inside views.
//!
//! A view that owns a mapping function should stay `Default` and cheap to move
//! around even when the function itself has no sensible default, which is the
//! case for every closure. `SemiregularBox<T>` wraps the function in an
//! optional slot that starts out empty:
//!
//! ```text
//! SemiregularBox::<F>::default()  ──▶ [ empty ]
//! SemiregularBox::new(f)          ──▶ [ f ]
//! ```
//!
//! The owning type can then derive or implement `Default` without any bound on
//! `T`, while `Clone` is still forwarded when `T: Clone`.
//!
//! # Example
//!
//! ```
//! use rangeview_semiregular_box::SemiregularBox;
//!
//! let offset = 10;
//! let boxed = SemiregularBox::new(move |x: i32| x + offset);
//! assert_eq!((boxed.get())(1), 11);
//!
//! let empty: SemiregularBox<fn(i32) -> i32> = SemiregularBox::default();
//! assert!(empty.is_empty());
//! assert!(empty.try_get().is_err());
//! ```
//!
//! # Gotchas
//!
//! - **Empty reads panic**: `get` on an empty box is a contract violation, not a
//!   recoverable error. Use `try_get` if emptiness is expected.

#![no_std]

use core::fmt;

use thiserror::Error;

/// Returned by the fallible accessors of an empty [`SemiregularBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("semiregular box is empty")]
pub struct EmptyBoxError;

/// An optional slot that makes its owner default-constructible.
///
/// See [crate-level docs](crate) for examples.
#[derive(Clone, PartialEq, Eq)]
pub struct SemiregularBox<T> {
    value: Option<T>,
}

static_assertions::assert_eq_size!(SemiregularBox<&u8>, usize);
static_assertions::assert_eq_size!(SemiregularBox<fn(u8) -> u8>, usize);

impl<T> SemiregularBox<T> {
    /// Creates a populated box.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an empty box.
    #[inline]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Borrows the boxed value.
    ///
    /// # Panics
    ///
    /// Panics if the box is empty.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => empty_box(),
        }
    }

    /// Mutably borrows the boxed value.
    ///
    /// # Panics
    ///
    /// Panics if the box is empty.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        match &mut self.value {
            Some(value) => value,
            None => empty_box(),
        }
    }

    #[inline]
    pub fn try_get(&self) -> Result<&T, EmptyBoxError> {
        self.value.as_ref().ok_or(EmptyBoxError)
    }

    #[inline]
    pub fn try_get_mut(&mut self) -> Result<&mut T, EmptyBoxError> {
        self.value.as_mut().ok_or(EmptyBoxError)
    }

    /// Stores `value`, returning the previous content if there was one.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Empties the box, returning its content if there was one.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Unwraps the boxed value.
    ///
    /// # Panics
    ///
    /// Panics if the box is empty.
    #[inline]
    #[track_caller]
    pub fn into_inner(self) -> T {
        match self.value {
            Some(value) => value,
            None => empty_box(),
        }
    }

    #[inline]
    pub fn try_into_inner(self) -> Result<T, EmptyBoxError> {
        self.value.ok_or(EmptyBoxError)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn empty_box() -> ! {
    panic!("{}", EmptyBoxError)
}

impl<T> Default for SemiregularBox<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for SemiregularBox<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<T>> for SemiregularBox<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

// Function objects rarely implement `Debug`, so only the state is shown.
impl<T> fmt::Debug for SemiregularBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_empty() { "empty" } else { "full" };
        f.debug_tuple("SemiregularBox").field(&state).finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::format;

    // ================
    // Construction
    // ================

    #[test]
    fn default_is_empty() {
        let boxed: SemiregularBox<fn() -> u8> = SemiregularBox::default();
        assert!(boxed.is_empty());
        assert_eq!(boxed.try_get(), Err(EmptyBoxError));
    }

    #[test]
    fn new_holds_closure_without_default() {
        let base = 3;
        let boxed = SemiregularBox::new(move |x: i32| x * base);
        assert!(!boxed.is_empty());
        assert_eq!((boxed.get())(4), 12);
    }

    #[test]
    fn from_option() {
        let full: SemiregularBox<u8> = Some(7).into();
        let empty: SemiregularBox<u8> = None.into();
        assert_eq!(full.try_into_inner(), Ok(7));
        assert_eq!(empty.try_into_inner(), Err(EmptyBoxError));
    }

    // ================
    // Assignment
    // ================

    #[test]
    fn replace_populates_empty_box() {
        let mut boxed = SemiregularBox::empty();
        assert_eq!(boxed.replace(1u32), None);
        assert_eq!(boxed.replace(2u32), Some(1));
        assert_eq!(*boxed.get(), 2);
    }

    #[test]
    fn assignment_over_non_assignable_closure() {
        // Closures cannot be assigned to each other, but boxes of the same type can.
        let make = |n: i32| move |x: i32| x + n;
        let mut slot = SemiregularBox::new(make(1));
        assert_eq!((slot.get())(1), 2);
        slot = SemiregularBox::new(make(100));
        assert_eq!((slot.get())(1), 101);
    }

    #[test]
    fn take_leaves_box_empty() {
        let mut boxed = SemiregularBox::new('x');
        assert_eq!(boxed.take(), Some('x'));
        assert!(boxed.is_empty());
        assert_eq!(boxed.take(), None);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut boxed = SemiregularBox::new(10);
        *boxed.get_mut() += 5;
        assert_eq!(boxed.try_get_mut().map(|v| *v), Ok(15));
    }

    // ================
    // Cloning
    // ================

    #[test]
    fn clone_copies_closure_state() {
        let step = 2;
        let boxed = SemiregularBox::new(move |x: i32| x + step);
        let cloned = boxed.clone();
        assert_eq!((cloned.get())(1), 3);
        assert_eq!((boxed.get())(1), 3);
    }

    #[test]
    fn clone_of_empty_is_empty() {
        let boxed: SemiregularBox<u8> = SemiregularBox::empty();
        assert!(boxed.clone().is_empty());
    }

    // ================
    // Contract violations
    // ================

    #[test]
    #[should_panic(expected = "semiregular box is empty")]
    fn get_on_empty_panics() {
        let boxed: SemiregularBox<u8> = SemiregularBox::empty();
        let _ = boxed.get();
    }

    #[test]
    #[should_panic(expected = "semiregular box is empty")]
    fn into_inner_on_empty_panics() {
        let boxed: SemiregularBox<u8> = SemiregularBox::empty();
        let _ = boxed.into_inner();
    }

    // ================
    // Formatting
    // ================

    #[test]
    fn debug_does_not_require_debug_content() {
        let full = SemiregularBox::new(|x: u8| x);
        let empty: SemiregularBox<u8> = SemiregularBox::empty();
        assert_eq!(format!("{:?}", full), "SemiregularBox(\"full\")");
        assert_eq!(format!("{:?}", empty), "SemiregularBox(\"empty\")");
    }

    #[test]
    fn error_message() {
        assert_eq!(format!("{}", EmptyBoxError), "semiregular box is empty");
    }
}
