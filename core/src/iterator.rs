//! # Cursor-driven iterator
//!
//! `BasicIterator<C, S>` adapts any [`Cursor`] and matching [`Sentinel`] to the
//! standard [`Iterator`] protocol, so adaptors only have to describe how to
//! read, advance and compare positions.
//!
//! Besides `Iterator::next`, the adaptor keeps the positional operations
//! available: [`get`](BasicIterator::get) borrows the current element without
//! moving past it, [`advance`](BasicIterator::advance) moves without reading,
//! and `==` compares positions.
//!
//! `Iterator::next` moves the element out and leaves the cursor where it is.
//! The cursor only advances when the iterator is next asked for something, so
//! no source element past the last one returned is ever probed.

use core::iter::FusedIterator;

use crate::contract_assert;
use crate::cursor::{BasicSentinel, Cursor, Sentinel};
use crate::error::ContractError;

/// A standard iterator over the positions between `cursor` and `end`.
#[derive(Debug, Clone)]
pub struct BasicIterator<C, S = BasicSentinel> {
    cursor: C,
    end: S,
    // Set once `next` has taken the current element.
    pending_advance: bool,
}

impl<C, S> BasicIterator<C, S> {
    #[inline]
    pub fn new(cursor: C, end: S) -> Self {
        Self {
            cursor,
            end,
            pending_advance: false,
        }
    }

    /// The underlying cursor.
    ///
    /// After `Iterator::next` this still sits on the element that was just
    /// returned, until the iterator is used again.
    #[inline]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    #[inline]
    pub fn end(&self) -> &S {
        &self.end
    }
}

impl<C, S> BasicIterator<C, S>
where
    C: Cursor,
    S: Sentinel<C>,
{
    // Performs the advance deferred by `Iterator::next`.
    #[inline]
    fn settle(&mut self) {
        if self.pending_advance {
            self.pending_advance = false;
            self.cursor.next();
        }
    }

    #[inline]
    pub fn cursor_mut(&mut self) -> &mut C {
        self.settle();
        &mut self.cursor
    }

    #[inline]
    pub fn into_parts(mut self) -> (C, S) {
        self.settle();
        (self.cursor, self.end)
    }

    #[inline]
    pub fn is_end(&mut self) -> bool {
        self.settle();
        self.end.is_end(&self.cursor)
    }

    /// Borrows the current element.
    ///
    /// # Panics
    ///
    /// Panics at the end of the sequence.
    #[inline]
    #[track_caller]
    pub fn get(&mut self) -> &C::Item {
        self.settle();
        contract_assert!(!self.is_end(), ContractError::ReadAtEnd);
        self.cursor.read()
    }

    /// Mutably borrows the current element.
    ///
    /// # Panics
    ///
    /// Panics at the end of the sequence.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut C::Item {
        self.settle();
        contract_assert!(!self.is_end(), ContractError::ReadAtEnd);
        self.cursor.read_mut()
    }

    pub fn try_get(&mut self) -> Result<&C::Item, ContractError> {
        if self.is_end() {
            return Err(ContractError::ReadAtEnd);
        }
        self.cursor.try_read()
    }

    /// Moves to the next position without reading the current one.
    ///
    /// # Panics
    ///
    /// Panics at the end of the sequence when contract checks are enabled.
    #[inline]
    #[track_caller]
    pub fn advance(&mut self) -> &mut Self {
        self.settle();
        contract_assert!(!self.is_end(), ContractError::AdvanceAtEnd);
        self.cursor.next();
        self
    }

    pub fn try_advance(&mut self) -> Result<&mut Self, ContractError> {
        if self.is_end() {
            return Err(ContractError::AdvanceAtEnd);
        }
        self.cursor.next();
        Ok(self)
    }
}

impl<C, S> Iterator for BasicIterator<C, S>
where
    C: Cursor,
    S: Sentinel<C>,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        let item = self.cursor.take();
        self.pending_advance = true;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        if self.pending_advance {
            // The cursor still counts the element already returned.
            (
                lower.saturating_sub(1),
                upper.map(|upper| upper.saturating_sub(1)),
            )
        } else if self.end.is_end(&self.cursor) {
            (0, Some(0))
        } else {
            (lower, upper)
        }
    }
}

// Once the sentinel matches, `next` stops touching the cursor.
impl<C, S> FusedIterator for BasicIterator<C, S>
where
    C: Cursor,
    S: Sentinel<C>,
{
}

/// Positions are equal when the cursors are and both iterators have the same
/// advance outstanding. Call [`is_end`](BasicIterator::is_end) on both sides
/// first to compare an iterator that has just yielded with one that has not.
impl<C: Cursor, S> PartialEq for BasicIterator<C, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pending_advance == other.pending_advance && self.cursor.equal(&other.cursor)
    }
}
