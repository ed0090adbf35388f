use crate::error::ContractError;

/// Positional state driving one traversal of a sequence.
///
/// A cursor is either *at an element*, in which case `read` is valid, or *at
/// the end*. Positions are compared with `equal`; whatever the cursor caches
/// for reading is not part of its position.
///
/// Cursors over single-pass sources must not implement `Clone`: a copied
/// position could not be read again once the source has moved on.
pub trait Cursor {
    type Item;

    /// Borrows the element at the current position.
    ///
    /// Calling this at the end is a contract violation and panics.
    fn read(&self) -> &Self::Item;

    /// Mutably borrows the element at the current position.
    ///
    /// Calling this at the end is a contract violation and panics.
    fn read_mut(&mut self) -> &mut Self::Item;

    /// Moves the element at the current position out of the cursor.
    ///
    /// The cursor must be advanced with [`next`](Cursor::next) before it is
    /// read again.
    fn take(&mut self) -> Self::Item;

    /// Moves to the next position.
    fn next(&mut self);

    /// Whether both cursors are at the same position.
    fn equal(&self, other: &Self) -> bool;

    /// Whether [`read`](Cursor::read) would succeed.
    fn is_readable(&self) -> bool;

    fn try_read(&self) -> Result<&Self::Item, ContractError> {
        if self.is_readable() {
            Ok(self.read())
        } else {
            Err(ContractError::ReadAtEnd)
        }
    }

    /// Bounds on the number of elements left, the current one included.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// An end marker for cursors of type `C`.
pub trait Sentinel<C: ?Sized> {
    fn is_end(&self, cursor: &C) -> bool;
}

/// Cursors that know when their source has run dry.
pub trait Exhaustible {
    fn is_exhausted(&self) -> bool;
}

/// The end of a sequence whose length is only discovered by walking it.
///
/// A cursor equals the sentinel once its source is exhausted. Unlike an end
/// cursor this carries no state, so it never borrows the sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BasicSentinel;

impl<C: Exhaustible + ?Sized> Sentinel<C> for BasicSentinel {
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        cursor.is_exhausted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        left: u32,
        cache: Option<u32>,
    }

    impl Countdown {
        fn new(left: u32) -> Self {
            Countdown {
                left,
                cache: (left > 0).then_some(left),
            }
        }
    }

    impl Cursor for Countdown {
        type Item = u32;

        fn read(&self) -> &u32 {
            self.cache.as_ref().unwrap()
        }

        fn read_mut(&mut self) -> &mut u32 {
            self.cache.as_mut().unwrap()
        }

        fn take(&mut self) -> u32 {
            self.cache.take().unwrap()
        }

        fn next(&mut self) {
            self.left -= 1;
            self.cache = (self.left > 0).then_some(self.left);
        }

        fn equal(&self, other: &Self) -> bool {
            self.left == other.left
        }

        fn is_readable(&self) -> bool {
            self.cache.is_some()
        }
    }

    impl Exhaustible for Countdown {
        fn is_exhausted(&self) -> bool {
            self.left == 0
        }
    }

    #[test]
    fn try_read_reports_end() {
        let mut cursor = Countdown::new(1);
        assert_eq!(cursor.try_read(), Ok(&1));
        cursor.next();
        assert_eq!(cursor.try_read(), Err(ContractError::ReadAtEnd));
    }

    #[test]
    fn basic_sentinel_checks_exhaustion() {
        let mut cursor = Countdown::new(2);
        assert!(!BasicSentinel.is_end(&cursor));
        cursor.next();
        assert!(!BasicSentinel.is_end(&cursor));
        cursor.next();
        assert!(BasicSentinel.is_end(&cursor));
    }

    #[test]
    fn default_size_hint_is_unknown() {
        assert_eq!(Countdown::new(3).size_hint(), (0, None));
    }

    #[test]
    fn equal_ignores_cache() {
        let mut a = Countdown::new(2);
        let b = Countdown::new(2);
        let _ = a.take();
        assert!(a.equal(&b));
    }
}
