//! # Enumerating view
//!
//! `Enumerate<V>` pairs every element of `V` with its zero-based index. It is
//! built on the same cursor protocol as [`TransformMaybe`](crate::TransformMaybe)
//! and supports the same read-only, cloned-handle, mutable and consuming
//! traversals.
//!
//! ```
//! use rangeview::enumerate;
//!
//! let mut letters = vec!['a', 'b'];
//! for (index, letter) in enumerate(&mut letters) {
//!     *letter = letter.to_ascii_uppercase();
//!     assert!(index < 2);
//! }
//! assert_eq!(letters, vec!['A', 'B']);
//! ```

use core::fmt;

use rangeview_core::contract::violated;
use rangeview_core::{
    BasicIterator, BasicSentinel, ContractError, Cursor, Exhaustible, Sentinel, contract_assert,
    impl_pipe,
};

/// A lazy view of `(index, element)` pairs over `V`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumerate<V> {
    base: V,
}

#[inline]
pub fn enumerate<R: IntoIterator>(source: R) -> Enumerate<R> {
    Enumerate::new(source)
}

impl<V> Enumerate<V> {
    #[inline]
    pub fn new(base: V) -> Self {
        Self { base }
    }

    #[inline]
    pub fn base(&self) -> &V {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut V {
        &mut self.base
    }

    #[inline]
    pub fn into_base(self) -> V {
        self.base
    }

    /// Read-only cursor over `&V`.
    pub fn begin<'a>(&'a self) -> EnumerateCursor<<&'a V as IntoIterator>::IntoIter>
    where
        &'a V: IntoIterator,
    {
        EnumerateCursor::begin((&self.base).into_iter())
    }

    pub fn end<'a>(&'a self) -> EnumerateCursor<<&'a V as IntoIterator>::IntoIter>
    where
        &'a V: IntoIterator,
        <&'a V as IntoIterator>::IntoIter: ExactSizeIterator,
    {
        EnumerateCursor::end((&self.base).into_iter())
    }

    /// Cursor over a clone of the source, for handle sources such as `&[T]`
    /// or ranges.
    pub fn begin_cloned(&self) -> EnumerateCursor<V::IntoIter>
    where
        V: Clone + IntoIterator,
    {
        EnumerateCursor::begin(self.base.clone().into_iter())
    }

    pub fn end_cloned(&self) -> EnumerateCursor<V::IntoIter>
    where
        V: Clone + IntoIterator,
        V::IntoIter: ExactSizeIterator,
    {
        EnumerateCursor::end(self.base.clone().into_iter())
    }

    #[inline]
    pub fn sentinel(&self) -> BasicSentinel {
        BasicSentinel
    }

    pub fn begin_mut<'a>(&'a mut self) -> EnumerateCursor<<&'a mut V as IntoIterator>::IntoIter>
    where
        &'a mut V: IntoIterator,
    {
        EnumerateCursor::begin((&mut self.base).into_iter())
    }

    pub fn iter<'a>(
        &'a self,
    ) -> BasicIterator<EnumerateCursor<<&'a V as IntoIterator>::IntoIter>>
    where
        &'a V: IntoIterator,
    {
        BasicIterator::new(self.begin(), BasicSentinel)
    }

    pub fn iter_cloned(&self) -> BasicIterator<EnumerateCursor<V::IntoIter>>
    where
        V: Clone + IntoIterator,
    {
        BasicIterator::new(self.begin_cloned(), BasicSentinel)
    }

    pub fn iter_mut<'a>(
        &'a mut self,
    ) -> BasicIterator<EnumerateCursor<<&'a mut V as IntoIterator>::IntoIter>>
    where
        &'a mut V: IntoIterator,
    {
        BasicIterator::new(self.begin_mut(), BasicSentinel)
    }
}

impl_pipe!(Enumerate<V>);

impl<V: IntoIterator> IntoIterator for Enumerate<V> {
    type Item = (usize, V::Item);
    type IntoIter = BasicIterator<EnumerateCursor<V::IntoIter>>;

    fn into_iter(self) -> Self::IntoIter {
        BasicIterator::new(EnumerateCursor::begin(self.base.into_iter()), BasicSentinel)
    }
}

impl<'a, V> IntoIterator for &'a Enumerate<V>
where
    &'a V: IntoIterator,
{
    type Item = (usize, <&'a V as IntoIterator>::Item);
    type IntoIter = BasicIterator<EnumerateCursor<<&'a V as IntoIterator>::IntoIter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Enumerate<V>
where
    &'a mut V: IntoIterator,
{
    type Item = (usize, <&'a mut V as IntoIterator>::Item);
    type IntoIter = BasicIterator<EnumerateCursor<<&'a mut V as IntoIterator>::IntoIter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Cursor of an [`Enumerate`] view. Its position is the index.
pub struct EnumerateCursor<I: Iterator> {
    current: I,
    index: usize,
    exhausted: bool,
    cache: Option<(usize, I::Item)>,
}

impl<I: Iterator> EnumerateCursor<I> {
    fn begin(mut current: I) -> Self {
        let cache = current.next().map(|item| (0, item));
        Self {
            exhausted: cache.is_none(),
            current,
            index: 0,
            cache,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<I: ExactSizeIterator> EnumerateCursor<I> {
    // Only compared against; the untouched traversal is never read.
    fn end(current: I) -> Self {
        Self {
            index: current.len(),
            current,
            exhausted: true,
            cache: None,
        }
    }
}

impl<I: Iterator> Cursor for EnumerateCursor<I> {
    type Item = (usize, I::Item);

    #[inline]
    #[track_caller]
    fn read(&self) -> &Self::Item {
        match &self.cache {
            Some(pair) => pair,
            None => violated(ContractError::ReadAtEnd),
        }
    }

    #[inline]
    #[track_caller]
    fn read_mut(&mut self) -> &mut Self::Item {
        match &mut self.cache {
            Some(pair) => pair,
            None => violated(ContractError::ReadAtEnd),
        }
    }

    #[inline]
    #[track_caller]
    fn take(&mut self) -> Self::Item {
        self.cache
            .take()
            .unwrap_or_else(|| violated(ContractError::ReadAtEnd))
    }

    #[track_caller]
    fn next(&mut self) {
        contract_assert!(!self.exhausted, ContractError::AdvanceAtEnd);
        if self.exhausted {
            return;
        }
        self.index += 1;
        self.cache = self.current.next().map(|item| (self.index, item));
        self.exhausted = self.cache.is_none();
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.index == other.index
    }

    #[inline]
    fn is_readable(&self) -> bool {
        self.cache.is_some()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let current = usize::from(!self.exhausted);
        let (lower, upper) = self.current.size_hint();
        (
            lower.saturating_add(current),
            upper.and_then(|upper| upper.checked_add(current)),
        )
    }
}

impl<I: Iterator> Exhaustible for EnumerateCursor<I> {
    #[inline]
    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<I: Iterator> Sentinel<EnumerateCursor<I>> for EnumerateCursor<I> {
    #[inline]
    fn is_end(&self, cursor: &EnumerateCursor<I>) -> bool {
        cursor.index == self.index
    }
}

impl<I: Iterator> PartialEq for EnumerateCursor<I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<I> Clone for EnumerateCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            index: self.index,
            exhausted: self.exhausted,
            cache: self.cache.clone(),
        }
    }
}

impl<I> fmt::Debug for EnumerateCursor<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumerateCursor")
            .field("index", &self.index)
            .field("exhausted", &self.exhausted)
            .field("cache", &self.cache)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cursor_walks_indices() {
        let data = ['x', 'y'];
        let view = enumerate(data);
        let mut cursor = view.begin();
        assert_eq!(*cursor.read(), (0, &'x'));
        cursor.next();
        assert_eq!(*cursor.read(), (1, &'y'));
        cursor.next();
        assert!(cursor == view.end());
        assert!(BasicSentinel.is_end(&cursor));
    }

    #[test]
    fn empty_source_begins_at_end() {
        let data: [u8; 0] = [];
        let view = enumerate(data);
        assert!(view.begin() == view.end());
        assert_eq!(view.iter().next(), None);
    }

    #[test]
    fn size_hint_counts_current_element() {
        let data = [1, 2, 3];
        let view = enumerate(data);
        assert_eq!(view.iter().size_hint(), (3, Some(3)));
    }

    #[test]
    fn read_mut_reaches_source() {
        let mut view = enumerate(vec![1, 2]);
        {
            let mut cursor = view.begin_mut();
            let (_, item) = cursor.read_mut();
            **item = 10;
        }
        assert_eq!(view.into_base(), vec![10, 2]);
    }

    #[test]
    fn cloned_traversal_of_range() {
        let view = enumerate(10..13);
        assert_eq!(
            view.iter_cloned().collect::<Vec<_>>(),
            vec![(0, 10), (1, 11), (2, 12)]
        );
        let mut cursor = view.begin_cloned();
        cursor.next();
        cursor.next();
        cursor.next();
        assert!(cursor == view.end_cloned());
    }

    #[test]
    fn debug_output() {
        let data = [7];
        let view = enumerate(data);
        assert_eq!(
            format!("{:?}", view.begin()),
            "EnumerateCursor { index: 0, exhausted: false, cache: Some((0, 7)) }"
        );
    }
}
