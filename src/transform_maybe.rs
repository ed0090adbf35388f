//! # Fused map-and-filter view
//!
//! `TransformMaybe<V, F>` presents the present results of `F` over the
//! elements of `V`, in source order, skipping every element for which `F`
//! returns `None`. Nothing is computed until a cursor is created or advanced.
//!
//! ## Traversal modes
//!
//! | Entry point | Needs | Source seen as |
//! |---|---|---|
//! | `begin` / `iter` / `&view` | `&V: IntoIterator` | shared elements of an owned source |
//! | `begin_cloned` / `iter_cloned` | `V: Clone + IntoIterator` | a fresh copy of a source handle (`&[T]`, ranges) |
//! | `begin_mut` / `iter_mut` / `&mut view` | `&mut V: IntoIterator` | mutable elements of an owned source |
//! | `into_cursor` / `view` by value | `V: IntoIterator` | the source itself, consumed |
//!
//! ## Termination
//!
//! When the source traversal is an `ExactSizeIterator`, [`end`](TransformMaybe::end)
//! (or [`end_cloned`](TransformMaybe::end_cloned)) returns a cursor positioned after the last element, so the sequence is
//! common. Otherwise the sequence ends at [`BasicSentinel`], which a cursor
//! matches once its source is exhausted.
//!
//! ## Example
//!
//! ```
//! use rangeview::{TransformMaybe, transform_maybe};
//!
//! let halves = TransformMaybe::new(vec![1, 2, 3, 4, 5], |x: &i32| (x % 2 == 0).then(|| x / 2));
//! assert_eq!(halves.iter().collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(halves.iter().collect::<Vec<_>>(), vec![1, 2]);
//!
//! let numbers = [1, 2, 3, 4, 5];
//! let halves = transform_maybe(&numbers, |x: &i32| (x % 2 == 0).then(|| x / 2));
//! assert_eq!(halves.iter_cloned().collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(halves.into_iter().collect::<Vec<_>>(), vec![1, 2]);
//! ```

use core::fmt;

use rangeview_core::contract::violated;
use rangeview_core::{
    BasicIterator, BasicSentinel, ContractError, Cursor, Exhaustible, SemiregularBox, Sentinel,
    contract_assert, impl_pipe,
};

/// A lazy view of the present results of `F` over `V`.
///
/// See the [module docs](self) for the traversal modes.
#[derive(Clone)]
pub struct TransformMaybe<V, F> {
    base: V,
    func: SemiregularBox<F>,
}

/// Creates a [`TransformMaybe`] view over `source`.
///
/// # Example
///
/// ```
/// use rangeview::transform_maybe;
///
/// let words = ["1", "two", "3"];
/// let parsed: Vec<i32> = transform_maybe(words, |w: &str| w.parse().ok()).into_iter().collect();
/// assert_eq!(parsed, vec![1, 3]);
/// ```
#[inline]
pub fn transform_maybe<R, F, U>(source: R, func: F) -> TransformMaybe<R, F>
where
    R: IntoIterator,
    F: Fn(R::Item) -> Option<U>,
{
    TransformMaybe::new(source, func)
}

impl<V, F> TransformMaybe<V, F> {
    #[inline]
    pub fn new(base: V, func: F) -> Self {
        Self {
            base,
            func: SemiregularBox::new(func),
        }
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

    /// Whether the view holds a mapping function. Only default-constructed
    /// views do not.
    #[inline]
    pub fn has_func(&self) -> bool {
        !self.func.is_empty()
    }

    /// Read-only cursor at the first present result.
    ///
    /// The source is traversed through `&V`, so the function sees shared
    /// references into it. Every call probes the source from its start again.
    ///
    /// # Panics
    ///
    /// Panics if the view has no mapping function.
    #[track_caller]
    pub fn begin<'a, U>(
        &'a self,
    ) -> TransformMaybeCursor<<&'a V as IntoIterator>::IntoIter, &'a F, U>
    where
        &'a V: IntoIterator,
        F: Fn(<&'a V as IntoIterator>::Item) -> Option<U>,
    {
        TransformMaybeCursor::begin((&self.base).into_iter(), func_of(&self.func))
    }

    /// Read-only cursor past the last element of the source.
    ///
    /// # Panics
    ///
    /// Panics if the view has no mapping function.
    #[track_caller]
    pub fn end<'a, U>(
        &'a self,
    ) -> TransformMaybeCursor<<&'a V as IntoIterator>::IntoIter, &'a F, U>
    where
        &'a V: IntoIterator,
        <&'a V as IntoIterator>::IntoIter: ExactSizeIterator,
        F: Fn(<&'a V as IntoIterator>::Item) -> Option<U>,
    {
        TransformMaybeCursor::end((&self.base).into_iter(), func_of(&self.func))
    }

    /// Cursor at the first present result of a traversal of a clone of the
    /// source.
    ///
    /// For sources that are themselves cheap handles, such as `&[T]`,
    /// `&Vec<T>` or ranges, where `&V` is not iterable. The view is left
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if the view has no mapping function.
    #[track_caller]
    pub fn begin_cloned<U>(&self) -> TransformMaybeCursor<V::IntoIter, &F, U>
    where
        V: Clone + IntoIterator,
        F: Fn(V::Item) -> Option<U>,
    {
        TransformMaybeCursor::begin(self.base.clone().into_iter(), func_of(&self.func))
    }

    /// The end matching [`begin_cloned`](Self::begin_cloned).
    ///
    /// # Panics
    ///
    /// Panics if the view has no mapping function.
    #[track_caller]
    pub fn end_cloned<U>(&self) -> TransformMaybeCursor<V::IntoIter, &F, U>
    where
        V: Clone + IntoIterator,
        V::IntoIter: ExactSizeIterator,
        F: Fn(V::Item) -> Option<U>,
    {
        TransformMaybeCursor::end(self.base.clone().into_iter(), func_of(&self.func))
    }

    /// End marker for sources without a known length.
    #[inline]
    pub fn sentinel(&self) -> BasicSentinel {
        BasicSentinel
    }

    /// Mutable cursor at the first present result.
    ///
    /// # Panics
    ///
    /// Panics if the view has no mapping function.
    #[track_caller]
    pub fn begin_mut<'a, U>(
        &'a mut self,
    ) -> TransformMaybeCursor<<&'a mut V as IntoIterator>::IntoIter, &'a F, U>
    where
        &'a mut V: IntoIterator,
        F: Fn(<&'a mut V as IntoIterator>::Item) -> Option<U>,
    {
        let func = func_of(&self.func);
        TransformMaybeCursor::begin((&mut self.base).into_iter(), func)
    }

    /// Consumes the view into a cursor that owns the source and the function.
    ///
    /// # Panics
    ///
    /// Panics if the view has no mapping function.
    #[track_caller]
    pub fn into_cursor<U>(self) -> TransformMaybeCursor<V::IntoIter, F, U>
    where
        V: IntoIterator,
        F: Fn(V::Item) -> Option<U>,
    {
        let func = self
            .func
            .try_into_inner()
            .unwrap_or_else(|err| violated(err.into()));
        TransformMaybeCursor::begin(self.base.into_iter(), func)
    }

    /// Iterates the present results of `F` over shared source elements.
    #[track_caller]
    pub fn iter<'a, U>(
        &'a self,
    ) -> BasicIterator<TransformMaybeCursor<<&'a V as IntoIterator>::IntoIter, &'a F, U>>
    where
        &'a V: IntoIterator,
        F: Fn(<&'a V as IntoIterator>::Item) -> Option<U>,
    {
        BasicIterator::new(self.begin(), BasicSentinel)
    }

    /// Iterates a clone of the source; see [`begin_cloned`](Self::begin_cloned).
    #[track_caller]
    pub fn iter_cloned<U>(&self) -> BasicIterator<TransformMaybeCursor<V::IntoIter, &F, U>>
    where
        V: Clone + IntoIterator,
        F: Fn(V::Item) -> Option<U>,
    {
        BasicIterator::new(self.begin_cloned(), BasicSentinel)
    }

    /// Iterates the present results of `F` over mutable source elements.
    #[track_caller]
    pub fn iter_mut<'a, U>(
        &'a mut self,
    ) -> BasicIterator<TransformMaybeCursor<<&'a mut V as IntoIterator>::IntoIter, &'a F, U>>
    where
        &'a mut V: IntoIterator,
        F: Fn(<&'a mut V as IntoIterator>::Item) -> Option<U>,
    {
        BasicIterator::new(self.begin_mut(), BasicSentinel)
    }
}

#[track_caller]
fn func_of<F>(func: &SemiregularBox<F>) -> &F {
    func.try_get().unwrap_or_else(|err| violated(err.into()))
}

impl<V: Default, F> Default for TransformMaybe<V, F> {
    /// An empty-function view over `V::default()`, to be assigned over later.
    fn default() -> Self {
        Self {
            base: V::default(),
            func: SemiregularBox::empty(),
        }
    }
}

impl<V: fmt::Debug, F> fmt::Debug for TransformMaybe<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformMaybe")
            .field("base", &self.base)
            .field("func", &self.func)
            .finish()
    }
}

impl_pipe!(TransformMaybe<V, F>);

impl<V, F, U> IntoIterator for TransformMaybe<V, F>
where
    V: IntoIterator,
    F: Fn(V::Item) -> Option<U>,
{
    type Item = U;
    type IntoIter = BasicIterator<TransformMaybeCursor<V::IntoIter, F, U>>;

    fn into_iter(self) -> Self::IntoIter {
        BasicIterator::new(self.into_cursor(), BasicSentinel)
    }
}

impl<'a, V, F, U> IntoIterator for &'a TransformMaybe<V, F>
where
    &'a V: IntoIterator,
    F: Fn(<&'a V as IntoIterator>::Item) -> Option<U>,
{
    type Item = U;
    type IntoIter =
        BasicIterator<TransformMaybeCursor<<&'a V as IntoIterator>::IntoIter, &'a F, U>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, F, U> IntoIterator for &'a mut TransformMaybe<V, F>
where
    &'a mut V: IntoIterator,
    F: Fn(<&'a mut V as IntoIterator>::Item) -> Option<U>,
{
    type Item = U;
    type IntoIter =
        BasicIterator<TransformMaybeCursor<<&'a mut V as IntoIterator>::IntoIter, &'a F, U>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Cursor of a [`TransformMaybe`] view.
///
/// `I` is the source traversal and `P` the mapping function, borrowed from the
/// view (`&F`) or owned by a consuming traversal. The position is the number
/// of source elements before the current one; the cached result is derived
/// from it and never compared.
///
/// The cursor is `Clone` only when the source traversal is, so positions of
/// single-pass sources cannot be duplicated.
#[derive(Clone)]
pub struct TransformMaybeCursor<I, P, U> {
    current: I,
    offset: usize,
    exhausted: bool,
    func: P,
    cache: Option<U>,
}

impl<I, P, U> TransformMaybeCursor<I, P, U>
where
    I: Iterator,
    P: Fn(I::Item) -> Option<U>,
{
    /// Positions the cursor on the first present result, probing as many
    /// source elements as it takes.
    fn begin(current: I, func: P) -> Self {
        let mut cursor = Self {
            current,
            offset: 0,
            exhausted: false,
            func,
            cache: None,
        };
        cursor.satisfy();
        tracing::trace!(
            skipped = cursor.offset,
            exhausted = cursor.exhausted,
            "transform_maybe: begin"
        );
        cursor
    }

    // Pulls source elements until one maps to a present result.
    fn satisfy(&mut self) {
        loop {
            let Some(item) = self.current.next() else {
                self.exhausted = true;
                self.cache = None;
                tracing::trace!(offset = self.offset, "transform_maybe: source exhausted");
                return;
            };
            if let Some(value) = (self.func)(item) {
                self.cache = Some(value);
                return;
            }
            self.offset += 1;
        }
    }
}

impl<I, P, U> TransformMaybeCursor<I, P, U>
where
    I: ExactSizeIterator,
{
    // Only compared against; the untouched traversal is never read.
    fn end(current: I, func: P) -> Self {
        Self {
            offset: current.len(),
            current,
            exhausted: true,
            func,
            cache: None,
        }
    }
}

impl<I, P, U> TransformMaybeCursor<I, P, U> {
    /// Number of source elements before the current position.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<I, P, U> Cursor for TransformMaybeCursor<I, P, U>
where
    I: Iterator,
    P: Fn(I::Item) -> Option<U>,
{
    type Item = U;

    #[inline]
    #[track_caller]
    fn read(&self) -> &U {
        match &self.cache {
            Some(value) => value,
            None => violated(ContractError::ReadAtEnd),
        }
    }

    #[inline]
    #[track_caller]
    fn read_mut(&mut self) -> &mut U {
        match &mut self.cache {
            Some(value) => value,
            None => violated(ContractError::ReadAtEnd),
        }
    }

    #[inline]
    #[track_caller]
    fn take(&mut self) -> U {
        self.cache
            .take()
            .unwrap_or_else(|| violated(ContractError::ReadAtEnd))
    }

    /// Advances at least one source element, then keeps going until a present
    /// result is cached or the source runs out.
    #[track_caller]
    fn next(&mut self) {
        contract_assert!(!self.exhausted, ContractError::AdvanceAtEnd);
        if self.exhausted {
            return;
        }
        self.offset += 1;
        self.cache = None;
        self.satisfy();
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.offset == other.offset
    }

    #[inline]
    fn is_readable(&self) -> bool {
        self.cache.is_some()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let current = usize::from(!self.exhausted);
        let (_, upper) = self.current.size_hint();
        (current, upper.and_then(|upper| upper.checked_add(current)))
    }
}

impl<I, P, U> Exhaustible for TransformMaybeCursor<I, P, U> {
    #[inline]
    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<I, P, U> Sentinel<TransformMaybeCursor<I, P, U>> for TransformMaybeCursor<I, P, U> {
    #[inline]
    fn is_end(&self, cursor: &TransformMaybeCursor<I, P, U>) -> bool {
        cursor.offset == self.offset
    }
}

impl<I, P, U> PartialEq for TransformMaybeCursor<I, P, U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl<I, P, U> PartialEq<BasicSentinel> for TransformMaybeCursor<I, P, U> {
    #[inline]
    fn eq(&self, _: &BasicSentinel) -> bool {
        self.exhausted
    }
}

impl<I, P, U: fmt::Debug> fmt::Debug for TransformMaybeCursor<I, P, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformMaybeCursor")
            .field("offset", &self.offset)
            .field("exhausted", &self.exhausted)
            .field("cache", &self.cache)
            .finish()
    }
}
