//! Curried adaptors for use with `|` and [`Pipe::pipe`](rangeview_core::Pipe::pipe).
//!
//! Each adaptor here is the one-argument form of a two-argument constructor
//! in the crate root: `source | views::transform_maybe(f)` builds the same
//! view as `transform_maybe(source, f)`.
//!
//! ```
//! use rangeview::{Pipe, all, views};
//!
//! let evens: Vec<u32> = (0u32..)
//!     .pipe(views::transform_maybe(|x: u32| (x % 2 == 0).then_some(x)))
//!     .into_iter()
//!     .take(3)
//!     .collect();
//! assert_eq!(evens, vec![0, 2, 4]);
//!
//! let pairs: Vec<(usize, char)> = (all(vec!['a', 'b']) | views::enumerate()).into_iter().collect();
//! assert_eq!(pairs, vec![(0, 'a'), (1, 'b')]);
//! ```

use rangeview_core::{Adaptor, AdaptorFn, BindBack, Pipeable, bind_back, pipeable};

use crate::enumerate::Enumerate;
use crate::transform_maybe::TransformMaybe;

/// The two-argument form behind [`transform_maybe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformMaybeFn;

impl<R, F> AdaptorFn<R, (F,)> for TransformMaybeFn
where
    R: IntoIterator,
{
    type Output = TransformMaybe<R, F>;

    #[inline]
    fn call(&self, source: R, (func,): (F,)) -> Self::Output {
        TransformMaybe::new(source, func)
    }
}

/// Binds `func`, leaving the source to be piped in.
#[inline]
pub fn transform_maybe<F>(func: F) -> Pipeable<BindBack<TransformMaybeFn, (F,)>> {
    pipeable(bind_back(TransformMaybeFn, (func,)))
}

/// The adaptor behind [`enumerate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerateFn;

impl<R: IntoIterator> Adaptor<R> for EnumerateFn {
    type Output = Enumerate<R>;

    #[inline]
    fn apply(self, source: R) -> Self::Output {
        Enumerate::new(source)
    }
}

#[inline]
pub fn enumerate() -> Pipeable<EnumerateFn> {
    pipeable(EnumerateFn)
}
