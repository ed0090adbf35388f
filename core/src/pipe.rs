//! # Pipe composition
//!
//! Adaptors come in two shapes. The full form takes the source and the
//! adaptor's own arguments at once ([`AdaptorFn`]). The curried form binds the
//! arguments first ([`bind_back`]) and receives the source later ([`Adaptor`]).
//!
//! A curried adaptor is applied with [`Pipe::pipe`], which every type gets, or
//! with the `|` operator on types that opt in through [`impl_pipe!`]
//! (`rangeview` views and [`All`]). [`Pipeable`] adaptors compose with `|`
//! before any source is known.
//!
//! ```
//! use rangeview_core::{Adaptor, AdaptorFn, Pipe, all, bind_back, pipeable};
//!
//! /// `Repeat.call(source, (n,))` repeats every element `n` times.
//! struct Repeat;
//!
//! impl<R: IntoIterator> AdaptorFn<R, (usize,)> for Repeat
//! where
//!     R::Item: Clone,
//! {
//!     type Output = Vec<R::Item>;
//!
//!     fn call(&self, source: R, (n,): (usize,)) -> Vec<R::Item> {
//!         source
//!             .into_iter()
//!             .flat_map(|x| std::iter::repeat(x).take(n))
//!             .collect()
//!     }
//! }
//!
//! let twice = || pipeable(bind_back(Repeat, (2usize,)));
//!
//! assert_eq!(vec![1, 2].pipe(twice()), vec![1, 1, 2, 2]);
//! assert_eq!(all(vec![3]) | twice(), vec![3, 3]);
//! ```

use core::ops::BitOr;

/// An adaptor whose arguments are bound and that only waits for a source.
pub trait Adaptor<R> {
    type Output;

    fn apply(self, source: R) -> Self::Output;
}

/// The uncurried form of an adaptor: source plus a tuple of arguments.
pub trait AdaptorFn<R, Args> {
    type Output;

    fn call(&self, source: R, args: Args) -> Self::Output;
}

/// An [`AdaptorFn`] with its trailing arguments bound.
#[derive(Debug, Clone, Copy)]
pub struct BindBack<A, Args> {
    func: A,
    args: Args,
}

/// Binds the trailing `args` of `func`. The arguments are moved in and moved
/// out again on application, never cloned.
#[inline]
pub fn bind_back<A, Args>(func: A, args: Args) -> BindBack<A, Args> {
    BindBack { func, args }
}

impl<R, A, Args> Adaptor<R> for BindBack<A, Args>
where
    A: AdaptorFn<R, Args>,
{
    type Output = A::Output;

    #[inline]
    fn apply(self, source: R) -> Self::Output {
        self.func.call(source, self.args)
    }
}

/// An adaptor that composes with other pipeables through `|`.
#[derive(Debug, Clone, Copy)]
pub struct Pipeable<A>(A);

#[inline]
pub fn pipeable<A>(adaptor: A) -> Pipeable<A> {
    Pipeable(adaptor)
}

impl<A> Pipeable<A> {
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<R, A> Adaptor<R> for Pipeable<A>
where
    A: Adaptor<R>,
{
    type Output = A::Output;

    #[inline]
    fn apply(self, source: R) -> Self::Output {
        self.0.apply(source)
    }
}

impl<A, B> BitOr<Pipeable<B>> for Pipeable<A> {
    type Output = Pipeable<Compose<A, B>>;

    #[inline]
    fn bitor(self, rhs: Pipeable<B>) -> Self::Output {
        Pipeable(Compose {
            first: self.0,
            second: rhs.0,
        })
    }
}

/// Applies `first`, then `second` to its output.
#[derive(Debug, Clone, Copy)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<R, A, B> Adaptor<R> for Compose<A, B>
where
    A: Adaptor<R>,
    B: Adaptor<A::Output>,
{
    type Output = B::Output;

    #[inline]
    fn apply(self, source: R) -> Self::Output {
        self.second.apply(self.first.apply(source))
    }
}

/// Method-call form of piping, available on every type.
pub trait Pipe: Sized {
    #[inline]
    fn pipe<A>(self, adaptor: A) -> A::Output
    where
        A: Adaptor<Self>,
    {
        adaptor.apply(self)
    }
}

impl<T> Pipe for T {}

/// Wraps a foreign source so it can stand on the left of `|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All<R>(R);

#[inline]
pub fn all<R: IntoIterator>(source: R) -> All<R> {
    All(source)
}

impl<R> All<R> {
    #[inline]
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: IntoIterator> IntoIterator for All<R> {
    type Item = R::Item;
    type IntoIter = R::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// `All` unwraps itself so adaptors see the original source type.
impl<R, A> BitOr<A> for All<R>
where
    A: Adaptor<R>,
{
    type Output = A::Output;

    #[inline]
    fn bitor(self, adaptor: A) -> Self::Output {
        adaptor.apply(self.0)
    }
}

/// Implements `view | adaptor` for a generic view type.
///
/// ```ignore
/// rangeview_core::impl_pipe!(TransformMaybe<V, F>);
/// ```
#[macro_export]
macro_rules! impl_pipe {
    ($ty:ident < $($param:ident),+ >) => {
        impl<$($param,)+ __Adaptor> ::core::ops::BitOr<__Adaptor> for $ty<$($param),+>
        where
            __Adaptor: $crate::pipe::Adaptor<Self>,
        {
            type Output = <__Adaptor as $crate::pipe::Adaptor<Self>>::Output;

            #[inline]
            fn bitor(self, adaptor: __Adaptor) -> Self::Output {
                $crate::pipe::Adaptor::apply(adaptor, self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Scale;

    impl<R> AdaptorFn<R, (i32,)> for Scale
    where
        R: IntoIterator<Item = i32>,
    {
        type Output = Vec<i32>;

        fn call(&self, source: R, (factor,): (i32,)) -> Vec<i32> {
            source.into_iter().map(|x| x * factor).collect()
        }
    }

    struct Reverse;

    impl<R: IntoIterator> Adaptor<R> for Reverse {
        type Output = Vec<R::Item>;

        fn apply(self, source: R) -> Vec<R::Item> {
            let mut items: Vec<_> = source.into_iter().collect();
            items.reverse();
            items
        }
    }

    fn scale(factor: i32) -> Pipeable<BindBack<Scale, (i32,)>> {
        pipeable(bind_back(Scale, (factor,)))
    }

    #[test]
    fn curried_matches_direct_call() {
        let direct = Scale.call(vec![1, 2, 3], (3,));
        let piped = vec![1, 2, 3].pipe(scale(3));
        assert_eq!(direct, piped);
    }

    #[test]
    fn bitor_on_all() {
        assert_eq!(all([1, 2]) | scale(5), vec![5, 10]);
    }

    #[test]
    fn pipeables_compose_left_to_right() {
        let pipeline = scale(2) | pipeable(Reverse);
        assert_eq!(all(vec![1, 2, 3]) | pipeline, vec![6, 4, 2]);
    }

    #[test]
    fn bound_arguments_are_moved_not_cloned() {
        struct Token(String);

        struct Append;

        impl AdaptorFn<Vec<String>, (Token,)> for Append {
            type Output = Vec<String>;

            fn call(&self, mut source: Vec<String>, (token,): (Token,)) -> Vec<String> {
                source.push(token.0);
                source
            }
        }

        // `Token` is neither `Clone` nor `Copy`, so this only compiles if the
        // binding moves it.
        let adaptor = bind_back(Append, (Token("tail".to_string()),));
        let out = vec!["head".to_string()].pipe(adaptor);
        assert_eq!(out, vec!["head".to_string(), "tail".to_string()]);
    }

    #[test]
    fn all_forwards_into_iterator() {
        let wrapped = all(vec![1, 2, 3]);
        assert_eq!(wrapped.clone().into_inner(), vec![1, 2, 3]);
        assert_eq!(wrapped.into_iter().sum::<i32>(), 6);
    }

    struct Wrapper<T>(Vec<T>);

    crate::impl_pipe!(Wrapper<T>);

    impl<T> IntoIterator for Wrapper<T> {
        type Item = T;
        type IntoIter = std::vec::IntoIter<T>;

        fn into_iter(self) -> Self::IntoIter {
            self.0.into_iter()
        }
    }

    #[test]
    fn impl_pipe_enables_bitor() {
        assert_eq!(Wrapper(vec![1, 2]) | pipeable(Reverse), vec![2, 1]);
    }
}
