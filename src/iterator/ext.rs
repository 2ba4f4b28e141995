use crate::{
    adapter::{
        CopyIf, CopyReplaceIf, DropN, DropWhile, Join, ReplaceIf, Strided, TakeIf, TakeN,
        TakeWhile, Transform, TransformInfallible,
    },
    iterator::{Entries, Forward, Keyed, Values},
};

/// Chaining constructors for the lazy adapters
///
/// ```ignore
/// let evens: Vec<i32> = Range::to(20)?
///     .take_if(|x| x % 2 == 0)
///     .drop_n(1)
///     .take_n(3)
///     .materialize();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub trait ForwardExt: Forward + Sized {
    fn take_n(self, n: usize) -> TakeN<Self> {
        TakeN::new(self, n)
    }

    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    fn take_if<P>(self, pred: P) -> TakeIf<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeIf::new(self, pred)
    }

    fn copy_if<P>(self, pred: P) -> CopyIf<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeIf::new(self, pred)
    }

    fn drop_n(self, n: usize) -> DropN<Self> {
        DropN::new(self, n)
    }

    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, pred)
    }

    fn replace_if<P>(self, pred: P, replacement: Self::Item) -> ReplaceIf<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        ReplaceIf::new(self, pred, replacement)
    }

    fn copy_replace_if<P>(self, pred: P, replacement: Self::Item) -> CopyReplaceIf<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        ReplaceIf::new(self, pred, replacement)
    }

    fn transform<F, U, E>(self, f: F) -> Transform<Self, F, U, E>
    where
        F: FnMut(Self::Item) -> Result<U, E>,
    {
        Transform::new(self, f)
    }

    fn transform_infallible<F, U>(self, f: F) -> TransformInfallible<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        TransformInfallible::new(self, f)
    }

    fn strided(self, stride: usize) -> Strided<Self> {
        Strided::new(self, stride)
    }

    /// Concatenate `self` and `other`
    fn chain(self, other: Self) -> Join<Self> {
        Join::new(vec![self, other])
    }

    fn values(self) -> Values<Self> {
        Values::new(self)
    }

    fn entries(self) -> Entries<Self>
    where
        Self: Keyed,
    {
        Entries::new(self)
    }

    /// Drain the cursor into a vector
    fn materialize(self) -> Vec<Self::Item> {
        Values::new(self).collect()
    }
}

impl<I: Forward> ForwardExt for I {}
