//! Lazy cursor adapters
//!
//! Every adapter wraps an inner cursor, owns it exclusively, and is itself a
//! cursor. Nothing happens until `next()` is called on the outermost
//! adapter; the call then cascades inward to the source, while `get()`
//! reads outward through any value-transforming adapters.
//!
//! ```text
//! materialize()
//!     ↓
//! TakeN
//!     └─→ TakeIf
//!           └─→ Range (source)
//! ```
//!
//! ## Shared rules
//!
//! 1. A fresh adapter is at `Begin`; its first `next()` moves it to its
//!    first element or straight to `End`.
//! 2. `index()` counts the elements the adapter itself has emitted.
//! 3. Adapters are forward-only, single-pass and cannot be restarted.
//! 4. Adapters whose output length depends on the data report an unknown
//!    size until exhausted, then the emitted count.
//! 5. An adapter over a keyed cursor is keyed too and reports the key of the
//!    inner element it is on.

mod drop;
mod filter;
mod join;
mod replace;
mod strided;
mod take;
mod transform;

pub use drop::{DropN, DropWhile};
pub use filter::{CopyIf, TakeIf};
pub use join::Join;
pub use replace::{CopyReplaceIf, ReplaceIf};
pub use strided::Strided;
pub use take::{TakeN, TakeWhile};
pub use transform::{Transform, TransformFailure, TransformInfallible};

use crate::iterator::Forward;

pub fn take_n<I: Forward>(inner: I, n: usize) -> TakeN<I> {
    TakeN::new(inner, n)
}

pub fn take_while<I, P>(inner: I, pred: P) -> TakeWhile<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    TakeWhile::new(inner, pred)
}

pub fn take_if<I, P>(inner: I, pred: P) -> TakeIf<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    TakeIf::new(inner, pred)
}

pub fn copy_if<I, P>(inner: I, pred: P) -> CopyIf<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    TakeIf::new(inner, pred)
}

pub fn drop_n<I: Forward>(inner: I, n: usize) -> DropN<I> {
    DropN::new(inner, n)
}

pub fn drop_while<I, P>(inner: I, pred: P) -> DropWhile<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    DropWhile::new(inner, pred)
}

pub fn replace_if<I, P>(inner: I, pred: P, replacement: I::Item) -> ReplaceIf<I, P>
where
    I: Forward,
    P: Fn(&I::Item) -> bool,
{
    ReplaceIf::new(inner, pred, replacement)
}

pub fn copy_replace_if<I, P>(inner: I, pred: P, replacement: I::Item) -> CopyReplaceIf<I, P>
where
    I: Forward,
    P: Fn(&I::Item) -> bool,
{
    ReplaceIf::new(inner, pred, replacement)
}

pub fn transform<I, F, U, E>(inner: I, f: F) -> Transform<I, F, U, E>
where
    I: Forward,
    F: FnMut(I::Item) -> Result<U, E>,
{
    Transform::new(inner, f)
}

pub fn transform_infallible<I, F, U>(inner: I, f: F) -> TransformInfallible<I, F>
where
    I: Forward,
    F: Fn(I::Item) -> U,
{
    TransformInfallible::new(inner, f)
}

pub fn strided<I: Forward>(inner: I, stride: usize) -> Strided<I> {
    Strided::new(inner, stride)
}

pub fn join<I: Forward>(inners: Vec<I>) -> Join<I> {
    Join::new(inners)
}
