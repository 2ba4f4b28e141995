//! Drivers over any cursor
//!
//! Locations are ordinals. A driver accepts a fresh cursor and advances it
//! onto the first element itself, or a cursor already on an element, in
//! which case it starts from there and the reported ordinals are the
//! cursor's own.

use crate::{
    algorithm::cursor::{self, ByIndex},
    iterator::{Forward, ForwardExt, Values},
    util::{BoxError, Error, Location, Result},
};

/// Ordinal of the first element equal to `needle`
pub fn find<I>(iter: I, needle: &I::Item) -> Result<usize, I::Item>
where
    I: Forward,
    I::Item: PartialEq,
{
    cursor::find::<I, ByIndex>(iter, needle)
}

/// Ordinal of the first element satisfying `pred`
pub fn find_if<I, P>(iter: I, pred: P) -> Result<usize, I::Item>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    cursor::find_if::<I, ByIndex, P>(iter, pred)
}

/// Start ordinal of the last occurrence of `sub` in `iter`
///
/// Both inputs are drained before searching.
pub fn find_end<I, S, C>(iter: I, sub: S, mut cmp: C) -> Result<usize, I::Item>
where
    I: Forward,
    S: Forward<Item = I::Item>,
    C: FnMut(&I::Item, &I::Item) -> bool,
{
    let hay = try_materialize(iter)?;
    let sub = try_materialize(sub)?;
    if hay.is_empty() || sub.is_empty() {
        return Err(Error::EmptyInput);
    }
    if sub.len() > hay.len() {
        return Err(Error::ElementNotFound);
    }
    hay.windows(sub.len())
        .rposition(|window| window.iter().zip(&sub).all(|(a, b)| cmp(a, b)))
        .ok_or(Error::ElementNotFound)
}

/// Ordinal of the first element `cmp`-equal to any of `needles`
pub fn find_first_of<I, C>(iter: I, needles: &[I::Item], cmp: C) -> Result<usize, I::Item>
where
    I: Forward,
    C: FnMut(&I::Item, &I::Item) -> bool,
{
    cursor::find_first_of::<I, ByIndex, C>(iter, needles, cmp)
}

pub fn all_of<I, P>(iter: I, pred: P) -> Result<(), I::Item>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    cursor::all_of::<I, ByIndex, P>(iter, pred)
}

/// Fails with the last element seen when nothing satisfies `pred`
pub fn any_of<I, P>(iter: I, pred: P) -> Result<(), I::Item>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    cursor::any_of::<I, ByIndex, P>(iter, pred)
}

pub fn none_of<I, P>(iter: I, pred: P) -> Result<(), I::Item>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    cursor::none_of::<I, ByIndex, P>(iter, pred)
}

/// Run `action` on every element, stopping at its first error
pub fn foreach<I, F, E>(iter: I, action: F) -> Result<(), I::Item>
where
    I: Forward,
    F: FnMut(&I::Item) -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    cursor::foreach::<I, ByIndex, F, E>(iter, action)
}

pub fn count<I>(iter: I, value: &I::Item) -> Result<usize, I::Item>
where
    I: Forward,
    I::Item: PartialEq,
{
    cursor::count_if::<I, ByIndex, _>(iter, |item| item == value)
}

pub fn count_if<I, P>(iter: I, pred: P) -> Result<usize, I::Item>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    cursor::count_if::<I, ByIndex, P>(iter, pred)
}

/// Ordinal of the first position where `a` and `b` differ
///
/// When one input is a prefix of the other, the shorter length is the
/// first differing position.
pub fn mismatch<A, B>(mut a: A, mut b: B) -> Result<usize, A::Item>
where
    A: Forward,
    B: Forward<Item = A::Item>,
    A::Item: PartialEq,
{
    let (a_started, b_started) = (cursor::start(&mut a), cursor::start(&mut b));
    if !a_started || !b_started {
        cursor::check_fault(&mut a)?;
        cursor::check_fault(&mut b)?;
        return Err(Error::EmptyInput);
    }
    let mut offset = 0;
    loop {
        if a.get() != b.get() {
            return Ok(offset);
        }
        offset += 1;
        let (a_moved, b_moved) = (a.next(), b.next());
        if !a_moved || !b_moved {
            cursor::check_fault(&mut a)?;
            cursor::check_fault(&mut b)?;
        }
        match (a_moved, b_moved) {
            (true, true) => continue,
            (false, false) => return Err(Error::EqualInputs),
            _ => return Ok(offset),
        }
    }
}

/// Ordinal of the first element `i` with `cmp(v[i], v[i + 1])`
///
/// Fewer than two elements is an empty input.
pub fn adjacent_find<I, C>(mut iter: I, mut cmp: C) -> Result<usize, I::Item>
where
    I: Forward,
    C: FnMut(&I::Item, &I::Item) -> bool,
{
    if !cursor::start(&mut iter) {
        cursor::check_fault(&mut iter)?;
        return Err(Error::EmptyInput);
    }
    let (Some(mut prev), Some(mut prev_index)) = (iter.get(), iter.position().index()) else {
        return Err(Error::EmptyInput);
    };
    if !iter.next() {
        cursor::check_fault(&mut iter)?;
        return Err(Error::EmptyInput);
    }
    loop {
        let (Some(item), Some(index)) = (iter.get(), iter.position().index()) else {
            return Err(Error::ElementNotFound);
        };
        if cmp(&prev, &item) {
            return Ok(prev_index);
        }
        prev = item;
        prev_index = index;
        if !iter.next() {
            cursor::check_fault(&mut iter)?;
            return Err(Error::ElementNotFound);
        }
    }
}

/// Collect the elements, replacing those equal to `old` with `new`
pub fn copy_replace<I>(iter: I, old: &I::Item, new: &I::Item) -> Result<Vec<I::Item>, I::Item>
where
    I: Forward,
    I::Item: PartialEq + Clone,
{
    cursor::copy_replace_if::<I, ByIndex, _, _>(iter, |item| item == old, new)
}

pub fn copy_replace_if<I, P>(iter: I, pred: P, new: &I::Item) -> Result<Vec<I::Item>, I::Item>
where
    I: Forward,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    cursor::copy_replace_if::<I, ByIndex, _, _>(iter, pred, new)
}

pub fn copy_replace_if_not<I, P>(iter: I, mut pred: P, new: &I::Item) -> Result<Vec<I::Item>, I::Item>
where
    I: Forward,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    cursor::copy_replace_if::<I, ByIndex, _, _>(iter, |item| !pred(item), new)
}

/// Collect the elements not equal to `value`
pub fn copy_except<I>(iter: I, value: &I::Item) -> Result<Vec<I::Item>, I::Item>
where
    I: Forward,
    I::Item: PartialEq,
{
    cursor::copy_except_if::<I, ByIndex, _, _>(iter, |item| item == value)
}

pub fn copy_except_if<I, P>(iter: I, pred: P) -> Result<Vec<I::Item>, I::Item>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    cursor::copy_except_if::<I, ByIndex, _, _>(iter, pred)
}

pub fn copy_except_if_not<I, P>(iter: I, mut pred: P) -> Result<Vec<I::Item>, I::Item>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    cursor::copy_except_if::<I, ByIndex, _, _>(iter, |item| !pred(item))
}

/// Collect `f` applied to every element, stopping at its first error
///
/// A cursor cannot be written through, so the results come back as a new
/// vector; [`slice::transform`](crate::algorithm::slice::transform) mutates
/// in place.
pub fn transform<I, F, U, E>(mut iter: I, mut f: F) -> Result<Vec<U>, I::Item>
where
    I: Forward,
    I::Item: Clone,
    F: FnMut(&I::Item) -> std::result::Result<U, E>,
    E: Into<BoxError>,
{
    if !cursor::start(&mut iter) {
        cursor::check_fault(&mut iter)?;
        return Err(Error::EmptyInput);
    }
    let mut out = Vec::new();
    loop {
        if let (Some(item), Some(index)) = (iter.get(), iter.position().index()) {
            match f(&item) {
                Ok(value) => out.push(value),
                Err(cause) => return Err(Error::execution_failed(Location::Index(index), item, cause)),
            }
        }
        if !iter.next() {
            cursor::check_fault(&mut iter)?;
            return Ok(out);
        }
    }
}

/// Drain a cursor into a vector
pub fn materialize<I: Forward>(iter: I) -> Vec<I::Item> {
    iter.materialize()
}

/// Drain a cursor into a vector, surfacing a failure latched anywhere in
/// the pipeline as [`Error::ExecutionFailed`]
///
/// The error carries no item. Call
/// [`Transform::try_materialize`](crate::adapter::Transform::try_materialize)
/// directly to get back the element that failed.
pub fn try_materialize<I: Forward>(mut iter: I) -> Result<Vec<I::Item>, I::Item> {
    let out = Values::new(&mut iter).collect();
    cursor::check_fault(&mut iter)?;
    Ok(out)
}
