//! Drivers over ordered sequences
//!
//! Everything here takes a slice, so `Vec`, arrays and boxed slices all
//! work. Locations are indices into the slice. Elements are scanned by
//! reference; only the element named in an error is cloned.

use crate::util::{BoxError, Error, Location, Result};

fn non_empty<T>(v: &[T]) -> Result<(), T> {
    if v.is_empty() { Err(Error::EmptyInput) } else { Ok(()) }
}

pub fn find<T: PartialEq>(v: &[T], needle: &T) -> Result<usize, T> {
    find_if(v, |item| item == needle)
}

pub fn find_if<T, P>(v: &[T], pred: P) -> Result<usize, T>
where
    P: FnMut(&T) -> bool,
{
    non_empty(v)?;
    v.iter().position(pred).ok_or(Error::ElementNotFound)
}

/// Start index of the last occurrence of `sub` in `v`
pub fn find_end<T, C>(v: &[T], sub: &[T], mut cmp: C) -> Result<usize, T>
where
    C: FnMut(&T, &T) -> bool,
{
    if v.is_empty() || sub.is_empty() {
        return Err(Error::EmptyInput);
    }
    if sub.len() > v.len() {
        return Err(Error::ElementNotFound);
    }
    v.windows(sub.len())
        .rposition(|window| window.iter().zip(sub).all(|(a, b)| cmp(a, b)))
        .ok_or(Error::ElementNotFound)
}

pub fn find_first_of<T, C>(v: &[T], needles: &[T], mut cmp: C) -> Result<usize, T>
where
    C: FnMut(&T, &T) -> bool,
{
    non_empty(needles)?;
    find_if(v, |item| needles.iter().any(|needle| cmp(item, needle)))
}

pub fn all_of<T, P>(v: &[T], mut pred: P) -> Result<(), T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    non_empty(v)?;
    match v.iter().position(|item| !pred(item)) {
        Some(i) => Err(Error::comparison_failed(Location::Index(i), v[i].clone())),
        None => Ok(()),
    }
}

/// Fails with the last element when nothing satisfies `pred`
pub fn any_of<T, P>(v: &[T], pred: P) -> Result<(), T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let Some((last, _)) = v.split_last() else {
        return Err(Error::EmptyInput);
    };
    if v.iter().any(pred) {
        Ok(())
    } else {
        Err(Error::comparison_failed(Location::Index(v.len() - 1), last.clone()))
    }
}

pub fn none_of<T, P>(v: &[T], mut pred: P) -> Result<(), T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    all_of(v, |item| !pred(item))
}

pub fn foreach<T, F, E>(v: &[T], mut action: F) -> Result<(), T>
where
    T: Clone,
    F: FnMut(&T) -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    non_empty(v)?;
    for (i, item) in v.iter().enumerate() {
        if let Err(cause) = action(item) {
            return Err(Error::execution_failed(Location::Index(i), item.clone(), cause));
        }
    }
    Ok(())
}

pub fn count<T: PartialEq>(v: &[T], value: &T) -> Result<usize, T> {
    count_if(v, |item| item == value)
}

pub fn count_if<T, P>(v: &[T], mut pred: P) -> Result<usize, T>
where
    P: FnMut(&T) -> bool,
{
    non_empty(v)?;
    Ok(v.iter().filter(|item| pred(*item)).count())
}

/// First index where `a` and `b` differ; the shorter length if one is a
/// prefix of the other
pub fn mismatch<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize, T> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::EmptyInput);
    }
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(i) => Ok(i),
        None if a.len() == b.len() => Err(Error::EqualInputs),
        None => Ok(a.len().min(b.len())),
    }
}

/// First index `i` with `cmp(v[i], v[i + 1])`
pub fn adjacent_find<T, C>(v: &[T], mut cmp: C) -> Result<usize, T>
where
    C: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return Err(Error::EmptyInput);
    }
    v.windows(2).position(|pair| cmp(&pair[0], &pair[1])).ok_or(Error::ElementNotFound)
}

pub fn copy_replace<T: PartialEq + Clone>(v: &[T], old: &T, new: &T) -> Result<Vec<T>, T> {
    copy_replace_if(v, |item| item == old, new)
}

pub fn copy_replace_if<T, P>(v: &[T], mut pred: P, new: &T) -> Result<Vec<T>, T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    non_empty(v)?;
    Ok(v.iter().map(|item| if pred(item) { new.clone() } else { item.clone() }).collect())
}

pub fn copy_replace_if_not<T, P>(v: &[T], mut pred: P, new: &T) -> Result<Vec<T>, T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    copy_replace_if(v, |item| !pred(item), new)
}

pub fn copy_except<T: PartialEq + Clone>(v: &[T], value: &T) -> Result<Vec<T>, T> {
    copy_except_if(v, |item| item == value)
}

pub fn copy_except_if<T, P>(v: &[T], mut pred: P) -> Result<Vec<T>, T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    non_empty(v)?;
    Ok(v.iter().filter(|item| !pred(*item)).cloned().collect())
}

pub fn copy_except_if_not<T, P>(v: &[T], mut pred: P) -> Result<Vec<T>, T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    copy_except_if(v, |item| !pred(item))
}

/// Replace every element with `f` of itself, in place
///
/// Stops at the first error: elements before it are already rewritten, the
/// failing one and everything after are untouched.
pub fn transform<T, F, E>(v: &mut [T], mut f: F) -> Result<(), T>
where
    T: Clone,
    F: FnMut(&T) -> std::result::Result<T, E>,
    E: Into<BoxError>,
{
    if v.is_empty() {
        return Err(Error::EmptyInput);
    }
    for (i, slot) in v.iter_mut().enumerate() {
        match f(slot) {
            Ok(value) => *slot = value,
            Err(cause) => return Err(Error::execution_failed(Location::Index(i), slot.clone(), cause)),
        }
    }
    Ok(())
}
