//! Driver bodies shared by every surface
//!
//! Each driver is written once over a [`Forward`] cursor and a [`Locate`]
//! strategy that decides whether elements are addressed by ordinal or by
//! key.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::{
    iterator::{Forward, Keyed},
    util::{BoxError, Error, Fault, Location, Result},
};

/// How a driver names the element it stopped on
pub(crate) trait Locate<I: Forward> {
    type Key;
    /// Element shape of the containers built by the `copy_*` drivers
    type Entry;

    fn locate(iter: &I) -> Option<Self::Key>;

    fn location(key: Self::Key) -> Location<Self::Key>;

    fn entry(key: Self::Key, item: I::Item) -> Self::Entry;
}

/// Address elements by ordinal
pub(crate) struct ByIndex;

impl<I: Forward> Locate<I> for ByIndex {
    type Key = usize;
    type Entry = I::Item;

    fn locate(iter: &I) -> Option<usize> {
        iter.position().index()
    }

    fn location(key: usize) -> Location<usize> {
        Location::Index(key)
    }

    fn entry(_key: usize, item: I::Item) -> I::Item {
        item
    }
}

/// Address elements by key
pub(crate) struct ByKey;

impl<I: Keyed> Locate<I> for ByKey {
    type Key = I::Key;
    type Entry = (I::Key, I::Item);

    fn locate(iter: &I) -> Option<I::Key> {
        iter.key()
    }

    fn location(key: I::Key) -> Location<I::Key> {
        Location::Key(key)
    }

    fn entry(key: I::Key, item: I::Item) -> (I::Key, I::Item) {
        (key, item)
    }
}

type Outcome<I, L, R> = Result<R, <I as crate::iterator::Readable>::Item, <L as Locate<I>>::Key>;

/// Move a fresh cursor onto its first element, or accept one already on
/// an element. Returns false for an input with nothing to read.
pub(crate) fn start<I: Forward>(iter: &mut I) -> bool {
    if iter.is_begin() { iter.next() } else { iter.is_valid() }
}

/// Surface a fault latched by a fallible stage somewhere in `iter`
///
/// Call once the cursor has stopped moving. An `End` reached by a failure
/// looks the same as exhaustion until this is asked.
pub(crate) fn check_fault<I: Forward>(iter: &mut I) -> std::result::Result<(), Fault> {
    match iter.take_fault() {
        Some(fault) => {
            debug!(index = fault.index, "pipeline stage failed");
            Err(fault)
        },
        None => Ok(()),
    }
}

/// How a [`scan`] ended
enum Scanned<R> {
    /// Nothing to visit
    Empty,
    Stopped(R),
    Exhausted,
}

/// Visit every element from the cursor's current place onward
///
/// A pipeline fault raised while moving is returned as `ExecutionFailed`
/// in place of `Empty` or `Exhausted`.
fn scan<I, L, R>(
    iter: &mut I,
    mut visit: impl FnMut(L::Key, I::Item) -> ControlFlow<R>,
) -> Outcome<I, L, Scanned<R>>
where
    I: Forward,
    L: Locate<I>,
{
    if !start(iter) {
        check_fault(iter)?;
        return Ok(Scanned::Empty);
    }
    loop {
        if let (Some(key), Some(item)) = (L::locate(iter), iter.get()) {
            if let ControlFlow::Break(r) = visit(key, item) {
                trace!("driver short-circuited");
                return Ok(Scanned::Stopped(r));
            }
        }
        if !iter.next() {
            check_fault(iter)?;
            return Ok(Scanned::Exhausted);
        }
    }
}

pub(crate) fn find_if<I, L, P>(mut iter: I, mut pred: P) -> Outcome<I, L, L::Key>
where
    I: Forward,
    L: Locate<I>,
    P: FnMut(&I::Item) -> bool,
{
    let scanned = scan::<I, L, _>(&mut iter, |key, item| {
        if pred(&item) { ControlFlow::Break(key) } else { ControlFlow::Continue(()) }
    })?;
    match scanned {
        Scanned::Empty => Err(Error::EmptyInput),
        Scanned::Stopped(key) => Ok(key),
        Scanned::Exhausted => Err(Error::ElementNotFound),
    }
}

pub(crate) fn find<I, L>(iter: I, needle: &I::Item) -> Outcome<I, L, L::Key>
where
    I: Forward,
    I::Item: PartialEq,
    L: Locate<I>,
{
    find_if::<I, L, _>(iter, |item| item == needle)
}

pub(crate) fn find_first_of<I, L, C>(iter: I, needles: &[I::Item], mut cmp: C) -> Outcome<I, L, L::Key>
where
    I: Forward,
    L: Locate<I>,
    C: FnMut(&I::Item, &I::Item) -> bool,
{
    if needles.is_empty() {
        return Err(Error::EmptyInput);
    }
    find_if::<I, L, _>(iter, |item| needles.iter().any(|needle| cmp(item, needle)))
}

pub(crate) fn all_of<I, L, P>(mut iter: I, mut pred: P) -> Outcome<I, L, ()>
where
    I: Forward,
    L: Locate<I>,
    P: FnMut(&I::Item) -> bool,
{
    let scanned = scan::<I, L, _>(&mut iter, |key, item| {
        if pred(&item) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break((key, item))
        }
    })?;
    match scanned {
        Scanned::Empty => Err(Error::EmptyInput),
        Scanned::Stopped((key, item)) => Err(Error::comparison_failed(L::location(key), item)),
        Scanned::Exhausted => Ok(()),
    }
}

pub(crate) fn none_of<I, L, P>(iter: I, mut pred: P) -> Outcome<I, L, ()>
where
    I: Forward,
    L: Locate<I>,
    P: FnMut(&I::Item) -> bool,
{
    all_of::<I, L, _>(iter, |item| !pred(item))
}

/// Succeeds on the first satisfier; otherwise fails naming the last
/// element seen
pub(crate) fn any_of<I, L, P>(mut iter: I, mut pred: P) -> Outcome<I, L, ()>
where
    I: Forward,
    L: Locate<I>,
    P: FnMut(&I::Item) -> bool,
{
    let mut last = None;
    let scanned = scan::<I, L, _>(&mut iter, |key, item| {
        if pred(&item) {
            ControlFlow::Break(())
        } else {
            last = Some((key, item));
            ControlFlow::Continue(())
        }
    })?;
    match (scanned, last) {
        (Scanned::Empty, _) => Err(Error::EmptyInput),
        (Scanned::Stopped(()), _) => Ok(()),
        (Scanned::Exhausted, Some((key, item))) => Err(Error::comparison_failed(L::location(key), item)),
        (Scanned::Exhausted, None) => Err(Error::ElementNotFound),
    }
}

pub(crate) fn foreach<I, L, F, E>(mut iter: I, mut action: F) -> Outcome<I, L, ()>
where
    I: Forward,
    L: Locate<I>,
    F: FnMut(&I::Item) -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    let scanned = scan::<I, L, _>(&mut iter, |key, item| match action(&item) {
        Ok(()) => ControlFlow::Continue(()),
        Err(cause) => ControlFlow::Break((key, item, cause)),
    })?;
    match scanned {
        Scanned::Empty => Err(Error::EmptyInput),
        Scanned::Stopped((key, item, cause)) => Err(Error::execution_failed(L::location(key), item, cause)),
        Scanned::Exhausted => Ok(()),
    }
}

pub(crate) fn count_if<I, L, P>(mut iter: I, mut pred: P) -> Outcome<I, L, usize>
where
    I: Forward,
    L: Locate<I>,
    P: FnMut(&I::Item) -> bool,
{
    let mut count = 0;
    let scanned = scan::<I, L, ()>(&mut iter, |_, item| {
        if pred(&item) {
            count += 1;
        }
        ControlFlow::Continue(())
    })?;
    match scanned {
        Scanned::Empty => Err(Error::EmptyInput),
        _ => Ok(count),
    }
}

/// Rebuild the input, passing each element through `map`
fn rebuild<I, L, C, F>(mut iter: I, mut map: F) -> Outcome<I, L, C>
where
    I: Forward,
    L: Locate<I>,
    C: FromIterator<L::Entry>,
    F: FnMut(I::Item) -> Option<I::Item>,
{
    let mut entries = Vec::new();
    let scanned = scan::<I, L, ()>(&mut iter, |key, item| {
        if let Some(item) = map(item) {
            entries.push(L::entry(key, item));
        }
        ControlFlow::Continue(())
    })?;
    match scanned {
        Scanned::Empty => Err(Error::EmptyInput),
        _ => Ok(entries.into_iter().collect()),
    }
}

pub(crate) fn copy_replace_if<I, L, C, P>(iter: I, mut pred: P, replacement: &I::Item) -> Outcome<I, L, C>
where
    I: Forward,
    I::Item: Clone,
    L: Locate<I>,
    C: FromIterator<L::Entry>,
    P: FnMut(&I::Item) -> bool,
{
    rebuild::<I, L, C, _>(iter, |item| Some(if pred(&item) { replacement.clone() } else { item }))
}

pub(crate) fn copy_except_if<I, L, C, P>(iter: I, mut pred: P) -> Outcome<I, L, C>
where
    I: Forward,
    L: Locate<I>,
    C: FromIterator<L::Entry>,
    P: FnMut(&I::Item) -> bool,
{
    rebuild::<I, L, C, _>(iter, |item| (!pred(&item)).then_some(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{ForwardExt, MapIterator, SliceIterator};

    #[test]
    fn test_start_accepts_positioned_cursor() {
        let data = [1, 2, 3];
        let mut iter = SliceIterator::new(&data);
        assert!(iter.next_n(2));
        assert_eq!(find_if::<_, ByIndex, _>(&mut iter, |x| *x > 0).unwrap(), 1);
    }

    #[test]
    fn test_start_on_exhausted_cursor() {
        let data = [1];
        let mut iter = SliceIterator::new(&data);
        iter.next();
        iter.next();
        assert!(!start(&mut iter));
        assert!(find_if::<_, ByIndex, _>(iter, |_| true).unwrap_err().is_empty_input());
    }

    #[test]
    fn test_by_key_reports_keys() {
        let iter = MapIterator::new(vec![("a", 1), ("b", -2), ("c", 3)]);
        let err = all_of::<_, ByKey, _>(iter, |x| *x > 0).unwrap_err();
        assert_eq!(err.location(), Some(&Location::Key("b")));
        assert_eq!(err.item(), Some(&-2));
    }

    #[test]
    fn test_any_of_reports_last_seen() {
        let data = [1, 2, 3];
        let err = any_of::<_, ByIndex, _>(SliceIterator::new(&data), |x| *x > 5).unwrap_err();
        assert_eq!(err.location(), Some(&Location::Index(2)));
        assert_eq!(err.item(), Some(&3));
    }

    #[test]
    fn test_rebuild_keyed_entries() {
        let iter = MapIterator::new(vec![("a", 1), ("b", 2)]);
        let out: Vec<(&str, i32)> = copy_except_if::<_, ByKey, _, _>(iter, |x| *x == 1).unwrap();
        assert_eq!(out, vec![("b", 2)]);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("odd value {0}")]
    struct Odd(i32);

    fn halve(x: i32) -> std::result::Result<i32, Odd> {
        if x % 2 == 0 { Ok(x / 2) } else { Err(Odd(x)) }
    }

    #[test]
    fn test_scan_surfaces_fault_at_exhaustion() {
        let data = [2, 4, 5, 6];
        let iter = SliceIterator::new(&data).transform(halve);
        let err = count_if::<_, ByIndex, _>(iter, |_| true).unwrap_err();
        assert!(err.is_execution_failed());
        assert_eq!(err.location(), Some(&Location::Index(2)));
        assert_eq!(err.item(), None);
    }

    #[test]
    fn test_scan_fault_on_first_element_is_not_empty_input() {
        let data = [1, 2];
        let iter = SliceIterator::new(&data).transform(halve);
        let err = find_if::<_, ByIndex, _>(iter, |_| true).unwrap_err();
        assert!(err.is_execution_failed());
        assert_eq!(err.location(), Some(&Location::Index(0)));
    }

    #[test]
    fn test_short_circuit_before_fault_succeeds() {
        let data = [2, 4, 5];
        let iter = SliceIterator::new(&data).transform(halve);
        assert_eq!(find::<_, ByIndex>(iter, &2).unwrap(), 1);
    }
}
