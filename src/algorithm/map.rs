//! Drivers over keyed collections
//!
//! Any `M` whose shared reference iterates as `(&K, &V)` works: `HashMap`,
//! `BTreeMap`, or a user collection. Locations are keys. The visiting order
//! is the collection's own iteration order, fixed for one call and
//! unspecified for hash maps.
//!
//! Errors carry owned copies of the offending key and value.

use crate::{
    algorithm::cursor::{self, ByKey},
    iterator::MapIterator,
    util::{BoxError, Error, Location, Result},
};

fn owned<K: Clone, V: Clone>(err: Error<&V, &K>) -> Error<V, K> {
    err.map_parts(V::clone, K::clone)
}

/// Key of the first value equal to `needle`
pub fn find<'a, M, K, V>(map: &'a M, needle: &V) -> Result<K, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: PartialEq + Clone + 'a,
{
    cursor::find_if::<_, ByKey, _>(MapIterator::borrowed(map), |v| *v == needle)
        .map(K::clone)
        .map_err(owned)
}

pub fn find_if<'a, M, K, V, P>(map: &'a M, mut pred: P) -> Result<K, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&V) -> bool,
{
    cursor::find_if::<_, ByKey, _>(MapIterator::borrowed(map), |v| pred(*v))
        .map(K::clone)
        .map_err(owned)
}

/// Key of the first value `cmp`-equal to any of `needles`
pub fn find_first_of<'a, M, K, V, C>(map: &'a M, needles: &[V], mut cmp: C) -> Result<K, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    C: FnMut(&V, &V) -> bool,
{
    if needles.is_empty() {
        return Err(Error::EmptyInput);
    }
    find_if(map, |v| needles.iter().any(|needle| cmp(v, needle)))
}

pub fn all_of<'a, M, K, V, P>(map: &'a M, mut pred: P) -> Result<(), V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&V) -> bool,
{
    cursor::all_of::<_, ByKey, _>(MapIterator::borrowed(map), |v| pred(*v)).map_err(owned)
}

pub fn any_of<'a, M, K, V, P>(map: &'a M, mut pred: P) -> Result<(), V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&V) -> bool,
{
    cursor::any_of::<_, ByKey, _>(MapIterator::borrowed(map), |v| pred(*v)).map_err(owned)
}

pub fn none_of<'a, M, K, V, P>(map: &'a M, mut pred: P) -> Result<(), V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&V) -> bool,
{
    cursor::none_of::<_, ByKey, _>(MapIterator::borrowed(map), |v| pred(*v)).map_err(owned)
}

/// Run `action` on every entry, stopping at its first error
pub fn foreach<'a, M, K, V, F, E>(map: &'a M, mut action: F) -> Result<(), V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    F: FnMut(&K, &V) -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    let mut entries = map.into_iter().peekable();
    if entries.peek().is_none() {
        return Err(Error::EmptyInput);
    }
    for (key, value) in entries {
        if let Err(cause) = action(key, value) {
            return Err(Error::execution_failed(Location::Key(key.clone()), value.clone(), cause));
        }
    }
    Ok(())
}

pub fn count<'a, M, K, V>(map: &'a M, value: &V) -> Result<usize, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: PartialEq + Clone + 'a,
{
    cursor::count_if::<_, ByKey, _>(MapIterator::borrowed(map), |v| *v == value).map_err(owned)
}

pub fn count_if<'a, M, K, V, P>(map: &'a M, mut pred: P) -> Result<usize, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&V) -> bool,
{
    cursor::count_if::<_, ByKey, _>(MapIterator::borrowed(map), |v| pred(*v)).map_err(owned)
}

/// Copy the collection into a fresh `C`, replacing values satisfying
/// `pred` with `new`; keys are preserved
pub fn copy_replace_if<'a, M, K, V, P, C>(map: &'a M, mut pred: P, new: &'a V) -> Result<C, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&V) -> bool,
    C: FromIterator<(K, V)>,
{
    let entries: Vec<(&K, &V)> =
        cursor::copy_replace_if::<_, ByKey, _, _>(MapIterator::borrowed(map), |v| pred(*v), &new)
            .map_err(owned)?;
    Ok(entries.into_iter().map(|(k, v)| (k.clone(), v.clone())).collect())
}

pub fn copy_replace<'a, M, K, V, C>(map: &'a M, old: &V, new: &'a V) -> Result<C, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: PartialEq + Clone + 'a,
    C: FromIterator<(K, V)>,
{
    copy_replace_if(map, |v| v == old, new)
}

pub fn copy_replace_if_not<'a, M, K, V, P, C>(map: &'a M, mut pred: P, new: &'a V) -> Result<C, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&V) -> bool,
    C: FromIterator<(K, V)>,
{
    copy_replace_if(map, |v| !pred(v), new)
}

/// Copy the collection into a fresh `C`, leaving out values satisfying
/// `pred`
pub fn copy_except_if<'a, M, K, V, P, C>(map: &'a M, mut pred: P) -> Result<C, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&V) -> bool,
    C: FromIterator<(K, V)>,
{
    let entries: Vec<(&K, &V)> =
        cursor::copy_except_if::<_, ByKey, _, _>(MapIterator::borrowed(map), |v| pred(*v)).map_err(owned)?;
    Ok(entries.into_iter().map(|(k, v)| (k.clone(), v.clone())).collect())
}

pub fn copy_except<'a, M, K, V, C>(map: &'a M, value: &V) -> Result<C, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: PartialEq + Clone + 'a,
    C: FromIterator<(K, V)>,
{
    copy_except_if(map, |v| v == value)
}

pub fn copy_except_if_not<'a, M, K, V, P, C>(map: &'a M, mut pred: P) -> Result<C, V, K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&V) -> bool,
    C: FromIterator<(K, V)>,
{
    copy_except_if(map, |v| !pred(v))
}

/// Replace every value with `f` of itself, in place
///
/// Stops at the first error, leaving that entry and the ones not yet
/// visited untouched.
pub fn transform<'a, M, K, V, F, E>(map: &'a mut M, mut f: F) -> Result<(), V, K>
where
    M: ?Sized,
    &'a mut M: IntoIterator<Item = (&'a K, &'a mut V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    F: FnMut(&V) -> std::result::Result<V, E>,
    E: Into<BoxError>,
{
    let mut entries = map.into_iter().peekable();
    if entries.peek().is_none() {
        return Err(Error::EmptyInput);
    }
    for (key, value) in entries {
        match f(&*value) {
            Ok(new) => *value = new,
            Err(cause) => return Err(Error::execution_failed(Location::Key(key.clone()), value.clone(), cause)),
        }
    }
    Ok(())
}
