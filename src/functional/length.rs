//! Length predicates over sequences, keyed collections and strings

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::BuildHasher,
};

/// A collection with a known element count
///
/// Strings count bytes, as `str::len` does.
pub trait HasLength {
    fn length(&self) -> usize;
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S: BuildHasher> HasLength for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S: BuildHasher> HasLength for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.len()
    }
}

pub fn has_length<C: HasLength + ?Sized>(c: &C, n: usize) -> bool {
    c.length() == n
}

/// Partial form of [`has_length`]
pub fn length_of<C: HasLength + ?Sized>(n: usize) -> impl Fn(&C) -> bool {
    move |c| c.length() == n
}
