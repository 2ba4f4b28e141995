use crate::iterator::{Forward, Keyed, Position, Readable};

/// Keyed cursor over a snapshot of a map's entries
///
/// The entry order is the order the source yielded them in; for hash maps
/// that order is unspecified but stable for the lifetime of the cursor.
#[derive(Debug, Clone)]
pub struct MapIterator<K, V> {
    entries: Vec<(K, V)>,
    position: Position,
}

impl<K, V> MapIterator<K, V> {
    pub fn new(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        MapIterator {
            entries: entries.into_iter().collect(),
            position: Position::Begin,
        }
    }

    /// Borrow the entry under the cursor
    pub fn current(&self) -> Option<(&K, &V)> {
        self.position
            .index()
            .and_then(|i| self.entries.get(i))
            .map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, K, V> MapIterator<&'a K, &'a V> {
    /// Cursor over borrowed entries of any map-like collection
    pub fn borrowed<M>(map: &'a M) -> Self
    where
        &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    {
        MapIterator::new(map)
    }
}

impl<K: PartialEq, V> MapIterator<K, V> {
    /// Position the cursor on the entry whose key equals `target`
    ///
    /// Scans forward from the current entry first; if that exhausts, scans
    /// backward from just before the current entry. Returns false and
    /// leaves the cursor where it was when no entry matches.
    pub fn move_to_key(&mut self, target: &K) -> bool {
        let origin = match self.position {
            Position::Begin => 0,
            Position::At(i) => i,
            Position::End => self.entries.len(),
        };

        let forward = (origin..self.entries.len()).find(|&i| self.entries[i].0 == *target);
        let found = forward.or_else(|| (0..origin).rev().find(|&i| self.entries[i].0 == *target));

        match found {
            Some(i) => {
                self.position = Position::At(i);
                true
            },
            None => false,
        }
    }
}

impl<K, V: Clone> Readable for MapIterator<K, V> {
    type Item = V;

    fn get(&self) -> Option<V> {
        self.current().map(|(_, v)| v.clone())
    }
}

impl<K, V: Clone> Forward for MapIterator<K, V> {
    fn next(&mut self) -> bool {
        let next = match self.position {
            Position::Begin => 0,
            Position::At(i) => i + 1,
            Position::End => return false,
        };

        if next < self.entries.len() {
            self.position = Position::At(next);
            true
        } else {
            self.position = Position::End;
            false
        }
    }

    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

impl<K: Clone, V: Clone> Keyed for MapIterator<K, V> {
    type Key = K;

    fn key(&self) -> Option<K> {
        self.current().map(|(k, _)| k.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn sample() -> BTreeMap<&'static str, i32> {
        BTreeMap::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[test]
    fn test_map_iterator_basic() {
        let map = sample();
        let mut iter = MapIterator::borrowed(&map);
        assert!(iter.is_begin());
        assert_eq!(iter.key(), None);

        assert!(iter.next());
        assert_eq!(iter.key(), Some(&"a"));
        assert_eq!(iter.get(), Some(&1));

        assert!(iter.next_n(2));
        assert_eq!(iter.key(), Some(&"c"));
        assert!(iter.is_last());

        assert!(!iter.next());
        assert!(iter.is_end());
        assert_eq!(iter.key(), None);
    }

    #[test]
    fn test_move_to_key_forward() {
        let map = sample();
        let mut iter = MapIterator::new(map);
        assert!(iter.move_to_key(&"b"));
        assert_eq!(iter.key(), Some("b"));
        assert_eq!(iter.get(), Some(2));
        assert!(iter.next());
        assert_eq!(iter.key(), Some("c"));
    }

    #[test]
    fn test_move_to_key_backward() {
        let mut iter = MapIterator::new(sample());
        assert!(iter.next_n(3));
        assert!(iter.move_to_key(&"a"));
        assert_eq!(iter.position(), Position::At(0));
    }

    #[test]
    fn test_move_to_key_missing() {
        let mut iter = MapIterator::new(sample());
        assert!(iter.next());
        assert!(!iter.move_to_key(&"z"));
        assert_eq!(iter.key(), Some("a"));
    }
}
