use crate::iterator::{Forward, Keyed, Position, Readable, Tracker};

/// Cursor over any `std::iter::Iterator`
///
/// The current element is buffered so that `get()` stays idempotent. The
/// size is known only when the wrapped iterator reports an exact size hint
/// at construction.
#[derive(Debug, Clone)]
pub struct StdIterator<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    size: Option<usize>,
    tracker: Tracker,
}

impl<I: Iterator> StdIterator<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        let iter = iter.into_iter();
        let size = match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        };
        StdIterator {
            iter,
            current: None,
            size,
            tracker: Tracker::new(),
        }
    }
}

impl<I> Readable for StdIterator<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn get(&self) -> Option<I::Item> {
        self.current.clone()
    }
}

impl<I> Forward for StdIterator<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
        }
        self.current = self.iter.next();
        if self.current.is_some() {
            self.tracker.emit()
        } else {
            self.size = Some(self.tracker.emitted());
            self.tracker.finish()
        }
    }

    fn position(&self) -> Position {
        self.tracker.position()
    }

    fn size(&self) -> Option<usize> {
        self.size
    }
}

/// Bridge from a cursor to `std::iter::Iterator`, yielding values
///
/// A cursor that is already positioned on an element yields that element
/// first.
#[derive(Debug, Clone)]
pub struct Values<I> {
    inner: I,
    primed: bool,
}

impl<I: Forward> Values<I> {
    pub fn new(inner: I) -> Self {
        let primed = inner.is_valid();
        Values { inner, primed }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }

    fn advance(&mut self) -> bool {
        if std::mem::take(&mut self.primed) {
            true
        } else {
            self.inner.next()
        }
    }
}

impl<I: Forward> Iterator for Values<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.advance() { self.inner.get() } else { None }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = match (self.inner.position(), self.inner.size()) {
            (Position::End, _) => Some(0),
            (Position::Begin, size) => size,
            (Position::At(i), size) => size.map(|s| s.saturating_sub(i + usize::from(!self.primed))),
        };
        (0, upper)
    }
}

/// Bridge from a keyed cursor to `std::iter::Iterator`, yielding
/// `(key, value)` pairs
#[derive(Debug, Clone)]
pub struct Entries<I> {
    values: Values<I>,
}

impl<I: Keyed> Entries<I> {
    pub fn new(inner: I) -> Self {
        Entries {
            values: Values::new(inner),
        }
    }
}

impl<I: Keyed> Iterator for Entries<I> {
    type Item = (I::Key, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.values.advance() {
            return None;
        }
        let inner = &self.values.inner;
        inner.key().zip(inner.get())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{MapIterator, SliceIterator};

    #[test]
    fn test_std_iterator_exact_size() {
        let mut iter = StdIterator::new(vec![1, 2, 3]);
        assert_eq!(iter.size(), Some(3));
        assert!(iter.next());
        assert_eq!(iter.get(), Some(1));
        assert_eq!(iter.get(), Some(1));
        assert!(iter.next_n(2));
        assert_eq!(iter.get(), Some(3));
        assert!(!iter.next());
        assert!(iter.is_end());
        assert_eq!(iter.get(), None);
    }

    #[test]
    fn test_std_iterator_unknown_size() {
        let mut iter = StdIterator::new((0..10).filter(|x| x % 3 == 0));
        assert_eq!(iter.size(), None);
        let mut seen = Vec::new();
        while iter.next() {
            seen.extend(iter.get());
        }
        assert_eq!(seen, vec![0, 3, 6, 9]);
        assert_eq!(iter.size(), Some(4));
    }

    #[test]
    fn test_values_bridge() {
        let data = [1, 2, 3];
        let values: Vec<_> = Values::new(SliceIterator::new(&data)).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_values_starts_at_current_element() {
        let data = [1, 2, 3];
        let mut iter = SliceIterator::new(&data);
        assert!(iter.next_n(2));
        let values: Vec<_> = Values::new(iter).collect();
        assert_eq!(values, vec![2, 3]);
    }

    #[test]
    fn test_entries_bridge() {
        let iter = MapIterator::new(vec![("x", 1), ("y", 2)]);
        let entries: Vec<_> = Entries::new(iter).collect();
        assert_eq!(entries, vec![("x", 1), ("y", 2)]);
    }
}
