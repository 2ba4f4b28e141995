use crate::iterator::{Forward, Position, Readable, Tracker};

/// Values drawn from a supplier, up to an optional limit
///
/// The supplier runs once per `next()` and its output is cached for `get()`.
/// A supplier returning `None` ends the sequence early. With no limit the
/// sequence is unbounded and the size is unknown.
pub struct Repeat<T, F> {
    supplier: F,
    limit: Option<usize>,
    current: Option<T>,
    size: Option<usize>,
    tracker: Tracker,
}

impl<T, F> Repeat<T, F>
where
    F: FnMut() -> Option<T>,
{
    pub fn new(supplier: F, limit: Option<usize>) -> Self {
        Repeat {
            supplier,
            limit,
            current: None,
            size: limit,
            tracker: Tracker::new(),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn finish(&mut self) -> bool {
        self.current = None;
        self.size = Some(self.tracker.emitted());
        self.tracker.finish()
    }
}

/// Repeat clones of `value`, `limit` times or forever
pub fn repeat_value<T: Clone>(value: T, limit: Option<usize>) -> Repeat<T, impl FnMut() -> Option<T>> {
    Repeat::new(move || Some(value.clone()), limit)
}

impl<T, F> Readable for Repeat<T, F>
where
    T: Clone,
{
    type Item = T;

    fn get(&self) -> Option<T> {
        if self.tracker.is_valid() { self.current.clone() } else { None }
    }
}

impl<T, F> Forward for Repeat<T, F>
where
    T: Clone,
    F: FnMut() -> Option<T>,
{
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
        }
        if self.limit.is_some_and(|limit| self.tracker.emitted() >= limit) {
            return self.finish();
        }
        match (self.supplier)() {
            Some(value) => {
                self.current = Some(value);
                self.tracker.emit()
            },
            None => self.finish(),
        }
    }

    fn position(&self) -> Position {
        self.tracker.position()
    }

    fn size(&self) -> Option<usize> {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{ForwardExt, Indexed};

    #[test]
    fn test_repeat_value_limited() {
        let mut iter = repeat_value('x', Some(3));
        assert_eq!(iter.size(), Some(3));
        assert!(iter.next());
        assert_eq!(iter.get(), Some('x'));
        assert!(iter.next());
        assert!(iter.next());
        assert!(iter.is_last());
        assert!(!iter.next());
        assert!(iter.is_end());
        assert_eq!(iter.get(), None);
    }

    #[test]
    fn test_repeat_zero_limit() {
        let mut iter = repeat_value(1, Some(0));
        assert!(iter.is_begin());
        assert!(!iter.next());
        assert!(iter.is_end());
    }

    #[test]
    fn test_repeat_unbounded() {
        let iter = repeat_value(7, None);
        assert_eq!(iter.size(), None);
        assert_eq!(iter.take_n(4).materialize(), vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_repeat_supplier_state() {
        let mut n = 0;
        let mut iter = Repeat::new(
            move || {
                n += 1;
                Some(n * n)
            },
            Some(4),
        );
        assert!(iter.next());
        assert_eq!(iter.get(), Some(1));
        assert_eq!(iter.get(), Some(1));
        assert!(iter.next());
        assert_eq!(iter.get(), Some(4));
        assert_eq!(iter.index(), Some(1));
        assert_eq!(iter.materialize(), vec![4, 9, 16]);
    }

    #[test]
    fn test_repeat_supplier_ends_early() {
        let mut left = 2;
        let mut iter = Repeat::new(
            move || {
                left -= 1;
                (left >= 0).then_some(left)
            },
            Some(10),
        );
        assert_eq!(iter.size(), Some(10));
        assert_eq!((&mut iter).materialize(), vec![1, 0]);
        assert_eq!(iter.size(), Some(2));
    }
}
