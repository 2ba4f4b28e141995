use crate::{
    iterator::{Forward, Keyed, Position, Readable, Tracker},
    util::Fault,
};

/// Skips the first `n` elements of the inner cursor
///
/// The skip happens on the first `next()`. If the inner cursor runs out
/// while skipping, the adapter goes straight to `End`.
#[derive(Debug, Clone)]
pub struct DropN<I> {
    inner: I,
    n: usize,
    tracker: Tracker,
}

impl<I: Forward> DropN<I> {
    pub fn new(inner: I, n: usize) -> Self {
        DropN {
            inner,
            n,
            tracker: Tracker::new(),
        }
    }
}

impl<I: Forward> Readable for DropN<I> {
    type Item = I::Item;

    fn get(&self) -> Option<I::Item> {
        if self.tracker.is_valid() { self.inner.get() } else { None }
    }
}

impl<I: Forward> Forward for DropN<I> {
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
        }
        if self.tracker.is_begin() && self.n > 0 && !self.inner.next_n(self.n) {
            return self.tracker.finish();
        }
        if self.inner.next() {
            self.tracker.emit()
        } else {
            self.tracker.finish()
        }
    }

    fn position(&self) -> Position {
        self.tracker.position()
    }

    fn size(&self) -> Option<usize> {
        self.tracker.settled_size()
    }

    fn take_fault(&mut self) -> Option<Fault> {
        self.inner.take_fault().map(|fault| fault.reindex(self.tracker.emitted()))
    }
}

impl<I: Keyed> Keyed for DropN<I> {
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        if self.tracker.is_valid() { self.inner.key() } else { None }
    }
}

/// Skips the leading elements that satisfy `pred`, then emits the rest
///
/// The first failing element is the first one emitted.
#[derive(Debug, Clone)]
pub struct DropWhile<I, P> {
    inner: I,
    pred: P,
    tracker: Tracker,
}

impl<I, P> DropWhile<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(inner: I, pred: P) -> Self {
        DropWhile {
            inner,
            pred,
            tracker: Tracker::new(),
        }
    }

    fn skip_leading(&mut self) -> bool {
        while self.inner.next() {
            let Some(item) = self.inner.get() else {
                break;
            };
            if !(self.pred)(&item) {
                return true;
            }
        }
        false
    }
}

impl<I: Forward, P> Readable for DropWhile<I, P> {
    type Item = I::Item;

    fn get(&self) -> Option<I::Item> {
        if self.tracker.is_valid() { self.inner.get() } else { None }
    }
}

impl<I, P> Forward for DropWhile<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
        }
        let advanced = if self.tracker.is_begin() {
            self.skip_leading()
        } else {
            self.inner.next()
        };
        if advanced {
            self.tracker.emit()
        } else {
            self.tracker.finish()
        }
    }

    fn position(&self) -> Position {
        self.tracker.position()
    }

    fn size(&self) -> Option<usize> {
        self.tracker.settled_size()
    }

    fn take_fault(&mut self) -> Option<Fault> {
        self.inner.take_fault().map(|fault| fault.reindex(self.tracker.emitted()))
    }
}

impl<I, P> Keyed for DropWhile<I, P>
where
    I: Keyed,
    P: FnMut(&I::Item) -> bool,
{
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        if self.tracker.is_valid() { self.inner.key() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{ForwardExt, Indexed, SliceIterator};

    #[test]
    fn test_drop_n_basic() {
        let data = [1, 2, 3, 4, 5];
        let mut iter = DropN::new(SliceIterator::new(&data), 2);
        assert!(iter.is_begin());
        assert_eq!(iter.size(), None);
        assert!(iter.next());
        assert!(iter.is_first());
        assert_eq!(iter.get(), Some(3));
        assert_eq!(iter.index(), Some(0));
        assert_eq!((&mut iter).materialize(), vec![3, 4, 5]);
        assert_eq!(iter.size(), Some(3));
    }

    #[test]
    fn test_drop_n_zero_and_overflow() {
        let data = [1, 2, 3];
        assert_eq!(DropN::new(SliceIterator::new(&data), 0).materialize(), vec![1, 2, 3]);

        let mut iter = DropN::new(SliceIterator::new(&data), 3);
        assert!(!iter.next());
        assert!(iter.is_end());

        let mut iter = DropN::new(SliceIterator::new(&data), 10);
        assert!(!iter.next());
        assert!(iter.is_end());
        assert_eq!(iter.size(), Some(0));
    }

    #[test]
    fn test_drop_while_basic() {
        let data = [1, 2, 5, 1, 2];
        let iter = DropWhile::new(SliceIterator::new(&data), |x: &i32| *x < 3);
        assert_eq!(iter.materialize(), vec![5, 1, 2]);
    }

    #[test]
    fn test_drop_while_all_dropped() {
        let data = [1, 2];
        let mut iter = DropWhile::new(SliceIterator::new(&data), |_: &i32| true);
        assert!(!iter.next());
        assert!(iter.is_end());
        assert_eq!(iter.get(), None);
    }
}
