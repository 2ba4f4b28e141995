use crate::{
    iterator::{Forward, Keyed, Position, Readable, Tracker},
    util::Fault,
};

/// Pass-through traversal that substitutes `replacement` for every element
/// satisfying `pred`
///
/// The element count and size are those of the inner cursor.
#[derive(Debug, Clone)]
pub struct ReplaceIf<I: Readable, P> {
    inner: I,
    pred: P,
    replacement: I::Item,
    tracker: Tracker,
}

/// Same adapter as [`ReplaceIf`]; the copying happens in the driver that
/// materializes it.
pub type CopyReplaceIf<I, P> = ReplaceIf<I, P>;

impl<I, P> ReplaceIf<I, P>
where
    I: Forward,
    P: Fn(&I::Item) -> bool,
{
    pub fn new(inner: I, pred: P, replacement: I::Item) -> Self {
        ReplaceIf {
            inner,
            pred,
            replacement,
            tracker: Tracker::new(),
        }
    }
}

impl<I, P> Readable for ReplaceIf<I, P>
where
    I: Forward,
    I::Item: Clone,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn get(&self) -> Option<I::Item> {
        if !self.tracker.is_valid() {
            return None;
        }
        self.inner.get().map(|item| {
            if (self.pred)(&item) {
                self.replacement.clone()
            } else {
                item
            }
        })
    }
}

impl<I, P> Forward for ReplaceIf<I, P>
where
    I: Forward,
    I::Item: Clone,
    P: Fn(&I::Item) -> bool,
{
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
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
        self.inner.size()
    }

    fn take_fault(&mut self) -> Option<Fault> {
        self.inner.take_fault().map(|fault| fault.reindex(self.tracker.emitted()))
    }
}

impl<I, P> Keyed for ReplaceIf<I, P>
where
    I: Keyed,
    I::Item: Clone,
    P: Fn(&I::Item) -> bool,
{
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        if self.tracker.is_valid() { self.inner.key() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{ForwardExt, SliceIterator};

    #[test]
    fn test_replace_if_basic() {
        let data = [1, 2, 1, 3];
        let mut iter = ReplaceIf::new(SliceIterator::new(&data), |x: &i32| *x == 1, 0);
        assert_eq!(iter.size(), Some(4));
        assert!(iter.next());
        assert_eq!(iter.get(), Some(0));
        assert_eq!(iter.get(), Some(0));
        assert!(iter.next());
        assert_eq!(iter.get(), Some(2));
        assert!(iter.next_n(2));
        assert!(iter.is_last());
        assert_eq!(iter.get(), Some(3));
        assert!(!iter.next());
        assert_eq!(iter.get(), None);
    }

    #[test]
    fn test_copy_replace_if_materializes() {
        let data = [1, 2];
        let out = SliceIterator::new(&data).copy_replace_if(|x| *x == 1, 0).materialize();
        assert_eq!(out, vec![0, 2]);
        assert_eq!(data, [1, 2]);
    }
}
