use crate::{
    iterator::{Forward, Keyed, Position, Readable, Tracker},
    util::Fault,
};

/// Emits only the elements that satisfy `pred`
///
/// Each `next()` pulls the inner cursor until a passing element turns up or
/// the inner cursor is exhausted.
#[derive(Debug, Clone)]
pub struct TakeIf<I, P> {
    inner: I,
    pred: P,
    tracker: Tracker,
}

/// `copy_if` and `take_if` are the same adapter
pub type CopyIf<I, P> = TakeIf<I, P>;

impl<I, P> TakeIf<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(inner: I, pred: P) -> Self {
        TakeIf {
            inner,
            pred,
            tracker: Tracker::new(),
        }
    }
}

impl<I: Forward, P> Readable for TakeIf<I, P> {
    type Item = I::Item;

    fn get(&self) -> Option<I::Item> {
        if self.tracker.is_valid() { self.inner.get() } else { None }
    }
}

impl<I, P> Forward for TakeIf<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
        }
        while self.inner.next() {
            if self.inner.get().is_some_and(|item| (self.pred)(&item)) {
                return self.tracker.emit();
            }
        }
        self.tracker.finish()
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

impl<I, P> Keyed for TakeIf<I, P>
where
    I: Keyed,
    P: FnMut(&I::Item) -> bool,
{
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        if self.tracker.is_valid() { self.inner.key() } else { None }
    }
}
