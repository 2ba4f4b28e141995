use crate::{
    iterator::{Forward, Keyed, Position, Readable, Tracker},
    util::Fault,
};

/// Emits at most the first `n` elements of the inner cursor
///
/// The size starts out as `n` and is lowered to the number actually
/// produced if the inner cursor runs out first. The inner cursor is never
/// pulled past its `n`-th element.
#[derive(Debug, Clone)]
pub struct TakeN<I> {
    inner: I,
    n: usize,
    size: usize,
    tracker: Tracker,
}

impl<I: Forward> TakeN<I> {
    pub fn new(inner: I, n: usize) -> Self {
        TakeN {
            inner,
            n,
            size: n,
            tracker: Tracker::new(),
        }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Forward> Readable for TakeN<I> {
    type Item = I::Item;

    fn get(&self) -> Option<I::Item> {
        if self.tracker.is_valid() { self.inner.get() } else { None }
    }
}

impl<I: Forward> Forward for TakeN<I> {
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
        }
        if self.tracker.emitted() == self.n {
            return self.tracker.finish();
        }
        if self.inner.next() {
            self.tracker.emit()
        } else {
            self.size = self.tracker.emitted();
            self.tracker.finish()
        }
    }

    fn position(&self) -> Position {
        self.tracker.position()
    }

    fn size(&self) -> Option<usize> {
        Some(self.size)
    }

    fn take_fault(&mut self) -> Option<Fault> {
        self.inner.take_fault().map(|fault| fault.reindex(self.tracker.emitted()))
    }
}

impl<I: Keyed> Keyed for TakeN<I> {
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        if self.tracker.is_valid() { self.inner.key() } else { None }
    }
}

/// Emits the leading elements that satisfy `pred`
///
/// The first failing element is consumed from the inner cursor and not
/// emitted; the adapter is at `End` from then on.
#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    inner: I,
    pred: P,
    tracker: Tracker,
}

impl<I, P> TakeWhile<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(inner: I, pred: P) -> Self {
        TakeWhile {
            inner,
            pred,
            tracker: Tracker::new(),
        }
    }
}

impl<I: Forward, P> Readable for TakeWhile<I, P> {
    type Item = I::Item;

    fn get(&self) -> Option<I::Item> {
        if self.tracker.is_valid() { self.inner.get() } else { None }
    }
}

impl<I, P> Forward for TakeWhile<I, P>
where
    I: Forward,
    P: FnMut(&I::Item) -> bool,
{
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
        }
        let pred = &mut self.pred;
        if self.inner.next() && self.inner.get().is_some_and(|item| pred(&item)) {
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

impl<I, P> Keyed for TakeWhile<I, P>
where
    I: Keyed,
    P: FnMut(&I::Item) -> bool,
{
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        if self.tracker.is_valid() { self.inner.key() } else { None }
    }
}
