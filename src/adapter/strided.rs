use crate::{
    iterator::{Forward, Keyed, Position, Readable, Tracker},
    util::Fault,
};

/// Emits every `stride`-th element, starting with the first
///
/// A stride of zero yields nothing. If the inner cursor runs out partway
/// through a stride the adapter is exhausted.
#[derive(Debug, Clone)]
pub struct Strided<I> {
    inner: I,
    stride: usize,
    tracker: Tracker,
}

impl<I: Forward> Strided<I> {
    pub fn new(inner: I, stride: usize) -> Self {
        Strided {
            inner,
            stride,
            tracker: Tracker::new(),
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl<I: Forward> Readable for Strided<I> {
    type Item = I::Item;

    fn get(&self) -> Option<I::Item> {
        if self.tracker.is_valid() { self.inner.get() } else { None }
    }
}

impl<I: Forward> Forward for Strided<I> {
    fn next(&mut self) -> bool {
        if self.tracker.is_end() || self.stride == 0 {
            return self.tracker.finish();
        }
        let advanced = if self.tracker.is_begin() {
            self.inner.next()
        } else {
            self.inner.next_n(self.stride)
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

impl<I: Keyed> Keyed for Strided<I> {
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        if self.tracker.is_valid() { self.inner.key() } else { None }
    }
}
