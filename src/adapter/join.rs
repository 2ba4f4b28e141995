use tracing::{debug, trace};

use crate::{
    iterator::{Forward, Keyed, Position, Readable, Tracker},
    util::Fault,
};

/// Concatenates a list of cursors in order
///
/// Inner cursors are expected to be fresh. The size is the sum of the inner
/// sizes when every inner reports one and the sum fits in `usize`, otherwise
/// unknown until exhausted. An inner that ends on a fault ends the join; the
/// remaining inners are not visited.
///
/// ```text
/// Join
///     ├─→ inners[0]  (drained first)
///     ├─→ inners[1]
///     └─→ inners[n]  (drained last)
/// ```
#[derive(Debug)]
pub struct Join<I> {
    inners: Vec<I>,
    current: usize,
    size: Option<usize>,
    fault: Option<Fault>,
    tracker: Tracker,
}

impl<I: Forward> Join<I> {
    pub fn new(inners: Vec<I>) -> Self {
        let size = inners
            .iter()
            .try_fold(0usize, |total, inner| total.checked_add(inner.size()?));
        Join {
            inners,
            current: 0,
            size,
            fault: None,
            tracker: Tracker::new(),
        }
    }

    /// Ordinal of the inner cursor currently being drained
    pub fn active(&self) -> usize {
        self.current
    }

    fn active_inner(&self) -> Option<&I> {
        if self.tracker.is_valid() {
            self.inners.get(self.current)
        } else {
            None
        }
    }
}

impl<I: Forward> Readable for Join<I> {
    type Item = I::Item;

    fn get(&self) -> Option<I::Item> {
        self.active_inner().and_then(Readable::get)
    }
}

impl<I: Forward> Forward for Join<I> {
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
        }
        while let Some(inner) = self.inners.get_mut(self.current) {
            if inner.next() {
                return self.tracker.emit();
            }
            if let Some(fault) = inner.take_fault() {
                debug!(
                    inner = self.current,
                    emitted = self.tracker.emitted(),
                    "join stopped on faulted inner"
                );
                self.fault = Some(fault.reindex(self.tracker.emitted()));
                break;
            }
            trace!(exhausted = self.current, "join moving to next inner");
            self.current += 1;
        }
        self.size = Some(self.tracker.emitted());
        self.tracker.finish()
    }

    fn position(&self) -> Position {
        self.tracker.position()
    }

    fn size(&self) -> Option<usize> {
        self.size
    }

    fn take_fault(&mut self) -> Option<Fault> {
        self.fault.take()
    }
}

impl<I: Keyed> Keyed for Join<I> {
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        self.active_inner().and_then(Keyed::key)
    }
}
