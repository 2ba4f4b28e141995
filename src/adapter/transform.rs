use tracing::debug;

use crate::{
    iterator::{Forward, Keyed, Position, Readable, Tracker},
    util::{BoxError, Error, Fault, Location, Result},
};

/// A transform function that failed, latched by [`Transform`]
#[derive(Debug)]
pub struct TransformFailure<T, E> {
    /// Ordinal the failed element would have had in the output
    pub index: usize,
    /// Inner element handed to the function
    pub item: T,
    pub cause: E,
}

impl<T, E: Into<BoxError>> TransformFailure<T, E> {
    pub fn into_error(self) -> Error<T> {
        Error::execution_failed(Location::Index(self.index), self.item, self.cause)
    }
}

/// Applies a fallible function to every element
///
/// The function runs once per element, during `next()`, and its output is
/// cached so `get()` does not re-invoke it. The first error moves the
/// adapter to `End` and is kept in [`Transform::failure`], typed, until a
/// driver takes it through [`Forward::take_fault`].
pub struct Transform<I: Readable, F, U, E> {
    inner: I,
    f: F,
    current: Option<U>,
    failure: Option<TransformFailure<I::Item, E>>,
    tracker: Tracker,
}

impl<I, F, U, E> Transform<I, F, U, E>
where
    I: Forward,
    F: FnMut(I::Item) -> std::result::Result<U, E>,
{
    pub fn new(inner: I, f: F) -> Self {
        Transform {
            inner,
            f,
            current: None,
            failure: None,
            tracker: Tracker::new(),
        }
    }

    pub fn failure(&self) -> Option<&TransformFailure<I::Item, E>> {
        self.failure.as_ref()
    }

    pub fn take_failure(&mut self) -> Option<TransformFailure<I::Item, E>> {
        self.failure.take()
    }
}

impl<I, F, U, E> Transform<I, F, U, E>
where
    I: Forward,
    I::Item: Clone,
    U: Clone,
    E: Into<BoxError>,
    F: FnMut(I::Item) -> std::result::Result<U, E>,
{
    /// Drain the adapter, surfacing a latched failure as
    /// [`Error::ExecutionFailed`]
    pub fn try_materialize(mut self) -> Result<Vec<U>, I::Item> {
        let mut out = Vec::new();
        if self.tracker.is_valid() {
            out.extend(self.current.clone());
        }
        while self.next() {
            out.extend(self.current.clone());
        }
        if let Some(failure) = self.take_failure() {
            return Err(failure.into_error());
        }
        // a stage below this one failed; its item is not ours to report
        match self.take_fault() {
            Some(fault) => Err(fault.into_error()),
            None => Ok(out),
        }
    }
}

impl<I, F, U, E> Readable for Transform<I, F, U, E>
where
    I: Readable,
    U: Clone,
{
    type Item = U;

    fn get(&self) -> Option<U> {
        if self.tracker.is_valid() { self.current.clone() } else { None }
    }
}

impl<I, F, U, E> Forward for Transform<I, F, U, E>
where
    I: Forward,
    I::Item: Clone,
    U: Clone,
    E: Into<BoxError>,
    F: FnMut(I::Item) -> std::result::Result<U, E>,
{
    fn next(&mut self) -> bool {
        if self.tracker.is_end() {
            return false;
        }
        self.current = None;
        let Some(item) = self.inner.next().then(|| self.inner.get()).flatten() else {
            return self.tracker.finish();
        };
        match (self.f)(item.clone()) {
            Ok(value) => {
                self.current = Some(value);
                self.tracker.emit()
            },
            Err(cause) => {
                let index = self.tracker.emitted();
                debug!(index, "transform failed, adapter exhausted");
                self.failure = Some(TransformFailure { index, item, cause });
                self.tracker.finish()
            },
        }
    }

    fn position(&self) -> Position {
        self.tracker.position()
    }

    fn size(&self) -> Option<usize> {
        self.tracker.settled_size()
    }

    fn take_fault(&mut self) -> Option<Fault> {
        match self.failure.take() {
            Some(failure) => Some(Fault::new(failure.index, failure.cause)),
            None => self.inner.take_fault().map(|fault| fault.reindex(self.tracker.emitted())),
        }
    }
}

impl<I, F, U, E> Keyed for Transform<I, F, U, E>
where
    I: Keyed,
    I::Item: Clone,
    U: Clone,
    E: Into<BoxError>,
    F: FnMut(I::Item) -> std::result::Result<U, E>,
{
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        if self.tracker.is_valid() { self.inner.key() } else { None }
    }
}

/// Applies a total function to every element
///
/// The function runs on each `get()`; element count and size are those of
/// the inner cursor.
#[derive(Debug, Clone)]
pub struct TransformInfallible<I, F> {
    inner: I,
    f: F,
    tracker: Tracker,
}

impl<I, F, U> TransformInfallible<I, F>
where
    I: Forward,
    F: Fn(I::Item) -> U,
{
    pub fn new(inner: I, f: F) -> Self {
        TransformInfallible {
            inner,
            f,
            tracker: Tracker::new(),
        }
    }
}

impl<I, F, U> Readable for TransformInfallible<I, F>
where
    I: Forward,
    F: Fn(I::Item) -> U,
{
    type Item = U;

    fn get(&self) -> Option<U> {
        if self.tracker.is_valid() { self.inner.get().map(&self.f) } else { None }
    }
}

impl<I, F, U> Forward for TransformInfallible<I, F>
where
    I: Forward,
    F: Fn(I::Item) -> U,
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

impl<I, F, U> Keyed for TransformInfallible<I, F>
where
    I: Keyed,
    F: Fn(I::Item) -> U,
{
    type Key = I::Key;

    fn key(&self) -> Option<I::Key> {
        if self.tracker.is_valid() { self.inner.key() } else { None }
    }
}
