use tracing::debug;

use crate::{
    iterator::{Forward, Position, Readable},
    util::{Numeric, RangeError},
};

/// Inclusive arithmetic progression `start, start + step, …, stop`
///
/// Counting down is not supported. `start == stop` is a single-element
/// range.
///
/// ```ignore
/// assert_eq!(Range::to(3)?.materialize(), vec![0, 1, 2, 3]);
/// assert_eq!(Range::stepped(1, 5, 2)?.materialize(), vec![1, 3, 5]);
/// assert!(Range::stepped(1, 5, 3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Range<T> {
    start: T,
    step: T,
    size: usize,
    position: Position,
}

impl<T: Numeric> Range<T> {
    /// The range with no elements
    pub fn empty() -> Self {
        Range {
            start: T::zero(),
            step: T::one(),
            size: 0,
            position: Position::Begin,
        }
    }

    /// `0, 1, …, stop`
    pub fn to(stop: T) -> Result<Self, RangeError> {
        if !(stop >= T::zero()) {
            debug!(%stop, "rejected range: negative stop");
            return Err(RangeError::InvalidRange(format!("stop {stop} is negative")));
        }
        Range::between(T::zero(), stop)
    }

    /// `start, start + 1, …, stop`
    pub fn between(start: T, stop: T) -> Result<Self, RangeError> {
        Range::stepped(start, stop, T::one())
    }

    /// `start, start + step, …, stop`
    ///
    /// `stop - start` must be a whole multiple of `step`.
    pub fn stepped(start: T, stop: T, step: T) -> Result<Self, RangeError> {
        if !(step > T::zero()) {
            debug!(%step, "rejected range: non-positive step");
            return Err(RangeError::InvalidRange(format!("step {step} is not positive")));
        }
        if !(stop >= start) {
            debug!(%start, %stop, "rejected range: stop before start");
            return Err(RangeError::InvalidRange(format!(
                "stop {stop} is less than start {start}"
            )));
        }
        if T::is_unclean(start, stop, step) {
            debug!(%start, %stop, %step, "rejected range: unclean step");
            return Err(RangeError::UncleanStep(format!(
                "{stop} - {start} is not a multiple of {step}"
            )));
        }
        let Some(size) = T::span(start, stop, step) else {
            debug!(%start, %stop, %step, "rejected range: too many elements");
            return Err(RangeError::InvalidRange(format!(
                "{start} to {stop} by {step} has more elements than fit in usize"
            )));
        };
        Ok(Range {
            start,
            step,
            size,
            position: Position::Begin,
        })
    }

    /// Build from zero to three positional arguments: `[]`, `[stop]`,
    /// `[start, stop]` or `[start, stop, step]`
    pub fn from_args(args: &[T]) -> Result<Self, RangeError> {
        match *args {
            [] => Ok(Range::empty()),
            [stop] => Range::to(stop),
            [start, stop] => Range::between(start, stop),
            [start, stop, step] => Range::stepped(start, stop, step),
            _ => {
                debug!(count = args.len(), "rejected range: too many arguments");
                Err(RangeError::TooManyArgs(args.len()))
            },
        }
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// Last value of the progression, `None` when empty
    pub fn stop(&self) -> Option<T> {
        self.size.checked_sub(1).map(|n| T::nth(self.start, self.step, n))
    }

    fn seek(&mut self, target: usize) -> bool {
        if target < self.size {
            self.position = Position::At(target);
            true
        } else {
            self.position = Position::End;
            false
        }
    }
}

impl<T: Numeric> Readable for Range<T> {
    type Item = T;

    fn get(&self) -> Option<T> {
        self.position.index().map(|i| T::nth(self.start, self.step, i))
    }
}

impl<T: Numeric> Forward for Range<T> {
    fn next(&mut self) -> bool {
        self.next_n(1)
    }

    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Option<usize> {
        Some(self.size)
    }

    fn next_n(&mut self, n: usize) -> bool {
        match self.position {
            _ if n == 0 => self.position.is_valid(),
            Position::Begin => self.seek(n - 1),
            Position::At(i) => self.seek(i.saturating_add(n)),
            Position::End => false,
        }
    }
}

/// Build a [`Range`] from zero to three arguments, panicking on malformed
/// ones
///
/// ```ignore
/// let r = range!(1, 5, 2); // 1, 3, 5
/// let r = range!(1, 5, 3); // panics: unclean step
/// ```
#[macro_export]
macro_rules! range {
    () => {
        $crate::generator::Range::empty()
    };
    ($($arg:expr),+ $(,)?) => {
        match $crate::generator::Range::from_args(&[$($arg),+]) {
            Ok(range) => range,
            Err(err) => panic!("malformed range: {err}"),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{ForwardExt, Indexed};

    #[test]
    fn test_range_stop_only() {
        let range = Range::to(10).unwrap();
        assert_eq!(range.size(), Some(11));
        assert_eq!(range.materialize(), (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_range_stepped() {
        let mut range = Range::stepped(1, 5, 2).unwrap();
        assert!(range.is_begin());
        assert_eq!(range.get(), None);
        assert!(range.next());
        assert_eq!(range.get(), Some(1));
        assert!(range.next());
        assert_eq!(range.get(), Some(3));
        assert_eq!(range.index(), Some(1));
        assert!(range.next());
        assert!(range.is_last());
        assert_eq!(range.get(), Some(5));
        assert!(!range.next());
        assert!(range.is_end());
        assert_eq!(range.stop(), Some(5));
    }

    #[test]
    fn test_range_single_element() {
        let range = Range::between(3, 3).unwrap();
        assert_eq!(range.size(), Some(1));
        assert_eq!(range.materialize(), vec![3]);
        assert_eq!(Range::to(0).unwrap().materialize(), vec![0]);
    }

    #[test]
    fn test_range_empty() {
        let mut range = Range::<i32>::empty();
        assert_eq!(range.size(), Some(0));
        assert_eq!(range.stop(), None);
        assert!(!range.next());
        assert!(range.is_end());
    }

    #[test]
    fn test_range_rejections() {
        assert!(matches!(Range::to(-1), Err(RangeError::InvalidRange(_))));
        assert!(matches!(Range::between(5, 1), Err(RangeError::InvalidRange(_))));
        assert!(matches!(Range::stepped(1, 5, 0), Err(RangeError::InvalidRange(_))));
        assert!(matches!(Range::stepped(1, 5, -1), Err(RangeError::InvalidRange(_))));
        assert!(matches!(Range::stepped(1, 5, 3), Err(RangeError::UncleanStep(_))));
        assert_eq!(Range::from_args(&[1, 2, 3, 4]).unwrap_err(), RangeError::TooManyArgs(4));
    }

    #[test]
    fn test_range_too_large_to_count() {
        assert!(matches!(Range::to(u64::MAX), Err(RangeError::InvalidRange(_))));
        assert!(matches!(Range::between(i64::MIN, i64::MAX), Err(RangeError::InvalidRange(_))));
        assert!(matches!(Range::between(i128::MIN, i128::MAX), Err(RangeError::InvalidRange(_))));
        assert!(matches!(Range::between(0.0f64, 1e20), Err(RangeError::InvalidRange(_))));

        let wide = Range::between(i64::MIN, 0).unwrap();
        assert_eq!(wide.size(), Some(1usize << 63 | 1));
        assert_eq!(wide.stop(), Some(0));
    }

    #[test]
    fn test_range_floats() {
        let range = Range::stepped(0.0, 1.0, 0.25).unwrap();
        assert_eq!(range.size(), Some(5));
        assert_eq!(range.materialize(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(matches!(Range::stepped(0.0, 1.0, 0.3), Err(RangeError::UncleanStep(_))));
        assert!(matches!(Range::stepped(0.0, 1.0, f64::NAN), Err(RangeError::InvalidRange(_))));
    }

    #[test]
    fn test_range_next_n() {
        let mut range = Range::to(10).unwrap();
        assert!(range.next_n(4));
        assert_eq!(range.get(), Some(3));
        assert!(range.next_n(7));
        assert_eq!(range.get(), Some(10));
        assert!(!range.next_n(1));
        assert!(range.is_end());
    }

    #[test]
    fn test_range_macro() {
        assert_eq!(crate::range!(1, 5, 2).materialize(), vec![1, 3, 5]);
        assert_eq!(crate::range!(2).materialize(), vec![0, 1, 2]);
        let empty: Range<u8> = crate::range!();
        assert_eq!(empty.size(), Some(0));
    }

    #[test]
    #[should_panic(expected = "malformed range")]
    fn test_range_macro_panics() {
        let _ = crate::range!(1, 5, 3);
    }
}
