use crate::iterator::{Forward, Position, Readable};

/// Positional cursor over a borrowed slice
///
/// Elements are cloned out on `get()`. The size is always known.
#[derive(Debug, Clone)]
pub struct SliceIterator<'a, T> {
    data: &'a [T],
    position: Position,
}

impl<'a, T> SliceIterator<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceIterator {
            data,
            position: Position::Begin,
        }
    }

    /// Borrow the element under the cursor without cloning
    pub fn current(&self) -> Option<&'a T> {
        self.position.index().and_then(|i| self.data.get(i))
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: Clone> Readable for SliceIterator<'_, T> {
    type Item = T;

    fn get(&self) -> Option<T> {
        self.current().cloned()
    }
}

impl<T: Clone> Forward for SliceIterator<'_, T> {
    fn next(&mut self) -> bool {
        let next = match self.position {
            Position::Begin => 0,
            Position::At(i) => i + 1,
            Position::End => return false,
        };

        if next < self.data.len() {
            self.position = Position::At(next);
            true
        } else {
            self.position = Position::End;
            false
        }
    }

    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Option<usize> {
        Some(self.data.len())
    }

    fn next_n(&mut self, n: usize) -> bool {
        if n == 0 {
            return self.is_valid();
        }

        let target = match self.position {
            Position::Begin => n - 1,
            Position::At(i) => i.saturating_add(n),
            Position::End => return false,
        };

        if target < self.data.len() {
            self.position = Position::At(target);
            true
        } else {
            self.position = Position::End;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::Indexed;

    #[test]
    fn test_slice_iterator_basic() {
        let data = [10, 20, 30];
        let mut iter = SliceIterator::new(&data);
        assert!(iter.is_begin());
        assert_eq!(iter.get(), None);
        assert_eq!(iter.index(), None);
        assert_eq!(iter.size(), Some(3));

        assert!(iter.next());
        assert!(iter.is_first());
        assert_eq!(iter.get(), Some(10));
        assert_eq!(iter.index(), Some(0));

        assert!(iter.next());
        assert_eq!(iter.get(), Some(20));

        assert!(iter.next());
        assert!(iter.is_last());
        assert_eq!(iter.current(), Some(&30));

        assert!(!iter.next());
        assert!(iter.is_end());
        assert_eq!(iter.get(), None);
        assert!(!iter.next());
        assert!(iter.is_end());
    }

    #[test]
    fn test_slice_iterator_empty() {
        let data: [i32; 0] = [];
        let mut iter = SliceIterator::new(&data);
        assert!(!iter.next());
        assert!(iter.is_end());
        assert_eq!(iter.size(), Some(0));
    }

    #[test]
    fn test_slice_iterator_next_n() {
        let data = [1, 2, 3, 4, 5];
        let mut iter = SliceIterator::new(&data);
        assert!(iter.next_n(3));
        assert_eq!(iter.get(), Some(3));
        assert!(iter.next_n(2));
        assert_eq!(iter.get(), Some(5));
        assert!(!iter.next_n(1));
        assert!(iter.is_end());

        let mut iter = SliceIterator::new(&data);
        assert!(!iter.next_n(6));
        assert!(iter.is_end());
    }
}
