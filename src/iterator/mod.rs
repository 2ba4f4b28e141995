//! Positional cursor interface
//!
//! Every source, generator and adapter in the crate is a cursor that moves
//! forward over a logical sequence:
//!
//! ```text
//! Begin ──next()──▶ At(0) ──next()──▶ At(1) ── … ──▶ At(n-1) ──next()──▶ End
//!   │                                                                  ▲
//!   └──────────────────────next() on an empty source───────────────────┘
//! ```
//!
//! A fresh cursor sits on the pre-first sentinel (`Begin`); `next()` is the
//! universal advance, including the first read. Once `End` is reached the
//! cursor never becomes valid again.
//!
//! # Capability tiers
//!
//! - [`Readable`]: `get`
//! - [`Forward`]: `next`, `next_n`, `position`, `size` and the `is_*` state
//!   predicates
//! - [`Indexed`]: `index`, available on every `Forward` cursor
//! - [`Keyed`]: `key`, for cursors over keyed collections
//!
//! Adapters and drivers bound on the lowest tier they need.
//!
//! ```ignore
//! let data = [1, 2, 3];
//! let mut iter = SliceIterator::new(&data);
//! while iter.next() {
//!     println!("{:?}: {:?}", iter.index(), iter.get());
//! }
//! ```

mod ext;
mod map_iterator;
mod slice_iterator;
mod std_iterator;
mod tracker;

pub use ext::ForwardExt;
pub use map_iterator::MapIterator;
pub use slice_iterator::SliceIterator;
pub use std_iterator::{Entries, StdIterator, Values};
pub(crate) use tracker::Tracker;

use crate::util::Fault;

/// Cursor state: before the first element, on an element, or exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    #[default]
    Begin,
    At(usize),
    End,
}

impl Position {
    /// Ordinal of the current element, `None` on either sentinel
    pub fn index(self) -> Option<usize> {
        match self {
            Position::At(i) => Some(i),
            Position::Begin | Position::End => None,
        }
    }

    pub fn is_begin(self) -> bool {
        self == Position::Begin
    }

    pub fn is_end(self) -> bool {
        self == Position::End
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Position::At(_))
    }
}

/// Read access to the element under the cursor
pub trait Readable {
    type Item;

    /// Current element
    ///
    /// Returns `Some` iff the cursor is positioned on an element. Repeated
    /// calls between two advances return equal values.
    fn get(&self) -> Option<Self::Item>;
}

/// Forward-only traversal
pub trait Forward: Readable {
    /// Move to the next element
    ///
    /// Returns true if the cursor is positioned on an element afterwards,
    /// false once it has reached `End`. Calling `next()` at `End` is a no-op.
    fn next(&mut self) -> bool;

    fn position(&self) -> Position;

    /// Total number of elements, `None` when unknown
    fn size(&self) -> Option<usize>;

    /// Advance up to `n` times, stopping at the first failure
    ///
    /// Returns true iff the cursor is valid afterwards. `next_n(0)` leaves
    /// the cursor untouched.
    fn next_n(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if !self.next() {
                return false;
            }
        }
        self.is_valid()
    }

    /// Take the failure that stopped this cursor, if any
    ///
    /// A fallible stage that fails moves to `End` and latches a [`Fault`];
    /// wrapping cursors pass it outward. Sources never fail and keep the
    /// default.
    fn take_fault(&mut self) -> Option<Fault> {
        None
    }

    fn is_begin(&self) -> bool {
        self.position().is_begin()
    }

    fn is_end(&self) -> bool {
        self.position().is_end()
    }

    fn is_valid(&self) -> bool {
        self.position().is_valid()
    }

    fn is_first(&self) -> bool {
        self.position() == Position::At(0)
    }

    /// Whether the cursor is on the last element
    ///
    /// Only answers true when the size is known.
    fn is_last(&self) -> bool {
        match (self.position(), self.size()) {
            (Position::At(i), Some(size)) => i + 1 == size,
            _ => false,
        }
    }
}

/// Ordinal access, derived from [`Forward::position`]
pub trait Indexed: Forward {
    fn index(&self) -> Option<usize>;
}

impl<I: Forward + ?Sized> Indexed for I {
    fn index(&self) -> Option<usize> {
        self.position().index()
    }
}

/// Cursor over a keyed collection
pub trait Keyed: Indexed {
    type Key;

    /// Key of the current element, `None` unless valid
    fn key(&self) -> Option<Self::Key>;
}

impl<I: Readable + ?Sized> Readable for Box<I> {
    type Item = I::Item;

    fn get(&self) -> Option<Self::Item> {
        (**self).get()
    }
}

impl<I: Forward + ?Sized> Forward for Box<I> {
    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn size(&self) -> Option<usize> {
        (**self).size()
    }

    fn next_n(&mut self, n: usize) -> bool {
        (**self).next_n(n)
    }

    fn take_fault(&mut self) -> Option<Fault> {
        (**self).take_fault()
    }
}

impl<I: Keyed + ?Sized> Keyed for Box<I> {
    type Key = I::Key;

    fn key(&self) -> Option<Self::Key> {
        (**self).key()
    }
}

impl<I: Readable + ?Sized> Readable for &mut I {
    type Item = I::Item;

    fn get(&self) -> Option<Self::Item> {
        (**self).get()
    }
}

impl<I: Forward + ?Sized> Forward for &mut I {
    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn size(&self) -> Option<usize> {
        (**self).size()
    }

    fn next_n(&mut self, n: usize) -> bool {
        (**self).next_n(n)
    }

    fn take_fault(&mut self) -> Option<Fault> {
        (**self).take_fault()
    }
}

impl<I: Keyed + ?Sized> Keyed for &mut I {
    type Key = I::Key;

    fn key(&self) -> Option<Self::Key> {
        (**self).key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_predicates() {
        assert!(Position::Begin.is_begin());
        assert!(Position::End.is_end());
        assert!(Position::At(0).is_valid());
        assert_eq!(Position::At(4).index(), Some(4));
        assert_eq!(Position::Begin.index(), None);
        assert_eq!(Position::End.index(), None);
        assert_eq!(Position::default(), Position::Begin);
    }

    #[test]
    fn test_boxed_cursor_forwards_contract() {
        let data = [1, 2, 3];
        let mut iter: Box<dyn Forward<Item = i32> + '_> = Box::new(SliceIterator::new(&data));
        assert!(iter.is_begin());
        assert!(iter.next_n(2));
        assert_eq!(iter.get(), Some(2));
        assert_eq!(iter.index(), Some(1));
        assert!(iter.next());
        assert!(iter.is_last());
        assert!(!iter.next());
        assert!(iter.is_end());
    }

    #[test]
    fn test_next_n_zero_is_noop() {
        let data = [1];
        let mut iter = SliceIterator::new(&data);
        assert!(!iter.next_n(0));
        assert!(iter.is_begin());
        assert!(iter.next());
        assert!(iter.next_n(0));
        assert!(iter.is_first());
    }

    #[test]
    fn test_mut_ref_cursor() {
        fn advance<I: Forward>(mut iter: I) -> bool {
            iter.next()
        }

        let data = [5, 6];
        let mut iter = SliceIterator::new(&data);
        assert!(advance(&mut iter));
        assert_eq!(iter.get(), Some(5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_position_serde() {
        let json = serde_json::to_string(&Position::At(3)).unwrap();
        assert_eq!(json, r#"{"At":3}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Position::At(3));
    }
}
