use crate::iterator::Position;

/// Position bookkeeping shared by the adapters
///
/// Tracks the adapter's own ordinal over the elements it has emitted, which
/// is independent of the inner cursor's ordinal.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Tracker {
    position: Position,
    emitted: usize,
}

impl Tracker {
    pub(crate) fn new() -> Self {
        Tracker::default()
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub(crate) fn is_begin(&self) -> bool {
        self.position.is_begin()
    }

    #[inline]
    pub(crate) fn is_valid(&self) -> bool {
        self.position.is_valid()
    }

    #[inline]
    pub(crate) fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Number of elements emitted so far
    #[inline]
    pub(crate) fn emitted(&self) -> usize {
        self.emitted
    }

    /// Step onto the next emitted element; always returns true
    pub(crate) fn emit(&mut self) -> bool {
        self.position = Position::At(self.emitted);
        self.emitted += 1;
        true
    }

    /// Move to `End`; always returns false
    pub(crate) fn finish(&mut self) -> bool {
        self.position = Position::End;
        false
    }

    /// Emitted count once exhausted, `None` before
    pub(crate) fn settled_size(&self) -> Option<usize> {
        self.is_end().then_some(self.emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_lifecycle() {
        let mut t = Tracker::new();
        assert!(t.is_begin());
        assert_eq!(t.settled_size(), None);

        assert!(t.emit());
        assert_eq!(t.position(), Position::At(0));
        assert!(t.emit());
        assert_eq!(t.position(), Position::At(1));
        assert_eq!(t.emitted(), 2);

        assert!(!t.finish());
        assert!(t.is_end());
        assert_eq!(t.settled_size(), Some(2));
    }
}
