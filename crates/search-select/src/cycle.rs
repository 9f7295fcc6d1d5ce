//! Bidirectional cyclic cursor over an ordered sequence.
//!
//! [`CycleCursor`] walks a slice in either direction with wraparound at both
//! ends, which is how the dropdown's arrow-key navigation cycles through the
//! visible options without ever running off the list.

/// Direction the cursor steps when [`CycleCursor::next`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleDirection {
    /// `next()` advances toward higher indices.
    #[default]
    Forward,
    /// `next()` retreats toward lower indices.
    Backward,
}

impl CycleDirection {
    fn step(self) -> i64 {
        match self {
            CycleDirection::Forward => 1,
            CycleDirection::Backward => -1,
        }
    }
}

/// A cursor over a slice that wraps around at both ends.
///
/// The cursor starts at an optional position. With no starting position, the
/// first `next()` lands on the first element (forward) or the last element
/// (backward), so a fresh dropdown highlights a sensible entry on the first
/// arrow key.
///
/// # Example
///
/// ```
/// use search_select::{CycleCursor, CycleDirection};
///
/// let items = ["Apple", "Banana", "Cherry"];
/// let mut cursor = CycleCursor::new(&items, Some(1), CycleDirection::Forward);
///
/// assert_eq!(*cursor.next(), "Cherry");
/// assert_eq!(*cursor.next(), "Apple"); // wrapped past the end
/// assert_eq!(*cursor.previous(), "Cherry");
/// ```
#[derive(Debug)]
pub struct CycleCursor<'a, T> {
    items: &'a [T],
    index: Option<usize>,
    direction: CycleDirection,
}

impl<'a, T> CycleCursor<'a, T> {
    /// Create a cursor over `items`, starting at `start` (if any).
    ///
    /// `items` must be non-empty; a cursor over nothing has nowhere to land.
    pub fn new(items: &'a [T], start: Option<usize>, direction: CycleDirection) -> Self {
        debug_assert!(!items.is_empty(), "CycleCursor over an empty slice");
        Self {
            items,
            index: start,
            direction,
        }
    }

    /// The cursor's current position, if it has stepped or started somewhere.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The element at the current position, or the first element if unset.
    pub fn current(&self) -> &'a T {
        &self.items[self.index.unwrap_or(0)]
    }

    /// Step one position in the cursor's direction, wrapping at the ends.
    pub fn next(&mut self) -> &'a T {
        self.advance(self.direction.step())
    }

    /// Step one position against the cursor's direction, wrapping at the ends.
    pub fn previous(&mut self) -> &'a T {
        self.advance(-self.direction.step())
    }

    fn advance(&mut self, step: i64) -> &'a T {
        let len = self.items.len() as i64;
        // An unset position behaves as one step before the sequence, so the
        // first forward step lands on index 0.
        let current = self.index.map(|i| i as i64).unwrap_or(-1);
        let mut target = current + step;
        if target < 0 {
            target = len - 1;
        } else if target >= len {
            target = 0;
        }
        let target = target as usize;
        self.index = Some(target);
        &self.items[target]
    }
}
