/// A position in a canonically sorted sequence of identifiers ([`crate::game::ActionId`]
/// or [`crate::game::StrategyId`]).
///
/// The search uses the cursor to mark the boundary between decided and undecided
/// identifiers: an identifier that [`CanonicalCursor::is_subsequent_to`] reports as already
/// passed can no longer be removed in the current branch.
///
/// The cursor is `Copy`, so branching simply takes a copy of the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanonicalCursor<'a, T: Copy + Ord> {
    items: &'a [T],
    position: usize,
}

impl<'a, T: Copy + Ord> CanonicalCursor<'a, T> {
    /// A cursor at the first item of `items`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `items` are not strictly increasing.
    pub fn new(items: &'a [T]) -> CanonicalCursor<'a, T> {
        debug_assert!(is_canonical(items));
        CanonicalCursor::at(items, 0)
    }

    /// A cursor at the given `position` (`items.len()` denotes an exhausted cursor).
    ///
    /// The order of `items` is not checked here; callers that reposition a cursor often
    /// check it once up front with [`is_canonical`].
    pub fn at(items: &'a [T], position: usize) -> CanonicalCursor<'a, T> {
        debug_assert!(position <= items.len());
        CanonicalCursor { items, position }
    }

    pub fn current(&self) -> Option<T> {
        self.items.get(self.position).copied()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to the next item. Returns `false` (and stays put) if there is none.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.items.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn restart(&mut self) {
        self.position = 0;
    }

    /// True iff `id` strictly precedes the current position in canonical order.
    ///
    /// Every identifier precedes an exhausted cursor.
    pub fn is_subsequent_to(&self, id: T) -> bool {
        match self.current() {
            Some(current) => id < current,
            None => true,
        }
    }
}

/// True if `items` are strictly increasing.
pub fn is_canonical<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] < w[1])
}

impl<T: Copy + Ord> Iterator for CanonicalCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.current()?;
        self.position += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::{CanonicalCursor, is_canonical};
    use crate::game::ActionId;

    fn actions() -> Vec<ActionId> {
        vec![
            ActionId::new(0, 0, 0),
            ActionId::new(0, 0, 1),
            ActionId::new(0, 1, 0),
            ActionId::new(1, 0, 0),
        ]
    }

    #[test]
    fn advance_stops_at_last_item() {
        let items = actions();
        let mut cursor = CanonicalCursor::new(&items);
        let mut visited = vec![cursor.current().unwrap()];
        while cursor.advance() {
            visited.push(cursor.current().unwrap());
        }
        assert_eq!(visited, items);
        assert_eq!(cursor.position(), 3);
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), Some(ActionId::new(1, 0, 0)));

        cursor.restart();
        assert_eq!(cursor.current(), Some(items[0]));
    }

    #[test]
    fn subsequent_means_strictly_before() {
        let items = actions();
        let cursor = CanonicalCursor::at(&items, 2);
        assert!(cursor.is_subsequent_to(items[0]));
        assert!(cursor.is_subsequent_to(items[1]));
        assert!(!cursor.is_subsequent_to(items[2]));
        assert!(!cursor.is_subsequent_to(items[3]));
        // Identifiers outside the sequence are compared by canonical order only.
        assert!(cursor.is_subsequent_to(ActionId::new(0, 0, 5)));
        assert!(!cursor.is_subsequent_to(ActionId::new(0, 2, 0)));
    }

    #[test]
    fn exhausted_cursor() {
        let items = actions();
        let mut cursor = CanonicalCursor::at(&items, 1);
        assert_eq!(cursor.by_ref().count(), 3);
        assert_eq!(cursor.current(), None);
        assert!(cursor.is_subsequent_to(items[3]));

        let empty: Vec<ActionId> = Vec::new();
        let mut cursor = CanonicalCursor::new(&empty);
        assert_eq!(cursor.current(), None);
        assert!(!cursor.advance());
    }

    #[test]
    fn repositioning_does_not_rescan_items() {
        let mut items = actions();
        assert!(is_canonical(&items));
        items.swap(0, 3);
        assert!(!is_canonical(&items));
        // Only `new` checks the order; `at` is called on every search step.
        let cursor = CanonicalCursor::at(&items, 2);
        assert_eq!(cursor.current(), Some(items[2]));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn new_rejects_unsorted_items() {
        let mut items = actions();
        items.swap(0, 1);
        let _ = CanonicalCursor::new(&items);
    }
}
