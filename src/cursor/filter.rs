// src/cursor/filter.rs

use crate::cursor::Cursor;

/// Decorator that hides elements for which a predicate holds.
///
/// Predicates return `true` for elements that must be *hidden*, and are
/// evaluated at call time against whatever mutable state they capture, not
/// against a snapshot. The same element may therefore be hidden on one pass
/// and visible on the next; this dynamic re-evaluation is the point of the
/// type.
///
/// `has_next` scans the inner cursor forward past hidden elements and, when
/// an accepted element is found, retreats the inner cursor exactly one slot
/// so that the following `next` re-delivers it. `has_prev` is symmetric.
#[derive(Debug)]
pub struct FilteringCursor<C, F, B> {
    inner: C,
    hide_next: F,
    hide_prev: B,
}

impl<C, F, B> FilteringCursor<C, F, B>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
    B: FnMut(&C::Item) -> bool,
{
    pub fn new(inner: C, hide_next: F, hide_prev: B) -> Self {
        Self {
            inner,
            hide_next,
            hide_prev,
        }
    }
}

impl<C, F> FilteringCursor<C, F, F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool + Clone,
{
    /// Same predicate in both directions.
    pub fn symmetric(inner: C, hide: F) -> Self {
        Self::new(inner, hide.clone(), hide)
    }
}

impl<C, F, B> Cursor for FilteringCursor<C, F, B>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
    B: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        while self.inner.has_next() {
            let Some(element) = self.inner.next() else {
                break;
            };
            if (self.hide_next)(&element) {
                continue;
            }
            self.inner.force_retreat();
            return true;
        }
        false
    }

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            self.inner.force_advance();
            return None;
        }
        self.inner.next()
    }

    fn has_prev(&mut self) -> bool {
        while self.inner.has_prev() {
            let Some(element) = self.inner.prev() else {
                break;
            };
            if (self.hide_prev)(&element) {
                continue;
            }
            self.inner.force_advance();
            return true;
        }
        false
    }

    fn prev(&mut self) -> Option<Self::Item> {
        if !self.has_prev() {
            self.inner.force_retreat();
            return None;
        }
        self.inner.prev()
    }

    fn force_advance(&mut self) {
        self.inner.force_advance();
    }

    fn force_retreat(&mut self) {
        self.inner.force_retreat();
    }

    fn restart(&mut self) {
        self.inner.restart();
    }
}
