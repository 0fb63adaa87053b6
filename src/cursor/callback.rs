// src/cursor/callback.rs

use crate::cursor::Cursor;

/// When a [`CallbackCursor`] fires its callback relative to delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackTiming {
    /// Fire on the previously delivered element just before fetching the next
    /// one. Lets the callback react to an element once its outcome is final,
    /// at the moment the cursor moves past it.
    Before,
    /// Fire on the element just fetched, before returning it.
    After,
}

/// Decorator that fires a side-effecting callback on forward motion.
///
/// `prev` only delegates and updates the last-delivered bookkeeping;
/// callbacks never fire on backward motion.
#[derive(Debug)]
pub struct CallbackCursor<C: Cursor, F> {
    inner: C,
    callback: F,
    timing: CallbackTiming,
    last: Option<C::Item>,
}

impl<C, F> CallbackCursor<C, F>
where
    C: Cursor,
    C::Item: Clone,
    F: FnMut(&C::Item),
{
    pub fn new(inner: C, timing: CallbackTiming, callback: F) -> Self {
        Self {
            inner,
            callback,
            timing,
            last: None,
        }
    }
}

impl<C, F> Cursor for CallbackCursor<C, F>
where
    C: Cursor,
    C::Item: Clone,
    F: FnMut(&C::Item),
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.timing == CallbackTiming::Before {
            if let Some(last) = &self.last {
                (self.callback)(last);
            }
        }
        let element = self.inner.next();
        if let Some(element) = &element {
            if self.timing == CallbackTiming::After {
                (self.callback)(element);
            }
            self.last = Some(element.clone());
        }
        element
    }

    fn has_prev(&mut self) -> bool {
        self.inner.has_prev()
    }

    fn prev(&mut self) -> Option<Self::Item> {
        let element = self.inner.prev();
        if let Some(element) = &element {
            self.last = Some(element.clone());
        }
        element
    }

    fn force_advance(&mut self) {
        self.inner.force_advance();
    }

    fn force_retreat(&mut self) {
        self.inner.force_retreat();
    }

    fn restart(&mut self) {
        self.inner.restart();
        self.last = None;
    }
}
