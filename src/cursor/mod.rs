// src/cursor/mod.rs

//! Bidirectional cursors over an ordered sequence.
//!
//! [`SliceCursor`] is the only primitive that touches sequence storage; every
//! other cursor is a decorator over an inner cursor:
//!
//! - [`FilteringCursor`] hides elements for which a live predicate holds.
//! - [`CallbackCursor`] fires a side-effecting callback on forward motion.
//!
//! Boundary conditions are ordinary control flow: `next`/`prev` return `None`
//! when the relevant `has_*` would return `false`.

pub mod callback;
pub mod filter;
pub mod slice;

pub use callback::{CallbackCursor, CallbackTiming};
pub use filter::FilteringCursor;
pub use slice::SliceCursor;

/// A bidirectional position over an ordered sequence.
///
/// The position ranges over `[-1, N]` for a sequence of length `N`: `-1` is
/// "before first" and `N` is "after last". `has_next`/`has_prev` may mutate
/// the cursor (decorators scan their inner cursor to answer), which is why
/// they take `&mut self`.
pub trait Cursor {
    type Item;

    fn has_next(&mut self) -> bool;

    /// Advance and return the element at the new position, or `None` when
    /// exhausted forward.
    fn next(&mut self) -> Option<Self::Item>;

    fn has_prev(&mut self) -> bool;

    /// Retreat and return the element at the new position, or `None` when
    /// exhausted backward.
    fn prev(&mut self) -> Option<Self::Item>;

    /// Move forward one slot without delivering a value, clamped at `N`.
    fn force_advance(&mut self);

    /// Move backward one slot without delivering a value, clamped at `-1`.
    fn force_retreat(&mut self);

    /// Reset the position to "before first".
    fn restart(&mut self);
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn has_prev(&mut self) -> bool {
        (**self).has_prev()
    }

    fn prev(&mut self) -> Option<Self::Item> {
        (**self).prev()
    }

    fn force_advance(&mut self) {
        (**self).force_advance()
    }

    fn force_retreat(&mut self) {
        (**self).force_retreat()
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}
