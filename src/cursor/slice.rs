// src/cursor/slice.rs

use crate::cursor::Cursor;

/// The primitive cursor: an owned sequence plus an integer position in
/// `[-1, N]`.
#[derive(Debug, Clone)]
pub struct SliceCursor<T> {
    elements: Vec<T>,
    index: isize,
}

impl<T: Clone> SliceCursor<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            elements,
            index: -1,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn end(&self) -> isize {
        self.elements.len() as isize
    }
}

impl<T: Clone> Cursor for SliceCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.index < self.end() - 1
    }

    fn next(&mut self) -> Option<T> {
        if !self.has_next() {
            self.index = self.end();
            return None;
        }
        self.index += 1;
        Some(self.elements[self.index as usize].clone())
    }

    fn has_prev(&mut self) -> bool {
        self.index > 0
    }

    fn prev(&mut self) -> Option<T> {
        if !self.has_prev() {
            return None;
        }
        self.index -= 1;
        Some(self.elements[self.index as usize].clone())
    }

    fn force_advance(&mut self) {
        if self.index < self.end() {
            self.index += 1;
        }
    }

    fn force_retreat(&mut self) {
        if self.index > -1 {
            self.index -= 1;
        }
    }

    fn restart(&mut self) {
        self.index = -1;
    }
}
