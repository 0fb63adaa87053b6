// tests/cursor.rs

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use certseq::cursor::{CallbackCursor, CallbackTiming, Cursor, FilteringCursor, SliceCursor};

#[test]
fn test_slice_cursor_walks_forward_and_back() {
    let mut cursor = SliceCursor::new(vec![1, 2, 3]);

    assert!(!cursor.has_prev());
    assert!(cursor.has_next());

    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(cursor.prev(), Some(1));
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(cursor.next(), Some(3));
    assert!(!cursor.has_next());
}

#[test]
fn test_slice_cursor_failed_next_parks_after_last() {
    let mut cursor = SliceCursor::new(vec![1, 2]);
    cursor.next();
    cursor.next();

    // Exhausted forward; position clamps to N so that prev() re-delivers the
    // last element.
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.prev(), Some(2));
}

#[test]
fn test_slice_cursor_prev_before_first() {
    let mut cursor = SliceCursor::new(vec![1, 2]);
    assert_eq!(cursor.prev(), None);
    assert_eq!(cursor.next(), Some(1));
}

#[test]
fn test_slice_cursor_force_moves_clamp() {
    let mut cursor = SliceCursor::new(vec![1, 2]);

    cursor.force_retreat();
    assert_eq!(cursor.next(), Some(1));

    cursor.force_advance();
    cursor.force_advance();
    cursor.force_advance(); // clamped at N
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.prev(), Some(2));
}

#[test]
fn test_slice_cursor_restart() {
    let mut cursor = SliceCursor::new(vec![1, 2]);
    cursor.next();
    cursor.next();
    cursor.restart();
    assert_eq!(cursor.next(), Some(1));
}

#[test]
fn test_empty_cursor() {
    let mut cursor = SliceCursor::new(Vec::<u32>::new());
    assert!(!cursor.has_next());
    assert!(!cursor.has_prev());
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.prev(), None);
}

#[test]
fn test_filtering_cursor_hides_matching_elements() {
    let inner = SliceCursor::new(vec![1, 2, 3, 4, 5, 6]);
    let mut cursor = FilteringCursor::symmetric(inner, |n: &i32| n % 2 == 0);

    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(3));
    assert_eq!(cursor.next(), Some(5));
    assert_eq!(cursor.next(), None);

    // A failed next parks after the last element, so backward traversal
    // revisits it first.
    assert_eq!(cursor.prev(), Some(5));
    assert_eq!(cursor.prev(), Some(3));
    assert_eq!(cursor.prev(), Some(1));
    assert_eq!(cursor.prev(), None);
}

#[test]
fn test_filtering_cursor_has_next_is_reentrant() {
    let inner = SliceCursor::new(vec![1, 2, 3]);
    let mut cursor = FilteringCursor::symmetric(inner, |n: &i32| *n == 1);

    // Repeated has_next calls must not consume the accepted element.
    assert!(cursor.has_next());
    assert!(cursor.has_next());
    assert_eq!(cursor.next(), Some(2));
}

#[test]
fn test_filtering_cursor_evaluates_predicates_live() {
    let hidden: Rc<RefCell<HashSet<i32>>> = Rc::new(RefCell::new(HashSet::from([2, 3])));

    let inner = SliceCursor::new(vec![1, 2, 3, 4]);
    let pred = {
        let hidden = Rc::clone(&hidden);
        move |n: &i32| hidden.borrow().contains(n)
    };
    let mut cursor = FilteringCursor::symmetric(inner, pred);

    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(4));

    // Unhide everything; the same elements are now visible backward.
    hidden.borrow_mut().clear();
    assert_eq!(cursor.prev(), Some(3));
    assert_eq!(cursor.prev(), Some(2));
    assert_eq!(cursor.prev(), Some(1));
}

#[test]
fn test_filtering_cursor_all_hidden() {
    let inner = SliceCursor::new(vec![1, 2, 3]);
    let mut cursor = FilteringCursor::symmetric(inner, |_: &i32| true);

    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
    assert!(!cursor.has_prev());
    assert_eq!(cursor.prev(), None);
}

#[test]
fn test_callback_after_fires_on_delivered_element() {
    let fired: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));

    let inner = SliceCursor::new(vec![1, 2, 3]);
    let callback = {
        let fired = Rc::clone(&fired);
        move |n: &i32| fired.borrow_mut().push(*n)
    };
    let mut cursor = CallbackCursor::new(inner, CallbackTiming::After, callback);

    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(*fired.borrow(), vec![1, 2]);
}

#[test]
fn test_callback_before_fires_on_previous_element() {
    let fired: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));

    let inner = SliceCursor::new(vec![1, 2, 3]);
    let callback = {
        let fired = Rc::clone(&fired);
        move |n: &i32| fired.borrow_mut().push(*n)
    };
    let mut cursor = CallbackCursor::new(inner, CallbackTiming::Before, callback);

    assert_eq!(cursor.next(), Some(1));
    assert!(fired.borrow().is_empty());

    assert_eq!(cursor.next(), Some(2));
    assert_eq!(*fired.borrow(), vec![1]);

    assert_eq!(cursor.next(), Some(3));
    assert_eq!(*fired.borrow(), vec![1, 2]);
}

#[test]
fn test_callback_never_fires_on_backward_motion() {
    let fired: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));

    let inner = SliceCursor::new(vec![1, 2, 3]);
    let callback = {
        let fired = Rc::clone(&fired);
        move |n: &i32| fired.borrow_mut().push(*n)
    };
    let mut cursor = CallbackCursor::new(inner, CallbackTiming::Before, callback);

    cursor.next();
    cursor.next();
    fired.borrow_mut().clear();

    assert_eq!(cursor.prev(), Some(1));
    assert!(fired.borrow().is_empty());

    // Bookkeeping followed the backward step: moving forward again fires on
    // the element we backed onto.
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(*fired.borrow(), vec![1]);
}

#[test]
fn test_callback_restart_clears_bookkeeping() {
    let fired: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));

    let inner = SliceCursor::new(vec![1, 2]);
    let callback = {
        let fired = Rc::clone(&fired);
        move |n: &i32| fired.borrow_mut().push(*n)
    };
    let mut cursor = CallbackCursor::new(inner, CallbackTiming::Before, callback);

    cursor.next();
    cursor.restart();

    assert_eq!(cursor.next(), Some(1));
    assert!(fired.borrow().is_empty());
}

#[test]
fn test_decorators_stack() {
    // Filter over callback over slice, all through the trait object the
    // sequencer uses.
    let fired: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));

    let inner = SliceCursor::new(vec![1, 2, 3, 4]);
    let callback = {
        let fired = Rc::clone(&fired);
        move |n: &i32| fired.borrow_mut().push(*n)
    };
    let stack: Box<dyn Cursor<Item = i32>> =
        Box::new(CallbackCursor::new(inner, CallbackTiming::After, callback));
    let mut cursor = FilteringCursor::symmetric(stack, |n: &i32| n % 2 == 1);

    assert_eq!(cursor.next(), Some(2));
    assert_eq!(cursor.next(), Some(4));
    assert_eq!(cursor.next(), None);
}
