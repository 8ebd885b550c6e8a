//! Tests for the cursor state machine over lists and views.

use crate::{ErrorKind, List, ListError, Sequence, vec};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_list_has_nothing_either_way() {
    let mut list: List<i32> = List::new();
    let mut cursor = list.cursor();
    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
    assert_eq!(cursor.next().unwrap_err(), ListError::NoSuchElement);
    assert_eq!(cursor.previous().unwrap_err().kind(), ErrorKind::Exhaustion);
    assert_eq!(cursor.next_index(), 0);
    assert_eq!(cursor.previous_index(), None);
}

#[test]
fn test_forward_then_backward() {
    let mut list = List::from([1, 2, 3]);
    let mut cursor = list.cursor();
    assert_eq!(*cursor.next().unwrap(), 1);
    assert_eq!(*cursor.next().unwrap(), 2);
    assert_eq!(cursor.next_index(), 2);
    assert_eq!(cursor.previous_index(), Some(1));

    // Stepping back yields the element just passed.
    assert_eq!(*cursor.previous().unwrap(), 2);
    assert_eq!(*cursor.previous().unwrap(), 1);
    assert!(!cursor.has_previous());
    assert_eq!(*cursor.next().unwrap(), 1);
}

#[test]
fn test_exhaustion_at_the_end() {
    let mut list = List::from(['a']);
    let mut cursor = list.cursor();
    assert_eq!(*cursor.next().unwrap(), 'a');
    assert!(!cursor.has_next());
    assert_eq!(cursor.next().unwrap_err(), ListError::NoSuchElement);
    // A failed step does not move the cursor.
    assert_eq!(cursor.next_index(), 1);
}

#[test]
fn test_start_positions() {
    let mut list = List::from([10, 20, 30]);
    assert_eq!(*list.cursor_at(1).unwrap().next().unwrap(), 20);
    assert_eq!(*list.cursor_at(0).unwrap().next().unwrap(), 10);

    let mut at_end = list.cursor_at(3).unwrap();
    assert!(!at_end.has_next());
    assert_eq!(*at_end.previous().unwrap(), 30);

    assert_eq!(
        list.cursor_at(4).err(),
        Some(ListError::IndexOutOfBounds { index: 4, len: 3 })
    );
}

#[test]
fn test_remove_and_set_need_a_step() {
    let mut list = List::from([1, 2]);
    let mut cursor = list.cursor();
    assert_eq!(cursor.remove().unwrap_err(), ListError::IllegalState);
    assert_eq!(cursor.set(5).unwrap_err().kind(), ErrorKind::IllegalState);
    drop(cursor);
    assert_eq!(list.to_vec(), vec![1, 2]);
}

#[test]
fn test_remove_after_next() {
    let mut list = List::from([1, 2]);
    let mut cursor = list.cursor();
    cursor.next().unwrap();
    assert_eq!(cursor.remove().unwrap(), 1);
    assert_eq!(cursor.next_index(), 0);
    // The latch is spent.
    assert_eq!(cursor.remove().unwrap_err(), ListError::IllegalState);
    assert_eq!(*cursor.next().unwrap(), 2);
    drop(cursor);
    assert_eq!(list.to_vec(), vec![2]);
}

#[test]
fn test_remove_last_element() {
    let mut list = List::from(['a', 'b']);
    let mut cursor = list.cursor();
    cursor.next().unwrap();
    cursor.next().unwrap();
    assert_eq!(cursor.remove().unwrap(), 'b');
    assert!(!cursor.has_next());
    drop(cursor);
    assert_eq!(list.to_vec(), vec!['a']);
}

#[test]
fn test_remove_after_previous_keeps_position() {
    let mut list = List::from([1, 2, 3]);
    let mut cursor = list.cursor_at(2).unwrap();
    assert_eq!(*cursor.previous().unwrap(), 2);
    assert_eq!(cursor.remove().unwrap(), 2);
    assert_eq!(cursor.next_index(), 1);
    assert_eq!(*cursor.next().unwrap(), 3);
    drop(cursor);
    assert_eq!(list.to_vec(), vec![1, 3]);
}

#[test]
fn test_set_overwrites_last_returned() {
    let mut list = List::from([Some(1), Some(2), Some(3)]);
    let mut cursor = list.cursor();
    cursor.next().unwrap();
    assert_eq!(cursor.set(Some(3)).unwrap(), Some(1));
    cursor.next().unwrap();
    cursor.set(None).unwrap();
    // Still eligible: set does not spend the latch.
    cursor.set(Some(7)).unwrap();
    cursor.previous().unwrap();
    cursor.set(Some(8)).unwrap();
    drop(cursor);
    assert_eq!(list.to_vec(), vec![Some(3), Some(8), Some(3)]);
}

#[test]
fn test_add_inserts_before_cursor() {
    let mut list: List<&str> = List::new();
    let mut cursor = list.cursor();
    cursor.add("a").unwrap();
    cursor.add("b").unwrap();
    cursor.add("c").unwrap();
    assert_eq!(cursor.next_index(), 3);
    assert_eq!(cursor.set("z").unwrap_err(), ListError::IllegalState);
    assert_eq!(*cursor.previous().unwrap(), "c");
    drop(cursor);
    assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
}

#[test]
fn test_add_in_the_middle() {
    let mut list = List::from([1, 3]);
    let mut cursor = list.cursor();
    cursor.next().unwrap();
    cursor.add(2).unwrap();
    assert_eq!(cursor.remove().unwrap_err(), ListError::IllegalState);
    assert_eq!(*cursor.next().unwrap(), 3);
    drop(cursor);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_filtering_walk() {
    let mut list: List<i32> = (1..=10).collect();
    let mut cursor = list.cursor();
    while cursor.has_next() {
        let value = *cursor.next().unwrap();
        if value % 3 == 0 {
            cursor.remove().unwrap();
        } else if value % 2 == 0 {
            cursor.set(value * 10).unwrap();
        }
    }
    drop(cursor);
    assert_eq!(list.to_vec(), vec![1, 20, 40, 5, 7, 80, 10 * 10]);
}

#[test]
fn test_cursor_over_view_updates_root() {
    let list = List::from([1, 2, 3, 4, 5]);
    {
        let mut view = list.view(1, 4).unwrap();
        let mut cursor = view.cursor();
        cursor.next().unwrap();
        cursor.remove().unwrap();
        cursor.add(9).unwrap();
        cursor.add(8).unwrap();
        drop(cursor);
        assert_eq!(view.len(), 4);
        assert_eq!(view.to_vec(), vec![9, 8, 3, 4]);
    }
    assert_eq!(list.to_vec(), vec![1, 9, 8, 3, 4, 5]);
}

#[test]
fn test_cursor_over_nested_view() {
    let list = List::from([0, 1, 2, 3, 4, 5]);
    let view = list.view(1, 5).unwrap();
    {
        let mut inner = view.sub_view(1, 3).unwrap();
        let mut cursor = inner.cursor_at(2).unwrap();
        assert_eq!(*cursor.previous().unwrap(), 3);
        cursor.remove().unwrap();
        assert!(!cursor.has_next());
    }
    assert_eq!(view.len(), 3);
    assert_eq!(view.to_vec(), vec![1, 2, 4]);
    assert_eq!(list.len(), 5);
}
