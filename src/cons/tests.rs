#![cfg(test)]

use super::*;
use crate::position::{self, Position};
use crate::util::panic::assert_panics;

#[test]
fn test_building() {
    let mut list = ConsList::cons(1, ConsList::cons(2, ConsList::new()));
    list.push_front(0);
    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&0));
    assert_eq!(format!("{list:?}"), "[0, 1, 2]");
    assert_eq!(
        ConsList::from_iter(0..3).iter().copied().collect::<Vec<_>>(),
        [0, 1, 2],
        "Collecting should keep the original order."
    );
}

#[test]
fn test_pop_front() {
    let mut list = ConsList::from_iter(["a", "b"]);
    assert_eq!(list.pop_front(), Some("a"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.pop_front(), Some("b"));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_long_list_drop() {
    let list = ConsList::from_iter(0..1_000_000);
    assert_eq!(list.iter().len(), 1_000_000);
    drop(list);
}

#[test]
fn test_positions() {
    let list = ConsList::from_iter([1, 2]);
    let mut pos = list.start();
    assert_eq!(*pos.get(), 1);
    pos.step_forward();
    assert_eq!(*pos.get(), 2);
    pos.step_forward();
    assert_eq!(pos, list.end());
    pos.step_forward();
    assert_eq!(pos, list.end(), "Stepping the end of a list should stay at the end.");
    assert_panics!({
        list.end().get();
    });

    let empty = ConsList::<u8>::new();
    assert_eq!(empty.start(), empty.end());

    let other = ConsList::from_iter([1, 2]);
    assert_ne!(list.end(), other.end(), "Ends of different lists shouldn't be equal.");
    assert_ne!(position::next(list.start()), position::next(other.start()));
}
