#![cfg(test)]

use super::*;
use crate::position::{Reversed, SlicePos};
use crate::util::panic::assert_panics;

fn bound<T>(values: &[T]) -> Cursor<SlicePos<'_, T>> {
    Cursor::new(SlicePos::start(values), SlicePos::end(values))
}

#[test]
fn test_sentinel() {
    let sentinel = Cursor::<SlicePos<u8>>::sentinel();
    assert!(sentinel.is_sentinel());
    assert!(!sentinel.is_bound());
    assert!(!sentinel.is_exhausted(), "The sentinel isn't bound, so it can't be exhausted.");
    assert_eq!(sentinel.index(), None);
    assert_eq!(sentinel.position(), None);
    assert_eq!(sentinel, Cursor::default(), "Default should construct the sentinel.");
    assert_eq!(
        sentinel.try_read(),
        Err(CursorError::SentinelAccess(SentinelAccess)),
        "Reading the sentinel should fail."
    );
}

#[test]
fn test_sentinel_ignores_movement() {
    let mut sentinel = Cursor::<SlicePos<u8>>::sentinel();
    sentinel.move_next().move_prev().move_next();
    assert!(sentinel.is_sentinel(), "Moving the sentinel should do nothing.");
    assert_eq!(sentinel.index(), None);
}

#[test]
fn test_read_and_move() {
    let values = [10, 20, 30];
    let mut cursor = bound(&values);
    assert_eq!(cursor.read(), (0, &10));
    cursor.move_next().move_next();
    assert_eq!(cursor.read(), (2, &30), "Index should count forward steps.");
    cursor.move_prev();
    assert_eq!(cursor.read(), (1, &20), "Index should count backward steps too.");
    cursor.move_next().move_next();
    assert!(cursor.is_exhausted());
    assert_eq!(
        cursor.try_read(),
        Err(CursorError::PastEnd(PastEnd)),
        "Reading an exhausted cursor should fail."
    );
    assert_eq!(cursor.index(), Some(3), "An exhausted cursor still knows its index.");
}

#[test]
fn test_read_panics() {
    assert_panics!({
        Cursor::<SlicePos<u8>>::sentinel().read();
    });
    assert_panics!({
        let empty: [u8; 0] = [];
        bound(&empty).read();
    });
}

#[test]
fn test_move_prev_before_start() {
    let values = [1, 2];
    let mut cursor = bound(&values);
    assert_panics!({
        cursor.move_prev();
    });
    assert_eq!(BeforeStart.to_string(), "Attempted to move before the start of a sequence!");
}

#[test]
fn test_sentinel_equality() {
    let values = [1, 2];
    let mut cursor = bound(&values);
    let sentinel = Cursor::sentinel();
    assert_ne!(cursor, sentinel, "A fresh cursor over a non-empty range isn't at the end.");
    cursor.move_next();
    assert_ne!(cursor, sentinel);
    cursor.move_next();
    assert_eq!(cursor, sentinel, "An exhausted cursor should equal the sentinel.");
    assert_eq!(sentinel, cursor, "Sentinel equality should be symmetric.");

    let empty: [u8; 0] = [];
    assert_eq!(
        bound(&empty),
        Cursor::sentinel(),
        "A cursor over an empty range starts exhausted."
    );
}

#[test]
fn test_structural_equality() {
    let values = [1, 2, 3];
    let copy = values;

    let mut a = bound(&values);
    let mut b = bound(&values);
    let mut c = bound(&copy);
    assert_eq!(a, b, "Cursors from the same sequence at the same index should be equal.");
    assert_ne!(a, c, "Cursors from different sequences should never be equal.");

    a.move_next();
    assert_ne!(a, b, "Cursors at different indices shouldn't be equal.");
    b.move_next();
    c.move_next();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let inner = Cursor::new(SlicePos::start(&values), SlicePos::at(&values, 2));
    assert_ne!(
        bound(&values),
        inner,
        "Cursors bounded by different ends shouldn't be equal."
    );
}

#[test]
fn test_clone_is_independent() {
    let values = [1, 2, 3];
    let mut original = bound(&values);
    let copy = original.clone();
    original.move_next();
    assert_eq!(copy.read(), (0, &1), "Moving a cursor shouldn't affect its clones.");
    assert_eq!(original.read(), (1, &2));
}

#[test]
fn test_reversed_cursor() {
    let values = [1, 2, 3];
    let mut cursor = Cursor::new(
        Reversed::new(SlicePos::end(&values)),
        Reversed::new(SlicePos::start(&values)),
    );
    assert_eq!(cursor.read(), (0, &3));
    cursor.move_next();
    assert_eq!(cursor.read(), (1, &2));
    cursor.move_prev();
    assert_eq!(cursor.read(), (0, &3), "Reversed cursors should be bidirectional.");
    cursor.move_next().move_next().move_next();
    assert_eq!(cursor, Cursor::sentinel());
}

#[cfg(feature = "cons")]
#[test]
fn test_forward_only_cursor() {
    use crate::cons::ConsList;

    let list = ConsList::from_iter(["a", "b"]);
    let mut cursor = Cursor::new(list.start(), list.end());
    assert_eq!(cursor.read(), (0, &"a"));
    cursor.move_next();
    assert_eq!(cursor.read(), (1, &"b"));
    cursor.move_next();
    assert_eq!(cursor, Cursor::sentinel());

    let other = ConsList::from_iter(["a", "b"]);
    assert_ne!(
        Cursor::new(list.start(), list.end()),
        Cursor::new(other.start(), other.end()),
        "Cursors over equal lists are still distinct."
    );
}
