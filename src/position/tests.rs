#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_slice_pos_identity() {
    let values = [1, 2, 3];
    let copy = values;
    assert_eq!(SlicePos::start(&values), SlicePos::at(&values, 0));
    assert_eq!(next(SlicePos::start(&values)), prev(prev(SlicePos::end(&values))));
    assert_ne!(
        SlicePos::start(&values),
        SlicePos::start(&copy),
        "Positions into different slices should differ even with equal contents."
    );
    assert_ne!(
        SlicePos::start(&values[..2]),
        SlicePos::start(&values[..]),
        "Slices of different lengths are different sequences."
    );
}

#[test]
fn test_slice_pos_movement() {
    let values = [1, 2, 3];
    let mut pos = SlicePos::start(&values);
    pos.step_forward();
    pos.step_forward();
    assert_eq!(*pos.get(), 3);
    assert_eq!(pos.offset(), 2);
    pos.step_backward();
    assert_eq!(*pos.get(), 2);

    assert_panics!({
        SlicePos::end(&values).get();
    });
    assert_panics!({
        SlicePos::start(&values).step_backward();
    });
}

#[test]
fn test_reversed() {
    let values = [1, 2, 3];
    let start = Reversed::new(SlicePos::end(&values));
    let end = Reversed::new(SlicePos::start(&values));
    assert_eq!(*start.get(), 3, "Reversed should read the element before its base.");
    assert_eq!(next(next(next(start))), end);
    assert_eq!(prev(next(start)), start);
    assert_eq!(*next(start).get(), 2);
    assert_eq!(start.into_base(), SlicePos::end(&values));

    let double = Reversed::new(Reversed::new(SlicePos::start(&values)));
    assert_eq!(*double.get(), 1, "Reversing twice should read forwards again.");
}
