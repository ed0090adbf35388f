use pretty_assertions::assert_eq;
use rangeview::{Pipe, all, enumerate, views};

#[test]
fn test_basic_vector() {
    let a = vec![1, 2, 3];
    let mut i = 0;
    for (index, item) in all(&a) | views::enumerate() {
        assert_eq!(index, i);
        assert_eq!(*item, i + 1);
        i += 1;
    }
    assert_eq!(i, 3);
}

#[test]
fn test_basic_shared_view_of_owned_source() {
    let a = [1, 2, 3];
    let view = enumerate(a);
    // Walkable twice through a shared reference.
    for _ in 0..2 {
        let pairs: Vec<(usize, &i32)> = (&view).into_iter().collect();
        assert_eq!(pairs, vec![(0, &1), (1, &2), (2, &3)]);
    }
}

#[test]
fn test_after_map() {
    let a = vec![1, 2, 3];
    let mut i = 0;
    for (index, item) in all(a.iter().map(|x| x - 1)) | views::enumerate() {
        assert_eq!(index, i);
        assert_eq!(item, i as i32);
        i += 1;
    }
    assert_eq!(i, 3);
}

#[test]
fn test_modify_vector() {
    let mut a = vec![1, 2, 3];
    for (index, item) in all(&mut a) | views::enumerate() {
        assert_eq!(*item, index as i32 + 1);
        *item -= 1;
    }
    for (index, item) in enumerate(&a) {
        assert_eq!(*item, index as i32);
    }
    assert_eq!(a, vec![0, 1, 2]);
}

#[test]
fn test_modify_owned_through_view() {
    let mut view = enumerate(vec![10, 20]);
    for (index, item) in &mut view {
        *item += index;
    }
    assert_eq!(view.into_base(), vec![10, 21]);
}

#[test]
fn test_infinite_source_with_take() {
    let pairs: Vec<(usize, usize)> = (0usize..)
        .pipe(views::enumerate())
        .into_iter()
        .take(10)
        .collect();
    assert_eq!(pairs.len(), 10);
    for (i, j) in pairs {
        assert_eq!(i, j);
    }
}

#[test]
fn test_common_end() {
    let a = ['a', 'b', 'c'];
    let view = enumerate(a);
    let end = view.end();
    let mut cursor = view.begin();
    let mut seen = Vec::new();
    while cursor != end {
        seen.push(cursor.index());
        rangeview::Cursor::next(&mut cursor);
    }
    assert_eq!(seen, vec![0, 1, 2]);
}

#[test]
fn test_cloned_traversal_of_borrowed_source() {
    let a = vec!['x', 'y'];
    let view = enumerate(&a);
    for _ in 0..2 {
        let pairs: Vec<(usize, &char)> = view.iter_cloned().collect();
        assert_eq!(pairs, vec![(0, &'x'), (1, &'y')]);
    }
}
