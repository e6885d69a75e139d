use ordered_bst::{Error, OrderedBinaryTree};

/// 5 at the root, 3 and 7 under it, and 2, 4, 6, 8 as leaves.
fn tree() -> OrderedBinaryTree<i32> {
    let mut tree = OrderedBinaryTree::new();
    for x in [5, 3, 7, 2, 4, 6, 8] {
        assert_eq!(tree.add(x), Ok(true));
    }

    tree
}

#[test]
fn root() {
    assert_eq!(tree().root().map(|n| *n.value()), Some(5));
}

#[test]
fn height() {
    assert_eq!(tree().height(), 2);
}

#[test]
fn size() {
    let tree = tree();

    assert_eq!(tree.size(), 7);
    assert!(!tree.is_empty());
}

#[test]
fn clear() {
    let mut tree = tree();
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert!(tree.root().is_none());
    assert!(tree.search(&5).unwrap().is_none());
}

#[test]
fn contains() {
    let tree = tree();

    for x in [5, 3, 7, 2, 4, 6, 8] {
        assert_eq!(tree.contains(&x), Ok(true));
    }
    assert_eq!(tree.contains(&1), Ok(false));
}

#[test]
fn search() {
    let tree = tree();

    for x in [5, 3, 7, 2, 4, 6, 8] {
        let node = tree.search(&x).unwrap().expect("Added values are found");
        assert_eq!(node.value(), &x);
    }
    assert!(tree.search(&1).unwrap().is_none());
}

#[test]
fn add() {
    let mut tree = tree();

    assert_eq!(tree.add(1), Ok(true));
    assert_eq!(tree.contains(&1), Ok(true));
    assert_eq!(tree.height(), 3);

    assert_eq!(tree.add(1), Ok(false));
    assert_eq!(tree.size(), 8);
}

#[test]
fn absent_values_are_invalid() {
    let mut tree = tree();

    assert_eq!(tree.add(None::<i32>), Err(Error::InvalidArgument("add")));
    assert_eq!(
        tree.contains(None::<&i32>),
        Err(Error::InvalidArgument("contains"))
    );
    assert!(matches!(
        tree.search(None::<&i32>),
        Err(Error::InvalidArgument("search"))
    ));
    assert_eq!(tree.size(), 7);
}

#[test]
fn remove_min() {
    let mut tree = tree();

    assert_eq!(tree.remove_min(), Some(2));
    assert_eq!(tree.contains(&2), Ok(false));
    assert_eq!(tree.contains(&3), Ok(true));

    assert_eq!(tree.remove_min(), Some(3));
    assert_eq!(tree.contains(&3), Ok(false));
    assert_eq!(tree.contains(&4), Ok(true));

    // 4 moved up to where 3 was.
    let four = tree.search(&4).unwrap().unwrap();
    assert_eq!(four.parent().map(|p| *p.value()), Some(5));
    assert_eq!(tree.size(), 5);
}

#[test]
fn remove_max() {
    let mut tree = tree();

    assert_eq!(tree.remove_max(), Some(8));
    assert_eq!(tree.contains(&8), Ok(false));
    assert_eq!(tree.contains(&7), Ok(true));

    assert_eq!(tree.remove_max(), Some(7));
    assert_eq!(tree.contains(&7), Ok(false));

    let six = tree.search(&6).unwrap().unwrap();
    assert_eq!(six.parent().map(|p| *p.value()), Some(5));
}

#[test]
fn inorder_iterator() {
    let values: Vec<_> = tree().inorder_iter().copied().collect();
    assert_eq!(values, [2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn preorder_iterator() {
    let values: Vec<_> = tree().preorder_iter().copied().collect();
    assert_eq!(values, [5, 3, 2, 4, 7, 6, 8]);
}

#[test]
fn postorder_iterator() {
    let values: Vec<_> = tree().postorder_iter().copied().collect();
    assert_eq!(values, [2, 4, 3, 6, 8, 7, 5]);
}

#[test]
fn iterators_after_removals() {
    let mut tree = tree();
    tree.remove_min();
    tree.remove_max();

    let values: Vec<_> = tree.postorder_iter().copied().collect();
    assert_eq!(values, [4, 3, 6, 7, 5]);
}
