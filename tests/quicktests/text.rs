use plainbst::{Order, Tree};

#[quickcheck]
fn serialized_text_round_trips(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let text = tree.serialize();

    let back: Tree<i32> = text.parse().unwrap();
    back.serialize() == text && back.len() == tree.len()
}

#[quickcheck]
fn round_trip_after_removals(xs: Vec<u8>, removes: Vec<u8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    for r in &removes {
        let _ = tree.remove(r);
    }

    let back: Tree<u8> = tree.serialize().parse().unwrap();
    back.iter(Order::PreOrder).eq(tree.iter(Order::PreOrder))
        && back.iter(Order::PostOrder).eq(tree.iter(Order::PostOrder))
}

#[quickcheck]
fn text_lists_one_null_per_missing_child(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    tree.serialize().matches("_NULL_").count() == xs.len() + 1
}
