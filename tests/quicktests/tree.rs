use plainbst::{Order, Tree, TreeError};

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let walked: Vec<_> = tree.iter(Order::InOrder).copied().collect();

    let mut sorted = xs;
    sorted.sort();
    walked == sorted
}

#[quickcheck]
fn every_order_visits_every_value(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut expected = xs.clone();
    expected.sort();

    [Order::PreOrder, Order::InOrder, Order::PostOrder]
        .into_iter()
        .all(|order| {
            let mut seen = Vec::new();
            tree.traverse(order, |v| seen.push(*v));
            seen.sort();
            seen == expected
        })
}

#[quickcheck]
fn pre_order_starts_at_root_and_post_order_ends_there(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.iter(Order::PreOrder).next() == xs.first()
        && tree.iter(Order::PostOrder).last() == xs.first()
}

#[quickcheck]
fn insert_then_remove_unique_value_empties_tree(x: i32) -> bool {
    let mut tree = Tree::new();
    tree.insert(x);

    tree.remove(&x) == Ok(x) && tree.is_empty() && tree.len() == 0
}

#[quickcheck]
fn missing_remove_keeps_values(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let before: Vec<_> = tree.iter(Order::PreOrder).copied().collect();

    let expected = if before.is_empty() {
        TreeError::EmptyTree
    } else {
        TreeError::NotFound
    };
    tree.remove(&missing) == Err(expected)
        && tree.iter(Order::PreOrder).copied().eq(before.into_iter())
}

#[quickcheck]
fn removing_everything_in_any_order(xs: Vec<i8>, seed: Vec<usize>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut left = xs;
    let mut picks = seed.into_iter().cycle();

    while !left.is_empty() {
        let at = picks.next().unwrap_or(0) % left.len();
        let value = left.swap_remove(at);
        if tree.remove(&value) != Ok(value) {
            return false;
        }

        let mut sorted = left.clone();
        sorted.sort();
        if !tree.iter(Order::InOrder).copied().eq(sorted.into_iter()) {
            return false;
        }
    }
    tree.is_empty()
}

#[quickcheck]
fn search_order_holds_after_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for r in &removes {
        let _ = tree.remove(r);
    }

    // Pre-order with bounds: everything left of a node is <= it, everything right is > it.
    let mut stack = tree.root().map(|n| (n, None, None)).into_iter().collect::<Vec<_>>();
    while let Some((node, above, at_most)) = stack.pop() {
        let v = *node.content().unwrap();
        if above.map_or(false, |low| v <= low) || at_most.map_or(false, |high| v > high) {
            return false;
        }
        stack.extend(node.left().map(|n| (n, above, Some(v))));
        stack.extend(node.right().map(|n| (n, Some(v), at_most)));
    }
    true
}
