//! Rotations and the four-case AVL rebalancing.
//!
//! Every function takes ownership of a subtree root and returns the root that
//! should take its place in the parent's child slot.

use tracing::trace;

use crate::types::{balance, Node};

/// Promotes the left child of `y`.
///
/// ```text
///       y            x
///      / \          / \
///     x   C   ->   A   y
///    / \              / \
///   A   B            B   C
/// ```
pub(crate) fn right_rotate<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut x) = y.l.take() else {
        return y;
    };
    y.l = x.r.take();
    y.update_height();
    x.r = Some(y);
    x.update_height();
    trace!(height = x.h, "right rotation");
    x
}

/// Promotes the right child of `x`, mirror of [`right_rotate`].
pub(crate) fn left_rotate<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = x.r.take() else {
        return x;
    };
    x.r = y.l.take();
    x.update_height();
    y.l = Some(x);
    y.update_height();
    trace!(height = y.h, "left rotation");
    y
}

fn left_right_rotate<K>(mut n: Box<Node<K>>) -> Box<Node<K>> {
    n.l = n.l.take().map(left_rotate);
    right_rotate(n)
}

fn right_left_rotate<K>(mut n: Box<Node<K>>) -> Box<Node<K>> {
    n.r = n.r.take().map(right_rotate);
    left_rotate(n)
}

/// Restores the balance bound at `n` after an insertion below it.
///
/// `child_cmp` is the comparison of the inserted key against the key of the
/// child `n` descended into, taken before the descent. A child that rotates
/// keeps its height, so `n` can only become unbalanced when that child is
/// still the node the comparison was made against.
pub(crate) fn rebalance_after_insert<K>(mut n: Box<Node<K>>, child_cmp: i32) -> Box<Node<K>> {
    n.update_height();
    let bf = n.balance();
    if bf > 1 {
        if child_cmp < 0 {
            return right_rotate(n);
        }
        if child_cmp > 0 {
            return left_right_rotate(n);
        }
    } else if bf < -1 {
        if child_cmp > 0 {
            return left_rotate(n);
        }
        if child_cmp < 0 {
            return right_left_rotate(n);
        }
    }
    n
}

/// Restores the balance bound at `n` after a removal below it.
///
/// The removed key may have come from either grandchild, so the case is
/// picked from the heavy child's own balance factor.
pub(crate) fn rebalance_after_remove<K>(mut n: Box<Node<K>>) -> Box<Node<K>> {
    n.update_height();
    let bf = n.balance();
    if bf > 1 {
        if balance(&n.l) >= 0 {
            right_rotate(n)
        } else {
            left_right_rotate(n)
        }
    } else if bf < -1 {
        if balance(&n.r) <= 0 {
            left_rotate(n)
        } else {
            right_left_rotate(n)
        }
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(k: i32) -> Box<Node<i32>> {
        Box::new(Node::new(k))
    }

    fn join(k: i32, l: Option<Box<Node<i32>>>, r: Option<Box<Node<i32>>>) -> Box<Node<i32>> {
        let mut n = Node::new(k);
        n.l = l;
        n.r = r;
        n.update_height();
        Box::new(n)
    }

    fn keys(n: &Node<i32>) -> (i32, Option<i32>, Option<i32>) {
        (n.k, n.left().map(|l| l.k), n.right().map(|r| r.k))
    }

    #[test]
    fn right_rotate_moves_inner_grandchild() {
        // 30(20(10, 25), 40)
        let y = join(30, Some(join(20, Some(leaf(10)), Some(leaf(25)))), Some(leaf(40)));
        let x = right_rotate(y);
        assert_eq!(keys(&x), (20, Some(10), Some(30)));
        let y = x.right().unwrap();
        assert_eq!(keys(y), (30, Some(25), Some(40)));
        assert_eq!(y.height(), 2);
        assert_eq!(x.height(), 3);
    }

    #[test]
    fn left_rotate_moves_inner_grandchild() {
        let x = join(10, Some(leaf(5)), Some(join(20, Some(leaf(15)), Some(leaf(30)))));
        let y = left_rotate(x);
        assert_eq!(keys(&y), (20, Some(10), Some(30)));
        assert_eq!(keys(y.left().unwrap()), (10, Some(5), Some(15)));
        assert_eq!(y.height(), 3);
    }

    #[test]
    fn rotate_without_child_is_identity() {
        let n = right_rotate(leaf(1));
        assert_eq!(keys(&n), (1, None, None));
        let n = left_rotate(leaf(1));
        assert_eq!(keys(&n), (1, None, None));
    }

    #[test]
    fn insert_cases() {
        // left-left
        let n = rebalance_after_insert(join(30, Some(join(20, Some(leaf(10)), None)), None), -1);
        assert_eq!(keys(&n), (20, Some(10), Some(30)));
        // left-right
        let n = rebalance_after_insert(join(30, Some(join(10, None, Some(leaf(20)))), None), 1);
        assert_eq!(keys(&n), (20, Some(10), Some(30)));
        // right-right
        let n = rebalance_after_insert(join(10, None, Some(join(20, None, Some(leaf(30))))), 1);
        assert_eq!(keys(&n), (20, Some(10), Some(30)));
        // right-left
        let n = rebalance_after_insert(join(10, None, Some(join(30, Some(leaf(20)), None))), -1);
        assert_eq!(keys(&n), (20, Some(10), Some(30)));
    }

    #[test]
    fn remove_prefers_single_rotation_on_balanced_child() {
        // Left child balanced after the right side shrank.
        let n = join(40, Some(join(20, Some(leaf(10)), Some(leaf(30)))), None);
        let n = rebalance_after_remove(n);
        assert_eq!(keys(&n), (20, Some(10), Some(40)));
        assert_eq!(keys(n.right().unwrap()), (40, Some(30), None));
        assert_eq!(n.height(), 3);

        let n = join(10, None, Some(join(30, Some(leaf(20)), Some(leaf(40)))));
        let n = rebalance_after_remove(n);
        assert_eq!(keys(&n), (30, Some(10), Some(40)));
    }

    #[test]
    fn remove_double_rotations() {
        let n = rebalance_after_remove(join(30, Some(join(10, None, Some(leaf(20)))), None));
        assert_eq!(keys(&n), (20, Some(10), Some(30)));
        let n = rebalance_after_remove(join(10, None, Some(join(30, Some(leaf(20)), None))));
        assert_eq!(keys(&n), (20, Some(10), Some(30)));
    }
}
