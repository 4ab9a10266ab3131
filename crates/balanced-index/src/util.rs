use crate::error::InvariantError;
use crate::rotate::{rebalance_after_insert, rebalance_after_remove};
use crate::types::{Link, Node};

/// Inserts `k` below `link` and returns the new subtree root.
///
/// Sets `inserted` when a node was created; an equal key leaves the subtree
/// untouched.
pub fn insert<K, C>(link: Link<K>, k: K, comparator: &C, inserted: &mut bool) -> Box<Node<K>>
where
    C: Fn(&K, &K) -> i32,
{
    let Some(mut n) = link else {
        *inserted = true;
        return Box::new(Node::new(k));
    };

    let cmp = comparator(&k, &n.k);
    let child_cmp = if cmp < 0 {
        let child_cmp = n.l.as_ref().map_or(0, |l| comparator(&k, &l.k));
        n.l = Some(insert(n.l.take(), k, comparator, inserted));
        child_cmp
    } else if cmp > 0 {
        let child_cmp = n.r.as_ref().map_or(0, |r| comparator(&k, &r.k));
        n.r = Some(insert(n.r.take(), k, comparator, inserted));
        child_cmp
    } else {
        return n;
    };

    if !*inserted {
        return n;
    }
    rebalance_after_insert(n, child_cmp)
}

/// Removes `k` from below `link` and returns the new subtree root.
///
/// Sets `removed` when a node was dropped.
pub fn remove<K, C>(link: Link<K>, k: &K, comparator: &C, removed: &mut bool) -> Link<K>
where
    C: Fn(&K, &K) -> i32,
{
    let mut n = link?;

    let cmp = comparator(k, &n.k);
    if cmp < 0 {
        n.l = remove(n.l.take(), k, comparator, removed);
    } else if cmp > 0 {
        n.r = remove(n.r.take(), k, comparator, removed);
    } else {
        *removed = true;
        match (n.l.take(), n.r.take()) {
            (None, None) => return None,
            (Some(child), None) | (None, Some(child)) => return Some(child),
            (Some(l), Some(r)) => {
                // Two children: the in-order successor's key takes this slot
                // and the successor node is unlinked from the right subtree.
                let (r, successor) = remove_min(r);
                n.l = Some(l);
                n.r = r;
                n.k = successor;
            }
        }
    }

    if !*removed {
        return Some(n);
    }
    Some(rebalance_after_remove(n))
}

/// Unlinks the leftmost node of `n`, returning the rebalanced subtree and the
/// detached key.
pub fn remove_min<K>(mut n: Box<Node<K>>) -> (Link<K>, K) {
    match n.l.take() {
        None => {
            let Node { k, r, .. } = *n;
            (r, k)
        }
        Some(l) => {
            let (l, k) = remove_min(l);
            n.l = l;
            (Some(rebalance_after_remove(n)), k)
        }
    }
}

/// Comparison-guided descent to the node holding `k`.
pub fn find<'a, K, C>(link: &'a Link<K>, k: &K, comparator: &C) -> Option<&'a Node<K>>
where
    C: Fn(&K, &K) -> i32,
{
    let mut curr = link.as_deref();
    while let Some(n) = curr {
        let cmp = comparator(k, &n.k);
        if cmp == 0 {
            return Some(n);
        }
        curr = if cmp < 0 { n.left() } else { n.right() };
    }
    None
}

pub fn first<K>(link: &Link<K>) -> Option<&Node<K>> {
    let mut curr = link.as_deref()?;
    while let Some(l) = curr.left() {
        curr = l;
    }
    Some(curr)
}

pub fn last<K>(link: &Link<K>) -> Option<&Node<K>> {
    let mut curr = link.as_deref()?;
    while let Some(r) = curr.right() {
        curr = r;
    }
    Some(curr)
}

/// Appends keys below `link` to `out` in ascending order.
pub fn in_order<K: Clone>(link: &Link<K>, out: &mut Vec<K>) {
    if let Some(n) = link {
        in_order(&n.l, out);
        out.push(n.k.clone());
        in_order(&n.r, out);
    }
}

/// Checks order, cached heights and the balance bound of the whole subtree.
pub fn assert_avl_tree<K, C>(link: &Link<K>, comparator: &C) -> Result<(), InvariantError>
where
    C: Fn(&K, &K) -> i32,
{
    fn validate<K>(link: &Link<K>) -> Result<i32, InvariantError> {
        let Some(n) = link else {
            return Ok(0);
        };
        let lh = validate(&n.l)?;
        let rh = validate(&n.r)?;
        let expected = 1 + lh.max(rh);
        if n.h != expected {
            return Err(InvariantError::HeightMismatch {
                expected,
                actual: n.h,
            });
        }
        let balance = lh - rh;
        if !(-1..=1).contains(&balance) {
            return Err(InvariantError::Unbalanced { balance });
        }
        Ok(expected)
    }

    fn validate_order<'a, K, C>(
        link: &'a Link<K>,
        prev: &mut Option<&'a K>,
        comparator: &C,
    ) -> Result<(), InvariantError>
    where
        C: Fn(&K, &K) -> i32,
    {
        let Some(n) = link else {
            return Ok(());
        };
        validate_order(&n.l, prev, comparator)?;
        if let Some(p) = *prev {
            if comparator(p, &n.k) >= 0 {
                return Err(InvariantError::OrderViolated);
            }
        }
        *prev = Some(&n.k);
        validate_order(&n.r, prev, comparator)
    }

    validate(link)?;
    validate_order(link, &mut None, comparator)?;
    Ok(())
}
