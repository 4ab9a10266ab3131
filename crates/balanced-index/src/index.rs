use std::fmt::Debug;

use tracing::debug;

use crate::error::InvariantError;
use crate::print::print;
use crate::types::{height, Link, Node};
use crate::util;

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Ordered set of unique keys kept as an AVL tree.
///
/// Every mutation rebalances the path it touched on the way back up, so the
/// height stays within the AVL bound and every operation is `O(log n)`.
///
/// ```
/// use balanced_index::BalancedIndex;
///
/// let mut index = BalancedIndex::new();
/// for k in [10, 20, 30, 40, 50, 25] {
///     index.insert(k);
/// }
/// assert_eq!(index.in_order(), vec![10, 20, 25, 30, 40, 50]);
///
/// index.delete(&30);
/// assert_eq!(index.search(&25).map(|n| *n.key()), Some(25));
/// assert!(index.search(&99).is_none());
/// ```
pub struct BalancedIndex<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Link<K>,
    size: usize,
    comparator: C,
}

impl<K> BalancedIndex<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for BalancedIndex<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> BalancedIndex<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Creates an empty index ordered by `comparator`, which returns a
    /// negative, zero or positive number like `Ord::cmp`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
        }
    }

    /// Inserts `key`, returns `false` when it was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let mut inserted = false;
        let root = util::insert(self.root.take(), key, &self.comparator, &mut inserted);
        self.root = Some(root);
        if inserted {
            self.size += 1;
        }
        debug!(inserted, size = self.size, height = self.height(), "insert");
        inserted
    }

    /// Removes `key`, returns `false` when it was absent.
    pub fn delete(&mut self, key: &K) -> bool {
        let mut removed = false;
        self.root = util::remove(self.root.take(), key, &self.comparator, &mut removed);
        if removed {
            self.size -= 1;
        }
        debug!(removed, size = self.size, height = self.height(), "delete");
        removed
    }

    pub fn search(&self, key: &K) -> Option<&Node<K>> {
        util::find(&self.root, key, &self.comparator)
    }

    pub fn has(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Snapshot of all keys in ascending order.
    pub fn in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.size);
        util::in_order(&self.root, &mut out);
        out
    }

    pub fn first(&self) -> Option<&K> {
        util::first(&self.root).map(Node::key)
    }

    pub fn last(&self) -> Option<&K> {
        util::last(&self.root).map(Node::key)
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Height of the whole tree, `0` when empty.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Checks key order, cached heights and the balance bound of every node.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        util::assert_avl_tree(&self.root, &self.comparator)
    }

    pub fn print(&self) -> String
    where
        K: Debug,
    {
        print(self.root(), "")
    }
}

impl<K: Debug, C> Debug for BalancedIndex<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalancedIndex")
            .field("size", &self.size)
            .field("root", &self.root)
            .finish()
    }
}
