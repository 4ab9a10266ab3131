/// Owned child slot. `None` is an empty subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// AVL tree node.
///
/// Each node exclusively owns its subtrees; there are no parent links.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) k: K,
    pub(crate) l: Link<K>,
    pub(crate) r: Link<K>,
    /// Cached subtree height, a leaf is `1`.
    pub(crate) h: i32,
}

impl<K> Node<K> {
    pub fn new(k: K) -> Self {
        Self {
            k,
            l: None,
            r: None,
            h: 1,
        }
    }

    pub fn key(&self) -> &K {
        &self.k
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.l.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.r.as_deref()
    }

    pub fn height(&self) -> i32 {
        self.h
    }

    /// Balance factor, `height(left) - height(right)`.
    pub fn balance(&self) -> i32 {
        height(&self.l) - height(&self.r)
    }

    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.h = 1 + height(&self.l).max(height(&self.r));
    }
}

/// Height of a possibly empty subtree.
#[inline]
pub fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |n| n.h)
}

/// Balance factor of a possibly empty subtree, `0` when empty.
#[inline]
pub fn balance<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |n| n.balance())
}
