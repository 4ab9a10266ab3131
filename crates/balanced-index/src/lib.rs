//! Self-balancing ordered key index.
//!
//! [`BalancedIndex`] is an AVL tree: every node caches its subtree height and
//! after each insert or delete the touched path is rebalanced bottom-up with
//! single or double rotations, keeping `|height(left) - height(right)| <= 1`
//! at every node.
//!
//! Nodes own their subtrees through `Option<Box<Node<K>>>` slots. There are
//! no parent links; recursive calls hand the (possibly rotated) subtree root
//! back to the caller, which stores it in its child slot.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`Link`], height and balance helpers |
//! [`util`] | recursive insert / remove / search / traversal, validation |
//! [`print`] | tree-dump debug rendering |
//! [`index`] | [`BalancedIndex`] container |
//! [`error`] | [`InvariantError`] |

pub mod error;
pub mod index;
pub mod print;
mod rotate;
pub mod types;
pub mod util;

pub use error::InvariantError;
pub use index::BalancedIndex;
pub use types::{Link, Node};
