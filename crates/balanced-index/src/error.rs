use thiserror::Error;

/// Structural defect found by [`crate::BalancedIndex::assert_valid`].
///
/// None of these are reachable through the public API; they indicate a bug
/// in the balancing code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Node order violated")]
    OrderViolated,
    #[error("Height mismatch: expected {expected}, got {actual}")]
    HeightMismatch { expected: i32, actual: i32 },
    #[error("AVL balance violated: balance factor {balance}")]
    Unbalanced { balance: i32 },
}
