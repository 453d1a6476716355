use std::result;

/// Error variants returned by this crate.
///
/// Every variant signals a structural problem with a tree: either an internal consistency check
/// failed while rebalancing, or `validate` found a violated red-black invariant. None of them are
/// transient, so none are retried.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// No deletion case matches the node being removed.
    #[error("incorrect delete state: {0}")]
    InvalidDeleteState(String),

    /// Transplant was asked to move or replace a node that does not exist.
    #[error("transplant requires a present {0} node")]
    AbsentNode(&'static str),

    #[error("root node is red")]
    RedRoot,

    #[error("red node has a red child")]
    RedViolation,

    #[error("black height mismatch: expected {expected}, found {found}")]
    BlackHeightMismatch { expected: usize, found: usize },

    #[error("in-order traversal is not sorted")]
    OutOfOrder,

    #[error("child does not point back to its parent")]
    BrokenParentLink,

    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Type alias for Result return type, used by this crate.
pub type Result<T> = result::Result<T, Error>;
