use thiserror::Error;

/// Errors from tree construction and proof generation.
///
/// Failed verification is never an error — both verifiers return `false`
/// for proofs that do not check out, and a non-inclusion proof requested
/// for a member record is `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// Tried to build a tree from zero records. A root over zero leaves is
    /// undefined.
    #[error("cannot build a Merkle tree from an empty record set")]
    EmptyInput,
    /// Proof requested for a leaf index outside `[0, leaf_count)`.
    #[error("leaf index {index} is out of range (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// Caller input inconsistent with the tree, or malformed proof bytes.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
