//! Merkle tree over an ordered record set, with inclusion and
//! non-inclusion proofs, using Blake3.
//!
//! The tree is built once from an ordered sequence of byte records and is
//! immutable afterwards. Leaves are `blake3(record)`; internal nodes are
//! `blake3(left || right)` over the concatenated child digests, and the
//! last digest of an odd-length level is paired with itself.
//!
//! # Core types
//!
//! - [`MerkleTree`] — the digest pyramid (build, root, level accessors).
//! - [`InclusionProof`] — sibling path authenticating one record against
//!   the root.
//! - [`NonInclusionProof`] — proof that a record is absent, built from the
//!   inclusion proof of its nearest-neighbor leaf under digest ordering.
//!
//! Verification never needs the tree: proofs are self-contained values and
//! verify against a bare root digest.
//!
//! ```
//! use record_merkle_tree::{InclusionProof, MerkleTree, NonInclusionProof};
//!
//! let records = [b"1".as_slice(), b"2", b"3", b"4"];
//! let tree = MerkleTree::build(&records)?;
//! let root = tree.root();
//!
//! let proof = InclusionProof::generate(&tree, 2)?;
//! assert!(proof.verify(b"3", &root, 2));
//!
//! let absent = NonInclusionProof::generate(&tree, &records, b"7")?
//!     .expect("\"7\" is not a member");
//! assert!(absent.verify(&root));
//! # Ok::<(), record_merkle_tree::MerkleError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod hash;
mod proof;
mod tree;
mod verify;


pub use error::MerkleError;
pub use hash::{Digest, leaf_hash, node_hash, to_hex};
pub use proof::{InclusionProof, NonInclusionProof};
pub use tree::MerkleTree;
