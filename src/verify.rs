//! Proof verification.
//!
//! Pure functions — no tree required. Verification recomputes the root
//! from the proof data and compares it to the expected root; a mismatch
//! is a normal `false`, never an error.

use crate::{
    hash::{Digest, leaf_hash, node_hash},
    proof::{InclusionProof, NonInclusionProof},
};

impl InclusionProof {
    /// Verify that `leaf` is the record at `index` in the tree committed
    /// to by `root`.
    ///
    /// Recomputes the path bottom-up: at an even position the running
    /// digest is the left operand, at an odd position the right one.
    pub fn verify(&self, leaf: &[u8], root: &Digest, index: usize) -> bool {
        let mut current = leaf_hash(leaf);
        let mut position = index;
        for sibling in &self.siblings {
            current = if position % 2 == 0 {
                node_hash(&current, sibling)
            } else {
                node_hash(sibling, &current)
            };
            position /= 2;
        }
        current == *root
    }
}

impl NonInclusionProof {
    /// Verify this proof of absence against `root`.
    ///
    /// Rejects proofs whose closest record hashes to the target's own
    /// digest (those would prove the target's membership, not its
    /// absence), then checks the closest record's inclusion.
    ///
    /// The claimed closest record is trusted: the verifier does not
    /// recompute digest adjacency against the tree's leaf set, so any
    /// member record passes as "closest". Callers needing the stronger
    /// guarantee must check adjacency against a committed sorted leaf
    /// structure themselves.
    pub fn verify(&self, root: &Digest) -> bool {
        if leaf_hash(&self.target) == leaf_hash(&self.closest_record) {
            return false;
        }
        self.inclusion
            .verify(&self.closest_record, root, self.closest_index)
    }
}
