//! Proof generation for the record Merkle tree.
//!
//! Two proof kinds, distinguished at the type level so a verifier cannot
//! run the wrong routine:
//!
//! - [`InclusionProof`] — the sibling path from one leaf up to the root.
//! - [`NonInclusionProof`] — absence of a target, carried by the inclusion
//!   proof of the target's nearest-neighbor leaf under digest ordering.
//!
//! Proofs are self-contained values: they hold everything verification
//! needs, so a verifier never has to retain the tree.

use bincode::{Decode, Encode};

use crate::{
    MerkleError, MerkleTree,
    hash::{Digest, leaf_hash},
};


/// Decode size limit for proof bytes.
const MAX_PROOF_BYTES: usize = 100 * 1024 * 1024;

/// An inclusion proof: the sibling digests on the path from a leaf to the
/// root, ordered leaf level first.
///
/// One sibling per level, so the proof length always equals the tree
/// depth. Where a level has odd length and the path's node is the
/// unpaired last element, the sibling is the node's own digest — the same
/// duplicate the construction hashed into the parent.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct InclusionProof {
    /// Sibling digests, from the leaf's immediate sibling up to the level
    /// just below the root.
    pub siblings: Vec<Digest>,
}

impl InclusionProof {
    /// Generate a proof for the leaf at `index`.
    ///
    /// Returns [`MerkleError::IndexOutOfRange`] if `index` is not a valid
    /// leaf index.
    pub fn generate(tree: &MerkleTree, index: usize) -> Result<Self, MerkleError> {
        let leaf_count = tree.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut siblings = Vec::with_capacity(tree.depth());
        let mut position = index;
        // Walk the levels from the leaves up, stopping below the root.
        for level in tree.levels().iter().rev().take(tree.depth()) {
            let sibling = position ^ 1;
            // An unpaired last node was hashed against itself.
            let digest = level.get(sibling).copied().unwrap_or(level[position]);
            siblings.push(digest);
            position /= 2;
        }

        Ok(Self { siblings })
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, MerkleError> {
        encode_proof(self)
    }

    /// Decode from bytes using bincode.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, MerkleError> {
        decode_proof(bytes)
    }
}

/// A non-inclusion proof: evidence that a target record is absent from
/// the tree.
///
/// Carries the inclusion proof of the *closest* leaf — the member whose
/// digest is the target digest's predecessor in sorted order, falling
/// back to the smallest or largest leaf when the target digest lies
/// outside the leaf digest range.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct NonInclusionProof {
    /// The record claimed absent.
    pub target: Vec<u8>,
    /// `blake3(target)`, the digest the nearest-neighbor search ran on.
    pub target_digest: Digest,
    /// The member record closest to the target under digest ordering.
    pub closest_record: Vec<u8>,
    /// Original leaf index of the closest record.
    pub closest_index: usize,
    /// Inclusion proof of the closest record.
    pub inclusion: InclusionProof,
}

impl NonInclusionProof {
    /// Generate a non-inclusion proof for `target`, or `None` when the
    /// target is a member (absence is unprovable — callers must treat
    /// `None` as "included", not as a failure).
    ///
    /// `records` must be the sequence the tree was built from; it is
    /// needed to report the closest record itself rather than just its
    /// digest. A count mismatch returns [`MerkleError::InvalidData`].
    pub fn generate<R: AsRef<[u8]>>(
        tree: &MerkleTree,
        records: &[R],
        target: &[u8],
    ) -> Result<Option<Self>, MerkleError> {
        if records.len() != tree.leaf_count() {
            return Err(MerkleError::InvalidData(format!(
                "record count {} does not match leaf count {}",
                records.len(),
                tree.leaf_count()
            )));
        }

        let target_digest = leaf_hash(target);
        let sorted = tree.sorted_leaves();

        // First entry whose digest is >= the target digest.
        let split = sorted.partition_point(|(digest, _)| digest < &target_digest);
        if sorted
            .get(split)
            .is_some_and(|(digest, _)| *digest == target_digest)
        {
            return Ok(None);
        }

        // Predecessor under digest order; the smallest leaf when the
        // target sorts below every member, the largest when above.
        let (_, closest_index) = if split == 0 {
            sorted[0]
        } else {
            sorted[split - 1]
        };

        let inclusion = InclusionProof::generate(tree, closest_index)?;

        Ok(Some(Self {
            target: target.to_vec(),
            target_digest,
            closest_record: records[closest_index].as_ref().to_vec(),
            closest_index,
            inclusion,
        }))
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, MerkleError> {
        encode_proof(self)
    }

    /// Decode from bytes using bincode.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, MerkleError> {
        decode_proof(bytes)
    }
}

fn encode_proof<P: Encode>(proof: &P) -> Result<Vec<u8>, MerkleError> {
    let config = bincode::config::standard()
        .with_big_endian()
        .with_no_limit();
    bincode::encode_to_vec(proof, config)
        .map_err(|e| MerkleError::InvalidData(format!("encode error: {}", e)))
}

fn decode_proof<P: Decode<()>>(bytes: &[u8]) -> Result<P, MerkleError> {
    let config = bincode::config::standard()
        .with_big_endian()
        .with_limit::<MAX_PROOF_BYTES>();
    let (proof, _) = bincode::decode_from_slice(bytes, config)
        .map_err(|e| MerkleError::InvalidData(format!("decode error: {}", e)))?;
    Ok(proof)
}
