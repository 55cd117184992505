use crate::{
    MerkleError,
    hash::{Digest, leaf_hash, node_hash},
};

/// A Merkle tree over an ordered, non-empty record set.
///
/// Levels are stored root level first: level 0 holds exactly one digest
/// (the root) and the last level holds the leaf digests in input order.
/// Each level above the leaves pairs adjacent digests left-to-right with
/// `blake3(left || right)`; the last digest of an odd-length level is
/// paired with itself.
///
/// The tree is immutable once built. All read operations are pure, so a
/// built tree can be shared freely across concurrent readers.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// Digest levels, root first, leaves last.
    levels: Vec<Vec<Digest>>,
    /// Leaf digests paired with their original index, sorted ascending by
    /// digest (ties by index). Built once so non-inclusion queries never
    /// re-sort the leaves.
    sorted_leaves: Vec<(Digest, usize)>,
}

impl MerkleTree {
    /// Build a tree from an ordered sequence of records.
    ///
    /// The input order is significant: it defines each record's leaf
    /// index. Identical input always yields an identical tree and root.
    ///
    /// Returns [`MerkleError::EmptyInput`] if `records` is empty.
    pub fn build<R: AsRef<[u8]>>(records: &[R]) -> Result<Self, MerkleError> {
        if records.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let leaves: Vec<Digest> = records.iter().map(|r| leaf_hash(r.as_ref())).collect();

        let mut sorted_leaves: Vec<(Digest, usize)> = leaves
            .iter()
            .enumerate()
            .map(|(index, digest)| (*digest, index))
            .collect();
        sorted_leaves.sort_unstable();

        // Fold levels bottom-up, then flip so the root lands at index 0.
        let mut levels = vec![leaves];
        loop {
            let prev = &levels[levels.len() - 1];
            if prev.len() == 1 {
                break;
            }
            let next: Vec<Digest> = prev
                .chunks(2)
                .map(|pair| node_hash(&pair[0], pair.get(1).unwrap_or(&pair[0])))
                .collect();
            levels.push(next);
        }
        levels.reverse();

        Ok(Self {
            levels,
            sorted_leaves,
        })
    }

    /// The root digest summarizing the whole record set.
    pub fn root(&self) -> Digest {
        // levels[0] holds exactly one digest for any non-empty input, and
        // empty input is rejected in `build`.
        self.levels[0][0]
    }

    /// Number of leaves (== number of records the tree was built from).
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of levels above the leaf level: 0 for a single leaf,
    /// `ceil(log2(leaf_count))` otherwise.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Leaf digests in input order.
    pub fn leaves(&self) -> &[Digest] {
        self.levels.last().map_or(&[], Vec::as_slice)
    }

    /// All digest levels, root level first, leaf level last.
    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    /// Sorted (leaf digest, original index) pairs for nearest-neighbor
    /// lookups.
    pub(crate) fn sorted_leaves(&self) -> &[(Digest, usize)] {
        &self.sorted_leaves
    }
}
