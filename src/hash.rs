//! Blake3 hashing for leaves and internal nodes.

/// Fixed-width digest produced by the tree's hash function.
///
/// Bytewise equality and ordering of this type are what the non-inclusion
/// nearest-neighbor search operates on.
pub type Digest = [u8; 32];

/// Hash a raw record into its leaf digest: `blake3(record)`.
pub fn leaf_hash(record: &[u8]) -> Digest {
    *blake3::hash(record).as_bytes()
}

/// Hash two child digests into their parent: `blake3(left || right)`.
///
/// The left operand always comes first; generation and verification must
/// agree on this order.
pub fn node_hash(left: &Digest, right: &Digest) -> Digest {
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(left);
    input[32..].copy_from_slice(right);
    *blake3::hash(&input).as_bytes()
}

/// Lowercase hex encoding of a digest, for display and logging.
pub fn to_hex(digest: &Digest) -> String {
    hex::encode(digest)
}
