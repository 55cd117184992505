#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use record_merkle_tree::{InclusionProof, MerkleTree, NonInclusionProof};

/// Build a record set of `count` little-endian integers.
fn records(count: u32) -> Vec<Vec<u8>> {
    (0..count).map(|i| i.to_le_bytes().to_vec()).collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("tree build");
        for input in [1_000u32, 10_000, 100_000] {
            group.bench_with_input(BenchmarkId::new("leaves", input), &input, |b, &size| {
                let recs = records(size);
                b.iter(|| MerkleTree::build(&recs).unwrap());
            });
        }
    }

    c.bench_function("inclusion gen proof", |b| {
        let recs = records(100_000);
        let tree = MerkleTree::build(&recs).unwrap();
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 7919) % recs.len();
            InclusionProof::generate(&tree, index).unwrap()
        });
    });

    c.bench_function("inclusion verify", |b| {
        let recs = records(100_000);
        let tree = MerkleTree::build(&recs).unwrap();
        let root = tree.root();
        let proofs: Vec<(usize, InclusionProof)> = (0..1_000)
            .map(|i| {
                let index = i * 97 % recs.len();
                (index, InclusionProof::generate(&tree, index).unwrap())
            })
            .collect();
        let mut cursor = 0usize;
        b.iter(|| {
            cursor = (cursor + 1) % proofs.len();
            let (index, proof) = &proofs[cursor];
            assert!(proof.verify(&recs[*index], &root, *index));
        });
    });

    c.bench_function("non-inclusion gen proof", |b| {
        let recs = records(100_000);
        let tree = MerkleTree::build(&recs).unwrap();
        let mut probe = 100_000u32;
        b.iter(|| {
            probe = probe.wrapping_add(1).max(100_000);
            NonInclusionProof::generate(&tree, &recs, &probe.to_le_bytes()).unwrap()
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
);
criterion_main!(benches);
