use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use tinybtree::BTree;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{i:08}")).collect()
}

fn random_keys(n: usize) -> Vec<String> {
    let mut keys = ordered_keys(n);
    keys.shuffle(&mut StdRng::seed_from_u64(12345));
    keys
}

// ─── Set ────────────────────────────────────────────────────────────────────

fn bench_set(c: &mut Criterion, name: &str, keys: &[String]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter_batched(
            || keys.to_vec(),
            |keys| {
                let mut tree = BTree::new();
                for key in keys {
                    tree.set(key);
                }
                tree
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.to_vec(),
            |keys| {
                let mut set = BTreeSet::new();
                for key in keys {
                    set.insert(key);
                }
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_set_ordered(c: &mut Criterion) {
    bench_set(c, "set_ordered", &ordered_keys(N));
}

fn bench_set_random(c: &mut Criterion) {
    bench_set(c, "set_random", &random_keys(N));
}

// ─── Get ────────────────────────────────────────────────────────────────────

fn bench_get(c: &mut Criterion, name: &str, keys: &[String]) {
    let tree: BTree<String> = keys.iter().cloned().collect();
    let set: BTreeSet<String> = keys.iter().cloned().collect();

    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| keys.iter().filter(|key| tree.get(key.as_str())).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|key| set.contains(key.as_str())).count());
    });

    group.finish();
}

fn bench_get_ordered(c: &mut Criterion) {
    bench_get(c, "get_ordered", &ordered_keys(N));
}

fn bench_get_random(c: &mut Criterion) {
    bench_get(c, "get_random", &random_keys(N));
}

// ─── Delete ─────────────────────────────────────────────────────────────────

fn bench_delete(c: &mut Criterion, name: &str, keys: &[String]) {
    let tree: BTree<String> = keys.iter().cloned().collect();
    let set: BTreeSet<String> = keys.iter().cloned().collect();

    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for key in keys {
                    tree.delete(key.as_str());
                }
                tree
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || set.clone(),
            |mut set| {
                for key in keys {
                    set.remove(key.as_str());
                }
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_delete_ordered(c: &mut Criterion) {
    bench_delete(c, "delete_ordered", &ordered_keys(N));
}

fn bench_delete_random(c: &mut Criterion) {
    bench_delete(c, "delete_random", &random_keys(N));
}

// ─── Walks ──────────────────────────────────────────────────────────────────

fn bench_scan(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: BTree<String> = keys.iter().cloned().collect();
    let set: BTreeSet<String> = keys.into_iter().collect();

    let mut group = c.benchmark_group("scan");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut total = 0usize;
            tree.scan(|key| {
                total += key.len();
                true
            });
            total
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| set.iter().map(String::len).sum::<usize>());
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(set_benches, bench_set_ordered, bench_set_random);

criterion_group!(get_benches, bench_get_ordered, bench_get_random);

criterion_group!(delete_benches, bench_delete_ordered, bench_delete_random);

criterion_group!(walk_benches, bench_scan);

criterion_main!(set_benches, get_benches, delete_benches, walk_benches);
