use chain_table::ChainTable;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn keys(n: usize) -> Vec<String> {
    let mut num = 0u64;
    (0..n)
        .map(|_| {
            num = num.wrapping_mul(17).wrapping_add(255);
            num.to_string()
        })
        .collect()
}

fn filled(keys: &[String]) -> ChainTable<u64> {
    let mut table = ChainTable::new(1 << 8).unwrap();
    for (i, k) in keys.iter().enumerate() {
        table.insert(k, i as u64);
    }
    table
}

fn insert(c: &mut Criterion) {
    let keys = keys(1_000);
    c.bench_function("insert", |b| {
        b.iter(|| filled(&keys));
    });
}

fn update(c: &mut Criterion) {
    let keys = keys(1_000);
    let mut table = filled(&keys);
    c.bench_function("update", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(table.insert(k, 0));
            }
        });
    });
}

fn lookup(c: &mut Criterion) {
    let keys = keys(1_000);
    let table = filled(&keys);
    c.bench_function("lookup", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(table.get(k));
            }
        });
    });
}

fn dump(c: &mut Criterion) {
    let keys = keys(1_000);
    let table = filled(&keys);
    c.bench_function("dump", |b| {
        b.iter(|| {
            for bucket in table.dump() {
                black_box(bucket.entries());
            }
        });
    });
}

criterion_group!(benches, insert, update, lookup, dump);
criterion_main!(benches);
