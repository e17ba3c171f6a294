use argon2_phc::{HashOptions, PhcString, hash, needs_rehash, verify};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn options() -> HashOptions {
    HashOptions {
        memory_cost: Some(4096),
        time_cost: Some(1),
        parallelism: Some(1),
        salt: Some(b"saltsaltsaltsalt".to_vec()),
        ..Default::default()
    }
}

pub fn bench_hash(c: &mut Criterion) {
    let options = options();

    c.bench_function("argon2id hash 4 MiB", |b| {
        b.iter(|| hash(black_box(b"password"), &options))
    });
}

pub fn bench_verify(c: &mut Criterion) {
    let digest = hash(b"password", &options()).unwrap().into_encoded().unwrap();
    let none = HashOptions::default();

    c.bench_function("argon2id verify 4 MiB", |b| {
        b.iter(|| verify(black_box(&digest), black_box(b"password"), &none))
    });
}

pub fn bench_phc(c: &mut Criterion) {
    let digest = hash(b"password", &options()).unwrap().into_encoded().unwrap();
    let target = HashOptions::default();

    c.bench_function("phc decode", |b| {
        b.iter(|| PhcString::decode(black_box(&digest)))
    });
    c.bench_function("needs_rehash", |b| {
        b.iter(|| needs_rehash(black_box(&digest), &target))
    });
}

criterion_group!(benches, bench_hash, bench_verify, bench_phc);
criterion_main!(benches);
