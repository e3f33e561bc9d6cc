// Copyright 2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hashkit_sha256::{
	compression::{PseudoCompressionFunction, Sha256Compression},
	double_hash, hash_buffer,
};
use hashkit_utils::env::boolean_env_flag_set;
use rand::{thread_rng, RngCore};
use sha2::Digest;

fn input_sizes() -> Vec<usize> {
	let mut sizes = vec![64, 1 << 10, 1 << 16];
	if boolean_env_flag_set("HASHKIT_BENCH_LARGE") {
		sizes.push(1 << 24);
	}
	sizes
}

fn bench_sha256(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-256");
	let mut rng = thread_rng();

	for size in input_sizes() {
		let mut data = vec![0u8; size];
		rng.fill_bytes(&mut data);
		group.throughput(Throughput::Bytes(size as u64));

		group.bench_with_input(BenchmarkId::new("hash_buffer", size), &data, |bench, data| {
			bench.iter(|| hash_buffer(data))
		});
		group.bench_with_input(BenchmarkId::new("double_hash", size), &data, |bench, data| {
			bench.iter(|| double_hash(data))
		});
		group.bench_with_input(BenchmarkId::new("SHA-256-RustCrypto", size), &data, |bench, data| {
			bench.iter(|| sha2::Sha256::digest(data))
		});
	}

	group.finish()
}

fn bench_compression(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-256 compression");
	let compression = Sha256Compression::default();
	let left = hash_buffer(b"left");
	let right = hash_buffer(b"right");

	group.throughput(Throughput::Bytes(64));
	group.bench_function("Sha256Compression", |bench| {
		bench.iter(|| compression.compress([left, right]))
	});

	group.finish()
}

criterion_group!(sha256, bench_sha256, bench_compression);
criterion_main!(sha256);
