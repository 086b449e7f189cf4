use aperiodic_rs::{decode, encode, CodeParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// ceil(log2(n)) for choosing the widest-window configuration per size.
fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (n - 1).ilog2() as usize + 1
    }
}

/// Parameters with l = n, the configuration with the fewest windows and
/// the largest period bound the size admits.
fn widest_window(n: usize) -> CodeParams {
    let p = n - ceil_log2(n) - 1;
    CodeParams::with_min_window(n, p).expect("derived parameters are valid")
}

/// Generate a pseudo-random payload with a simple LCG.
fn generate_payload(n: usize, mut seed: u64) -> Vec<bool> {
    (0..n)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed >> 16) & 1 == 1
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let sizes = [20, 64, 256];
    let mut group = c.benchmark_group("encode");

    for size in sizes.iter() {
        let params = widest_window(*size);
        let random = generate_payload(*size, 42);
        let zeros = vec![false; *size];

        group.bench_with_input(BenchmarkId::new("random", size), &random, |b, payload| {
            b.iter(|| encode(black_box(payload), black_box(&params)).unwrap());
        });

        // All-zero input is the worst case: every window violates until
        // the correction cascade settles.
        group.bench_with_input(BenchmarkId::new("all_zero", size), &zeros, |b, payload| {
            b.iter(|| encode(black_box(payload), black_box(&params)).unwrap());
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let sizes = [20, 64, 256];
    let mut group = c.benchmark_group("decode");

    for size in sizes.iter() {
        let params = widest_window(*size);
        let random = encode(&generate_payload(*size, 42), &params).unwrap();
        let zeros = encode(&vec![false; *size], &params).unwrap();

        group.bench_with_input(BenchmarkId::new("random", size), &random, |b, stream| {
            b.iter(|| decode(black_box(stream), black_box(&params)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("all_zero", size), &zeros, |b, stream| {
            b.iter(|| decode(black_box(stream), black_box(&params)).unwrap());
        });
    }

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let params = CodeParams::with_min_window(20, 14).expect("reference parameters");
    let payloads: Vec<Vec<bool>> = (0..64u64).map(|s| generate_payload(20, s)).collect();

    c.bench_function("roundtrip/n20_p14_batch64", |b| {
        b.iter(|| {
            for payload in &payloads {
                let encoded = encode(black_box(payload), &params).unwrap();
                let decoded = decode(black_box(&encoded), &params).unwrap();
                black_box(decoded);
            }
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
