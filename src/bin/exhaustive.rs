use aperiodic_rs::{decode, encode, min_period, CodeParams};
use rayon::prelude::*;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Brute-force verifier for the reference configuration.
///
/// Iterates every 2^n input, checks that the encoded stream satisfies
/// the period bound in every window, and that decoding restores the
/// input. Trials are independent (each owns its buffer), so they run in
/// parallel.
///
/// Usage: cargo run --release --bin exhaustive
fn main() {
    let n = 20usize;
    let p = 14usize;
    let params = CodeParams::with_min_window(n, p).expect("reference parameters are valid");
    let l = params.l();

    println!("Parameters: n={}, l={}, p={}", n, l, p);

    let total = 1usize << n;
    let step = total / 100;
    let done = AtomicUsize::new(0);

    (0..total).into_par_iter().for_each(|num| {
        let payload: Vec<bool> = (0..n).map(|j| (num >> j) & 1 == 1).collect();

        let encoded = encode(&payload, &params)
            .unwrap_or_else(|e| panic!("encode failed for input {num:#x}: {e}"));

        for i in 0..=(n + 1 - l) {
            let period = min_period(&encoded[i..i + l]).expect("window is non-empty");
            assert!(
                period >= p,
                "input {num:#x}: window {i} has period {period}, bound {p}"
            );
        }

        let decoded = decode(&encoded, &params)
            .unwrap_or_else(|e| panic!("decode failed for input {num:#x}: {e}"));
        assert_eq!(decoded, payload, "roundtrip failed for input {num:#x}");

        let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
        if finished % step == 0 {
            let progress = finished / step;
            let mut bar = String::with_capacity(102);
            for i in 0..100 {
                bar.push(if i < progress {
                    '='
                } else if i == progress {
                    '>'
                } else {
                    ' '
                });
            }
            print!("[{}] {} %\r", bar, progress);
            std::io::stdout().flush().ok();
        }
    });

    println!();
    println!("All {} inputs verified.", total);
}
