//! Criterion benchmarks for token parsing and frame encoding.
//!
//! Run with:
//! ```bash
//! cargo bench --package rc-core --bench codec_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rc_core::{create_record, encode_key_event, Command, KeyTable, TransportVariant};

const BENCH_TOKENS: &[&str] = &["GUIDE", "vol_up", "302", "BATT_LEVEL55", "SLEEP0.1", "REL"];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_tokens", |b| {
        b.iter(|| {
            for token in BENCH_TOKENS {
                let _ = black_box(Command::parse(black_box(token)));
            }
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let codes: Vec<_> = KeyTable::list_names()
        .iter()
        .filter_map(|name| KeyTable::lookup(name))
        .collect();

    let mut group = c.benchmark_group("encode_key_event");
    for variant in [TransportVariant::VirtualHid, TransportVariant::Legacy] {
        group.bench_function(variant.label(), |b| {
            b.iter(|| {
                for &code in &codes {
                    black_box(encode_key_event(black_box(code), variant));
                }
            })
        });
    }
    group.finish();
}

fn bench_create_record(c: &mut Criterion) {
    c.bench_function("create_record", |b| b.iter(|| black_box(create_record())));
}

criterion_group!(benches, bench_parse, bench_encode, bench_create_record);
criterion_main!(benches);
