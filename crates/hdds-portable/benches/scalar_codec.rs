// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scalar Codec Benchmark
//!
//! Measures encode and decode cost per scalar for:
//! - Native-order streams (no swap on either side)
//! - Foreign-order streams (one swap per scalar on read)

#![allow(clippy::cast_precision_loss)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hdds_portable::{CodecOptions, Endianness, PortableReader, PortableWriter};
use std::hint::black_box as bb;

const COUNT: usize = 1000;

fn encode_f64s(options: CodecOptions) -> Vec<u8> {
    let mut writer =
        PortableWriter::with_options(Vec::with_capacity(1 + COUNT * 8), options).expect("writer");
    for i in 0..COUNT {
        writer.write(i as f64 * 1.25).expect("write should succeed");
    }
    writer.into_inner()
}

fn order_label(options: CodecOptions) -> &'static str {
    if options.endianness.resolve() == Endianness::native() {
        "native"
    } else {
        "foreign"
    }
}

fn orders() -> [CodecOptions; 2] {
    [
        CodecOptions::default(),
        CodecOptions::default().with_endianness(Endianness::native().opposite().into()),
    ]
}

/// Benchmark writing 1000 f64 values
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("portable_encode_f64");
    group.throughput(Throughput::Elements(COUNT as u64));

    for options in orders() {
        group.bench_with_input(
            BenchmarkId::from_parameter(order_label(options)),
            &options,
            |b, &options| {
                b.iter(|| bb(encode_f64s(options)));
            },
        );
    }

    group.finish();
}

/// Benchmark reading 1000 f64 values
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("portable_decode_f64");
    group.throughput(Throughput::Elements(COUNT as u64));

    for options in orders() {
        let bytes = encode_f64s(options);
        group.bench_with_input(
            BenchmarkId::from_parameter(order_label(options)),
            &bytes,
            |b, bytes| {
                b.iter(|| {
                    let mut reader = PortableReader::new(&bytes[..]).expect("reader");
                    let mut sum = 0.0;
                    for _ in 0..COUNT {
                        sum += reader.read::<f64>().expect("read should succeed");
                    }
                    bb(sum)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(codec_benches, bench_encode, bench_decode);
criterion_main!(codec_benches);
