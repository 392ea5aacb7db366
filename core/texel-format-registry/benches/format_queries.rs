use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use texel_format_registry::{image_size, ChannelRole, Format};

fn catalog() -> Vec<Format> {
    Format::all_values()
        .iter()
        .copied()
        .filter(|f| *f != Format::None)
        .collect()
}

fn bench_descriptor_reads(c: &mut Criterion) {
    let formats = catalog();
    c.bench_function("bytes_per_block/full_catalog", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for f in &formats {
                total += black_box(*f).bytes_per_block();
            }
            total
        })
    });
    c.bench_function("channel_bits/full_catalog", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for f in &formats {
                total += black_box(*f).channel_bits(ChannelRole::Red) as u32;
            }
            total
        })
    });
}

fn bench_size_math(c: &mut Criterion) {
    c.bench_function("image_size/uncompressed", |b| {
        b.iter(|| image_size(black_box(Format::R8G8B8A8Unorm), 4096, 4096, 1))
    });
    c.bench_function("image_size/compressed_partial_blocks", |b| {
        b.iter(|| image_size(black_box(Format::RgbaDxt5), 4097, 4097, 1))
    });
}

fn bench_relationships(c: &mut Criterion) {
    let formats = catalog();
    c.bench_function("srgb_to_linear/full_catalog", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for f in &formats {
                if black_box(*f).srgb_to_linear() != *f {
                    hits += 1;
                }
            }
            hits
        })
    });
}

criterion_group!(
    benches,
    bench_descriptor_reads,
    bench_size_math,
    bench_relationships
);
criterion_main!(benches);
