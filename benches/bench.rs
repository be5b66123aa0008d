use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use sofmeta::{JpegReader, SofMarker};

fn extract(c: &mut Criterion) {
    // 4 components, the most a SOF0 frame can have.
    let segment: [u8; 18] = [
        8, 0x04, 0x38, 0x07, 0x80, 4, 1, 0x22, 0, 2, 0x11, 1, 3, 0x11, 1, 4, 0x11, 1,
    ];
    let reader = JpegReader::new();

    let mut group = c.benchmark_group("sof");
    group.throughput(Throughput::Bytes(segment.len() as u64));
    group.bench_function("extract", |b| {
        b.iter(|| reader.extract(black_box(&segment), SofMarker::SOF0))
    });
    group.bench_function("extract_truncated", |b| {
        b.iter(|| reader.extract(black_box(&segment[..10]), SofMarker::SOF0))
    });
    group.finish();
}

criterion_group!(benches, extract);
criterion_main!(benches);
