// benches/buffer_bench.rs
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lebuf::prelude::*;
use std::hint::black_box;

fn bench_write_and_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_accumulation");

    for size in [256, 1024, 4096, 16384].iter() {
        group.bench_with_input(BenchmarkId::new("write_snapshot", size), size, |b, &size| {
            let chunk = vec![0xA5u8; 64];
            b.iter(|| {
                let mut buf = ByteBuffer::new();
                for _ in 0..(size / 64) {
                    buf.write(black_box(&chunk)).unwrap();
                }
                let _ = buf.bytes().unwrap();
            });
        });
    }

    group.finish();
}

fn bench_positional_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional_decode");

    for count in [16usize, 256, 4096].iter() {
        let raw: Vec<u8> = (0..*count)
            .flat_map(|i| (i as u16).to_le_bytes())
            .collect();
        let buf = ByteBuffer::from_vec(raw);

        group.bench_with_input(BenchmarkId::new("read_u16_array", count), count, |b, &count| {
            b.iter(|| {
                let values = buf.read_u16_array(black_box(count), black_box(0)).unwrap();
                black_box(values);
            });
        });

        group.bench_with_input(BenchmarkId::new("read_u16_loop", count), count, |b, &count| {
            b.iter(|| {
                for i in 0..count {
                    let _ = black_box(buf.read_u16(black_box(i * 2)).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write_and_snapshot, bench_positional_decode);
criterion_main!(benches);
