use criterion::{black_box, criterion_group, criterion_main, Criterion};

use frameguard_core::{CompressedFrame, FrameMonitor};

fn jpeg(size: usize) -> Vec<u8> {
    let mut frame = vec![0x42; size];
    frame[..2].copy_from_slice(&[0xFF, 0xD8]);
    frame[size - 2..].copy_from_slice(&[0xFF, 0xD9]);
    frame
}

fn observe_benchmark(c: &mut Criterion) {
    let valid = jpeg(48 * 1024);
    let mut truncated = valid.clone();
    truncated.truncate(30 * 1024);

    c.bench_function("observe_valid_frame", |b| {
        let mut monitor = FrameMonitor::new();
        let mut seq = 0u32;
        b.iter(|| {
            seq = seq.wrapping_add(1);
            black_box(monitor.observe(CompressedFrame::new(black_box(&valid), seq)))
        })
    });

    c.bench_function("observe_truncated_frame", |b| {
        let mut monitor = FrameMonitor::new();
        let mut seq = 0u32;
        b.iter(|| {
            seq = seq.wrapping_add(1);
            black_box(monitor.observe(CompressedFrame::new(black_box(&truncated), seq)))
        })
    });
}

criterion_group!(benches, observe_benchmark);
criterion_main!(benches);
