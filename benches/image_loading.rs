// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use imgv::media::load_image;
use std::hint::black_box;

fn image_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_loading");

    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let image_path = dir.path().join("sample.png");
    let sample = image_rs::RgbaImage::from_fn(1920, 1080, |x, y| {
        image_rs::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    if sample.save(&image_path).is_err() {
        return;
    }

    group.bench_function("load_1080p_png", |b| {
        b.iter(|| {
            let _ = black_box(load_image(&image_path));
        });
    });

    group.finish();
}

criterion_group!(benches, image_loading_benchmark);
criterion_main!(benches);
