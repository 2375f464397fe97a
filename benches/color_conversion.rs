use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use ryb_channels::color::{rgb_to_ryb, ryb_to_rgb, Channel, ColorSystem};
use ryb_channels::decompose::{isolate_channel_colored, recombine_except};

fn bench_pixel_conversion(c: &mut Criterion) {
    c.bench_function("rgb_to_ryb_u8", |b| {
        b.iter(|| rgb_to_ryb(black_box(214u8), black_box(51), black_box(16)))
    });

    c.bench_function("round_trip_u8", |b| {
        b.iter(|| {
            let (r, y, bl) = rgb_to_ryb(black_box(255u8), black_box(128), black_box(0));
            ryb_to_rgb(r, y, bl)
        })
    });
}

fn bench_image_decomposition(c: &mut Criterion) {
    // Gradient fill so pixels take different conversion paths
    let image = RgbImage::from_fn(256, 256, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });

    c.bench_function("isolate_colored_256x256", |b| {
        b.iter(|| isolate_channel_colored(black_box(&image), Channel::Yellow))
    });

    c.bench_function("recombine_ryb_256x256", |b| {
        b.iter(|| recombine_except(black_box(&image), Channel::Blue, ColorSystem::Ryb))
    });
}

criterion_group!(benches, bench_pixel_conversion, bench_image_decomposition);
criterion_main!(benches);
