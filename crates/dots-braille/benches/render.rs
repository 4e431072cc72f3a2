use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dots_braille::compositor::Renderer;
use dots_braille::dither::floyd_steinberg;
use dots_core::config::{Background, RenderEnv, RenderOptions};
use dots_core::frame::{PixelGrid, Rgb};
use dots_source::resize::Resizer;

fn gradient(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        Rgb::new(
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            ((x + y) % 256) as u8,
        )
    })
}

fn bench_render(c: &mut Criterion) {
    let image = gradient(1920, 1080);
    let env = RenderEnv::default();
    let mut renderer = Renderer::new(Resizer::new());

    let mut group = c.benchmark_group("render_1080p");
    for (name, opts) in [
        (
            "plain",
            RenderOptions {
                width: 160,
                height: 45,
                color_enabled: false,
                ..Default::default()
            },
        ),
        (
            "color_bg",
            RenderOptions {
                width: 160,
                height: 45,
                background: Background::Ansi(16),
                ..Default::default()
            },
        ),
        (
            "dither_frame",
            RenderOptions {
                width: 160,
                height: 45,
                dither: true,
                frame: true,
                ..Default::default()
            },
        ),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| renderer.render(black_box(&image), black_box(&opts), &env));
        });
    }
    group.finish();
}

fn bench_dither(c: &mut Criterion) {
    let grid = gradient(320, 180);
    c.bench_function("floyd_steinberg_320x180", |b| {
        b.iter(|| floyd_steinberg(black_box(&grid), 20));
    });
}

criterion_group!(benches, bench_render, bench_dither);
criterion_main!(benches);
