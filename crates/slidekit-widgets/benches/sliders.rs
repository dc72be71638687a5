//! Benchmarks for conversion math and drag handling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slidekit_core::conversion::{clamp_pixel_to_step_grid, percent_to_value, value_to_percent};
use slidekit_core::{Event, MouseButton, Point, Rect};
use slidekit_widgets::{RangeSlider, RangeSliderProps, Slider, SliderProps};
use web_time::Instant;

const TRACK: Rect = Rect::new(0.0, 0.0, 400.0, 20.0);

fn bench_value_to_percent(c: &mut Criterion) {
    c.bench_function("value_to_percent", |b| {
        b.iter(|| value_to_percent(black_box(37.5), black_box(0.0), black_box(100.0)))
    });
}

fn bench_percent_to_value(c: &mut Criterion) {
    c.bench_function("percent_to_value_fractional_step", |b| {
        b.iter(|| {
            percent_to_value(
                black_box(42.17),
                black_box(0.0),
                black_box(1.0),
                black_box(0.01),
            )
        })
    });
}

fn bench_clamp_pixel(c: &mut Criterion) {
    c.bench_function("clamp_pixel_to_step_grid", |b| {
        b.iter(|| {
            clamp_pixel_to_step_grid(
                black_box(123.4),
                black_box(400.0),
                black_box(0.0),
                black_box(100.0),
                black_box(1.0),
            )
        })
    });
}

fn bench_slider_drag_sweep(c: &mut Criterion) {
    let mut slider = Slider::new(SliderProps::new()).expect("valid props").with_track(TRACK);
    slider.mount();
    let now = Instant::now();

    c.bench_function("slider_drag_sweep_400px", |b| {
        b.iter(|| {
            slider.handle_event(
                &Event::MouseDown {
                    position: Point::new(0.0, 10.0),
                    button: MouseButton::Left,
                },
                now,
            );
            for x in 0..400 {
                slider.handle_event(
                    &Event::MouseMove {
                        position: Point::new(black_box(f64::from(x)), 10.0),
                    },
                    now,
                );
            }
            slider.handle_event(
                &Event::MouseUp {
                    position: Point::new(400.0, 10.0),
                    button: MouseButton::Left,
                },
                now,
            );
            slider.tick(now);
        })
    });
}

fn bench_range_drag_sweep(c: &mut Criterion) {
    let mut slider = RangeSlider::new(RangeSliderProps::new().default_value([0.0, 50.0]))
        .expect("valid props")
        .with_track(TRACK);
    slider.mount();
    let now = Instant::now();

    c.bench_function("range_drag_sweep_400px", |b| {
        b.iter(|| {
            slider.handle_event(
                &Event::MouseDown {
                    position: Point::new(0.0, 10.0),
                    button: MouseButton::Left,
                },
                now,
            );
            for x in (0..400).rev() {
                slider.handle_event(
                    &Event::MouseMove {
                        position: Point::new(black_box(f64::from(x)), 10.0),
                    },
                    now,
                );
            }
            slider.handle_event(
                &Event::MouseUp {
                    position: Point::new(0.0, 10.0),
                    button: MouseButton::Left,
                },
                now,
            );
            slider.tick(now);
        })
    });
}

criterion_group!(
    benches,
    bench_value_to_percent,
    bench_percent_to_value,
    bench_clamp_pixel,
    bench_slider_drag_sweep,
    bench_range_drag_sweep,
);
criterion_main!(benches);
