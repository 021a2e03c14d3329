// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boothmap_view2d::{ViewportConfig, ViewportController};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};

const FRAME_MS: u64 = 16;

fn ready_controller() -> ViewportController {
    let mut controller = ViewportController::new(ViewportConfig::default());
    controller.set_container_size(Size::new(1200.0, 800.0));
    controller
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("boothmap_view2d");
    group.sample_size(50);

    group.bench_function("resize_sweep(64)", |b| {
        b.iter_batched(
            ready_controller,
            |mut controller| {
                for i in 0..64_u32 {
                    let w = 600.0 + f64::from(i) * 15.0;
                    controller.set_container_size(Size::new(w, w * 0.66));
                }
                black_box(controller);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pan_to_and_animate(300ms)", |b| {
        b.iter_batched(
            ready_controller,
            |mut controller| {
                controller.pan_to(Point::new(170.0, 95.0), 1.5, 300);
                let mut now = 0;
                while controller.is_animating() {
                    now += FRAME_MS;
                    controller.tick(now);
                }
                black_box(controller.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("wheel_zoom_and_drag(128)", |b| {
        b.iter_batched(
            ready_controller,
            |mut controller| {
                for i in 0..128_u32 {
                    let anchor = Point::new(f64::from(i % 40) * 30.0, 400.0);
                    let factor = if i % 2 == 0 { 1.08 } else { 1.0 / 1.07 };
                    controller.zoom_about_view_point(anchor, factor, 0);
                    controller.pan_by(Vec2::new(3.0, -2.0));
                }
                black_box(controller.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("view_to_content(1024)", |b| {
        let controller = ready_controller();
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1024_u32 {
                let pt = Point::new(f64::from(i % 32) * 37.5, f64::from(i / 32) * 25.0);
                if let Some(p) = controller.view_to_content(black_box(pt)) {
                    acc += p.x + p.y;
                }
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
