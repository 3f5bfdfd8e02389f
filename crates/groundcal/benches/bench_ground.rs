use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;

use groundcal::camera::{CameraIntrinsics, CameraPose, PixelPoint};
use groundcal::clip::clip_to_depth_band;
use groundcal::compute_ground_dimensions;

fn bench_ground_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("ground_dimensions");

    let pose = CameraPose {
        height: 3.0,
        yaw: 10.0,
        pitch: -30.0,
        roll: 5.0,
    };
    let intrinsics = CameraIntrinsics {
        focal_length: (1000.0, 1000.0),
        principal_point: (960.0, 540.0),
    };
    let pixels = [
        PixelPoint::new(600.0, 700.0),
        PixelPoint::new(1300.0, 700.0),
        PixelPoint::new(1500.0, 1000.0),
        PixelPoint::new(400.0, 1000.0),
    ];

    for depth_scale in [None, Some(3.0)] {
        let label = match depth_scale {
            Some(d) => format!("clip_{d}"),
            None => "no_clip".to_string(),
        };
        group.bench_with_input(
            BenchmarkId::new("compute_ground_dimensions", label),
            &depth_scale,
            |b, &depth_scale| {
                b.iter(|| {
                    compute_ground_dimensions(
                        black_box(&pose),
                        black_box(&intrinsics),
                        black_box(&pixels),
                        depth_scale,
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");

    for num_vertices in [4, 64, 1024] {
        // regular polygon centered at (0, 5)
        let polygon: Vec<DVec2> = (0..num_vertices)
            .map(|i| {
                let angle = i as f64 / num_vertices as f64 * std::f64::consts::TAU;
                DVec2::new(4.0 * angle.cos(), 5.0 + 4.0 * angle.sin())
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("clip_to_depth_band", num_vertices),
            &polygon,
            |b, polygon| b.iter(|| clip_to_depth_band(black_box(polygon), 2.0, 7.0)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_ground_dimensions, bench_clip);
criterion_main!(benches);
