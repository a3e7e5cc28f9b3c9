use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use graph_canvas_editor::{Scene, SoftwareBackend};
use std::hint::black_box;

fn build_synthetic_scene(node_count: usize) -> Scene {
    let mut scene = Scene::default();

    // Knoten gleichmäßig über den sichtbaren Bereich verteilen
    let per_row = (node_count as f32).sqrt().ceil().max(1.0) as usize;
    for index in 0..node_count {
        let column = (index % per_row) as f32;
        let row = (index / per_row) as f32;
        let x = column / per_row as f32 * 2.0 - 1.0;
        let y = row / per_row as f32 * 2.0 - 1.0;
        scene.add_node_at(Vec2::new(x, y));
    }

    scene
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 40) as f32 * 20.0 + 0.37;
            let y = ((i * 7) % 30) as f32 * 20.0 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_register_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_click");

    for &node_count in &[100usize, 1_000usize, 10_000usize] {
        let scene = build_synthetic_scene(node_count);
        let query_points = build_query_points(64);

        group.bench_with_input(
            BenchmarkId::new("click_batch", node_count),
            &scene,
            |b, scene| {
                b.iter(|| {
                    let mut scene = scene.clone();
                    let mut backend = SoftwareBackend::new(Vec2::new(800.0, 600.0));
                    for point in &query_points {
                        scene
                            .register_click(&mut backend, black_box(*point))
                            .expect("Klick sollte ohne Fehler durchlaufen");
                    }
                    black_box(scene.shapes().len())
                })
            },
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for &node_count in &[1_000usize, 10_000usize] {
        let scene = build_synthetic_scene(node_count);

        group.bench_with_input(
            BenchmarkId::new("full_frame", node_count),
            &scene,
            |b, scene| {
                let mut backend = SoftwareBackend::new(Vec2::new(800.0, 600.0));
                b.iter(|| {
                    scene.render(&mut backend);
                    black_box(backend.frame_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_deep_copy(c: &mut Criterion) {
    let scene = build_synthetic_scene(10_000);

    c.bench_function("scene_deep_copy_10k", |b| {
        b.iter(|| black_box(scene.clone()).shapes().len())
    });
}

criterion_group!(benches, bench_register_click, bench_render, bench_deep_copy);
criterion_main!(benches);
