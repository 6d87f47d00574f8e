//! Benchmarks for primitive generation and the OBJ codec
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench
//! ```
//!
//! Run a specific group:
//! ```bash
//! cargo bench --bench codec generate
//! cargo bench --bench codec obj_encode
//! cargo bench --bench codec obj_decode
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use wavemesh::generate::add_cube;
use wavemesh::io::{decode, encode};
use wavemesh::math::Vec3;
use wavemesh::{Mesh, Scene};

/// Build a mesh holding a row of adjacent cubes
///
/// Adjacent cubes share corner vertices, so this exercises the linear
/// dedup scan in `add_vertex`.
fn cube_row(count: usize) -> Scene {
    let mut mesh = Mesh::new("CubeRow");
    for i in 0..count {
        add_cube(&mut mesh, Vec3::new(2.0 * i as f64, 0.0, 0.0), 1.0);
    }
    Scene::from(vec![mesh])
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for count in [1, 8, 64] {
        group.bench_with_input(BenchmarkId::new("cube_row", count), &count, |b, &count| {
            b.iter(|| cube_row(black_box(count)));
        });
    }

    group.finish();
}

fn benchmark_obj_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("obj_encode");

    for count in [8, 64] {
        let scene = cube_row(count);
        group.bench_with_input(BenchmarkId::new("cube_row", count), &scene, |b, scene| {
            b.iter(|| {
                let mut buffer = Vec::new();
                encode(&mut buffer, black_box(scene)).unwrap();
                buffer
            });
        });
    }

    group.finish();
}

fn benchmark_obj_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("obj_decode");

    for count in [8, 64] {
        let mut buffer = Vec::new();
        encode(&mut buffer, &cube_row(count)).unwrap();
        group.bench_with_input(BenchmarkId::new("cube_row", count), &buffer, |b, buffer| {
            b.iter(|| decode(black_box(buffer.as_slice())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_generate,
    benchmark_obj_encode,
    benchmark_obj_decode
);
criterion_main!(benches);
