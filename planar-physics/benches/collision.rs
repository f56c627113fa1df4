// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Benchmarks for the SAT collision solver
//!
//! These benchmarks measure:
//! - Query cost as vertex counts grow
//! - Separated pairs, which exit on the first separating axis
//! - Overlapping pairs, which must scan every axis of both shapes
//! - All-pairs batch queries (parallel when the `parallel` feature is on)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use planar_physics::collision::{find_all_collisions, find_collision};
use planar_physics::geometry::Polygon;
use planar_physics::math::Vector2;
use std::f64::consts::PI;

fn regular_polygon(center: Vector2, radius: f64, sides: usize) -> Polygon {
    let vertices = (0..sides)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / sides as f64;
            center + Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon::new(vertices).unwrap()
}

fn bench_overlapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat_overlapping");

    for sides in [4, 16, 64].iter() {
        // Every axis of both shapes is tested
        group.throughput(Throughput::Elements(2 * *sides as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sides), sides, |b, &sides| {
            let a = regular_polygon(Vector2::ZERO, 10.0, sides);
            let shape_b = regular_polygon(Vector2::new(15.0, 3.0), 10.0, sides);
            b.iter(|| find_collision(black_box(&a), black_box(&shape_b)));
        });
    }

    group.finish();
}

fn bench_separated(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat_separated");

    for sides in [4, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(sides), sides, |b, &sides| {
            let a = regular_polygon(Vector2::ZERO, 10.0, sides);
            let shape_b = regular_polygon(Vector2::new(100.0, 0.0), 10.0, sides);
            b.iter(|| find_collision(black_box(&a), black_box(&shape_b)));
        });
    }

    group.finish();
}

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat_all_pairs");

    for count in [16, 64, 256].iter() {
        group.throughput(Throughput::Elements((count * (count - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let side = (count as f64).sqrt().ceil() as usize;
            let shapes: Vec<_> = (0..count)
                .map(|i| {
                    let center = Vector2::new((i % side) as f64 * 15.0, (i / side) as f64 * 15.0);
                    regular_polygon(center, 10.0, 8)
                })
                .collect();
            b.iter(|| find_all_collisions(black_box(&shapes)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_overlapping, bench_separated, bench_all_pairs);
criterion_main!(benches);
