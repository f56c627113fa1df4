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
//! Shared fixtures for integration tests

#![allow(dead_code)]

use planar_physics::body::{Color, RigidBody};
use planar_physics::geometry::Polygon;
use planar_physics::math::Vector2;
use std::f64::consts::PI;

/// Axis-aligned rectangle centered on `center`
pub fn rect(center: Vector2, half_width: f64, half_height: f64) -> Polygon {
    Polygon::new(vec![
        center + Vector2::new(-half_width, -half_height),
        center + Vector2::new(half_width, -half_height),
        center + Vector2::new(half_width, half_height),
        center + Vector2::new(-half_width, half_height),
    ])
    .unwrap()
}

/// Square of side 2 centered on `center`
pub fn square(center: Vector2) -> Polygon {
    rect(center, 1.0, 1.0)
}

/// Regular polygon approximating a circle, counterclockwise
pub fn circle(center: Vector2, radius: f64, sides: usize) -> Polygon {
    let vertices = (0..sides)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / sides as f64;
            center + Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon::new(vertices).unwrap()
}

/// Square body of the given mass
pub fn square_body(center: Vector2, mass: f64) -> RigidBody {
    RigidBody::new(square(center), mass, Color::BLACK)
}

/// Square body with a payload
pub fn square_body_with<I>(center: Vector2, mass: f64, info: I) -> RigidBody<I> {
    RigidBody::with_info(square(center), mass, Color::WHITE, info)
}
