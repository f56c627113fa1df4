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
//! Bouncing Ball Example
//!
//! A ball falls under a constant downward force inside a box of four
//! infinite-mass walls. Each wall is registered as a physics collision with
//! the ball, and a breakable brick is registered as a half-destructive
//! collision. The camera follows the ball.
//!
//! # Running
//!
//! ```bash
//! RUST_LOG=debug cargo run --example bounce
//! ```

use planar_physics::body::{BodySet, CameraMode, Color, RigidBody};
use planar_physics::forces::{create_half_destructive_collision, create_physics_collision};
use planar_physics::geometry::Polygon;
use planar_physics::math::Vector2;
use planar_physics::scene::{follow_camera_mover, Scene, SceneConfig};
use planar_physics::BodyHandle;
use std::f64::consts::PI;

const DT: f64 = 1.0 / 60.0;
const STEPS: usize = 600;
const GRAVITY: f64 = -98.0;
const ELASTICITY: f64 = 0.9;

#[derive(Debug)]
enum Kind {
    Ball,
    Wall,
    Brick,
}

fn rect(center: Vector2, half_width: f64, half_height: f64) -> Polygon {
    Polygon::new(vec![
        center + Vector2::new(-half_width, -half_height),
        center + Vector2::new(half_width, -half_height),
        center + Vector2::new(half_width, half_height),
        center + Vector2::new(-half_width, half_height),
    ])
    .unwrap()
}

fn ball(center: Vector2, radius: f64) -> Polygon {
    let vertices = (0..24)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / 24.0;
            center + Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon::new(vertices).unwrap()
}

fn add_wall(scene: &mut Scene<Kind>, center: Vector2, half_width: f64, half_height: f64) -> BodyHandle {
    let mut wall = RigidBody::with_info(
        rect(center, half_width, half_height),
        f64::INFINITY,
        Color::new(0.3, 0.3, 0.3),
        Kind::Wall,
    );
    wall.set_camera_mode(CameraMode::Scene);
    scene.add_body(wall)
}

fn main() {
    env_logger::init();

    println!("==========================================================");
    println!("       Bouncing Ball");
    println!("==========================================================");
    println!();

    let mut scene = Scene::with_config(SceneConfig::default().with_cleanup_logging());

    let mut body = RigidBody::with_info(ball(Vector2::new(0.0, 50.0), 5.0), 1.0, Color::new(1.0, 0.2, 0.2), Kind::Ball);
    body.set_velocity(Vector2::new(40.0, 0.0));
    body.set_angular_velocity(0.05);
    let ball_handle = scene.add_body(body);

    let walls = [
        add_wall(&mut scene, Vector2::new(0.0, -5.0), 110.0, 5.0),
        add_wall(&mut scene, Vector2::new(0.0, 105.0), 110.0, 5.0),
        add_wall(&mut scene, Vector2::new(-105.0, 50.0), 5.0, 60.0),
        add_wall(&mut scene, Vector2::new(105.0, 50.0), 5.0, 60.0),
    ];
    for wall in walls {
        create_physics_collision(&mut scene, ELASTICITY, ball_handle, wall);
    }

    let mut brick = RigidBody::with_info(
        rect(Vector2::new(80.0, 20.0), 8.0, 4.0),
        f64::INFINITY,
        Color::new(0.2, 0.2, 1.0),
        Kind::Brick,
    );
    brick.set_camera_mode(CameraMode::Scene);
    let brick = scene.add_body(brick);
    create_half_destructive_collision(&mut scene, ELASTICITY, ball_handle, brick);

    scene.add_force_creator(move |bodies: &mut BodySet<Kind>| {
        if let Some(ball) = bodies.get_mut(ball_handle) {
            let weight = ball.mass() * GRAVITY;
            ball.add_force(Vector2::new(0.0, weight));
        }
    });

    // Keep the ball horizontally centred; the ball itself stays locked
    scene.add_camera_management(
        |focal: &RigidBody<Kind>| Vector2::new(-focal.centroid().x, 0.0) * 0.1,
        follow_camera_mover,
    );
    scene.set_focal_body(Some(ball_handle));

    for step in 0..STEPS {
        scene.tick(DT);
        if step % 60 == 0 {
            if let Some(ball) = scene.body(ball_handle) {
                println!(
                    "t = {:5.2}s  ball at {}  velocity {}",
                    step as f64 * DT,
                    ball.centroid(),
                    ball.velocity()
                );
            }
        }
    }

    println!();
    println!("Bodies remaining: {}", scene.body_count());
    println!("Force creators remaining: {}", scene.force_count());
    for (handle, body) in scene.bodies().iter() {
        println!("  {} {:?}", handle, body.info());
    }
}
