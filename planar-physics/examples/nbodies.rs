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
//! N-Body Gravity Example
//!
//! Bodies start on a ring with tangential velocities and attract each other
//! pairwise. Any pair that touches is destroyed, exercising force collection
//! as bodies disappear.
//!
//! # Running
//!
//! ```bash
//! # Defaults: 12 bodies, 20000 steps
//! cargo run --example nbodies --release
//!
//! # More bodies, smaller timestep
//! RUST_LOG=debug cargo run --example nbodies --release -- --bodies 24 --timestep 0.0005
//! ```

use planar_physics::body::{Color, RigidBody};
use planar_physics::forces::{create_destructive_collision, NewtonianGravity};
use planar_physics::geometry::Polygon;
use planar_physics::integration::total_kinetic_energy;
use planar_physics::math::Vector2;
use planar_physics::scene::{Scene, SceneConfig};
use std::f64::consts::PI;

const G: f64 = 5.0e4;
const RING_RADIUS: f64 = 400.0;
const MIN_DISTANCE: f64 = 10.0;

struct SimulationConfig {
    bodies: usize,
    steps: usize,
    timestep: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            bodies: 12,
            steps: 20_000,
            timestep: 1e-3,
        }
    }
}

fn parse_args() -> SimulationConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimulationConfig::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--bodies", Some(v)) => match v.parse::<usize>() {
                Ok(n) if n >= 2 => config.bodies = n,
                _ => eprintln!("Warning: Invalid body count '{}', using {}", v, config.bodies),
            },
            ("--steps", Some(v)) => match v.parse::<usize>() {
                Ok(n) => config.steps = n,
                Err(_) => eprintln!("Warning: Invalid step count '{}', using {}", v, config.steps),
            },
            ("--timestep", Some(v)) => match v.parse::<f64>() {
                Ok(dt) if dt > 0.0 && dt.is_finite() => config.timestep = dt,
                _ => eprintln!("Warning: Invalid timestep '{}', using {}", v, config.timestep),
            },
            (flag, _) => {
                eprintln!("Error: Unknown or incomplete argument '{}'", flag);
                std::process::exit(1);
            }
        }
        i += 2;
    }
    config
}

fn triangle(center: Vector2, size: f64) -> Polygon {
    let vertices = (0..3)
        .map(|i| {
            let angle = PI / 2.0 + 2.0 * PI * i as f64 / 3.0;
            center + Vector2::new(size * angle.cos(), size * angle.sin())
        })
        .collect();
    Polygon::new(vertices).unwrap()
}

fn main() {
    env_logger::init();
    let config = parse_args();

    println!("==========================================================");
    println!("       N-Body Gravity");
    println!("==========================================================");
    println!();
    println!("Bodies: {}  Steps: {}  Timestep: {}", config.bodies, config.steps, config.timestep);
    println!();

    let mut scene: Scene = Scene::with_config(SceneConfig::new(config.bodies, config.bodies * config.bodies));

    let handles: Vec<_> = (0..config.bodies)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / config.bodies as f64;
            let position = Vector2::new(angle.cos(), angle.sin()).scale(RING_RADIUS);
            let mass = 10.0 + (i % 3) as f64 * 5.0;
            let shade = i as f32 / config.bodies as f32;
            let mut body = RigidBody::new(triangle(position, 8.0), mass, Color::new(shade, 0.5, 1.0 - shade));
            body.set_velocity(position.perpendicular().unit().scale(20.0));
            scene.add_body(body)
        })
        .collect();

    for (i, &a) in handles.iter().enumerate() {
        for &b in &handles[i + 1..] {
            let gravity = NewtonianGravity::new(G, a, b).with_min_distance(MIN_DISTANCE);
            scene.add_bodies_force_creator(gravity, vec![a, b]);
            create_destructive_collision(&mut scene, a, b);
        }
    }

    let report_every = (config.steps / 10).max(1);
    for step in 0..config.steps {
        scene.tick(config.timestep);
        if step % report_every == 0 {
            println!(
                "t = {:7.3}  bodies = {:3}  forces = {:5}  kinetic energy = {:.4e}",
                step as f64 * config.timestep,
                scene.body_count(),
                scene.force_count(),
                total_kinetic_energy(scene.bodies())
            );
        }
    }

    println!();
    println!("Survivors:");
    for (handle, body) in scene.bodies().iter() {
        println!("  {} at {}", handle, body.centroid());
    }
}
