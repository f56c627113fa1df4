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
//! # Planar Physics
//!
//! A 2D rigid-body physics core: polygon bodies, Separating Axis Theorem
//! collision detection, and a scene that schedules pluggable force creators.
//!
//! ## Features
//!
//! - **Rigid Bodies**: Polygon shapes with mass, velocity, rotation and accumulated force/impulse
//! - **SAT Collisions**: Minimum-overlap axis search across arbitrary polygons
//! - **Force Creators**: Closures or structs that push forces and impulses every tick
//! - **Automatic Cleanup**: Force creators are collected when a body they depend on is removed
//! - **Collision Events**: Edge-triggered handlers that fire once per contact
//! - **Batch Queries**: All-pairs collision search, parallel with the `parallel` feature
//!
//! ## Example
//!
//! ```rust
//! use planar_physics::body::{Color, RigidBody};
//! use planar_physics::forces::create_drag;
//! use planar_physics::geometry::Polygon;
//! use planar_physics::math::Vector2;
//! use planar_physics::scene::Scene;
//!
//! let square = Polygon::new(vec![
//!     Vector2::new(-1.0, -1.0),
//!     Vector2::new(1.0, -1.0),
//!     Vector2::new(1.0, 1.0),
//!     Vector2::new(-1.0, 1.0),
//! ]).unwrap();
//!
//! let mut scene: Scene = Scene::new();
//! let mut body = RigidBody::new(square, 10.0, Color::BLACK);
//! body.set_velocity(Vector2::new(5.0, 0.0));
//! let handle = scene.add_body(body);
//! create_drag(&mut scene, 0.5, handle);
//!
//! scene.tick(1.0 / 60.0);
//! assert!(scene.body(handle).unwrap().velocity().x < 5.0);
//! ```

#![warn(missing_docs)]

/// 2D vector arithmetic
pub mod math;

/// Polygon geometry
pub mod geometry;

/// Separating Axis Theorem collision detection
pub mod collision;

/// Numerical integration of body state
pub mod integration;

/// Rigid bodies and the arena that owns them
pub mod body;

/// Scene scheduling: force creators, tick protocol and camera management
pub mod scene;

/// Catalog of standard force creators
pub mod forces;

/// Error types
pub mod error;

pub use body::{BodyHandle, RigidBody};
pub use error::PhysicsError;
pub use math::Vector2;
pub use scene::Scene;
