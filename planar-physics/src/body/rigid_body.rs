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
//! Rigid body state and integration
//!
//! A body owns its polygon exclusively. The centroid is cached and every
//! mutator that moves the shape updates polygon and centroid together, so
//! `body.centroid()` always equals `body.polygon().centroid()` up to
//! rounding.
//!
//! Angular physics (torque, moment of inertia) is not modelled: rotation
//! only changes through [`RigidBody::set_rotation`] and the per-tick
//! angular velocity.

use crate::error::{PhysicsError, Result};
use crate::geometry::Polygon;
use crate::integration::{inverse_mass, TrapezoidalStep};
use crate::math::Vector2;

use super::Color;

/// Bounciness stored on every new body
///
/// Not read by the force catalog; elasticity is passed per collision.
pub const DEFAULT_BOUNCINESS: f64 = 1.0;

/// How a body reacts to the scene camera
///
/// The stock mover ([`crate::scene::follow_camera_mover`]) shifts `Follow`
/// and `Scene` bodies by the camera offset and leaves the rest in place.
/// Custom movers may give `Background` and `Foreground` parallax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// Not affected by the camera
    #[default]
    Locked,
    /// Moving background layer
    Background,
    /// Moving foreground layer
    Foreground,
    /// Subject of the camera, usually the focal body
    Follow,
    /// Scenery left behind as the camera moves
    Scene,
}

/// A polygon body constrained to the plane
///
/// `I` is the per-game payload attached to a body (a tag enum, a struct,
/// or `()` when unused). The payload is dropped together with the body.
///
/// # Examples
///
/// ```
/// use planar_physics::body::{Color, RigidBody};
/// use planar_physics::geometry::Polygon;
/// use planar_physics::math::Vector2;
///
/// let shape = Polygon::new(vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(0.0, 2.0),
/// ]).unwrap();
/// let mut body: RigidBody = RigidBody::new(shape, 1.0, Color::WHITE);
/// assert!(body.centroid().approx_eq(Vector2::new(1.0, 1.0), 1e-12));
///
/// body.set_centroid(Vector2::new(5.0, 5.0));
/// assert!(body.polygon().vertices()[0].approx_eq(Vector2::new(4.0, 4.0), 1e-12));
/// ```
#[derive(Debug, Clone)]
pub struct RigidBody<I = ()> {
    shape: Polygon,
    color: Color,
    mass: f64,
    bounciness: f64,
    movable: bool,
    centroid: Vector2,
    velocity: Vector2,
    angular_velocity: f64,
    rotation: f64,
    net_force: Vector2,
    net_impulse: Vector2,
    removed: bool,
    camera_mode: CameraMode,
    info: Option<I>,
}

fn is_valid_mass(mass: f64) -> bool {
    // NaN fails the comparison
    mass > 0.0
}

impl<I> RigidBody<I> {
    /// Create a body from a shape, taking ownership of the polygon
    ///
    /// Use `f64::INFINITY` as the mass of immovable bodies.
    ///
    /// # Panics
    ///
    /// Panics if `mass` is zero, negative or NaN. For fallible construction,
    /// use `try_new`.
    pub fn new(shape: Polygon, mass: f64, color: Color) -> Self {
        assert!(
            is_valid_mass(mass),
            "Mass must be positive (use f64::INFINITY for immovable bodies)"
        );
        let centroid = shape.centroid();
        RigidBody {
            shape,
            color,
            mass,
            bounciness: DEFAULT_BOUNCINESS,
            movable: true,
            centroid,
            velocity: Vector2::ZERO,
            angular_velocity: 0.0,
            rotation: 0.0,
            net_force: Vector2::ZERO,
            net_impulse: Vector2::ZERO,
            removed: false,
            camera_mode: CameraMode::Locked,
            info: None,
        }
    }

    /// Create a body carrying a game-specific payload
    ///
    /// # Panics
    ///
    /// Panics on invalid mass, like `new`.
    pub fn with_info(shape: Polygon, mass: f64, color: Color, info: I) -> Self {
        let mut body = Self::new(shape, mass, color);
        body.info = Some(info);
        body
    }

    /// Try to create a body
    ///
    /// Returns `PhysicsError::InvalidMass` instead of panicking.
    pub fn try_new(shape: Polygon, mass: f64, color: Color) -> Result<Self> {
        if !is_valid_mass(mass) {
            return Err(PhysicsError::InvalidMass { mass });
        }
        Ok(Self::new(shape, mass, color))
    }

    /// Copy of the current shape
    ///
    /// Mutating the copy does not move the body.
    pub fn shape(&self) -> Polygon {
        self.shape.clone()
    }

    /// Read-only view of the live shape
    pub fn polygon(&self) -> &Polygon {
        &self.shape
    }

    /// Cached centroid
    pub fn centroid(&self) -> Vector2 {
        self.centroid
    }

    /// Move the body so its centroid lands on `position`
    ///
    /// This is the only way a body's shape is translated.
    pub fn set_centroid(&mut self, position: Vector2) {
        let delta = position - self.centroid;
        self.shape.translate(delta);
        self.centroid = position;
    }

    /// Absolute rotation in radians
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Set the absolute rotation, turning the shape about its centroid by
    /// the difference from the current rotation
    pub fn set_rotation(&mut self, angle: f64) {
        let delta = angle - self.rotation;
        // Rotating by zero is the identity; skipping keeps vertices bit-exact
        if delta != 0.0 {
            self.shape.rotate(delta, self.centroid);
        }
        self.rotation = angle;
    }

    /// Linear velocity
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Set the linear velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Rotation added per tick, in radians
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Set the rotation added per tick
    ///
    /// This is a per-tick delta, not a rate: it is not scaled by `dt`.
    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        self.angular_velocity = angular_velocity;
    }

    /// Mass, `f64::INFINITY` for immovable bodies
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Display color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the display color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Stored bounciness (always [`DEFAULT_BOUNCINESS`])
    pub fn bounciness(&self) -> f64 {
        self.bounciness
    }

    /// Game-level movability flag; the integrator does not consult it
    pub fn is_movable(&self) -> bool {
        self.movable
    }

    /// Set the movability flag
    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }

    /// Camera behavior of this body
    pub fn camera_mode(&self) -> CameraMode {
        self.camera_mode
    }

    /// Set the camera behavior
    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        self.camera_mode = mode;
    }

    /// Force accumulated since the last tick
    pub fn net_force(&self) -> Vector2 {
        self.net_force
    }

    /// Impulse accumulated since the last tick
    pub fn net_impulse(&self) -> Vector2 {
        self.net_impulse
    }

    /// Accumulate a force to be applied over the next tick
    pub fn add_force(&mut self, force: Vector2) {
        self.net_force += force;
    }

    /// Accumulate an instantaneous impulse for the next tick
    pub fn add_impulse(&mut self, impulse: Vector2) {
        self.net_impulse += impulse;
    }

    /// Mark the body for removal
    ///
    /// The owning scene drops it at the end of the next tick, together
    /// with every force creator that depends on it. Calling this again is a
    /// no-op.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    /// Whether the body is marked for removal
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Game payload, if any
    pub fn info(&self) -> Option<&I> {
        self.info.as_ref()
    }

    /// Mutable game payload, if any
    pub fn info_mut(&mut self) -> Option<&mut I> {
        self.info.as_mut()
    }

    /// Replace the payload, returning the previous one
    pub fn set_info(&mut self, info: I) -> Option<I> {
        self.info.replace(info)
    }

    /// Detach the payload from the body
    pub fn take_info(&mut self) -> Option<I> {
        self.info.take()
    }

    /// Shift the body directly, bypassing forces
    ///
    /// The camera uses this to reposition bodies between frames.
    pub fn adjust_for_camera(&mut self, movement: Vector2) {
        self.set_centroid(self.centroid + movement);
    }

    /// Advance the body by `dt` seconds
    ///
    /// Applies the accumulated force over `dt` and the accumulated impulse
    /// instantly, clears both, moves the centroid by the average of the old
    /// and new velocities, and adds the angular velocity to the rotation.
    pub fn tick(&mut self, dt: f64) {
        let step = TrapezoidalStep::compute(
            self.velocity,
            self.net_force,
            self.net_impulse,
            inverse_mass(self.mass),
            dt,
        );
        self.net_force = Vector2::ZERO;
        self.net_impulse = Vector2::ZERO;

        self.velocity = step.velocity;
        self.set_centroid(self.centroid + step.displacement);

        // Angular velocity is a per-tick delta, not a rate
        self.set_rotation(self.rotation + self.angular_velocity);
    }
}
