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
//! Collision events and collision responses
//!
//! A [`CollisionEvent`] runs the SAT solver on two bodies every tick and
//! calls its handler once when they start touching. It stays quiet while
//! they keep overlapping and re-arms once they separate. The physics,
//! destructive and half-destructive collisions are handlers built on it.

use crate::body::{BodyHandle, BodySet, RigidBody};
use crate::collision::find_collision;
use crate::math::Vector2;
use crate::scene::{ForceCreator, Scene};

/// Edge-triggered collision detector between two bodies
///
/// The handler receives both bodies, in registration order, and the
/// collision axis reported by [`find_collision`].
pub struct CollisionEvent<H> {
    /// First body
    pub body1: BodyHandle,
    /// Second body
    pub body2: BodyHandle,
    handler: H,
    was_colliding: bool,
}

impl<H> CollisionEvent<H> {
    /// Create a detector that has not yet seen a collision
    ///
    /// # Panics
    ///
    /// Panics if `body1` and `body2` are the same handle.
    pub fn new(body1: BodyHandle, body2: BodyHandle, handler: H) -> Self {
        assert_ne!(body1, body2, "Collision needs two distinct bodies");
        CollisionEvent {
            body1,
            body2,
            handler,
            was_colliding: false,
        }
    }

    /// Whether the bodies overlapped on the last check
    pub fn was_colliding(&self) -> bool {
        self.was_colliding
    }
}

impl<I, H> ForceCreator<I> for CollisionEvent<H>
where
    H: FnMut(&mut RigidBody<I>, &mut RigidBody<I>, Vector2),
{
    fn apply(&mut self, bodies: &mut BodySet<I>) {
        let Some((body1, body2)) = bodies.get_pair_mut(self.body1, self.body2) else {
            log::trace!("Collision between {} and {} skipped: stale handle", self.body1, self.body2);
            return;
        };
        let collision = find_collision(body1.polygon(), body2.polygon());
        if collision.collided && !self.was_colliding {
            (self.handler)(body1, body2, collision.axis);
        }
        self.was_colliding = collision.collided;
    }

    fn name(&self) -> &str {
        "collision_event"
    }
}

/// Register a handler that fires once each time `body1` and `body2` start colliding
///
/// # Panics
///
/// Panics if `body1` and `body2` are the same handle.
pub fn create_collision<I, H>(scene: &mut Scene<I>, body1: BodyHandle, body2: BodyHandle, handler: H)
where
    I: 'static,
    H: FnMut(&mut RigidBody<I>, &mut RigidBody<I>, Vector2) + 'static,
{
    scene.add_bodies_force_creator(CollisionEvent::new(body1, body2, handler), vec![body1, body2]);
}

/// Reduced mass of a colliding pair
///
/// An infinite mass on either side leaves the other body's mass.
pub fn reduced_mass<I>(body1: &RigidBody<I>, body2: &RigidBody<I>) -> f64 {
    let (m1, m2) = (body1.mass(), body2.mass());
    if m2 == f64::INFINITY {
        m1
    } else if m1 == f64::INFINITY {
        m2
    } else {
        m1 * m2 / (m1 + m2)
    }
}

/// Impulse to apply to `body1` for a collision along `axis`
///
/// `body2` takes the negated impulse. An elasticity of 1 is perfectly
/// elastic and 0 perfectly inelastic. The direction of `axis` does not
/// matter. Two infinite-mass bodies exchange no impulse.
pub fn elastic_impulse<I>(
    body1: &RigidBody<I>,
    body2: &RigidBody<I>,
    axis: Vector2,
    elasticity: f64,
) -> Vector2 {
    let reduced = reduced_mass(body1, body2);
    if reduced.is_infinite() {
        return Vector2::ZERO;
    }
    let ahat = axis.unit();
    let u1 = body1.velocity().dot(ahat);
    let u2 = body2.velocity().dot(ahat);
    ahat.scale(reduced * (1.0 + elasticity) * (u2 - u1))
}

/// Register an impulse-based collision response between two bodies
pub fn create_physics_collision<I: 'static>(
    scene: &mut Scene<I>,
    elasticity: f64,
    body1: BodyHandle,
    body2: BodyHandle,
) {
    create_collision(scene, body1, body2, move |body1, body2, axis| {
        let impulse = elastic_impulse(body1, body2, axis, elasticity);
        body1.add_impulse(impulse);
        body2.add_impulse(-impulse);
    });
}

/// Register a collision that removes both bodies on contact
pub fn create_destructive_collision<I: 'static>(
    scene: &mut Scene<I>,
    body1: BodyHandle,
    body2: BodyHandle,
) {
    create_collision(scene, body1, body2, |body1, body2, _axis| {
        body1.remove();
        body2.remove();
    });
}

/// Register a collision that bounces `keep` off `erase` and removes `erase`
///
/// Only `keep` receives an impulse, as if bouncing off a body that vanishes
/// on impact.
pub fn create_half_destructive_collision<I: 'static>(
    scene: &mut Scene<I>,
    elasticity: f64,
    keep: BodyHandle,
    erase: BodyHandle,
) {
    create_collision(scene, keep, erase, move |keep, erase, axis| {
        let impulse = elastic_impulse(keep, erase, axis, elasticity);
        keep.add_impulse(impulse);
        erase.remove();
    });
}
