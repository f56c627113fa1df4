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
//! Newtonian gravity between two bodies

use crate::body::{BodyHandle, BodySet};
use crate::scene::{ForceCreator, Scene};

/// Mutual attraction `F = G * m1 * m2 / d²` along the line between centroids
///
/// No force is applied while the bodies are within `min_distance` of each
/// other, which keeps near-coincident bodies from receiving huge forces.
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    /// Gravitational constant
    pub g: f64,
    /// First body
    pub body1: BodyHandle,
    /// Second body
    pub body2: BodyHandle,
    /// Distance at or below which the force is suppressed
    pub min_distance: f64,
}

impl NewtonianGravity {
    /// Default suppression distance
    pub const DEFAULT_MIN_DISTANCE: f64 = 50.0;

    /// Create gravity between two bodies with the default suppression distance
    pub fn new(g: f64, body1: BodyHandle, body2: BodyHandle) -> Self {
        NewtonianGravity {
            g,
            body1,
            body2,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
        }
    }

    /// Set a custom suppression distance
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        assert!(
            min_distance >= 0.0 && min_distance.is_finite(),
            "Minimum distance must be non-negative and finite"
        );
        self.min_distance = min_distance;
        self
    }
}

impl<I> ForceCreator<I> for NewtonianGravity {
    fn apply(&mut self, bodies: &mut BodySet<I>) {
        let Some((body1, body2)) = bodies.get_pair_mut(self.body1, self.body2) else {
            log::trace!("Gravity between {} and {} skipped: stale handle", self.body1, self.body2);
            return;
        };

        let from_2_to_1 = body1.centroid() - body2.centroid();
        let distance = from_2_to_1.magnitude();
        if distance <= self.min_distance {
            return;
        }

        let magnitude = self.g * body1.mass() * body2.mass() / (distance * distance);
        let force_on_2 = from_2_to_1.unit().scale(magnitude);
        body1.add_force(-force_on_2);
        body2.add_force(force_on_2);
    }

    fn name(&self) -> &str {
        "newtonian_gravity"
    }
}

/// Register Newtonian gravity between `body1` and `body2`
pub fn create_newtonian_gravity<I>(
    scene: &mut Scene<I>,
    g: f64,
    body1: BodyHandle,
    body2: BodyHandle,
) {
    scene.add_bodies_force_creator(NewtonianGravity::new(g, body1, body2), vec![body1, body2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Color, RigidBody};
    use crate::geometry::Polygon;
    use crate::math::Vector2;
    use approx::assert_relative_eq;

    fn square_at(center: Vector2, mass: f64) -> RigidBody {
        let shape = Polygon::new(vec![
            center + Vector2::new(-1.0, -1.0),
            center + Vector2::new(1.0, -1.0),
            center + Vector2::new(1.0, 1.0),
            center + Vector2::new(-1.0, 1.0),
        ])
        .unwrap();
        RigidBody::new(shape, mass, Color::BLACK)
    }

    #[test]
    fn test_attractive_inverse_square() {
        let mut bodies = BodySet::new();
        let a = bodies.insert(square_at(Vector2::ZERO, 2.0));
        let b = bodies.insert(square_at(Vector2::new(100.0, 0.0), 3.0));

        let mut gravity = NewtonianGravity::new(10.0, a, b);
        gravity.apply(&mut bodies);

        let expected = 10.0 * 2.0 * 3.0 / (100.0 * 100.0);
        assert_relative_eq!(bodies.get(a).unwrap().net_force().x, expected);
        assert_relative_eq!(bodies.get(b).unwrap().net_force().x, -expected);
        assert_eq!(bodies.get(a).unwrap().net_force().y, 0.0);
    }

    #[test]
    fn test_suppressed_within_min_distance() {
        let mut bodies = BodySet::new();
        let a = bodies.insert(square_at(Vector2::ZERO, 1.0));
        let b = bodies.insert(square_at(Vector2::new(50.0, 0.0), 1.0));

        let mut gravity = NewtonianGravity::new(1.0, a, b);
        gravity.apply(&mut bodies);
        assert_eq!(bodies.get(a).unwrap().net_force(), Vector2::ZERO);

        let mut close = NewtonianGravity::new(1.0, a, b).with_min_distance(10.0);
        close.apply(&mut bodies);
        assert!(bodies.get(a).unwrap().net_force().x > 0.0);
    }

    #[test]
    fn test_registration_tracks_dependents() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_at(Vector2::ZERO, 1.0));
        let b = scene.add_body(square_at(Vector2::new(100.0, 0.0), 1.0));
        create_newtonian_gravity(&mut scene, 1.0, a, b);
        assert_eq!(scene.force_count(), 1);

        scene.body_mut(b).unwrap().remove();
        scene.tick(0.01);
        assert_eq!(scene.force_count(), 0);
    }
}
