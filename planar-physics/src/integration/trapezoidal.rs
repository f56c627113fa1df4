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
//! Trapezoidal velocity-averaging step
//!
//! ```text
//! v(t + dt) = v(t) + dt * F / m + J / m
//! x(t + dt) = x(t) + dt * 0.5 * (v(t) + v(t + dt))
//! ```
//!
//! `F` is the net force accumulated during the tick and `J` the net
//! impulse. Impulses are instantaneous and therefore not scaled by `dt`.
//! For a constant force the position update is exact.

use crate::math::Vector2;

/// Velocity and displacement produced by one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidalStep {
    /// Velocity at the end of the step
    pub velocity: Vector2,
    /// Change in position over the step
    pub displacement: Vector2,
}

impl TrapezoidalStep {
    /// Compute one step
    ///
    /// `inverse_mass` is zero for bodies that cannot accelerate.
    pub fn compute(
        velocity: Vector2,
        net_force: Vector2,
        net_impulse: Vector2,
        inverse_mass: f64,
        dt: f64,
    ) -> Self {
        let dv_force = net_force.scale(inverse_mass).scale(dt);
        let dv_impulse = net_impulse.scale(inverse_mass);
        let final_velocity = velocity + dv_force + dv_impulse;
        let average = (velocity + final_velocity).scale(0.5);

        TrapezoidalStep {
            velocity: final_velocity,
            displacement: average.scale(dt),
        }
    }
}

/// Inverse of a body's mass
///
/// Infinite mass gives zero through IEEE division. Zero mass is not a valid
/// body mass but is mapped to zero as well rather than dividing by it.
pub(crate) fn inverse_mass(mass: f64) -> f64 {
    if mass == 0.0 {
        0.0
    } else {
        1.0 / mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_motion() {
        let v = Vector2::new(3.0, -2.0);
        let step = TrapezoidalStep::compute(v, Vector2::ZERO, Vector2::ZERO, 0.5, 0.25);
        assert_eq!(step.velocity, v);
        assert_eq!(step.displacement, Vector2::new(0.75, -0.5));
    }

    #[test]
    fn test_constant_force_is_exact() {
        // a = 2, from rest: x = 0.5 * a * t^2
        let step = TrapezoidalStep::compute(
            Vector2::ZERO,
            Vector2::new(4.0, 0.0),
            Vector2::ZERO,
            0.5,
            2.0,
        );
        assert_eq!(step.velocity, Vector2::new(4.0, 0.0));
        assert_eq!(step.displacement, Vector2::new(4.0, 0.0));
    }

    #[test]
    fn test_impulse_ignores_dt() {
        let j = Vector2::new(10.0, 0.0);
        for dt in [1e-6, 0.01, 1.0] {
            let step = TrapezoidalStep::compute(Vector2::ZERO, Vector2::ZERO, j, 0.1, dt);
            assert_eq!(step.velocity, Vector2::new(1.0, 0.0));
        }
    }

    #[test]
    fn test_inverse_mass() {
        assert_eq!(inverse_mass(4.0), 0.25);
        assert_eq!(inverse_mass(f64::INFINITY), 0.0);
        assert_eq!(inverse_mass(0.0), 0.0);
    }
}
