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
//! Numerical integration of body state
//!
//! Bodies advance with a single scheme: forces change velocity over `dt`,
//! impulses change it instantly, and the position moves by the average of
//! the initial and final velocities (trapezoidal rule).
//!
//! # Timestep Guidelines
//!
//! - The driver passes the measured frame time; there is no internal substepping
//! - Large timesteps let fast bodies tunnel through thin ones (no continuous
//!   collision detection)
//! - Stiff springs and strong gravity need small timesteps

use crate::body::{BodySet, RigidBody};

mod trapezoidal;

pub use trapezoidal::TrapezoidalStep;
pub(crate) use trapezoidal::inverse_mass;

/// Calculate kinetic energy for a single body
///
/// KE = 0.5 * m * v². Immovable (infinite-mass) bodies contribute nothing.
pub fn kinetic_energy<I>(body: &RigidBody<I>) -> f64 {
    let mass = body.mass();
    if !mass.is_finite() {
        return 0.0;
    }
    0.5 * mass * body.velocity().magnitude_squared()
}

/// Calculate total kinetic energy of every body in a set
pub fn total_kinetic_energy<I>(bodies: &BodySet<I>) -> f64 {
    bodies.iter().map(|(_, body)| kinetic_energy(body)).sum()
}
