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
//! Force creator abstraction

use crate::body::BodySet;

/// A source of forces and impulses, invoked once per scene tick
///
/// A force creator may read any body's state and accumulate forces or
/// impulses on any body through the set. Its own fields play the role of
/// auxiliary state: they live as long as the creator is registered and are
/// dropped when the scene collects it.
///
/// Every `FnMut(&mut BodySet<I>)` closure is a force creator:
///
/// ```rust
/// use planar_physics::body::BodySet;
/// use planar_physics::math::Vector2;
/// use planar_physics::scene::Scene;
///
/// let mut scene: Scene = Scene::new();
/// scene.add_force_creator(|bodies: &mut BodySet| {
///     for (_, body) in bodies.iter_mut() {
///         body.add_force(Vector2::new(0.0, -9.8));
///     }
/// });
/// assert_eq!(scene.force_count(), 1);
/// ```
pub trait ForceCreator<I> {
    /// Accumulate this tick's forces and impulses
    fn apply(&mut self, bodies: &mut BodySet<I>);

    /// Get a descriptive name for this force creator
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<I, F> ForceCreator<I> for F
where
    F: FnMut(&mut BodySet<I>),
{
    fn apply(&mut self, bodies: &mut BodySet<I>) {
        self(bodies)
    }
}
