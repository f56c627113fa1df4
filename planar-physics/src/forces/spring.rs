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
//! Zero-rest-length spring

use crate::body::{BodyHandle, BodySet};
use crate::scene::{ForceCreator, Scene};

/// Hooke's law spring `F = k * (pos1 - pos2)` pulling two bodies together
#[derive(Debug, Clone)]
pub struct Spring {
    /// Spring constant
    pub k: f64,
    /// First body
    pub body1: BodyHandle,
    /// Second body
    pub body2: BodyHandle,
}

impl<I> ForceCreator<I> for Spring {
    fn apply(&mut self, bodies: &mut BodySet<I>) {
        let Some((body1, body2)) = bodies.get_pair_mut(self.body1, self.body2) else {
            log::trace!("Spring between {} and {} skipped: stale handle", self.body1, self.body2);
            return;
        };
        let force_on_2 = (body1.centroid() - body2.centroid()).scale(self.k);
        body1.add_force(-force_on_2);
        body2.add_force(force_on_2);
    }

    fn name(&self) -> &str {
        "spring"
    }
}

/// Register a spring of constant `k` between `body1` and `body2`
pub fn create_spring<I>(scene: &mut Scene<I>, k: f64, body1: BodyHandle, body2: BodyHandle) {
    scene.add_bodies_force_creator(Spring { k, body1, body2 }, vec![body1, body2]);
}
