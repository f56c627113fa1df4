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
//! Linear drag

use crate::body::{BodyHandle, BodySet};
use crate::scene::{ForceCreator, Scene};

/// Velocity-proportional drag `F = -gamma * v`
#[derive(Debug, Clone)]
pub struct Drag {
    /// Drag coefficient
    pub gamma: f64,
    /// Body the drag acts on
    pub body: BodyHandle,
}

impl<I> ForceCreator<I> for Drag {
    fn apply(&mut self, bodies: &mut BodySet<I>) {
        match bodies.get_mut(self.body) {
            Some(body) => {
                let force = body.velocity().scale(-self.gamma);
                body.add_force(force);
            }
            None => log::trace!("Drag on {} skipped: stale handle", self.body),
        }
    }

    fn name(&self) -> &str {
        "drag"
    }
}

/// Register drag with coefficient `gamma` on `body`
pub fn create_drag<I>(scene: &mut Scene<I>, gamma: f64, body: BodyHandle) {
    scene.add_bodies_force_creator(Drag { gamma, body }, vec![body]);
}
