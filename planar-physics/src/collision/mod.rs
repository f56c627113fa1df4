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
//! Collision detection between polygons
//!
//! Detection only: this module answers whether two shapes overlap and along
//! which axis. Responses (impulses, removal, game events) are force
//! creators in [`crate::forces`].

mod batch;
mod sat;

pub use batch::{find_all_collisions, CollisionPair};
pub use sat::{find_collision, CollisionInfo};
