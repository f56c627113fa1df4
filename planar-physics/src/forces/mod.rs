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
//! Standard force creators
//!
//! Each force is a struct implementing [`ForceCreator`](crate::scene::ForceCreator)
//! plus a `create_*` function that registers it on a scene, tagged with the
//! bodies it depends on. The scene drops the creator once any of those
//! bodies is removed.

mod collision;
mod drag;
mod gravity;
mod spring;

pub use collision::{
    create_collision, create_destructive_collision, create_half_destructive_collision,
    create_physics_collision, elastic_impulse, reduced_mass, CollisionEvent,
};
pub use drag::{create_drag, Drag};
pub use gravity::{create_newtonian_gravity, NewtonianGravity};
pub use spring::{create_spring, Spring};
