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
//! Rigid bodies and their storage
//!
//! This module provides:
//! - [`RigidBody`], a polygon with mass and kinematic state
//! - [`BodyHandle`], a generational reference to a body owned by a scene
//! - [`BodySet`], the arena that owns bodies in insertion order

mod color;
mod handle;
mod rigid_body;
mod set;

pub use color::Color;
pub use handle::BodyHandle;
pub use rigid_body::{CameraMode, RigidBody, DEFAULT_BOUNCINESS};
pub use set::BodySet;
