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
//! Scene scheduling
//!
//! A [`Scene`] owns every body and force creator handed to it and advances
//! them together, one `tick` per frame.

mod camera;
mod config;
mod force;
#[allow(clippy::module_inception)]
mod scene;

pub use camera::follow_camera_mover;
pub use config::SceneConfig;
pub use force::ForceCreator;
pub use scene::Scene;
