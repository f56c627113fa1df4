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
//! Camera movers

use crate::body::{CameraMode, RigidBody};
use crate::math::Vector2;

/// Stock camera mover
///
/// Bodies in [`CameraMode::Follow`] or [`CameraMode::Scene`] move by the
/// full camera offset; every other mode stays put.
pub fn follow_camera_mover<I>(offset: Vector2, body: &RigidBody<I>) -> Vector2 {
    match body.camera_mode() {
        CameraMode::Follow | CameraMode::Scene => offset,
        CameraMode::Locked | CameraMode::Background | CameraMode::Foreground => Vector2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Color;
    use crate::geometry::Polygon;

    fn triangle() -> RigidBody {
        let shape = Polygon::new(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(0.0, 2.0),
        ])
        .unwrap();
        RigidBody::new(shape, 1.0, Color::WHITE)
    }

    #[test]
    fn test_mover_dispatches_on_mode() {
        let offset = Vector2::new(3.0, -1.0);
        let mut body = triangle();

        assert_eq!(follow_camera_mover(offset, &body), Vector2::ZERO);
        for mode in [CameraMode::Background, CameraMode::Foreground] {
            body.set_camera_mode(mode);
            assert_eq!(follow_camera_mover(offset, &body), Vector2::ZERO);
        }
        for mode in [CameraMode::Follow, CameraMode::Scene] {
            body.set_camera_mode(mode);
            assert_eq!(follow_camera_mover(offset, &body), offset);
        }
    }
}
